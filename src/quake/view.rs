//! What a request resolves to, and the flat fields the page is drawn from

use axum::http::StatusCode;
use serde::Serialize;

use super::record::QuakeRecord;
use super::validate::QueryEcho;

/// Terminal state of a request
#[derive(Debug, Clone, PartialEq)]
pub enum ViewModel {
    /// No query yet, or an incomplete one: the blank form
    Initial,
    /// Input rejected before any lookup
    ValidationError { message: String },
    /// State and period are not part of the dataset
    NotInDataset { message: String },
    /// Storage or decoding failed
    InternalError { message: String },
    /// Statistics found and decoded
    Success(QuakeRecord),
}

impl ViewModel {
    pub fn status(&self) -> StatusCode {
        match self {
            ViewModel::Initial | ViewModel::NotInDataset { .. } | ViewModel::Success(_) => {
                StatusCode::OK
            }
            ViewModel::ValidationError { .. } => StatusCode::BAD_REQUEST,
            ViewModel::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Flat field set consumed by the page template
///
/// Exactly one `show_*` flag is set unless the view is [`ViewModel::Initial`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ViewFields {
    pub state: String,
    pub year: String,
    pub month: String,
    pub show_result: bool,
    pub show_error: bool,
    pub show_missing: bool,
    pub error_message: String,
    pub missing_message: String,
    pub quake_count: String,
    pub max_mag: String,
    pub quake_occurred: String,
    pub pred_prob_percent: String,
}

impl ViewFields {
    pub fn new(echo: &QueryEcho, view: &ViewModel) -> Self {
        let echoed = Self {
            state: echo.state.clone(),
            year: echo.year.clone(),
            month: echo.month.clone(),
            ..Self::default()
        };

        match view {
            ViewModel::Initial => Self::default(),
            ViewModel::ValidationError { message } | ViewModel::InternalError { message } => {
                Self {
                    show_error: true,
                    error_message: message.clone(),
                    ..echoed
                }
            }
            ViewModel::NotInDataset { message } => Self {
                show_missing: true,
                missing_message: message.clone(),
                ..echoed
            },
            ViewModel::Success(record) => Self {
                show_result: true,
                quake_count: record.quake_count.to_string(),
                max_mag: record.max_mag_display(),
                quake_occurred: record.quake_occurred_display().to_string(),
                pred_prob_percent: record.pred_prob_percent(),
                ..echoed
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn echo() -> QueryEcho {
        QueryEcho {
            state: "CA".to_string(),
            year: "2023".to_string(),
            month: "4".to_string(),
        }
    }

    fn flags(fields: &ViewFields) -> usize {
        [fields.show_result, fields.show_error, fields.show_missing]
            .iter()
            .filter(|f| **f)
            .count()
    }

    #[test]
    fn test_initial_is_blank() {
        let fields = ViewFields::new(&echo(), &ViewModel::Initial);
        assert_eq!(fields, ViewFields::default());
        assert_eq!(flags(&fields), 0);
        assert_eq!(ViewModel::Initial.status(), StatusCode::OK);
    }

    #[test]
    fn test_exactly_one_flag() {
        let views = [
            ViewModel::ValidationError { message: "bad".into() },
            ViewModel::NotInDataset { message: "missing".into() },
            ViewModel::InternalError { message: "oops".into() },
            ViewModel::Success(QuakeRecord {
                quake_count: 3,
                max_mag: 2.5,
                quake_occurred: false,
                pred_prob: 0.1,
            }),
        ];
        for view in &views {
            let fields = ViewFields::new(&echo(), view);
            assert_eq!(flags(&fields), 1, "{:?}", view);
            assert_eq!(fields.state, "CA");
            assert_eq!(fields.month, "4");
        }
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ViewModel::ValidationError { message: String::new() }.status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ViewModel::NotInDataset { message: String::new() }.status(),
            StatusCode::OK
        );
        assert_eq!(
            ViewModel::InternalError { message: String::new() }.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_success_fields() {
        let view = ViewModel::Success(QuakeRecord {
            quake_count: 42,
            max_mag: 4.256,
            quake_occurred: true,
            pred_prob: 0.5,
        });
        let fields = ViewFields::new(&echo(), &view);
        assert_eq!(fields.quake_count, "42");
        assert_eq!(fields.max_mag, "4.26");
        assert_eq!(fields.quake_occurred, "Yes");
        assert_eq!(fields.pred_prob_percent, "50.00 %");
        assert!(fields.error_message.is_empty());
    }
}
