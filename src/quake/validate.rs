//! Form input validation

use serde::Serialize;

use super::row_key::{build_row_key, RowKey};
use super::states::is_lower48;

/// Query values as they are shown back to the user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QueryEcho {
    pub state: String,
    pub year: String,
    pub month: String,
}

/// A validated lookup request
///
/// `state` is an upper-case lower-48 code. Year and month are trimmed but
/// otherwise as typed: periods outside the dataset simply miss in storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    state: String,
    year: String,
    month: String,
}

impl Query {
    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn year(&self) -> &str {
        &self.year
    }

    pub fn month(&self) -> &str {
        &self.month
    }

    pub fn row_key(&self) -> RowKey {
        build_row_key(&self.state, &self.year, &self.month)
    }

    pub fn echo(&self) -> QueryEcho {
        QueryEcho {
            state: self.state.clone(),
            year: self.year.clone(),
            month: self.month.clone(),
        }
    }
}

/// Why input did not become a [`Query`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// At least one field is blank; same as no query at all
    Incomplete,
    /// State is not one of the 48 contiguous states
    InvalidState { echo: QueryEcho, message: String },
}

/// Normalize and validate raw form fields
pub fn validate(state_raw: &str, year_raw: &str, month_raw: &str) -> Result<Query, ValidationOutcome> {
    let state = state_raw.trim().to_uppercase();
    let year = year_raw.trim();
    let month = month_raw.trim();

    if state.is_empty() || year.is_empty() || month.is_empty() {
        return Err(ValidationOutcome::Incomplete);
    }

    if !is_lower48(&state) {
        return Err(ValidationOutcome::InvalidState {
            message: invalid_state_message(&state),
            echo: QueryEcho {
                state,
                year: year.to_string(),
                month: month.to_string(),
            },
        });
    }

    Ok(Query {
        state,
        year: year.to_string(),
        month: month.to_string(),
    })
}

fn invalid_state_message(state: &str) -> String {
    format!(
        "{} is not a valid 2-letter state code in the contiguous United States. \
         Please enter a lower 48 state such as CA, NV, or WA.",
        state
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizes_fields() {
        let query = validate("  ca ", " 2023 ", " 4").unwrap();
        assert_eq!(query.state(), "CA");
        assert_eq!(query.year(), "2023");
        assert_eq!(query.month(), "4");
        assert_eq!(query.row_key().as_str(), "CA#2023#04");
    }

    #[test]
    fn test_any_blank_field_is_incomplete() {
        let cases = [
            ("", "2023", "4"),
            ("CA", "", "4"),
            ("CA", "2023", ""),
            ("   ", "2023", "4"),
            ("CA", "  ", "\t"),
            ("", "", ""),
        ];
        for (state, year, month) in cases {
            assert_eq!(
                validate(state, year, month),
                Err(ValidationOutcome::Incomplete),
                "({:?}, {:?}, {:?})",
                state,
                year,
                month
            );
        }
    }

    #[test]
    fn test_rejects_states_outside_lower48() {
        for code in ["AK", "hi", "ZZ", "California"] {
            match validate(code, "2023", "4") {
                Err(ValidationOutcome::InvalidState { echo, message }) => {
                    let upper = code.to_uppercase();
                    assert_eq!(echo.state, upper);
                    assert!(message.starts_with(&format!("{} is not a valid", upper)));
                    assert!(message.contains("CA, NV, or WA"));
                }
                other => panic!("expected InvalidState for {}, got {:?}", code, other),
            }
        }
    }

    #[test]
    fn test_out_of_range_period_is_accepted() {
        let query = validate("CA", "1066", "13").unwrap();
        assert_eq!(query.row_key().as_str(), "CA#1066#13");
    }
}
