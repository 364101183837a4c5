//! Storage outcome classification

use super::record::QuakeRecord;
use super::validate::Query;
use super::view::ViewModel;
use crate::observability::{Event, Logger};
use crate::store::{StatsRow, StoreError};

/// Shown for every storage or decoding failure; raw error text never is
const INTERNAL_ERROR_MESSAGE: &str = "Internal HBase error. Please try again.";

/// Result of a single row lookup
#[derive(Debug)]
pub enum LookupOutcome {
    /// Row with at least one column
    Success(StatsRow),
    /// Key exists but has no columns
    EmptyRow,
    /// Storage reported the key as missing
    NotFoundError,
    /// Any other storage failure
    OtherError(String),
}

impl LookupOutcome {
    pub fn from_store(result: Result<StatsRow, StoreError>) -> Self {
        match result {
            Ok(row) if row.is_empty() => LookupOutcome::EmptyRow,
            Ok(row) => LookupOutcome::Success(row),
            Err(StoreError::NotFound) => LookupOutcome::NotFoundError,
            Err(err) => LookupOutcome::OtherError(err.to_string()),
        }
    }
}

/// Whether an error message reads like "no such row"
///
/// Gateways differ in how they surface a missing key; some only say so in
/// the error text.
pub fn looks_like_missing(message: &str) -> bool {
    message.contains("404") || message.to_lowercase().contains("not found")
}

/// Decide what the user sees for a lookup outcome
pub fn classify(query: &Query, outcome: LookupOutcome) -> ViewModel {
    match outcome {
        LookupOutcome::NotFoundError => missing_after_error(query),
        LookupOutcome::OtherError(message) if looks_like_missing(&message) => {
            Logger::warn(Event::RowMissing, &[("message", message.as_str())]);
            missing_after_error(query)
        }
        LookupOutcome::OtherError(message) => {
            Logger::error(Event::LookupFailed, &[("message", message.as_str())]);
            internal_error()
        }
        LookupOutcome::EmptyRow => ViewModel::NotInDataset {
            message: format!(
                "The state {} was not included in the historical dataset (~3 MB) used for this \
                 project, so predictions weren't generated. With a larger dataset download, \
                 this state could be supported.",
                query.state()
            ),
        },
        LookupOutcome::Success(row) if row.is_empty() => classify(query, LookupOutcome::EmptyRow),
        LookupOutcome::Success(row) => match QuakeRecord::from_row(&row) {
            Ok(record) => ViewModel::Success(record),
            Err(err) => {
                Logger::error(Event::DecodeFailed, &[("error", err.to_string().as_str())]);
                internal_error()
            }
        },
    }
}

fn missing_after_error(query: &Query) -> ViewModel {
    ViewModel::NotInDataset {
        message: format!(
            "The state {} was not included in the historical dataset (~3 MB) used for this \
             project, so predictions weren't generated. With a larger dataset download, this \
             state could be supported, though it is unlikely to have a >4.0 magnitude \
             earthquake in any case.",
            query.state()
        ),
    }
}

fn internal_error() -> ViewModel {
    ViewModel::InternalError {
        message: INTERNAL_ERROR_MESSAGE.to_string(),
    }
}
