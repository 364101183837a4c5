//! Row key derivation

use std::fmt;

/// Storage key of one state and month: `STATE#YYYY#MM`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RowKey(String);

impl RowKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Build the row key for a state, year and month
///
/// The state is upper-cased and the month left-padded with `0` to two
/// characters. The year is used as given.
pub fn build_row_key(state: &str, year: impl fmt::Display, month: impl fmt::Display) -> RowKey {
    RowKey(format!(
        "{}#{}#{:0>2}",
        state.to_uppercase(),
        year,
        month.to_string()
    ))
}
