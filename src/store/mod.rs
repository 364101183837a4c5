//! Storage boundary
//!
//! The lookup service only ever reads one row by key. `RowStore` is the seam
//! between the request path and whatever client talks to the column store:
//! the HBase REST gateway in production, an in-memory map in tests.

mod hbase;
mod memory;

use std::collections::BTreeMap;
use std::future::Future;
use std::pin::Pin;

use thiserror::Error;

use crate::quake::RowKey;

pub use hbase::HbaseRestStore;
pub use memory::MemoryStore;

/// Table holding one row per state and month
pub const QUAKE_TABLE: &str = "anmolsandhu_quake_state_month_hb";

/// Result type for storage operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Future returned by [`RowStore::get`]
pub type LookupFuture<'a> = Pin<Box<dyn Future<Output = StoreResult<StatsRow>> + Send + 'a>>;

/// Storage errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// The gateway reported that no row exists for the key
    #[error("row not found (HTTP 404)")]
    NotFound,

    /// The gateway answered with a non-success status
    #[error("storage gateway returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The request never produced a response
    ///
    /// Carries no request URL: the row key and gateway port must not reach
    /// the "looks like missing" check.
    #[error("storage transport failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The response body could not be understood
    #[error("malformed storage response: {0}")]
    Malformed(String),

    /// Client construction failed (bad endpoint URL)
    #[error("invalid storage endpoint: {0}")]
    InvalidEndpoint(String),
}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        StoreError::Transport(err.without_url())
    }
}

/// One stored cell: a `family:qualifier` column and its raw value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub column: String,
    pub value: Vec<u8>,
}

impl Cell {
    pub fn new(column: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        Self {
            column: column.into(),
            value: value.into(),
        }
    }
}

/// Column qualifier to raw stored value for a single row
///
/// When the same column appears more than once, the last value wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatsRow {
    columns: BTreeMap<String, Vec<u8>>,
}

impl StatsRow {
    /// Build a row from cells in any order
    pub fn from_cells(cells: impl IntoIterator<Item = Cell>) -> Self {
        let columns = cells
            .into_iter()
            .map(|cell| (cell.column, cell.value))
            .collect();
        Self { columns }
    }

    /// Raw value of a column, if present
    pub fn get(&self, column: &str) -> Option<&[u8]> {
        self.columns.get(column).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Read-only access to the column store
///
/// Implementations must be shareable across concurrent requests; the
/// service never writes.
pub trait RowStore: Send + Sync {
    /// Fetch every column of `row_key` in `table`
    ///
    /// A key that exists with no columns yields an empty [`StatsRow`].
    fn get<'a>(&'a self, table: &'a str, row_key: &'a RowKey) -> LookupFuture<'a>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_row_last_value_wins() {
        let row = StatsRow::from_cells(vec![
            Cell::new("s:max_mag", "3.1"),
            Cell::new("s:max_mag", "4.2"),
        ]);

        assert_eq!(row.len(), 1);
        assert_eq!(row.get("s:max_mag"), Some(&b"4.2"[..]));
    }

    #[test]
    fn test_stats_row_missing_column() {
        let row = StatsRow::from_cells(vec![Cell::new("s:max_mag", "3.1")]);
        assert!(row.get("s:quake_count").is_none());
        assert!(!row.is_empty());
        assert!(StatsRow::default().is_empty());
    }

    #[test]
    fn test_not_found_message_mentions_404() {
        let message = StoreError::NotFound.to_string();
        assert!(message.contains("404"));
    }
}
