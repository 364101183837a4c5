//! In-memory row store
//!
//! Behaves like the REST gateway: unknown keys are `NotFound`, known keys
//! with no cells are empty rows. A scripted failure replaces every lookup
//! with an error status, which is how tests exercise the error paths.

use std::collections::HashMap;

use super::{Cell, LookupFuture, RowStore, StatsRow, StoreError, StoreResult};
use crate::quake::RowKey;

#[derive(Debug, Default)]
pub struct MemoryStore {
    rows: HashMap<(String, String), Vec<Cell>>,
    failure: Option<(u16, String)>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `cells` under `row_key` in `table`
    pub fn with_row(mut self, table: &str, row_key: &str, cells: Vec<Cell>) -> Self {
        self.rows
            .insert((table.to_string(), row_key.to_string()), cells);
        self
    }

    /// Fail every lookup with the given gateway status and body
    pub fn failing(status: u16, body: impl Into<String>) -> Self {
        Self {
            rows: HashMap::new(),
            failure: Some((status, body.into())),
        }
    }

    fn lookup(&self, table: &str, row_key: &RowKey) -> StoreResult<StatsRow> {
        if let Some((status, body)) = &self.failure {
            return Err(StoreError::Status {
                status: *status,
                body: body.clone(),
            });
        }

        self.rows
            .get(&(table.to_string(), row_key.as_str().to_string()))
            .map(|cells| StatsRow::from_cells(cells.iter().cloned()))
            .ok_or(StoreError::NotFound)
    }
}

impl RowStore for MemoryStore {
    fn get<'a>(&'a self, table: &'a str, row_key: &'a RowKey) -> LookupFuture<'a> {
        let result = self.lookup(table, row_key);
        Box::pin(async move { result })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quake::build_row_key;

    #[tokio::test]
    async fn test_known_and_unknown_keys() {
        let store = MemoryStore::new()
            .with_row("t", "CA#2023#04", vec![Cell::new("s:max_mag", "3.2")])
            .with_row("t", "NV#2023#04", vec![]);

        let row = store.get("t", &build_row_key("CA", "2023", "4")).await.unwrap();
        assert_eq!(row.get("s:max_mag"), Some(&b"3.2"[..]));

        let row = store.get("t", &build_row_key("NV", "2023", "4")).await.unwrap();
        assert!(row.is_empty());

        let missing = store.get("t", &build_row_key("WA", "2023", "4")).await;
        assert!(matches!(missing, Err(StoreError::NotFound)));

        let other_table = store.get("u", &build_row_key("CA", "2023", "4")).await;
        assert!(matches!(other_table, Err(StoreError::NotFound)));
    }

    #[tokio::test]
    async fn test_scripted_failure() {
        let store = MemoryStore::failing(503, "region server down");

        let err = store.get("t", &build_row_key("CA", "2023", "4")).await.unwrap_err();
        assert_eq!(err.to_string(), "storage gateway returned HTTP 503: region server down");
    }
}
