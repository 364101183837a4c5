//! Search request handling
//!
//! validate -> row key -> lookup -> classify. Every path ends in a
//! [`SearchResponse`]; nothing here returns an error to the HTTP layer.

use std::sync::Arc;

use axum::http::StatusCode;
use url::form_urlencoded;

use super::classify::{classify, LookupOutcome};
use super::validate::{validate, Query, QueryEcho, ValidationOutcome};
use super::view::{ViewFields, ViewModel};
use crate::observability::{Event, Logger};
use crate::store::{RowStore, QUAKE_TABLE};

/// Raw `/search` query parameters; a missing parameter is an empty string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    pub state: String,
    pub year: String,
    pub month: String,
}

impl SearchParams {
    /// Read the parameters from a raw query string
    ///
    /// Never fails: the first occurrence of a repeated key wins, unknown keys
    /// are ignored and invalid UTF-8 escapes decode lossily.
    pub fn from_query(raw: Option<&str>) -> Self {
        let mut state = None;
        let mut year = None;
        let mut month = None;

        for (key, value) in form_urlencoded::parse(raw.unwrap_or_default().as_bytes()) {
            let slot = match key.as_ref() {
                "state" => &mut state,
                "year" => &mut year,
                "month" => &mut month,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }

        Self {
            state: state.unwrap_or_default(),
            year: year.unwrap_or_default(),
            month: month.unwrap_or_default(),
        }
    }
}

/// Outcome of one request, ready for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResponse {
    echo: QueryEcho,
    view: ViewModel,
}

impl SearchResponse {
    pub fn new(echo: QueryEcho, view: ViewModel) -> Self {
        Self { echo, view }
    }

    /// The blank form
    pub fn initial() -> Self {
        Self::new(QueryEcho::default(), ViewModel::Initial)
    }

    pub fn status(&self) -> StatusCode {
        self.view.status()
    }

    pub fn fields(&self) -> ViewFields {
        ViewFields::new(&self.echo, &self.view)
    }
}

/// Answers search requests against a shared row store
#[derive(Clone)]
pub struct SearchHandler {
    store: Arc<dyn RowStore>,
    table: String,
}

impl SearchHandler {
    pub fn new(store: Arc<dyn RowStore>) -> Self {
        Self {
            store,
            table: QUAKE_TABLE.to_string(),
        }
    }

    pub async fn search(&self, params: &SearchParams) -> SearchResponse {
        match validate(&params.state, &params.year, &params.month) {
            Err(ValidationOutcome::Incomplete) => SearchResponse::initial(),
            Err(ValidationOutcome::InvalidState { echo, message }) => {
                SearchResponse::new(echo, ViewModel::ValidationError { message })
            }
            Ok(query) => self.lookup(query).await,
        }
    }

    async fn lookup(&self, query: Query) -> SearchResponse {
        let row_key = query.row_key();
        Logger::info(
            Event::RowLookup,
            &[("row_key", row_key.as_str()), ("table", self.table.as_str())],
        );

        let outcome = LookupOutcome::from_store(self.store.get(&self.table, &row_key).await);
        let view = classify(&query, outcome);
        SearchResponse::new(query.echo(), view)
    }
}

impl std::fmt::Debug for SearchHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchHandler")
            .field("table", &self.table)
            .finish_non_exhaustive()
    }
}
