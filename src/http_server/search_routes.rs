//! Search page routes

use std::sync::Arc;

use axum::{
    extract::{RawQuery, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};

use crate::observability::{Event, Logger};
use crate::quake::{SearchHandler, SearchParams, SearchResponse};
use crate::render;

/// Search state shared across handlers
#[derive(Debug)]
pub struct SearchState {
    pub handler: SearchHandler,
}

impl SearchState {
    pub fn new(handler: SearchHandler) -> Self {
        Self { handler }
    }
}

/// Create search routes
pub fn search_routes(state: Arc<SearchState>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/search", get(search_handler))
        .with_state(state)
}

async fn index_handler() -> Response {
    render_page(&SearchResponse::initial())
}

async fn search_handler(
    State(state): State<Arc<SearchState>>,
    RawQuery(query): RawQuery,
) -> Response {
    let params = SearchParams::from_query(query.as_deref());
    let response = state.handler.search(&params).await;
    render_page(&response)
}

fn render_page(response: &SearchResponse) -> Response {
    match render::page(&response.fields()) {
        Ok(html) => (response.status(), Html(html)).into_response(),
        Err(err) => {
            Logger::error(Event::RenderFailed, &[("error", err.to_string().as_str())]);
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal error").into_response()
        }
    }
}
