//! # HTTP Server
//!
//! Combines the search, health and static asset routes.

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;

use super::config::HttpServerConfig;
use super::observability_routes::health_routes;
use super::search_routes::{search_routes, SearchState};
use crate::observability::{log_event_with_fields, Event};
use crate::quake::SearchHandler;

/// HTTP server for the lookup page
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server answering searches with `handler`
    pub fn new(config: HttpServerConfig, handler: SearchHandler) -> Self {
        let router = Self::build_router(&config, handler);
        Self { config, router }
    }

    fn build_router(config: &HttpServerConfig, handler: SearchHandler) -> Router {
        let search_state = Arc::new(SearchState::new(handler));

        Router::new()
            .merge(health_routes())
            .merge(search_routes(search_state))
            .fallback_service(ServeDir::new(&config.static_dir))
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until the process is stopped
    pub async fn start(self) -> Result<(), std::io::Error> {
        let listener =
            TcpListener::bind((self.config.host.as_str(), self.config.port)).await?;
        let local_addr = listener.local_addr()?.to_string();

        log_event_with_fields(
            Event::ServerStart,
            &[
                ("addr", local_addr.as_str()),
                ("static_dir", self.config.static_dir.as_str()),
            ],
        );

        axum::serve(listener, self.router).await
    }
}
