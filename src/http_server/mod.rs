//! # HTTP Server Module
//!
//! Axum server for the lookup page.
//!
//! # Endpoints
//!
//! - `/` - Blank search form
//! - `/search` - Lookup by state, year and month
//! - `/health` - Health check
//! - anything else - static assets

pub mod config;
pub mod observability_routes;
pub mod search_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use server::HttpServer;
