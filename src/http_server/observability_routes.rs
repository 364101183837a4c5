//! Health endpoint

use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::store::QUAKE_TABLE;

/// Liveness report; does not touch the row store
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub table: &'static str,
}

impl HealthResponse {
    fn current() -> Self {
        Self {
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
            table: QUAKE_TABLE,
        }
    }
}

pub fn health_routes() -> Router {
    Router::new().route("/health", get(|| async { Json(HealthResponse::current()) }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_names_table() {
        let json = serde_json::to_value(HealthResponse::current()).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["table"], "anmolsandhu_quake_state_month_hb");
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    }
}
