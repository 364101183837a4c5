//! quake-lookup - historical earthquake statistics and magnitude-4+
//! predictions for a U.S. state and month, served from an HBase table.

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod quake;
pub mod render;
pub mod store;
