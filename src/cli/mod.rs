//! CLI module
//!
//! Provides command-line interface for:
//! - serve: Start the web server
//! - lookup: One-shot lookup printed as JSON

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{lookup, run, run_command, serve, Config};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::write_response;
