//! CLI argument definitions using clap
//!
//! Commands:
//! - quake-lookup serve <PORT> <STORAGE_URL>
//! - quake-lookup lookup <STATE> <YEAR> <MONTH> <STORAGE_URL>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Historical earthquake statistics by state and month
#[derive(Parser, Debug)]
#[command(name = "quake-lookup")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the web server
    Serve {
        /// Port to listen on
        port: Option<u16>,

        /// Base URL of the HBase REST gateway
        storage_url: Option<String>,

        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Directory of static assets
        #[arg(long)]
        static_dir: Option<String>,

        /// Optional JSON configuration file; arguments take precedence
        #[arg(long)]
        config: Option<PathBuf>,

        /// Gateway credential, `user:password`
        #[arg(long, env = "HBASE_AUTH", hide_env_values = true)]
        auth: Option<String>,
    },

    /// Look up one state and month and print the result as JSON
    Lookup {
        /// Two-letter state code
        state: String,

        /// Year, e.g. 2023
        year: String,

        /// Month, 1-12
        month: String,

        /// Base URL of the HBase REST gateway
        storage_url: String,

        /// Gateway credential, `user:password`
        #[arg(long, env = "HBASE_AUTH", hide_env_values = true)]
        auth: Option<String>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_positional() {
        let cli = Cli::try_parse_from(["quake-lookup", "serve", "3000", "http://hbase:8080"]).unwrap();
        match cli.command {
            Command::Serve {
                port, storage_url, ..
            } => {
                assert_eq!(port, Some(3000));
                assert_eq!(storage_url.as_deref(), Some("http://hbase:8080"));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_lookup() {
        let cli = Cli::try_parse_from([
            "quake-lookup",
            "lookup",
            "ca",
            "2023",
            "4",
            "http://hbase:8080",
            "--auth",
            "reader:pw",
        ])
        .unwrap();
        match cli.command {
            Command::Lookup {
                state, month, auth, ..
            } => {
                assert_eq!(state, "ca");
                assert_eq!(month, "4");
                assert_eq!(auth.as_deref(), Some("reader:pw"));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_rejects_bad_port() {
        assert!(Cli::try_parse_from(["quake-lookup", "serve", "http://hbase"]).is_err());
    }
}
