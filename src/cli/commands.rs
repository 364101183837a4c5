//! CLI command implementations

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::{log_event_with_fields, Event};
use crate::quake::{SearchHandler, SearchParams};
use crate::store::HbaseRestStore;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};
use super::io::write_response;

/// Optional configuration file
///
/// Every field may also be given on the command line, which wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub host: Option<String>,

    #[serde(default)]
    pub port: Option<u16>,

    #[serde(default)]
    pub storage_url: Option<String>,

    #[serde(default)]
    pub static_dir: Option<String>,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))
    }

    /// Resolve the server settings and storage endpoint
    ///
    /// Port and storage URL are required, from one source or the other.
    pub fn resolve(self) -> CliResult<(HttpServerConfig, String)> {
        let defaults = HttpServerConfig::default();

        let port = self
            .port
            .ok_or_else(|| CliError::config_error("port is required"))?;
        if port == 0 {
            return Err(CliError::config_error("port must be > 0"));
        }

        let storage_url = self
            .storage_url
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| CliError::config_error("storage URL is required"))?;

        let server = HttpServerConfig {
            host: self.host.unwrap_or(defaults.host),
            port,
            static_dir: self.static_dir.unwrap_or(defaults.static_dir),
        };

        Ok((server, storage_url))
    }

    /// Overlay values given on the command line
    fn merge(self, overrides: Config) -> Config {
        Config {
            host: overrides.host.or(self.host),
            port: overrides.port.or(self.port),
            storage_url: overrides.storage_url.or(self.storage_url),
            static_dir: overrides.static_dir.or(self.static_dir),
        }
    }
}

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run a command on a fresh multi-threaded runtime
pub fn run_command(command: Command) -> CliResult<()> {
    let runtime = tokio::runtime::Runtime::new()?;

    match command {
        Command::Serve {
            port,
            storage_url,
            host,
            static_dir,
            config,
            auth,
        } => {
            let file = match config {
                Some(path) => Config::load(&path)?,
                None => Config::default(),
            };
            let overrides = Config {
                host,
                port,
                storage_url,
                static_dir,
            };
            runtime.block_on(serve(file.merge(overrides), auth.as_deref()))
        }
        Command::Lookup {
            state,
            year,
            month,
            storage_url,
            auth,
        } => {
            let params = SearchParams { state, year, month };
            runtime.block_on(lookup(&storage_url, auth.as_deref(), &params))
        }
    }
}

/// Start the web server and block until it stops
pub async fn serve(config: Config, auth: Option<&str>) -> CliResult<()> {
    let (server_config, storage_url) = config.resolve()?;
    let store = HbaseRestStore::new(&storage_url, auth)?;

    log_event_with_fields(
        Event::ConfigLoaded,
        &[
            ("authenticated", if auth.is_some() { "true" } else { "false" }),
            ("storage_endpoint", store.endpoint().as_str()),
        ],
    );

    let handler = SearchHandler::new(Arc::new(store));
    HttpServer::new(server_config, handler)
        .start()
        .await
        .map_err(|e| {
            log_event_with_fields(Event::ServerFailed, &[("error", e.to_string().as_str())]);
            CliError::serve_failed(e.to_string())
        })
}

/// Run a single search and print the view fields as JSON
pub async fn lookup(storage_url: &str, auth: Option<&str>, params: &SearchParams) -> CliResult<()> {
    let store = HbaseRestStore::new(storage_url, auth)?;
    let handler = SearchHandler::new(Arc::new(store));

    let response = handler.search(params).await;
    write_response(response.status().as_u16(), &response.fields())
}
