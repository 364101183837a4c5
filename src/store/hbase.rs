//! HBase REST gateway client
//!
//! `GET {base}/{table}/{row_key}` with `Accept: application/json`. The
//! gateway answers with a cell set whose keys, columns and values are all
//! base64 encoded:
//!
//! ```json
//! {"Row":[{"key":"Q0EjMjAyMyMwNA==","Cell":[{"column":"czptYXhfbWFn","timestamp":1,"$":"My4x"}]}]}
//! ```
//!
//! A missing row is reported as HTTP 404.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;

use super::{Cell, LookupFuture, RowStore, StatsRow, StoreError, StoreResult};
use crate::quake::RowKey;

#[derive(Debug, Deserialize)]
struct CellSetJson {
    #[serde(rename = "Row", default)]
    rows: Vec<RowJson>,
}

#[derive(Debug, Deserialize)]
struct RowJson {
    #[serde(rename = "Cell", default)]
    cells: Vec<CellJson>,
}

#[derive(Debug, Deserialize)]
struct CellJson {
    column: String,
    #[serde(rename = "$", default)]
    value: String,
}

/// Basic-auth credential given as `user` or `user:password`
#[derive(Clone)]
struct Credential {
    user: String,
    password: Option<String>,
}

impl Credential {
    fn parse(raw: &str) -> Self {
        match raw.split_once(':') {
            Some((user, password)) => Self {
                user: user.to_string(),
                password: Some(password.to_string()),
            },
            None => Self {
                user: raw.to_string(),
                password: None,
            },
        }
    }
}

/// Row store backed by the HBase REST gateway
pub struct HbaseRestStore {
    client: Client,
    base: Url,
    credential: Option<Credential>,
}

impl std::fmt::Debug for HbaseRestStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HbaseRestStore")
            .field("endpoint", &self.endpoint())
            .field("authenticated", &self.credential.is_some())
            .finish()
    }
}

impl HbaseRestStore {
    /// Create a client for the gateway at `endpoint`
    ///
    /// `auth` is passed through verbatim as HTTP basic auth.
    pub fn new(endpoint: &str, auth: Option<&str>) -> StoreResult<Self> {
        let base = Url::parse(endpoint)
            .map_err(|e| StoreError::InvalidEndpoint(format!("{}: {}", endpoint, e)))?;

        if !matches!(base.scheme(), "http" | "https") {
            return Err(StoreError::InvalidEndpoint(format!(
                "{}: scheme must be http or https",
                endpoint
            )));
        }
        if base.cannot_be_a_base() {
            return Err(StoreError::InvalidEndpoint(endpoint.to_string()));
        }

        let credential = auth
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .map(Credential::parse);

        Ok(Self {
            client: Client::new(),
            base,
            credential,
        })
    }

    /// `host:port` of the gateway, without path or user info
    pub fn endpoint(&self) -> String {
        let host = self.base.host_str().unwrap_or_default();
        match self.base.port_or_known_default() {
            Some(port) => format!("{}:{}", host, port),
            None => host.to_string(),
        }
    }

    /// Gateway URL of a single row; the key is percent-encoded as one segment
    pub fn row_url(&self, table: &str, row_key: &RowKey) -> StoreResult<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| StoreError::InvalidEndpoint(self.base.to_string()))?
            .pop_if_empty()
            .push(table)
            .push(row_key.as_str());
        Ok(url)
    }

    async fn fetch(&self, table: &str, row_key: &RowKey) -> StoreResult<StatsRow> {
        let url = self.row_url(table, row_key)?;

        let mut request = self.client.get(url).header(ACCEPT, "application/json");
        if let Some(credential) = &self.credential {
            request = request.basic_auth(&credential.user, credential.password.as_deref());
        }

        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(StoreError::NotFound);
        }
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => format!("<unreadable body: {}>", e.without_url()),
            };
            return Err(StoreError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.bytes().await?;
        parse_cell_set(&body)
    }
}

impl RowStore for HbaseRestStore {
    fn get<'a>(&'a self, table: &'a str, row_key: &'a RowKey) -> LookupFuture<'a> {
        Box::pin(self.fetch(table, row_key))
    }
}

/// Decode a gateway cell set into a row
///
/// An empty body or a cell set without rows is an existing key with no
/// columns.
pub(crate) fn parse_cell_set(body: &[u8]) -> StoreResult<StatsRow> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(StatsRow::default());
    }

    let cell_set: CellSetJson =
        serde_json::from_slice(body).map_err(|e| StoreError::Malformed(e.to_string()))?;

    let cells = cell_set
        .rows
        .into_iter()
        .flat_map(|row| row.cells)
        .map(|cell| {
            let column = STANDARD
                .decode(&cell.column)
                .map_err(|e| StoreError::Malformed(format!("column: {}", e)))?;
            let column = String::from_utf8(column)
                .map_err(|e| StoreError::Malformed(format!("column: {}", e)))?;
            let value = STANDARD
                .decode(&cell.value)
                .map_err(|e| StoreError::Malformed(format!("value of {}: {}", column, e)))?;
            Ok(Cell::new(column, value))
        })
        .collect::<StoreResult<Vec<_>>>()?;

    Ok(StatsRow::from_cells(cells))
}
