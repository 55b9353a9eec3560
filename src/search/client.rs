//! Thin HTTPS client for the OpenSearch count and search endpoints.

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use urlencoding::encode;

/// Errors from the search backend.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("search backend returned {status}: {body}")]
    Backend { status: StatusCode, body: String },
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Blocking-style client: one request in flight at a time.
#[derive(Debug, Clone)]
pub struct SearchClient {
    http: Client,
    base_url: String,
    user: String,
    password: String,
}

impl SearchClient {
    /// Connect over HTTPS with basic auth. With `verify_certs` off the
    /// client accepts self-signed certificates, as local dev clusters use.
    pub fn new(
        host: &str,
        port: u16,
        user: &str,
        password: &str,
        verify_certs: bool,
    ) -> Result<Self, SearchError> {
        let http = Client::builder()
            .gzip(true)
            .danger_accept_invalid_certs(!verify_certs)
            .build()?;
        Ok(Self {
            http,
            base_url: format!("https://{host}:{port}"),
            user: user.to_string(),
            password: password.to_string(),
        })
    }

    /// Total hit count for a query body.
    pub async fn count(&self, index: &str, body: &Value) -> Result<u64, SearchError> {
        let response: CountResponse = self.post(index, "_count", body).await?;
        Ok(response.count)
    }

    /// Execute a search and return the typed hit list.
    pub async fn search(&self, index: &str, body: &Value) -> Result<SearchResponse, SearchError> {
        self.post(index, "_search", body).await
    }

    async fn post<T: for<'de> Deserialize<'de>>(
        &self,
        index: &str,
        endpoint: &str,
        body: &Value,
    ) -> Result<T, SearchError> {
        let url = format!("{}/{}/{endpoint}", self.base_url, encode(index));
        let response = self
            .http
            .post(url)
            .basic_auth(&self.user, Some(&self.password))
            .json(body)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SearchError::Backend { status, body });
        }
        Ok(response.json().await?)
    }
}

#[derive(Debug, Deserialize)]
struct CountResponse {
    count: u64,
}

/// Search response, reduced to the fields the CLI prints.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub hits: HitsEnvelope,
}

#[derive(Debug, Deserialize)]
pub struct HitsEnvelope {
    #[serde(default)]
    pub hits: Vec<Hit>,
}

#[derive(Debug, Deserialize)]
pub struct Hit {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_source", default)]
    pub source: HitSource,
}

/// Catalog documents store several fields as arrays; only the first entry
/// is displayed.
#[derive(Debug, Deserialize, Default)]
pub struct HitSource {
    #[serde(default)]
    pub name: Vec<String>,
    #[serde(rename = "shortDescription", default)]
    pub short_description: Vec<String>,
    #[serde(rename = "categoryPathIds", default)]
    pub category_path_ids: Vec<String>,
}
