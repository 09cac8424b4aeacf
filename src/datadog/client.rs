//! Datadog Client
//!
//! Main client for interacting with the Datadog API, combining credentials
//! and HTTP functionality.

use super::auth::DatadogCredentials;
use super::http::{ApiError, DatadogHttpClient};
use serde_json::Value;
use std::time::Duration;
use url::Url;

/// Default API endpoint (US1 site, API v1)
pub const DEFAULT_API_URL: &str = "https://api.datadoghq.com/api/v1";

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Main Datadog client
#[derive(Clone)]
pub struct DatadogClient {
    pub http: DatadogHttpClient,
    pub base_url: String,
}

impl DatadogClient {
    /// Create a new Datadog client
    pub fn new(
        credentials: DatadogCredentials,
        base_url: &str,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let http = DatadogHttpClient::new(credentials, timeout)?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Make a GET request to the Datadog API
    pub async fn get(&self, url: &str) -> Result<Value, ApiError> {
        self.http.get(url).await
    }

    /// Make a DELETE request to the Datadog API
    pub async fn delete(&self, url: &str) -> Result<Value, ApiError> {
        self.http.delete(url).await
    }

    /// Build an API URL for a path relative to the base URL
    pub fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Build an API URL with query parameters (values are percent-encoded)
    pub fn api_url_with_query(&self, path: &str, query: &[(&str, String)]) -> String {
        let raw = self.api_url(path);
        match Url::parse(&raw) {
            Ok(mut url) => {
                url.query_pairs_mut()
                    .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
                url.to_string()
            }
            Err(e) => {
                tracing::warn!("Could not parse API URL {}: {}", raw, e);
                raw
            }
        }
    }
}
