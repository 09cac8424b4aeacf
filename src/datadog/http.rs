//! HTTP utilities for Datadog REST API calls

use super::auth::DatadogCredentials;
use reqwest::{Client, Method, StatusCode};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Maximum length of response body to log (to avoid logging sensitive data)
const MAX_LOG_BODY_LENGTH: usize = 200;

/// Failure of a single API call
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("API request failed: {status}")]
    Status { status: StatusCode },

    #[error("Failed to send request: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Failed to parse response JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status } => Some(*status),
            ApiError::Transport(err) => err.status(),
            ApiError::Decode(_) => None,
        }
    }
}

/// Sanitize response body for logging
/// Truncates long responses and strips non-printable characters
fn sanitize_for_log(body: &str) -> String {
    let truncated = if body.len() > MAX_LOG_BODY_LENGTH {
        let cut = (0..=MAX_LOG_BODY_LENGTH)
            .rev()
            .find(|i| body.is_char_boundary(*i))
            .unwrap_or(0);
        format!("{}... [truncated, {} bytes total]", &body[..cut], body.len())
    } else {
        body.to_string()
    };

    truncated.replace(|c: char| !c.is_ascii_graphic() && c != ' ', "")
}

/// HTTP client wrapper for Datadog API calls
#[derive(Clone)]
pub struct DatadogHttpClient {
    client: Client,
    credentials: DatadogCredentials,
}

impl DatadogHttpClient {
    /// Create a new HTTP client
    pub fn new(credentials: DatadogCredentials, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(concat!("ddexport/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            credentials,
        })
    }

    /// Make a GET request to the Datadog API
    pub async fn get(&self, url: &str) -> Result<Value, ApiError> {
        self.send(Method::GET, url).await
    }

    /// Make a DELETE request to the Datadog API
    pub async fn delete(&self, url: &str) -> Result<Value, ApiError> {
        self.send(Method::DELETE, url).await
    }

    async fn send(&self, method: Method, url: &str) -> Result<Value, ApiError> {
        tracing::debug!("{} {}", method, url);

        let response = self
            .client
            .request(method, url)
            .header("DD-API-KEY", &self.credentials.api_key)
            .header("DD-APPLICATION-KEY", &self.credentials.app_key)
            .send()
            .await
            .map_err(ApiError::Transport)?;

        let status = response.status();
        let body = response.text().await.map_err(ApiError::Transport)?;

        if !status.is_success() {
            // Only log sanitized/truncated error body to avoid leaking sensitive data
            tracing::debug!("API error: {} - {}", status, sanitize_for_log(&body));
            return Err(ApiError::Status { status });
        }

        // Handle empty response
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_str(&body)?)
    }
}

/// Format an API error for display
pub fn format_api_error(error: &ApiError) -> String {
    let Some(status) = error.status() else {
        return match error {
            ApiError::Decode(_) => "Unexpected response from the Datadog API.".to_string(),
            _ => "Request failed. Check your network connection and API host.".to_string(),
        };
    };

    match status.as_u16() {
        400 => "Invalid request. Check your parameters.".to_string(),
        401 => "Authentication failed. Check API_KEY and APP_KEY.".to_string(),
        403 => "Permission denied. Check the application key scopes.".to_string(),
        404 => "Resource not found.".to_string(),
        409 => "Resource conflict. The resource may be referenced elsewhere.".to_string(),
        429 => "Rate limit exceeded. Please try again later.".to_string(),
        500..=599 => "Datadog service temporarily unavailable. Please try again.".to_string(),
        _ => format!("API request failed: {}", status),
    }
}
