//! Datadog API interaction module
//!
//! # Module Structure
//!
//! - [`auth`] - API/application key loading from the environment
//! - [`client`] - Main Datadog client and URL construction
//! - [`http`] - HTTP utilities for REST API calls
//!
//! # Example
//!
//! ```ignore
//! use ddexport::datadog::{DatadogClient, DatadogCredentials, DEFAULT_API_URL, DEFAULT_TIMEOUT};
//!
//! async fn example() -> anyhow::Result<()> {
//!     let creds = DatadogCredentials::from_env()?;
//!     let client = DatadogClient::new(creds, DEFAULT_API_URL, DEFAULT_TIMEOUT)?;
//!     let monitors = client.get(&client.api_url("monitor")).await?;
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod client;
pub mod http;

pub use auth::DatadogCredentials;
pub use client::{DatadogClient, DEFAULT_API_URL, DEFAULT_TIMEOUT};
pub use http::{format_api_error, ApiError};
