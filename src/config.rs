//! Configuration Management
//!
//! Optional user configuration stored as JSON in the platform config
//! directory. Command-line flags and environment variables take precedence.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::datadog::{DEFAULT_API_URL, DEFAULT_TIMEOUT};

/// Environment variable overriding the API base URL
pub const API_URL_ENV: &str = "DATADOG_HOST";

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// API base URL, e.g. https://api.datadoghq.eu/api/v1
    #[serde(default)]
    pub api_url: Option<String>,
    /// Directory receiving exported files
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    /// Per-request timeout in seconds
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("ddexport").join("config.json"))
    }

    /// Load configuration from the default location
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load configuration from `path`, falling back to defaults when the
    /// file is missing or unreadable
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!("Ignoring invalid config file {}: {}", path.display(), e);
                Self::default()
            }),
            Err(e) => {
                tracing::warn!("Could not read config file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Get effective API URL (CLI > environment > config > default).
    /// Blank values are treated as unset at every level.
    pub fn effective_api_url(&self, cli: Option<&str>, env: Option<&str>) -> String {
        let set = |url: &&str| !url.trim().is_empty();
        cli.filter(set)
            .or(env.filter(set))
            .or(self.api_url.as_deref().filter(set))
            .unwrap_or(DEFAULT_API_URL)
            .to_string()
    }

    /// Get effective output directory (CLI > config > current directory)
    pub fn effective_output_dir(&self, cli: Option<&Path>) -> PathBuf {
        cli.map(Path::to_path_buf)
            .or_else(|| self.output_dir.clone())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Get effective request timeout
    pub fn effective_timeout(&self) -> Duration {
        self.timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT)
    }
}
