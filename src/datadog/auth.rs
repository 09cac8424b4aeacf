//! Datadog Authentication
//!
//! API and application keys are read from the environment. Both are sent as
//! request headers on every call.

use crate::error::{Error, Result};

/// Primary variable names for the keys
pub const API_KEY_VAR: &str = "API_KEY";
pub const APP_KEY_VAR: &str = "APP_KEY";

/// Fallback variable names, as exported by most Datadog tooling
const API_KEY_FALLBACK: &str = "DATADOG_API_KEY";
const APP_KEY_FALLBACK: &str = "DATADOG_APP_KEY";

/// Datadog credentials holder
#[derive(Clone)]
pub struct DatadogCredentials {
    pub api_key: String,
    pub app_key: String,
}

impl DatadogCredentials {
    pub fn new(api_key: impl Into<String>, app_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            app_key: app_key.into(),
        }
    }

    /// Load credentials from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load credentials through an arbitrary variable lookup.
    ///
    /// Empty values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = first_non_empty(&lookup, API_KEY_VAR, API_KEY_FALLBACK)
            .ok_or(Error::MissingCredentials { name: API_KEY_VAR })?;
        let app_key = first_non_empty(&lookup, APP_KEY_VAR, APP_KEY_FALLBACK)
            .ok_or(Error::MissingCredentials { name: APP_KEY_VAR })?;

        tracing::debug!("Loaded Datadog credentials from environment");

        Ok(Self { api_key, app_key })
    }
}

// Keys never end up in debug output or logs.
impl std::fmt::Debug for DatadogCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatadogCredentials")
            .field("api_key", &"***")
            .field("app_key", &"***")
            .finish()
    }
}

fn first_non_empty<F>(lookup: &F, primary: &str, fallback: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    [primary, fallback]
        .into_iter()
        .filter_map(|name| lookup(name))
        .find(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_loads_primary_variables() {
        let creds =
            DatadogCredentials::from_lookup(lookup_from(&[("API_KEY", "a"), ("APP_KEY", "b")]))
                .unwrap();
        assert_eq!(creds.api_key, "a");
        assert_eq!(creds.app_key, "b");
    }

    #[test]
    fn test_falls_back_to_datadog_prefixed_variables() {
        let creds = DatadogCredentials::from_lookup(lookup_from(&[
            ("DATADOG_API_KEY", "a"),
            ("APP_KEY", "b"),
        ]))
        .unwrap();
        assert_eq!(creds.api_key, "a");
    }

    #[test]
    fn test_missing_api_key() {
        let err = DatadogCredentials::from_lookup(lookup_from(&[("APP_KEY", "b")])).unwrap_err();
        assert!(matches!(err, Error::MissingCredentials { name: "API_KEY" }));
    }

    #[test]
    fn test_empty_app_key_counts_as_missing() {
        let err =
            DatadogCredentials::from_lookup(lookup_from(&[("API_KEY", "a"), ("APP_KEY", "  ")]))
                .unwrap_err();
        assert!(matches!(err, Error::MissingCredentials { name: "APP_KEY" }));
    }

    #[test]
    fn test_debug_masks_keys() {
        let creds = DatadogCredentials::new("secret-api", "secret-app");
        let printed = format!("{:?}", creds);
        assert!(!printed.contains("secret"));
    }
}
