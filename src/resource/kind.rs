//! Resource kinds and the capability interface they share
//!
//! Every kind is a stateless unit struct implementing [`ResourceApi`].
//! [`ResourceKind`] is the closed set of those kinds; it forwards each
//! capability through an exhaustive `match`, so adding a variant without
//! wiring all of its capabilities does not compile.

use super::dashboards::Dashboards;
use super::item::Item;
use super::monitors::Monitors;
use super::screenboards::ScreenBoards;
use crate::datadog::{format_api_error, DatadogClient};
use crate::error::{Error, Result};
use serde_json::Value;
use std::fmt;

/// Capabilities every resource kind provides
#[allow(async_fn_in_trait)]
pub trait ResourceApi {
    /// Stable, unique name used for display, subcommand lookup, and file names
    fn display_name(&self) -> &'static str;

    /// Identifier of the template this kind renders through
    fn template_id(&self) -> &'static str;

    /// Whether resources of this kind carry a `type` attribute
    fn has_type(&self) -> bool {
        false
    }

    async fn fetch_by_id(&self, client: &DatadogClient, id: i64) -> Result<Resource>;

    async fn fetch_by_tags(&self, client: &DatadogClient, tags: &[String]) -> Result<Vec<Item>>;

    async fn fetch_all(&self, client: &DatadogClient) -> Result<Vec<Item>>;

    async fn delete(&self, client: &DatadogClient, id: i64) -> Result<()>;
}

/// The closed set of supported resource kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Monitor,
    Dashboard,
    ScreenBoard,
}

impl ResourceKind {
    pub fn display_name(self) -> &'static str {
        match self {
            ResourceKind::Monitor => Monitors.display_name(),
            ResourceKind::Dashboard => Dashboards.display_name(),
            ResourceKind::ScreenBoard => ScreenBoards.display_name(),
        }
    }

    pub fn template_id(self) -> &'static str {
        match self {
            ResourceKind::Monitor => Monitors.template_id(),
            ResourceKind::Dashboard => Dashboards.template_id(),
            ResourceKind::ScreenBoard => ScreenBoards.template_id(),
        }
    }

    pub fn has_type(self) -> bool {
        match self {
            ResourceKind::Monitor => Monitors.has_type(),
            ResourceKind::Dashboard => Dashboards.has_type(),
            ResourceKind::ScreenBoard => ScreenBoards.has_type(),
        }
    }

    pub async fn fetch_by_id(self, client: &DatadogClient, id: i64) -> Result<Resource> {
        match self {
            ResourceKind::Monitor => Monitors.fetch_by_id(client, id).await,
            ResourceKind::Dashboard => Dashboards.fetch_by_id(client, id).await,
            ResourceKind::ScreenBoard => ScreenBoards.fetch_by_id(client, id).await,
        }
    }

    pub async fn fetch_by_tags(self, client: &DatadogClient, tags: &[String]) -> Result<Vec<Item>> {
        match self {
            ResourceKind::Monitor => Monitors.fetch_by_tags(client, tags).await,
            ResourceKind::Dashboard => Dashboards.fetch_by_tags(client, tags).await,
            ResourceKind::ScreenBoard => ScreenBoards.fetch_by_tags(client, tags).await,
        }
    }

    pub async fn fetch_all(self, client: &DatadogClient) -> Result<Vec<Item>> {
        match self {
            ResourceKind::Monitor => Monitors.fetch_all(client).await,
            ResourceKind::Dashboard => Dashboards.fetch_all(client).await,
            ResourceKind::ScreenBoard => ScreenBoards.fetch_all(client).await,
        }
    }

    pub async fn delete(self, client: &DatadogClient, id: i64) -> Result<()> {
        match self {
            ResourceKind::Monitor => Monitors.delete(client, id).await,
            ResourceKind::Dashboard => Dashboards.delete(client, id).await,
            ResourceKind::ScreenBoard => ScreenBoards.delete(client, id).await,
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A fully fetched resource
#[derive(Debug, Clone, PartialEq)]
pub struct Resource {
    pub kind: ResourceKind,
    pub id: i64,
    pub body: Value,
}

impl Resource {
    pub fn new(kind: ResourceKind, id: i64, body: Value) -> Self {
        Self { kind, id, body }
    }

    /// Tags attached to the resource (empty when the field is absent)
    pub fn tags(&self) -> Vec<&str> {
        string_array(&self.body, "tags")
    }

    /// The `type` attribute, for kinds that have one
    pub fn resource_type(&self) -> Option<&str> {
        if !self.kind.has_type() {
            return None;
        }
        self.body.get("type").and_then(|v| v.as_str())
    }
}

/// Read an id that the API may encode either as a number or a numeric string
pub(crate) fn parse_id(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// GET a listing endpoint and return its entries.
///
/// `key` names the field holding the array; `None` means the response is the array.
pub(crate) async fn fetch_summaries(
    client: &DatadogClient,
    kind: ResourceKind,
    url: &str,
    key: Option<&str>,
    target: &str,
) -> Result<Vec<Value>> {
    let response = client
        .get(url)
        .await
        .map_err(|e| Error::fetch(kind.display_name(), target, format_api_error(&e)))?;

    let list = match key {
        Some(key) => response.get(key),
        None => Some(&response),
    };

    match list.and_then(|v| v.as_array()) {
        Some(entries) => Ok(entries.clone()),
        None => Err(Error::fetch(
            kind.display_name(),
            target,
            "unexpected response shape, expected a list",
        )),
    }
}

/// Turn a JSON array of summaries into items, failing on entries without an id
pub(crate) fn items_from_list(kind: ResourceKind, entries: &[Value]) -> Result<Vec<Item>> {
    entries
        .iter()
        .map(|entry| {
            entry
                .get("id")
                .and_then(parse_id)
                .map(|id| Item::new(id, kind))
                .ok_or_else(|| Error::fetch(kind.display_name(), "list", "entry without a valid id"))
        })
        .collect()
}

pub(crate) fn string_array<'a>(value: &'a Value, key: &str) -> Vec<&'a str> {
    value
        .get(key)
        .and_then(|v| v.as_array())
        .map(|arr| arr.iter().filter_map(|t| t.as_str()).collect())
        .unwrap_or_default()
}
