//! Dashboards (timeboards)
//!
//! The dashboard listing has no server-side tag filter, so tag selection
//! lists every dashboard and keeps the summaries whose tags cover the
//! requested set.

use super::filter::matches_tags;
use super::item::Item;
use super::kind::{
    fetch_summaries, items_from_list, string_array, Resource, ResourceApi, ResourceKind,
};
use crate::datadog::{format_api_error, DatadogClient};
use crate::error::{Error, Result};

pub struct Dashboards;

impl ResourceApi for Dashboards {
    fn display_name(&self) -> &'static str {
        "dashboards"
    }

    fn template_id(&self) -> &'static str {
        "timeboard.tf"
    }

    async fn fetch_by_id(&self, client: &DatadogClient, id: i64) -> Result<Resource> {
        let url = client.api_url(&format!("dash/{}", id));
        let response = client
            .get(&url)
            .await
            .map_err(|e| Error::fetch(self.display_name(), id, format_api_error(&e)))?;

        // The single-dashboard endpoint wraps the board in a `dash` envelope
        let body = response
            .get("dash")
            .cloned()
            .ok_or_else(|| Error::fetch(self.display_name(), id, "response has no `dash` field"))?;

        Ok(Resource::new(ResourceKind::Dashboard, id, body))
    }

    async fn fetch_by_tags(&self, client: &DatadogClient, tags: &[String]) -> Result<Vec<Item>> {
        let url = client.api_url("dash");
        let entries =
            fetch_summaries(client, ResourceKind::Dashboard, &url, Some("dashes"), "by tags")
                .await?;
        let matching: Vec<_> = entries
            .into_iter()
            .filter(|entry| matches_tags(tags, string_array(entry, "tags").as_slice()))
            .collect();
        items_from_list(ResourceKind::Dashboard, &matching)
    }

    async fn fetch_all(&self, client: &DatadogClient) -> Result<Vec<Item>> {
        let url = client.api_url("dash");
        let entries =
            fetch_summaries(client, ResourceKind::Dashboard, &url, Some("dashes"), "all").await?;
        items_from_list(ResourceKind::Dashboard, &entries)
    }

    async fn delete(&self, client: &DatadogClient, id: i64) -> Result<()> {
        let url = client.api_url(&format!("dash/{}", id));
        client
            .delete(&url)
            .await
            .map_err(|e| Error::DeleteRequest {
                kind: self.display_name(),
                id,
                message: format_api_error(&e),
            })?;
        Ok(())
    }
}
