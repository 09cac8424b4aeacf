//! Screenboards

use super::filter::matches_tags;
use super::item::Item;
use super::kind::{
    fetch_summaries, items_from_list, string_array, Resource, ResourceApi, ResourceKind,
};
use crate::datadog::{format_api_error, DatadogClient};
use crate::error::{Error, Result};

pub struct ScreenBoards;

impl ResourceApi for ScreenBoards {
    fn display_name(&self) -> &'static str {
        "screenboards"
    }

    fn template_id(&self) -> &'static str {
        "screenboard.tf"
    }

    async fn fetch_by_id(&self, client: &DatadogClient, id: i64) -> Result<Resource> {
        let url = client.api_url(&format!("screen/{}", id));
        let body = client
            .get(&url)
            .await
            .map_err(|e| Error::fetch(self.display_name(), id, format_api_error(&e)))?;
        Ok(Resource::new(ResourceKind::ScreenBoard, id, body))
    }

    /// Filtered client-side, like dashboards
    async fn fetch_by_tags(&self, client: &DatadogClient, tags: &[String]) -> Result<Vec<Item>> {
        let url = client.api_url("screen");
        let entries = fetch_summaries(
            client,
            ResourceKind::ScreenBoard,
            &url,
            Some("screenboards"),
            "by tags",
        )
        .await?;
        let matching: Vec<_> = entries
            .into_iter()
            .filter(|entry| matches_tags(tags, string_array(entry, "tags").as_slice()))
            .collect();
        items_from_list(ResourceKind::ScreenBoard, &matching)
    }

    async fn fetch_all(&self, client: &DatadogClient) -> Result<Vec<Item>> {
        let url = client.api_url("screen");
        let entries = fetch_summaries(
            client,
            ResourceKind::ScreenBoard,
            &url,
            Some("screenboards"),
            "all",
        )
        .await?;
        items_from_list(ResourceKind::ScreenBoard, &entries)
    }

    async fn delete(&self, client: &DatadogClient, id: i64) -> Result<()> {
        let url = client.api_url(&format!("screen/{}", id));
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
