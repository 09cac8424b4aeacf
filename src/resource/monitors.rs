//! Monitors

use super::item::Item;
use super::kind::{fetch_summaries, items_from_list, Resource, ResourceApi, ResourceKind};
use crate::datadog::{format_api_error, DatadogClient};
use crate::error::{Error, Result};

pub struct Monitors;

impl ResourceApi for Monitors {
    fn display_name(&self) -> &'static str {
        "monitors"
    }

    fn template_id(&self) -> &'static str {
        "monitor.tf"
    }

    fn has_type(&self) -> bool {
        true
    }

    async fn fetch_by_id(&self, client: &DatadogClient, id: i64) -> Result<Resource> {
        let url = client.api_url(&format!("monitor/{}", id));
        let body = client
            .get(&url)
            .await
            .map_err(|e| Error::fetch(self.display_name(), id, format_api_error(&e)))?;
        Ok(Resource::new(ResourceKind::Monitor, id, body))
    }

    /// The monitor endpoint filters on tags server-side
    async fn fetch_by_tags(&self, client: &DatadogClient, tags: &[String]) -> Result<Vec<Item>> {
        let joined = tags.join(",");
        let url = client.api_url_with_query("monitor", &[("tags", joined.clone())]);
        let entries = fetch_summaries(client, ResourceKind::Monitor, &url, None, &joined).await?;
        items_from_list(ResourceKind::Monitor, &entries)
    }

    async fn fetch_all(&self, client: &DatadogClient) -> Result<Vec<Item>> {
        let url = client.api_url("monitor");
        let entries = fetch_summaries(client, ResourceKind::Monitor, &url, None, "all").await?;
        items_from_list(ResourceKind::Monitor, &entries)
    }

    async fn delete(&self, client: &DatadogClient, id: i64) -> Result<()> {
        let url = client.api_url(&format!("monitor/{}", id));
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
