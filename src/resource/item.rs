//! Item: a reference to one resource, fetched on demand

use super::kind::{Resource, ResourceKind};
use crate::datadog::DatadogClient;
use crate::error::Result;
use crate::template;
use serde_json::Value;

/// Extension of generated files
pub const OUTPUT_EXTENSION: &str = "tf";

/// An `(id, kind)` pair; the id only means something within its kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Item {
    pub id: i64,
    pub kind: ResourceKind,
}

impl Item {
    pub fn new(id: i64, kind: ResourceKind) -> Self {
        Self { id, kind }
    }

    /// Fetch the full representation of this item
    pub async fn fetch(&self, client: &DatadogClient) -> Result<Resource> {
        tracing::debug!("Fetching {} {}", self.kind, self.id);
        self.kind.fetch_by_id(client, self.id).await
    }

    /// Render a fetched resource through this item's template
    pub fn render(&self, resource: &Resource) -> Result<String> {
        tracing::debug!("Rendering {} {}", self.kind, self.id);
        let mut context = resource.body.clone();
        if let Value::Object(ref mut map) = context {
            map.entry("id").or_insert_with(|| Value::from(self.id));
        }
        template::render(self.kind.template_id(), &context)
    }

    /// File name used when writing one file per resource
    pub fn file_name(&self) -> String {
        format!("{}-{}.{}", self.kind.display_name(), self.id, OUTPUT_EXTENSION)
    }
}
