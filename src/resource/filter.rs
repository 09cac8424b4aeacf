//! Per-item filtering shared by export and delete

use super::kind::Resource;
use std::collections::HashMap;

/// Marker carried by kinds whose resources are themselves exports
pub const TERRAFORM_MARKER: &str = " - Terraform";

/// Whether a kind name marks resources produced by an earlier export
pub fn is_terraform_artifact(kind_name: &str) -> bool {
    kind_name.contains(TERRAFORM_MARKER)
}

/// An unset filter admits everything; a set filter needs an exact match.
pub fn matches_type(wanted: Option<&str>, actual: Option<&str>) -> bool {
    match wanted {
        None => true,
        Some(wanted) => actual == Some(wanted),
    }
}

/// Whether `present` contains every tag in `required`.
///
/// An empty `required` set matches anything.
pub fn matches_tags<S, T>(required: &[S], present: &[T]) -> bool
where
    S: AsRef<str>,
    T: AsRef<str>,
{
    let mut seen: HashMap<&str, bool> = required.iter().map(|t| (t.as_ref(), false)).collect();
    for tag in present {
        if let Some(found) = seen.get_mut(tag.as_ref()) {
            *found = true;
        }
    }
    seen.values().all(|found| *found)
}

/// Filter applied to every fetched resource before it is exported or deleted
#[derive(Debug, Clone, Copy, Default)]
pub struct ItemFilter<'a> {
    pub resource_type: Option<&'a str>,
}

impl<'a> ItemFilter<'a> {
    pub fn new(resource_type: Option<&'a str>) -> Self {
        Self { resource_type }
    }

    pub fn admits(&self, kind_name: &str, resource: &Resource) -> bool {
        if is_terraform_artifact(kind_name) {
            tracing::debug!("Skipping {} {}: terraform artifact", kind_name, resource.id);
            return false;
        }
        if !matches_type(self.resource_type, resource.resource_type()) {
            tracing::debug!(
                "Skipping {} {}: type {:?} does not match {:?}",
                kind_name,
                resource.id,
                resource.resource_type(),
                self.resource_type
            );
            return false;
        }
        true
    }
}
