//! Resource Registry
//!
//! Fixed table of the resource kinds the tool knows about, looked up by the
//! subcommand name given on the command line.

use super::kind::ResourceKind;
use crate::error::{Error, Result};

/// Every supported kind, in the order shown in usage output
static REGISTRY: &[ResourceKind] = &[
    ResourceKind::Monitor,
    ResourceKind::Dashboard,
    ResourceKind::ScreenBoard,
];

/// Get the registry
pub fn get_registry() -> &'static [ResourceKind] {
    REGISTRY
}

/// Find the kind whose display name equals `name`
pub fn lookup(name: &str) -> Result<ResourceKind> {
    get_registry()
        .iter()
        .copied()
        .find(|kind| kind.display_name() == name)
        .ok_or_else(|| Error::UnknownResource {
            name: name.to_string(),
            known: known_names().join(", "),
        })
}

/// All registered names (for usage output)
pub fn known_names() -> Vec<&'static str> {
    get_registry().iter().map(|k| k.display_name()).collect()
}
