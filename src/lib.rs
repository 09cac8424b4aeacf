//! Export Datadog monitors, dashboards and screenboards as Terraform, or
//! delete them in bulk by tag.
//!
//! - [`datadog`] - API client
//! - [`resource`] - Resource kinds, selection and actions
//! - [`template`] - Terraform templates
//! - [`config`] - User configuration file

pub mod config;
pub mod context;
pub mod datadog;
pub mod error;
pub mod resource;
pub mod template;

pub use context::{Action, Context, SelectionOptions};
pub use error::{Error, Result};
