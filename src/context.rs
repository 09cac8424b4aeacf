//! Per-invocation context
//!
//! Everything a single run needs is gathered into a [`Context`] built once
//! in `main` and passed down by reference.

use crate::datadog::DatadogClient;
use clap::ValueEnum;
use std::path::PathBuf;

/// What to do with the selected resources
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Action {
    /// Render each resource as Terraform
    Export,
    /// Delete resources whose tags cover `--tags` (dry run unless `--force`)
    Delete,
}

/// Selection and action options for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionOptions {
    pub ids: Vec<i64>,
    pub tags: Vec<String>,
    pub all: bool,
    pub action: Action,
    /// Only act on resources with this `type` (monitors only)
    pub resource_type: Option<String>,
    /// Actually delete instead of reporting candidates
    pub force: bool,
    /// Write one file per resource instead of streaming to stdout
    pub to_files: bool,
}

impl SelectionOptions {
    pub fn new(action: Action) -> Self {
        Self {
            ids: Vec::new(),
            tags: Vec::new(),
            all: false,
            action,
            resource_type: None,
            force: false,
            to_files: false,
        }
    }
}

pub struct Context {
    pub client: DatadogClient,
    pub options: SelectionOptions,
    /// Directory receiving `<kind>-<id>.tf` files
    pub output_dir: PathBuf,
}

impl Context {
    pub fn new(client: DatadogClient, options: SelectionOptions) -> Self {
        Self {
            client,
            options,
            output_dir: PathBuf::from("."),
        }
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }
}
