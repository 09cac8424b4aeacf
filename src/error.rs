//! Error types
//!
//! Every fallible operation in the library returns [`Error`]. Nothing below
//! `main` terminates the process; the binary decides how each error is
//! reported and which exit code it maps to.

use crate::resource::DeleteReport;
use thiserror::Error;

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A required credential environment variable is not set.
    #[error("{name} not found, please make sure that the {name} env variable is set")]
    MissingCredentials { name: &'static str },

    /// The requested resource kind is not in the registry.
    #[error("{name:?} is not a valid resource kind (expected one of: {known})")]
    UnknownResource { name: String, known: String },

    /// None of `--ids`, `--tags` or `--all` was given.
    #[error("Either --ids or --all or --tags should be specified")]
    MissingSelector,

    /// A fetch against the platform API failed.
    #[error("Failed to fetch {kind} {target}: {message}")]
    FetchFailure {
        kind: &'static str,
        target: String,
        message: String,
    },

    /// A single delete call was rejected.
    #[error("Failed to delete {kind} {id}: {message}")]
    DeleteRequest {
        kind: &'static str,
        id: i64,
        message: String,
    },

    /// One or more deletions failed. Remaining deletions were still attempted.
    #[error("Failed to delete {} element(s): {}", failed.len(), join_ids(failed))]
    DeleteFailure { failed: Vec<i64> },

    /// A fetch failed partway through a delete run. `report` holds the
    /// outcomes of every element handled before the failure.
    #[error(
        "Delete aborted after {} deletion(s) and {} failure(s)",
        report.deleted(),
        report.failed_ids().len()
    )]
    DeleteAborted {
        report: DeleteReport,
        #[source]
        source: Box<Error>,
    },

    /// Arguments are syntactically valid but make no sense together.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// Template lookup or rendering failed.
    #[error("Failed to render {template}: {source}")]
    Render {
        template: String,
        #[source]
        source: minijinja::Error,
    },

    /// Writing rendered output failed.
    #[error("Failed to write {target}: {source}")]
    Io {
        target: String,
        #[source]
        source: std::io::Error,
    },

    /// The HTTP client could not be constructed.
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

impl Error {
    pub(crate) fn fetch(kind: &'static str, target: impl ToString, err: impl ToString) -> Self {
        Error::FetchFailure {
            kind,
            target: target.to_string(),
            message: err.to_string(),
        }
    }

    pub(crate) fn io(target: impl ToString, source: std::io::Error) -> Self {
        Error::Io {
            target: target.to_string(),
            source,
        }
    }
}

fn join_ids(ids: &[i64]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
