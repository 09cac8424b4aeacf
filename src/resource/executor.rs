//! Action executor: export or delete the working set
//!
//! Items are processed strictly in order. A failed fetch aborts the whole
//! run; a failed delete is recorded and the remaining deletions go ahead.
//! An aborted delete run still hands back what it did before the failure.

use super::filter::{matches_tags, ItemFilter};
use super::item::Item;
use super::kind::Resource;
use crate::context::{Action, Context};
use crate::error::{Error, Result};
use std::io::Write;
use std::path::PathBuf;

/// One exported resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exported {
    pub item: Item,
    /// Destination file, when writing one file per resource
    pub path: Option<PathBuf>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub exported: Vec<Exported>,
    pub skipped: usize,
}

/// What happened to one delete candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    WouldDelete(Item),
    Deleted(Item),
    Failed { item: Item, error: String },
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DeleteReport {
    pub outcomes: Vec<DeleteOutcome>,
    pub skipped: usize,
}

impl DeleteReport {
    pub fn deleted(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, DeleteOutcome::Deleted(_)))
            .count()
    }

    pub fn candidates(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, DeleteOutcome::WouldDelete(_)))
            .count()
    }

    pub fn failed_ids(&self) -> Vec<i64> {
        self.outcomes
            .iter()
            .filter_map(|o| match o {
                DeleteOutcome::Failed { item, .. } => Some(item.id),
                _ => None,
            })
            .collect()
    }

    /// Turn recorded failures into an error once every deletion was attempted
    pub fn into_result(self) -> Result<Self> {
        let failed = self.failed_ids();
        if failed.is_empty() {
            Ok(self)
        } else {
            Err(Error::DeleteFailure { failed })
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    Export(ExportReport),
    Delete(DeleteReport),
}

/// Run the configured action over `items`, writing output and notices to `out`
pub async fn execute<W: Write>(ctx: &Context, items: &[Item], out: &mut W) -> Result<Report> {
    match ctx.options.action {
        Action::Export => export(ctx, items, out).await.map(Report::Export),
        Action::Delete => delete(ctx, items, out).await.map(Report::Delete),
    }
}

/// Fetch `item` and return it only if it passes the filter
async fn fetch_admitted(
    ctx: &Context,
    item: &Item,
    filter: &ItemFilter<'_>,
) -> Result<Option<Resource>> {
    let resource = item.fetch(&ctx.client).await?;
    if filter.admits(item.kind.display_name(), &resource) {
        Ok(Some(resource))
    } else {
        Ok(None)
    }
}

pub async fn export<W: Write>(ctx: &Context, items: &[Item], out: &mut W) -> Result<ExportReport> {
    let filter = ItemFilter::new(ctx.options.resource_type.as_deref());
    let mut report = ExportReport::default();

    for item in items {
        tracing::debug!("Exporting element {}", item.id);
        let Some(resource) = fetch_admitted(ctx, item, &filter).await? else {
            report.skipped += 1;
            continue;
        };

        let rendered = item.render(&resource)?;

        let path = if ctx.options.to_files {
            let path = ctx.output_dir.join(item.file_name());
            tracing::debug!("Creating file {}", path.display());
            std::fs::write(&path, rendered.as_bytes())
                .map_err(|e| Error::io(path.display(), e))?;
            Some(path)
        } else {
            out.write_all(rendered.as_bytes())
                .map_err(|e| Error::io("output", e))?;
            None
        };

        report.exported.push(Exported { item: *item, path });
    }

    out.flush().map_err(|e| Error::io("output", e))?;
    tracing::info!(
        "Exported {} element(s), skipped {}",
        report.exported.len(),
        report.skipped
    );
    Ok(report)
}

pub async fn delete<W: Write>(ctx: &Context, items: &[Item], out: &mut W) -> Result<DeleteReport> {
    let filter = ItemFilter::new(ctx.options.resource_type.as_deref());
    let required = ctx.options.tags.as_slice();
    let force = ctx.options.force;
    let mut report = DeleteReport::default();

    if !force {
        notice(out, format_args!("Dry run"))?;
    }

    let mut aborted = None;
    for item in items {
        let resource = match fetch_admitted(ctx, item, &filter).await {
            Ok(Some(resource)) => resource,
            Ok(None) => {
                report.skipped += 1;
                continue;
            }
            Err(e) => {
                aborted = Some(e);
                break;
            }
        };

        if !matches_tags(required, resource.tags().as_slice()) {
            tracing::debug!("Element {} does not carry tags {:?}", item.id, required);
            report.skipped += 1;
            continue;
        }

        if !force {
            notice(out, format_args!("Will delete element {}", item.id))?;
            report.outcomes.push(DeleteOutcome::WouldDelete(*item));
            continue;
        }

        notice(out, format_args!("Deleting element {}", item.id))?;
        match item.kind.delete(&ctx.client, item.id).await {
            Ok(()) => {
                tracing::info!("Deleted {} {}", item.kind, item.id);
                report.outcomes.push(DeleteOutcome::Deleted(*item));
            }
            Err(e) => {
                tracing::debug!("{}", e);
                report.outcomes.push(DeleteOutcome::Failed {
                    item: *item,
                    error: e.to_string(),
                });
            }
        }
    }

    out.flush().map_err(|e| Error::io("output", e))?;
    tracing::debug!(
        "Deleted {}, candidates {}, failed {}",
        report.deleted(),
        report.candidates(),
        report.failed_ids().len()
    );

    match aborted {
        Some(source) => Err(Error::DeleteAborted {
            report,
            source: Box::new(source),
        }),
        None => Ok(report),
    }
}

fn notice<W: Write>(out: &mut W, message: std::fmt::Arguments<'_>) -> Result<()> {
    writeln!(out, "{}", message).map_err(|e| Error::io("output", e))
}
