//! Resource abstraction layer
//!
//! # Architecture
//!
//! - [`kind`] - The `ResourceApi` capability trait and the closed `ResourceKind` set
//! - [`registry`] - Name lookup over the supported kinds
//! - [`item`] - `(id, kind)` references, fetched and rendered on demand
//! - [`selector`] - Resolves `--ids` / `--tags` / `--all` into a working set
//! - [`executor`] - Export and delete over the working set
//!
//! # Example
//!
//! ```ignore
//! use ddexport::resource::{executor, lookup, selector};
//!
//! async fn export_monitors(ctx: &ddexport::Context) -> ddexport::Result<()> {
//!     let kind = lookup("monitors")?;
//!     let items = selector::select(ctx, kind).await?;
//!     executor::export(ctx, &items, &mut std::io::stdout()).await?;
//!     Ok(())
//! }
//! ```

mod dashboards;
pub mod executor;
pub mod filter;
pub mod item;
pub mod kind;
mod monitors;
pub mod registry;
mod screenboards;
pub mod selector;

pub use dashboards::Dashboards;
pub use executor::{DeleteOutcome, DeleteReport, ExportReport, Exported, Report};
pub use item::Item;
pub use kind::{Resource, ResourceApi, ResourceKind};
pub use monitors::Monitors;
pub use registry::{get_registry, known_names, lookup};
pub use screenboards::ScreenBoards;
pub use selector::Selection;
