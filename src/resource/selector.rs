//! Selector: resolves selection options into a working set of items
//!
//! Exactly one strategy applies per invocation. When several are given the
//! precedence is `--all`, then `--ids`, then `--tags`.

use super::item::Item;
use super::kind::ResourceKind;
use crate::context::{Context, SelectionOptions};
use crate::error::{Error, Result};

/// The strategy chosen for one invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<'a> {
    All,
    Ids(&'a [i64]),
    Tags(&'a [String]),
}

impl<'a> Selection<'a> {
    pub fn from_options(options: &'a SelectionOptions) -> Result<Self> {
        if options.all {
            Ok(Selection::All)
        } else if !options.ids.is_empty() {
            Ok(Selection::Ids(&options.ids))
        } else if !options.tags.is_empty() {
            Ok(Selection::Tags(&options.tags))
        } else {
            Err(Error::MissingSelector)
        }
    }
}

/// Check options against the kind before any network call
pub fn validate(options: &SelectionOptions, kind: ResourceKind) -> Result<()> {
    Selection::from_options(options)?;
    if options.resource_type.is_some() && !kind.has_type() {
        return Err(Error::InvalidArguments(format!(
            "--type is only supported for monitors, not {}",
            kind
        )));
    }
    Ok(())
}

/// Resolve the working set for `kind`.
///
/// Id selection builds items directly and defers all fetching to the
/// executor; the other strategies ask the API for membership.
pub async fn select(ctx: &Context, kind: ResourceKind) -> Result<Vec<Item>> {
    validate(&ctx.options, kind)?;

    let items = match Selection::from_options(&ctx.options)? {
        Selection::All => {
            let items = kind.fetch_all(&ctx.client).await?;
            tracing::debug!("Selected all {}: {} element(s)", kind, items.len());
            items
        }
        Selection::Ids(ids) => {
            tracing::debug!("Selected {} by id: {:?}", kind, ids);
            ids.iter().map(|id| Item::new(*id, kind)).collect()
        }
        Selection::Tags(tags) => {
            let items = kind.fetch_by_tags(&ctx.client, tags).await?;
            tracing::debug!("Selected {} by tags {:?}: {} element(s)", kind, tags, items.len());
            items
        }
    };

    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Action;

    fn options(ids: &[i64], tags: &[&str], all: bool) -> SelectionOptions {
        SelectionOptions {
            ids: ids.to_vec(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            all,
            ..SelectionOptions::new(Action::Export)
        }
    }

    #[test]
    fn test_missing_selector() {
        let opts = options(&[], &[], false);
        assert!(matches!(
            Selection::from_options(&opts),
            Err(Error::MissingSelector)
        ));
    }

    #[test]
    fn test_precedence() {
        let opts = options(&[1], &["a"], true);
        assert_eq!(Selection::from_options(&opts).unwrap(), Selection::All);

        let opts = options(&[1, 2], &["a"], false);
        assert_eq!(
            Selection::from_options(&opts).unwrap(),
            Selection::Ids(&[1, 2])
        );

        let opts = options(&[], &["a"], false);
        assert!(matches!(
            Selection::from_options(&opts).unwrap(),
            Selection::Tags(tags) if tags == ["a".to_string()]
        ));
    }

    #[test]
    fn test_type_filter_requires_typed_kind() {
        let mut opts = options(&[1], &[], false);
        opts.resource_type = Some("metric alert".into());
        assert!(validate(&opts, ResourceKind::Monitor).is_ok());
        assert!(matches!(
            validate(&opts, ResourceKind::Dashboard),
            Err(Error::InvalidArguments(_))
        ));
    }
}
