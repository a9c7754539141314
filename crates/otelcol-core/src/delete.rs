//! Tag deletion across the tool-managed layers
//!
//! Without override the tag is removed from the settings fragment only.
//! With override it is removed from overrides and, when present, from
//! settings too, so no stale lower-layer value is left behind. Override
//! mode refuses to run while a user-owned fragment defines the tag: that
//! value would keep winning over anything this tool deletes.

use crate::directory::{ConfigDirectory, Fragment};
use crate::plan::WritePlan;
use crate::tag::{self, TagName};
use crate::{Error, Result};

/// What to delete, and from which layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteTagRequest {
    pub tag: TagName,
    /// Target the overrides fragment instead of settings
    pub override_mode: bool,
}

impl DeleteTagRequest {
    pub fn new(tag: impl Into<String>, override_mode: bool) -> Result<Self> {
        Ok(Self {
            tag: TagName::new(tag)?,
            override_mode,
        })
    }
}

/// Plan the deletion of a tag from `directory`.
///
/// Returns an empty plan when there is nothing to delete.
pub fn delete_tag(directory: &ConfigDirectory, request: &DeleteTagRequest) -> Result<WritePlan> {
    let tag = &request.tag;
    let user_defined = directory.user_fragments_defining(tag);

    tracing::debug!(
        %tag,
        override_mode = request.override_mode,
        in_settings = directory.settings().is_some_and(|f| f.defines(tag)),
        in_overrides = directory.overrides().is_some_and(|f| f.defines(tag)),
        user_fragments = user_defined.len(),
        "Planning tag deletion"
    );

    let mut plan = WritePlan::new();

    if request.override_mode {
        if !user_defined.is_empty() {
            return Err(Error::UserConflict {
                tag: tag.to_string(),
                fragments: user_defined,
            });
        }
        if let Some(overrides) = directory.overrides() {
            stage_removal(&mut plan, overrides, tag)?;
        }
        if let Some(settings) = directory.settings() {
            stage_removal(&mut plan, settings, tag)?;
        }
    } else {
        if let Some(settings) = directory.settings() {
            stage_removal(&mut plan, settings, tag)?;
        }
        if !user_defined.is_empty() {
            tracing::warn!(
                %tag,
                fragments = ?user_defined,
                "Tag stays defined in user-owned fragments"
            );
            plan.set_shadowed_by(user_defined);
        }
    }

    Ok(plan)
}

/// Add `fragment` to the plan with `tag` removed, if it defines it.
fn stage_removal(plan: &mut WritePlan, fragment: &Fragment, tag: &TagName) -> Result<()> {
    debug_assert!(fragment.layer().is_tool_managed());

    let mut document = fragment.document().clone();
    if !tag::remove(&mut document, tag) {
        tracing::debug!(fragment = fragment.name(), %tag, "Tag not present");
        return Ok(());
    }

    let content = document.render().map_err(|source| Error::FragmentRender {
        name: fragment.name().to_string(),
        source,
    })?;
    if content == fragment.raw() {
        return Ok(());
    }

    tracing::debug!(fragment = fragment.name(), %tag, "Removing tag");
    plan.insert(fragment.name(), content);
    Ok(())
}
