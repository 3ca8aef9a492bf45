//! Pre-save slug repair.
//!
//! Runs after host sanitization and before the calendar plugin's own
//! save-time subscriber, so the plugin never observes an empty or
//! self-referential slug on a draft.

use slugmend_core::config::RepairConfig;
use slugmend_core::error::CoreError;
use slugmend_core::types::Record;

use crate::classify::ManagedTypes;
use crate::error::HookResult;
use crate::host::{Platform, SlugScope};
use crate::repair::{candidate_slug, needs_fix};

/// Dispatch context the host hands to the pre-save hook.
#[derive(Debug, Clone, Copy)]
pub struct SaveHookContext {
    /// Record id from the raw, unsanitized save input; 0 when absent.
    pub raw_id: i64,
    /// Whether the current save operation is an autosave.
    pub autosave: bool,
}

/// What the pre-save hook did to a draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepairOutcome {
    /// A dispatch-level precondition (autosave, revision, unmanaged type)
    /// skipped the draft entirely.
    Skipped,
    /// Draft inspected; slug already healthy, or no title to derive from.
    Intact,
    /// Slug was regenerated; the new value is also in the draft.
    Repaired(String),
}

/// ## Summary
/// Repairs an empty or self-referential slug on a sanitized draft before
/// the host persists it.
///
/// The draft is mutated in place; the host's save pipeline persists it
/// after this hook returns, so no storage call happens here.
///
/// ## Errors
/// Returns an error if the revision lookup or the uniqueness service fails,
/// or if the uniqueness service violates its contract by returning an empty
/// slug.
#[tracing::instrument(skip(platform, types, config, draft), fields(
    record_type = %draft.record_type,
    id = draft.id,
))]
pub async fn on_before_save(
    platform: Platform<'_>,
    types: &ManagedTypes,
    config: &RepairConfig,
    ctx: SaveHookContext,
    draft: &mut Record,
) -> HookResult<RepairOutcome> {
    if ctx.autosave {
        return Ok(RepairOutcome::Skipped);
    }
    if platform.store.is_revision(ctx.raw_id).await? {
        return Ok(RepairOutcome::Skipped);
    }
    if !types.is_managed(&draft.record_type) {
        return Ok(RepairOutcome::Skipped);
    }

    if !needs_fix(&draft.slug, draft.id) || draft.title.is_empty() {
        return Ok(RepairOutcome::Intact);
    }

    let candidate = candidate_slug(&draft.title, &draft.record_type, draft.id);
    let unique = platform
        .slugs
        .unique_slug(&candidate, &SlugScope::of(draft))
        .await?;
    if unique.is_empty() {
        return Err(
            CoreError::InvariantViolation("uniqueness service returned an empty slug").into(),
        );
    }

    if config.verbose {
        tracing::debug!(
            record_type = %draft.record_type,
            id = draft.id,
            old_slug = %draft.slug,
            new_slug = %unique,
            "repaired record slug before save"
        );
    }

    draft.slug = unique.clone();
    Ok(RepairOutcome::Repaired(unique))
}
