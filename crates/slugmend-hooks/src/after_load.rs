//! Post-load slug repair.
//!
//! Runs before any other consumer of a freshly loaded batch. Unlike the
//! pre-save path the host has already persisted these rows, so a repair is
//! written back to storage and the record's cache entry is dropped.

use slugmend_core::config::RepairConfig;
use slugmend_core::error::CoreError;
use slugmend_core::types::Record;

use crate::classify::ManagedTypes;
use crate::error::HookResult;
use crate::host::{Platform, SlugScope};
use crate::repair::{candidate_slug, needs_fix};

/// Tally of a post-load repair pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadRepairSummary {
    /// Records in the batch that belong to a managed type.
    pub examined: usize,
    /// Records whose slug was regenerated and written back.
    pub repaired: usize,
}

/// ## Summary
/// Repairs empty or self-referential slugs across a freshly loaded batch.
///
/// Each record is handled independently, in batch order: the in-memory slug
/// is corrected in place through the borrow, the correction is persisted
/// (slug field only), and the record's cache entry is invalidated. No
/// cross-record state is kept; the uniqueness service scopes collisions by
/// type and parent.
///
/// ## Side Effects
/// - One storage update per repaired record
/// - One cache invalidation per repaired record
///
/// ## Errors
/// Returns an error if the uniqueness service, the storage update, or the
/// cache invalidation fails; the batch is left partially repaired in that
/// case, matching the uncaught-propagation contract of the host pipeline.
#[tracing::instrument(skip(platform, types, config, records), fields(batch = records.len()))]
pub async fn on_after_load(
    platform: Platform<'_>,
    types: &ManagedTypes,
    config: &RepairConfig,
    records: &mut [Record],
) -> HookResult<LoadRepairSummary> {
    let mut summary = LoadRepairSummary::default();
    if records.is_empty() {
        return Ok(summary);
    }

    for record in &mut *records {
        if !types.is_managed(&record.record_type) {
            continue;
        }
        summary.examined += 1;

        if !needs_fix(&record.slug, record.id) || record.title.is_empty() {
            continue;
        }

        let candidate = candidate_slug(&record.title, &record.record_type, record.id);
        let unique = platform
            .slugs
            .unique_slug(&candidate, &SlugScope::of(record))
            .await?;
        if unique.is_empty() {
            return Err(
                CoreError::InvariantViolation("uniqueness service returned an empty slug").into(),
            );
        }

        if config.verbose {
            tracing::debug!(
                record_type = %record.record_type,
                id = record.id,
                old_slug = %record.slug,
                new_slug = %unique,
                "repaired record slug after load"
            );
        }

        record.slug = unique.clone();
        platform.store.update_slug(record.id, &unique).await?;
        platform.cache.invalidate(record.id).await?;
        summary.repaired += 1;
    }

    Ok(summary)
}
