//! Integration tests for the pre-save repair hook.
//!
//! Uses `tests/integration/helpers.rs` for the recording host fakes.

use super::helpers::{
    EVENT_TYPE, FakeHost, FakeStore, FakeUniquifier, event_record, managed_types, record_of_type,
};
use slugmend_test::core::config::RepairConfig;
use slugmend_test::hooks::before_save::{RepairOutcome, SaveHookContext, on_before_save};
use slugmend_test::hooks::error::HookError;

fn save_ctx(raw_id: i64) -> SaveHookContext {
    SaveHookContext {
        raw_id,
        autosave: false,
    }
}

/// A healthy slug is left untouched and the uniqueness service is never
/// consulted.
#[test_log::test(tokio::test)]
async fn healthy_slug_is_left_unchanged() {
    let host = FakeHost::default();
    let mut draft = event_record(42, "Summer Fair", "summer-fair");
    let before = draft.clone();

    let outcome = on_before_save(
        host.platform(),
        &managed_types(),
        &RepairConfig::default(),
        save_ctx(42),
        &mut draft,
    )
    .await
    .expect("hook ok");

    assert_eq!(outcome, RepairOutcome::Intact);
    assert_eq!(draft, before);
    assert_eq!(host.slugs.call_count(), 0);
}

/// An empty slug on a managed draft is replaced with the uniquified,
/// slugified title.
#[test_log::test(tokio::test)]
async fn empty_slug_is_repaired_from_title() {
    let host = FakeHost::default();
    let mut draft = event_record(42, "Summer Fair", "");

    let outcome = on_before_save(
        host.platform(),
        &managed_types(),
        &RepairConfig::default(),
        save_ctx(42),
        &mut draft,
    )
    .await
    .expect("hook ok");

    assert_eq!(outcome, RepairOutcome::Repaired("summer-fair".to_owned()));
    assert_eq!(draft.slug, "summer-fair");
    // Pre-save never writes storage; the host persists the draft itself.
    assert_eq!(host.store.update_count(), 0);
    assert_eq!(host.cache.invalidation_count(), 0);
}

/// A sibling collision is disambiguated by the uniqueness service, not by
/// the hook.
#[test_log::test(tokio::test)]
async fn sibling_collision_is_disambiguated_by_the_service() {
    let host = FakeHost {
        slugs: FakeUniquifier::with_taken(&["summer-fair"]),
        ..FakeHost::default()
    };
    let mut draft = event_record(42, "Summer Fair", "");

    let outcome = on_before_save(
        host.platform(),
        &managed_types(),
        &RepairConfig::default(),
        save_ctx(42),
        &mut draft,
    )
    .await
    .expect("hook ok");

    assert_eq!(outcome, RepairOutcome::Repaired("summer-fair-2".to_owned()));
    assert_eq!(draft.slug, "summer-fair-2");
}

/// A self-referential slug (the record id rendered as text) is treated as
/// broken and replaced from the title.
#[test_log::test(tokio::test)]
async fn self_referential_slug_is_replaced() {
    let host = FakeHost::default();
    let mut draft = event_record(42, "Autumn Market", "42");

    let outcome = on_before_save(
        host.platform(),
        &managed_types(),
        &RepairConfig::default(),
        save_ctx(42),
        &mut draft,
    )
    .await
    .expect("hook ok");

    assert_eq!(outcome, RepairOutcome::Repaired("autumn-market".to_owned()));
    assert!(draft.slug.parse::<i64>().is_err(), "slug must not stay numeric");
}

/// A numeric slug that does not match the record id is somebody's chosen
/// slug, not a broken one.
#[test_log::test(tokio::test)]
async fn numeric_slug_of_another_id_is_left_alone() {
    let host = FakeHost::default();
    let mut draft = event_record(7, "Summer Fair", "42");

    let outcome = on_before_save(
        host.platform(),
        &managed_types(),
        &RepairConfig::default(),
        save_ctx(7),
        &mut draft,
    )
    .await
    .expect("hook ok");

    assert_eq!(outcome, RepairOutcome::Intact);
    assert_eq!(draft.slug, "42");
}

/// Unmanaged types are never touched, whatever their slug looks like.
#[test_log::test(tokio::test)]
async fn unmanaged_type_is_skipped() {
    let host = FakeHost::default();
    let mut draft = record_of_type("attachment", 42, "Summer Fair", "");

    let outcome = on_before_save(
        host.platform(),
        &managed_types(),
        &RepairConfig::default(),
        save_ctx(42),
        &mut draft,
    )
    .await
    .expect("hook ok");

    assert_eq!(outcome, RepairOutcome::Skipped);
    assert_eq!(draft.slug, "");
    assert_eq!(host.slugs.call_count(), 0);
}

/// An active autosave skips the repair entirely.
#[test_log::test(tokio::test)]
async fn autosave_is_skipped() {
    let host = FakeHost::default();
    let mut draft = event_record(42, "Summer Fair", "");

    let outcome = on_before_save(
        host.platform(),
        &managed_types(),
        &RepairConfig::default(),
        SaveHookContext {
            raw_id: 42,
            autosave: true,
        },
        &mut draft,
    )
    .await
    .expect("hook ok");

    assert_eq!(outcome, RepairOutcome::Skipped);
    assert_eq!(draft.slug, "");
    assert_eq!(host.slugs.call_count(), 0);
}

/// A raw input id identifying a revision skips the repair.
#[test_log::test(tokio::test)]
async fn revision_save_is_skipped() {
    let host = FakeHost {
        store: FakeStore::with_revisions(&[99]),
        ..FakeHost::default()
    };
    let mut draft = event_record(42, "Summer Fair", "");

    let outcome = on_before_save(
        host.platform(),
        &managed_types(),
        &RepairConfig::default(),
        save_ctx(99),
        &mut draft,
    )
    .await
    .expect("hook ok");

    assert_eq!(outcome, RepairOutcome::Skipped);
    assert_eq!(draft.slug, "");
}

/// Without a title there is nothing to derive a slug from.
#[test_log::test(tokio::test)]
async fn empty_title_is_left_alone() {
    let host = FakeHost::default();
    let mut draft = event_record(42, "", "");

    let outcome = on_before_save(
        host.platform(),
        &managed_types(),
        &RepairConfig::default(),
        save_ctx(42),
        &mut draft,
    )
    .await
    .expect("hook ok");

    assert_eq!(outcome, RepairOutcome::Intact);
    assert_eq!(draft.slug, "");
    assert_eq!(host.slugs.call_count(), 0);
}

/// A title with no slugifiable content falls back to `<type>-<id>`.
#[test_log::test(tokio::test)]
async fn unslugifiable_title_falls_back_to_type_and_id() {
    let host = FakeHost::default();
    let mut draft = event_record(7, "???", "");

    let outcome = on_before_save(
        host.platform(),
        &managed_types(),
        &RepairConfig::default(),
        save_ctx(7),
        &mut draft,
    )
    .await
    .expect("hook ok");

    assert_eq!(
        outcome,
        RepairOutcome::Repaired(format!("{EVENT_TYPE}-7"))
    );
}

/// The uniqueness service is called with the draft's full scope.
#[test_log::test(tokio::test)]
async fn uniqueness_scope_carries_the_draft_fields() {
    let host = FakeHost::default();
    let mut draft = event_record(42, "Summer Fair", "");
    draft.parent_id = 3;
    draft.status = "draft".to_owned();

    on_before_save(
        host.platform(),
        &managed_types(),
        &RepairConfig::default(),
        save_ctx(42),
        &mut draft,
    )
    .await
    .expect("hook ok");

    let calls = host.slugs.calls.lock().expect("uniquifier call log");
    assert_eq!(calls.len(), 1);
    let (candidate, scope) = &calls[0];
    assert_eq!(candidate, "summer-fair");
    assert_eq!(scope.record_id, 42);
    assert_eq!(scope.status, "draft");
    assert_eq!(scope.record_type, EVENT_TYPE);
    assert_eq!(scope.parent_id, 3);
}

/// Running the hook on its own output changes nothing on the second pass.
#[test_log::test(tokio::test)]
async fn second_pass_is_idempotent() {
    let host = FakeHost::default();
    let mut draft = event_record(42, "Summer Fair", "");

    let first = on_before_save(
        host.platform(),
        &managed_types(),
        &RepairConfig::default(),
        save_ctx(42),
        &mut draft,
    )
    .await
    .expect("hook ok");
    assert_eq!(first, RepairOutcome::Repaired("summer-fair".to_owned()));

    let after_first = draft.clone();
    let second = on_before_save(
        host.platform(),
        &managed_types(),
        &RepairConfig::default(),
        save_ctx(42),
        &mut draft,
    )
    .await
    .expect("hook ok");

    assert_eq!(second, RepairOutcome::Intact);
    assert_eq!(draft, after_first);
    assert_eq!(host.slugs.call_count(), 1);
}

/// A failing uniqueness service surfaces through the hook untranslated.
#[test_log::test(tokio::test)]
async fn service_failure_propagates() {
    let host = FakeHost {
        slugs: FakeUniquifier::failing(),
        ..FakeHost::default()
    };
    let mut draft = event_record(42, "Summer Fair", "");

    let err = on_before_save(
        host.platform(),
        &managed_types(),
        &RepairConfig::default(),
        save_ctx(42),
        &mut draft,
    )
    .await
    .expect_err("hook must fail");

    assert!(matches!(err, HookError::PlatformError(_)));
    assert_eq!(draft.slug, "", "failed repair must not half-assign");
}

/// An empty slug from the uniqueness service breaks the repair invariant
/// and is rejected rather than assigned.
#[test_log::test(tokio::test)]
async fn empty_service_slug_is_an_invariant_violation() {
    let host = FakeHost {
        slugs: FakeUniquifier {
            return_empty: true,
            ..FakeUniquifier::default()
        },
        ..FakeHost::default()
    };
    let mut draft = event_record(42, "Summer Fair", "");

    let err = on_before_save(
        host.platform(),
        &managed_types(),
        &RepairConfig::default(),
        save_ctx(42),
        &mut draft,
    )
    .await
    .expect_err("hook must fail");

    assert!(matches!(err, HookError::CoreError(_)));
    assert_eq!(draft.slug, "");
}
