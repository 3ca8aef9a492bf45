//! Hook wiring surface for the host dispatcher.

use std::sync::Arc;

use slugmend_core::config::RepairConfig;
use slugmend_core::constants::{
    AFTER_LOAD_EVENT, AFTER_LOAD_PRIORITY, BEFORE_SAVE_EVENT, BEFORE_SAVE_PRIORITY,
};
use slugmend_core::types::Record;

use crate::after_load::{LoadRepairSummary, on_after_load};
use crate::before_save::{RepairOutcome, SaveHookContext, on_before_save};
use crate::classify::{CalendarTypeTags, ManagedTypes};
use crate::error::HookResult;
use crate::host::{Platform, RecordCache, RecordStore, SlugUniquifier};

/// One hook subscription the host dispatcher must install.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HookRegistration {
    /// Host extension-point name.
    pub event: &'static str,
    /// Priority relative to other subscribers on the same event.
    pub priority: u8,
}

/// The two subscriptions a host dispatcher installs. Priorities keep the
/// pre-save repair ahead of the calendar plugin's save-time subscriber and
/// the post-load repair ahead of other batch consumers.
pub const REGISTRATIONS: [HookRegistration; 2] = [
    HookRegistration {
        event: BEFORE_SAVE_EVENT,
        priority: BEFORE_SAVE_PRIORITY,
    },
    HookRegistration {
        event: AFTER_LOAD_EVENT,
        priority: AFTER_LOAD_PRIORITY,
    },
];

/// The slug-repair hooks, bundled with their resolved configuration and the
/// host services they call. A host dispatcher constructs one of these at
/// startup and routes both subscriptions into it.
pub struct SlugRepairHooks {
    types: ManagedTypes,
    config: RepairConfig,
    slugs: Arc<dyn SlugUniquifier>,
    store: Arc<dyn RecordStore>,
    cache: Arc<dyn RecordCache>,
}

impl SlugRepairHooks {
    /// Resolves the managed-type set from the calendar plugin's optional
    /// tags and bundles the host services.
    #[must_use]
    pub fn new(
        config: RepairConfig,
        calendar: &CalendarTypeTags,
        slugs: Arc<dyn SlugUniquifier>,
        store: Arc<dyn RecordStore>,
        cache: Arc<dyn RecordCache>,
    ) -> Self {
        let types = ManagedTypes::resolve(&config, calendar);
        Self {
            types,
            config,
            slugs,
            store,
            cache,
        }
    }

    /// ## Summary
    /// Pre-save entry point; see [`on_before_save`].
    ///
    /// ## Errors
    /// Propagates host service failures; see [`on_before_save`].
    pub async fn before_save(
        &self,
        ctx: SaveHookContext,
        draft: &mut Record,
    ) -> HookResult<RepairOutcome> {
        on_before_save(self.platform(), &self.types, &self.config, ctx, draft).await
    }

    /// ## Summary
    /// Post-load entry point; see [`on_after_load`].
    ///
    /// ## Errors
    /// Propagates host service failures; see [`on_after_load`].
    pub async fn after_load(&self, records: &mut [Record]) -> HookResult<LoadRepairSummary> {
        on_after_load(self.platform(), &self.types, &self.config, records).await
    }

    fn platform(&self) -> Platform<'_> {
        Platform {
            slugs: self.slugs.as_ref(),
            store: self.store.as_ref(),
            cache: self.cache.as_ref(),
        }
    }
}
