//! Managed-type classification shared by both hooks.

use std::collections::HashSet;

use slugmend_core::config::RepairConfig;
use slugmend_core::constants::{PAGE_TYPE, POST_TYPE, RECURRING_EVENT_TYPE};

/// Type tags the downstream calendar plugin contributes at registration
/// time. Either may be absent when the plugin does not define it; absence
/// shrinks the managed set and is not an error.
#[derive(Debug, Clone, Default)]
pub struct CalendarTypeTags {
    pub event: Option<String>,
    pub location: Option<String>,
}

/// The set of content types the repair hooks are responsible for.
///
/// Resolved once at registration; membership is process-constant after the
/// calendar plugin's optional tags are known.
#[derive(Debug, Clone)]
pub struct ManagedTypes {
    tags: HashSet<String>,
}

impl ManagedTypes {
    /// Assembles the managed set from the plugin's optional tags, the fixed
    /// recurring-event tag, and (when configured) the generic page/post
    /// tags.
    #[must_use]
    pub fn resolve(config: &RepairConfig, calendar: &CalendarTypeTags) -> Self {
        let mut tags = HashSet::new();
        if let Some(event) = &calendar.event {
            tags.insert(event.clone());
        }
        if let Some(location) = &calendar.location {
            tags.insert(location.clone());
        }
        tags.insert(RECURRING_EVENT_TYPE.to_owned());
        if config.include_page_types {
            tags.insert(PAGE_TYPE.to_owned());
            tags.insert(POST_TYPE.to_owned());
        }
        Self { tags }
    }

    /// Exact, case-sensitive membership test. The empty tag is never
    /// managed.
    #[must_use]
    pub fn is_managed(&self, type_tag: &str) -> bool {
        if type_tag.is_empty() {
            return false;
        }
        self.tags.contains(type_tag)
    }
}
