/// Host extension-point names shared across crates
pub const RECORD_EVENT_COMPONENT: &str = "record";
pub const BEFORE_SAVE_EVENT: &str =
    const_str::concat!(RECORD_EVENT_COMPONENT, ".", "before-save");
pub const AFTER_LOAD_EVENT: &str = const_str::concat!(RECORD_EVENT_COMPONENT, ".", "loaded");

/// Subscription priority on [`BEFORE_SAVE_EVENT`]. The downstream calendar
/// plugin consumes the slug from its own save-time subscriber at the host
/// default priority (10); repair must run before it.
pub const BEFORE_SAVE_PRIORITY: u8 = 4;

/// Subscription priority on [`AFTER_LOAD_EVENT`]. Loaded batches must be
/// repaired before any other consumer iterates them.
pub const AFTER_LOAD_PRIORITY: u8 = 1;

/// Type tag of the recurring-event records the calendar plugin generates.
pub const RECURRING_EVENT_TYPE: &str = "recurring-event";

/// Generic host content types also covered by the repair.
pub const PAGE_TYPE: &str = "page";
pub const POST_TYPE: &str = "post";
