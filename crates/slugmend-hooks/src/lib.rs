//! Slug-repair hooks for a content-management host.
//!
//! A thin compatibility layer between a multilingual duplication plugin and
//! a calendar/events plugin: drafts and freshly loaded records of the
//! managed content types get an empty or self-referential URL slug replaced
//! with a host-uniquified slug derived from the title, before the calendar
//! plugin can read it.

pub mod after_load;
pub mod before_save;
pub mod classify;
pub mod error;
pub mod host;
pub mod registry;
pub mod repair;
