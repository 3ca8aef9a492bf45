//! Trait seams for the host platform services the repair hooks call.
//!
//! The hooks own none of the slug machinery: uniqueness, persistence, and
//! cache invalidation are host primitives injected behind these traits.

use async_trait::async_trait;

use slugmend_core::types::Record;

/// Scope key for a uniqueness lookup. The sibling set a slug must be unique
/// within is determined by the record's type and parent; the host service
/// is the sole arbiter of collisions inside that set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugScope {
    pub record_id: i64,
    pub status: String,
    pub record_type: String,
    pub parent_id: i64,
}

impl SlugScope {
    /// Uniqueness scope of an individual record.
    #[must_use]
    pub fn of(record: &Record) -> Self {
        Self {
            record_id: record.id,
            status: record.status.clone(),
            record_type: record.record_type.clone(),
            parent_id: record.parent_id,
        }
    }
}

/// The host's unique-slug service.
#[async_trait]
pub trait SlugUniquifier: Send + Sync {
    /// Returns a slug unique among sibling records of the scope's type and
    /// parent, deterministically disambiguated by the host (`-2`, `-3`, ...).
    ///
    /// ## Errors
    /// Returns whatever failure the host service raises.
    async fn unique_slug(&self, candidate: &str, scope: &SlugScope) -> anyhow::Result<String>;
}

/// The host's record persistence primitives.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Whether `id` identifies a revision record rather than a live one.
    ///
    /// ## Errors
    /// Returns whatever failure the host lookup raises.
    async fn is_revision(&self, id: i64) -> anyhow::Result<bool>;

    /// Writes only the slug field of the record with the given id.
    ///
    /// ## Errors
    /// Returns whatever failure the host update raises.
    async fn update_slug(&self, id: i64, slug: &str) -> anyhow::Result<()>;
}

/// The host's record cache.
#[async_trait]
pub trait RecordCache: Send + Sync {
    /// Drops any cached representation of the record with the given id.
    ///
    /// ## Errors
    /// Returns whatever failure the host cache raises.
    async fn invalidate(&self, id: i64) -> anyhow::Result<()>;
}

/// One of each host service, borrowed for the duration of a handler call.
#[derive(Clone, Copy)]
pub struct Platform<'a> {
    pub slugs: &'a dyn SlugUniquifier,
    pub store: &'a dyn RecordStore,
    pub cache: &'a dyn RecordCache,
}
