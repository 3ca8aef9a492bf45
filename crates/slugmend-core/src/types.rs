use serde::{Deserialize, Serialize};

/// Content record as seen by the repair hooks.
///
/// One shape serves both the sanitized draft handed to the pre-save hook and
/// the persisted row handed to the post-load hook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Host record id; 0 for a record that has not been saved yet.
    pub id: i64,
    /// Host content-type tag, matched case-sensitively.
    pub record_type: String,
    pub title: String,
    /// URL slug, the field under repair.
    pub slug: String,
    /// Host workflow status tag; passed through to the uniqueness service,
    /// never interpreted here.
    pub status: String,
    /// Parent record id; 0 for none.
    pub parent_id: i64,
}
