//! Shared repair predicate and candidate derivation.

use slugmend_core::util::slug::generate_slug;

/// Whether a slug needs repair: it is empty, or it is merely the record's
/// numeric id rendered as text (slug generation never ran for the record).
#[must_use]
pub fn needs_fix(slug: &str, id: i64) -> bool {
    if slug.is_empty() {
        return true;
    }
    slug.parse::<i64>().is_ok_and(|numeric| numeric == id)
}

/// Candidate slug for a repair: the slugified title, or `<type>-<id>` when
/// the title has no slugifiable content.
#[must_use]
pub fn candidate_slug(title: &str, record_type: &str, id: i64) -> String {
    let candidate = generate_slug(title);
    if candidate.is_empty() {
        format!("{record_type}-{id}")
    } else {
        candidate
    }
}
