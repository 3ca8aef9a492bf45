//! Slug generation utilities for human-readable record addresses.
//!
//! ## Summary
//! Generates URL-safe slugs from record titles. Slugs are lowercase,
//! alphanumeric with hyphens. Uniqueness among sibling records is the host
//! platform's concern, not handled here.

/// Generate a URL-safe slug from a title.
///
/// Converts to lowercase, replaces spaces and special characters with
/// hyphens, collapses multiple hyphens, and trims edge hyphens. Yields the
/// empty string when the title has no alphanumeric content at all.
///
/// Examples:
/// - "Summer Fair" -> "summer-fair"
/// - "John Doe's Picnic" -> "john-doe-s-picnic"
/// - "Email & Tasks" -> "email-tasks"
#[must_use]
pub fn generate_slug(title: &str) -> String {
    title
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
