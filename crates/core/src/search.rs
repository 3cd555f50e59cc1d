//! Validation helpers and constants for metadata search.
//!
//! Search runs against the serialized text form of the event attribute bag
//! (`extra_metadata::text`). Input validation happens here, before any SQL
//! is built, so the repository layer only ever sees well-formed queries.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Default number of search results per page.
pub const DEFAULT_SEARCH_LIMIT: i64 = 20;

/// Maximum number of search results per page.
pub const MAX_SEARCH_LIMIT: i64 = 100;

/// Minimum trimmed length for a substring query.
pub const MIN_QUERY_LEN: usize = 2;

/// Maximum length of a regular-expression pattern.
pub const MAX_PATTERN_LEN: usize = 500;

// ---------------------------------------------------------------------------
// Input validation
// ---------------------------------------------------------------------------

/// Validate a substring query, returning the trimmed form.
///
/// Queries shorter than [`MIN_QUERY_LEN`] trimmed characters are rejected:
/// a one-character ILIKE over serialized JSON matches nearly every row.
pub fn validate_substring_query(q: &str) -> Result<&str, CoreError> {
    let trimmed = q.trim();
    if trimmed.chars().count() < MIN_QUERY_LEN {
        return Err(CoreError::Validation(format!(
            "search query must be at least {MIN_QUERY_LEN} characters"
        )));
    }
    Ok(trimmed)
}

/// Validate a regular-expression pattern.
///
/// Rejects empty and oversized patterns, then compiles the pattern with the
/// `regex` crate. Postgres evaluates the pattern server-side; the local
/// compile is a pre-flight check so a bad pattern surfaces as
/// [`CoreError::Pattern`] instead of a store failure.
pub fn validate_regex_pattern(pattern: &str) -> Result<(), CoreError> {
    if pattern.is_empty() {
        return Err(CoreError::Validation(
            "search pattern must not be empty".to_string(),
        ));
    }
    if pattern.chars().count() > MAX_PATTERN_LEN {
        return Err(CoreError::Validation(format!(
            "search pattern must be at most {MAX_PATTERN_LEN} characters"
        )));
    }
    regex::Regex::new(pattern)
        .map(|_| ())
        .map_err(|e| CoreError::Pattern(e.to_string()))
}

/// Escape ILIKE metacharacters (`%`, `_`, `\`) in a substring query so user
/// input is matched literally.
pub fn escape_like(q: &str) -> String {
    let mut escaped = String::with_capacity(q.len());
    for c in q.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
