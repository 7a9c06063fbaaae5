//! Free-text question search helpers.
//!
//! Matching itself happens in PostgreSQL via `ILIKE`; this module validates
//! the user's term and turns it into a literal-substring pattern.

use crate::error::CoreError;

/// Escape character used in generated `LIKE` patterns.
pub const LIKE_ESCAPE: char = '\\';

/// Validate a user-supplied search term.
///
/// Surrounding whitespace is trimmed. Absent, empty, or whitespace-only
/// terms are rejected with [`CoreError::EmptySearchTerm`].
pub fn normalize_search_term(term: Option<&str>) -> Result<&str, CoreError> {
    match term.map(str::trim) {
        Some(t) if !t.is_empty() => Ok(t),
        _ => Err(CoreError::EmptySearchTerm),
    }
}

/// Escape `LIKE` metacharacters (`%`, `_`, and the escape char itself) so the
/// term matches literally.
pub fn escape_like(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    for c in term.chars() {
        if c == '%' || c == '_' || c == LIKE_ESCAPE {
            out.push(LIKE_ESCAPE);
        }
        out.push(c);
    }
    out
}

/// Build a `%term%` substring pattern with the term escaped.
///
/// # Examples
///
/// ```
/// use trivia_core::search::contains_pattern;
/// assert_eq!(contains_pattern("one"), "%one%");
/// assert_eq!(contains_pattern("100%"), "%100\\%%");
/// ```
pub fn contains_pattern(term: &str) -> String {
    format!("%{}%", escape_like(term))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
