//! Fixed-size, 1-based pagination over already-ordered collections.

/// Number of questions returned per page.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Normalize a user-supplied page number.
///
/// Absent values default to 1; anything below 1 is treated as 1. Values
/// above `u32::MAX` saturate.
pub fn normalize_page(page: Option<i64>) -> u32 {
    match page {
        Some(p) if p >= 1 => u32::try_from(p).unwrap_or(u32::MAX),
        _ => 1,
    }
}

/// Return the slice of `items` that falls on `page`.
///
/// Start is `(page - 1) * QUESTIONS_PER_PAGE`. Out-of-range pages yield an
/// empty slice rather than an error; callers decide whether that is a 404.
pub fn paginate<T>(items: &[T], page: u32) -> &[T] {
    let page = page.max(1) as usize;
    let start = (page - 1)
        .saturating_mul(QUESTIONS_PER_PAGE)
        .min(items.len());
    let end = start.saturating_add(QUESTIONS_PER_PAGE).min(items.len());
    &items[start..end]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
