//! Question field validation.
//!
//! Questions are immutable once created, so all checks happen here before
//! the insert.

use crate::error::CoreError;
use crate::types::DbId;

/// Lowest accepted difficulty score.
pub const MIN_DIFFICULTY: i32 = 1;

/// Highest accepted difficulty score.
pub const MAX_DIFFICULTY: i32 = 5;

/// Category value meaning "uncategorized" on create.
pub const NO_CATEGORY: DbId = 0;

/// Require a non-blank text field, returning it trimmed.
pub fn require_text(field: &str, value: Option<&str>) -> Result<String, CoreError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(CoreError::Validation(format!("{field} is required"))),
    }
}

/// Require a difficulty within [`MIN_DIFFICULTY`]..=[`MAX_DIFFICULTY`].
pub fn require_difficulty(value: Option<i32>) -> Result<i32, CoreError> {
    match value {
        None => Err(CoreError::Validation("difficulty is required".into())),
        Some(d) if (MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&d) => Ok(d),
        Some(d) => Err(CoreError::Validation(format!(
            "difficulty must be between {MIN_DIFFICULTY} and {MAX_DIFFICULTY}, got {d}"
        ))),
    }
}

/// Normalize an optional category reference.
///
/// `0` is stored as no category. Negative ids are rejected. The category is
/// not checked for existence.
pub fn normalize_category(value: Option<DbId>) -> Result<Option<DbId>, CoreError> {
    match value {
        None | Some(NO_CATEGORY) => Ok(None),
        Some(id) if id > 0 => Ok(Some(id)),
        Some(id) => Err(CoreError::Validation(format!("invalid category id {id}"))),
    }
}
