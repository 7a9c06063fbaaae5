//! Explicit question filter passed to the persistence layer.
//!
//! A [`QuestionFilter`] describes which questions a listing should return.
//! Every populated field narrows the result; an empty filter matches all
//! questions. The repository renders it into a parameterized `WHERE` clause.

use crate::types::DbId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionFilter {
    /// Only questions whose category equals this id.
    pub category: Option<DbId>,
    /// Questions whose id is in this list are excluded.
    pub exclude_ids: Vec<DbId>,
    /// Case-insensitive substring the question text must contain.
    pub text_contains: Option<String>,
}

impl QuestionFilter {
    /// Filter matching every question.
    pub fn all() -> Self {
        Self::default()
    }

    /// Restrict to a single category.
    pub fn in_category(mut self, category: DbId) -> Self {
        self.category = Some(category);
        self
    }

    /// Exclude the given question ids.
    pub fn excluding(mut self, ids: impl IntoIterator<Item = DbId>) -> Self {
        self.exclude_ids.extend(ids);
        self.exclude_ids.sort_unstable();
        self.exclude_ids.dedup();
        self
    }

    /// Require the question text to contain `term` (case-insensitive).
    pub fn containing(mut self, term: impl Into<String>) -> Self {
        self.text_contains = Some(term.into());
        self
    }

    /// Whether no field narrows the result.
    pub fn is_unrestricted(&self) -> bool {
        self.category.is_none() && self.exclude_ids.is_empty() && self.text_contains.is_none()
    }
}
