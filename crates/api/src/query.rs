//! Shared query parameter types for API handlers.

use serde::Deserialize;
use trivia_core::pagination::normalize_page;

/// Pagination parameter (`?page=`), 1-based.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
}

impl PageParams {
    /// The requested page, defaulting to 1 and clamped to at least 1.
    pub fn page(&self) -> u32 {
        normalize_page(self.page)
    }
}
