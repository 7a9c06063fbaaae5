//! Quiz round question selection.
//!
//! The selector is stateless: the client accumulates the ids it has already
//! been shown and sends the full history with every request. The candidate
//! pool is every question in the requested category (or all categories)
//! minus that history; one candidate is drawn uniformly at random.

use rand::Rng;

use crate::error::CoreError;
use crate::filter::QuestionFilter;
use crate::types::DbId;

/// Category id meaning "any category".
pub const ANY_CATEGORY: DbId = 0;

/// A question drawn from the candidate pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizPick<T> {
    pub question: T,
    /// Size of the pool the question was drawn from (including it).
    pub pool_size: usize,
}

/// Resolve the requested quiz category.
///
/// Returns `None` for [`ANY_CATEGORY`], the id otherwise. Negative ids are
/// malformed input.
pub fn resolve_category(id: DbId) -> Result<Option<DbId>, CoreError> {
    match id {
        ANY_CATEGORY => Ok(None),
        id if id > 0 => Ok(Some(id)),
        id => Err(CoreError::BadRequest(format!("invalid quiz category id {id}"))),
    }
}

/// Build the filter describing the candidate pool.
pub fn pool_filter(category: Option<DbId>, previous_questions: &[DbId]) -> QuestionFilter {
    let filter = QuestionFilter::all().excluding(previous_questions.iter().copied());
    match category {
        Some(id) => filter.in_category(id),
        None => filter,
    }
}

/// Draw one question uniformly at random from `pool`.
///
/// Returns `None` when the pool is empty, which marks the end of the quiz.
pub fn pick_question<T, R>(mut pool: Vec<T>, rng: &mut R) -> Option<QuizPick<T>>
where
    R: Rng + ?Sized,
{
    if pool.is_empty() {
        return None;
    }
    let pool_size = pool.len();
    let idx = rng.random_range(0..pool_size);
    Some(QuizPick {
        question: pool.swap_remove(idx),
        pool_size,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
