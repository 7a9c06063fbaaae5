pub mod categories;
pub mod health;
pub mod questions;
pub mod quizzes;

use axum::Router;

use crate::state::AppState;

/// Build the API route tree.
///
/// Routes are mounted at the root to match the quiz client's paths.
///
/// ```text
/// /categories                          list categories (GET)
/// /categories/{id}/questions           questions in a category, paginated (GET)
///
/// /questions                           list paginated (GET), create (POST)
/// /questions/search                    search by searchTerm, paginated (POST)
/// /questions/{id}                      delete (DELETE)
///
/// /quizzes                             next quiz question (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(categories::router())
        .merge(questions::router())
        .merge(quizzes::router())
}
