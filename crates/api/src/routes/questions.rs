//! Route definitions for questions.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::questions;
use crate::state::AppState;

/// Question routes.
///
/// ```text
/// GET    /questions             -> list_questions
/// POST   /questions             -> create_question
/// POST   /questions/search      -> search_questions
/// DELETE /questions/{id}        -> delete_question
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/questions",
            get(questions::list_questions).post(questions::create_question),
        )
        .route("/questions/search", post(questions::search_questions))
        .route("/questions/{id}", delete(questions::delete_question))
}
