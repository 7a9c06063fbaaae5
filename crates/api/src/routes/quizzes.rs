use axum::routing::post;
use axum::Router;

use crate::handlers::quizzes;
use crate::state::AppState;

/// Quiz routes.
///
/// ```text
/// POST   /quizzes               -> next_question
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/quizzes", post(quizzes::next_question))
}
