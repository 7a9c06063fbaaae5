//! Handler for drawing the next quiz question.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use trivia_core::error::CoreError;
use trivia_core::quiz::{pick_question, pool_filter, resolve_category};
use trivia_db::models::question::Question;
use trivia_db::models::quiz::QuizRequest;
use trivia_db::repositories::QuestionRepo;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::response::Envelope;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    /// `null` once every question in the pool has been shown.
    pub question: Option<Question>,
    /// Size of the pool the question was drawn from.
    pub total_questions: usize,
}

/// POST /quizzes
///
/// Draw a random question not in `previous_questions`, restricted to
/// `quiz_category.id` unless it is `0`. An exhausted pool ends the quiz with
/// a successful `question: null` response.
pub async fn next_question(
    State(state): State<AppState>,
    AppJson(input): AppJson<QuizRequest>,
) -> AppResult<impl IntoResponse> {
    let quiz_category = input
        .quiz_category
        .ok_or_else(|| CoreError::BadRequest("quiz_category is required".into()))?;
    let category_id = quiz_category
        .id
        .ok_or_else(|| CoreError::BadRequest("quiz_category.id is required".into()))?;
    let category = resolve_category(category_id)?;
    let previous = input.previous_questions.unwrap_or_default();

    let pool = QuestionRepo::list_filtered(&state.pool, &pool_filter(category, &previous)).await?;
    let pick = pick_question(pool, &mut rand::rng());

    tracing::debug!(
        category = ?category,
        category_type = ?quiz_category.category_type,
        previous = previous.len(),
        pool_size = pick.as_ref().map_or(0, |p| p.pool_size),
        "Quiz question drawn",
    );

    let response = match pick {
        Some(pick) => QuizResponse {
            question: Some(pick.question),
            total_questions: pick.pool_size,
        },
        None => QuizResponse {
            question: None,
            total_questions: 0,
        },
    };

    Ok(Json(Envelope::ok(response)))
}
