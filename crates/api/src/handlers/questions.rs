//! Handlers for question listing, creation, deletion, and search.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use trivia_core::error::CoreError;
use trivia_core::filter::QuestionFilter;
use trivia_core::pagination::paginate;
use trivia_core::question::{normalize_category, require_difficulty, require_text};
use trivia_core::search::normalize_search_term;
use trivia_core::types::DbId;
use trivia_db::models::category::Category;
use trivia_db::models::question::{
    CreateQuestion, CreateQuestionRequest, Question, SearchQuestionsRequest,
};
use trivia_db::repositories::{CategoryRepo, QuestionRepo};

use crate::error::AppResult;
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::handlers::categories::{category_map, CategoryMap};
use crate::query::PageParams;
use crate::response::Envelope;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response payloads
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct QuestionPageResponse {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: CategoryMap,
    /// Always `null` for the unfiltered listing.
    pub current_category: Option<Category>,
}

#[derive(Debug, Serialize)]
pub struct CreatedQuestionResponse {
    pub created: DbId,
    pub created_question: Question,
    pub total_questions: i64,
}

#[derive(Debug, Serialize)]
pub struct DeletedQuestionResponse {
    pub deleted_id: DbId,
    pub deleted_question: Question,
    pub total_questions: i64,
}

#[derive(Debug, Serialize)]
pub struct SearchResultsResponse {
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /questions?page=
///
/// One page of all questions plus the category map. A page with no
/// questions on it is 404.
pub async fn list_questions(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<PageParams>,
) -> AppResult<impl IntoResponse> {
    let questions = QuestionRepo::list_all(&state.pool).await?;

    let page = params.page();
    let current = paginate(&questions, page);
    if current.is_empty() {
        return Err(CoreError::PageOutOfRange { page }.into());
    }

    let categories = CategoryRepo::list(&state.pool).await?;

    Ok(Json(Envelope::ok(QuestionPageResponse {
        questions: current.to_vec(),
        total_questions: questions.len(),
        categories: category_map(&categories),
        current_category: None,
    })))
}

/// POST /questions
///
/// Create a question. `question`, `answer` and `difficulty` are required;
/// `category` is optional and not checked for existence.
pub async fn create_question(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateQuestionRequest>,
) -> AppResult<impl IntoResponse> {
    let new_question = CreateQuestion {
        question: require_text("question", input.question.as_deref())?,
        answer: require_text("answer", input.answer.as_deref())?,
        category: normalize_category(input.category)?,
        difficulty: require_difficulty(input.difficulty)?,
    };

    let created = QuestionRepo::create(&state.pool, &new_question).await?;
    let total_questions = QuestionRepo::count(&state.pool).await?;

    tracing::info!(
        question_id = created.id,
        category = ?created.category,
        total_questions,
        "Question created",
    );

    Ok((
        StatusCode::CREATED,
        Json(Envelope::ok(CreatedQuestionResponse {
            created: created.id,
            created_question: created,
            total_questions,
        })),
    ))
}

/// DELETE /questions/{id}
///
/// Delete a question. An unknown id cannot be processed (422), not 404.
pub async fn delete_question(
    State(state): State<AppState>,
    AppPath(question_id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let question = QuestionRepo::find_by_id(&state.pool, question_id)
        .await?
        .ok_or_else(|| {
            CoreError::Unprocessable(format!("question {question_id} does not exist"))
        })?;

    if !QuestionRepo::delete(&state.pool, question_id).await? {
        return Err(
            CoreError::Unprocessable(format!("question {question_id} was already deleted")).into(),
        );
    }

    let total_questions = QuestionRepo::count(&state.pool).await?;

    tracing::info!(question_id, total_questions, "Question deleted");

    Ok(Json(Envelope::ok(DeletedQuestionResponse {
        deleted_id: question_id,
        deleted_question: question,
        total_questions,
    })))
}

/// POST /questions/search?page=
///
/// Case-insensitive substring search over question text. A missing or
/// blank `searchTerm` is 404; no matches is an empty success.
pub async fn search_questions(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<PageParams>,
    AppJson(input): AppJson<SearchQuestionsRequest>,
) -> AppResult<impl IntoResponse> {
    let term = normalize_search_term(input.search_term.as_deref())?;

    let results =
        QuestionRepo::list_filtered(&state.pool, &QuestionFilter::all().containing(term)).await?;

    tracing::debug!(term, matches = results.len(), "Question search");

    Ok(Json(Envelope::ok(SearchResultsResponse {
        questions: paginate(&results, params.page()).to_vec(),
        total_questions: results.len(),
    })))
}
