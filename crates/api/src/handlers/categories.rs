//! Handlers for category listing and per-category question pages.

use std::collections::BTreeMap;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use trivia_core::error::CoreError;
use trivia_core::filter::QuestionFilter;
use trivia_core::pagination::paginate;
use trivia_core::types::DbId;
use trivia_db::models::category::Category;
use trivia_db::models::question::Question;
use trivia_db::repositories::{CategoryRepo, QuestionRepo};

use crate::error::AppResult;
use crate::extract::{AppPath, AppQuery};
use crate::query::PageParams;
use crate::response::Envelope;
use crate::state::AppState;

/// Categories keyed by id, as the quiz client expects: `{"1": "Science"}`.
pub type CategoryMap = BTreeMap<DbId, String>;

/// Build the id → type map from category rows.
pub fn category_map(categories: &[Category]) -> CategoryMap {
    categories
        .iter()
        .map(|c| (c.id, c.category_type.clone()))
        .collect()
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: CategoryMap,
}

#[derive(Debug, Serialize)]
pub struct CategoryQuestionsResponse {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: CategoryMap,
    pub current_category: Category,
}

/// GET /categories
///
/// All categories as an id → type map. An empty table is reported as 404.
pub async fn list_categories(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let categories = CategoryRepo::list(&state.pool).await?;

    if categories.is_empty() {
        return Err(CoreError::NoneAvailable {
            entity: "categories",
        }
        .into());
    }

    Ok(Json(Envelope::ok(CategoriesResponse {
        categories: category_map(&categories),
    })))
}

/// GET /categories/{id}/questions?page=
///
/// One page of the category's questions. Unknown categories, categories
/// without questions, and pages past the end are all 404.
pub async fn list_category_questions(
    State(state): State<AppState>,
    AppPath(category_id): AppPath<DbId>,
    AppQuery(params): AppQuery<PageParams>,
) -> AppResult<impl IntoResponse> {
    let category = CategoryRepo::find_by_id(&state.pool, category_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Category",
            id: category_id,
        })?;

    let questions =
        QuestionRepo::list_filtered(&state.pool, &QuestionFilter::all().in_category(category_id))
            .await?;

    if questions.is_empty() {
        return Err(CoreError::NoneAvailable {
            entity: "questions in category",
        }
        .into());
    }

    let page = params.page();
    let current = paginate(&questions, page);
    if current.is_empty() {
        return Err(CoreError::PageOutOfRange { page }.into());
    }

    let categories = CategoryRepo::list(&state.pool).await?;

    Ok(Json(Envelope::ok(CategoryQuestionsResponse {
        questions: current.to_vec(),
        total_questions: questions.len(),
        categories: category_map(&categories),
        current_category: category,
    })))
}
