//! Question model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use trivia_core::lenient;
use trivia_core::types::{DbId, Timestamp};

/// A row from the `questions` table.
///
/// Serializes to the client format `{ id, question, answer, category,
/// difficulty }`; timestamps are not exposed.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Question {
    pub id: DbId,
    pub question: String,
    pub answer: String,
    pub category: Option<DbId>,
    pub difficulty: i32,
    #[serde(skip)]
    pub created_at: Timestamp,
    #[serde(skip)]
    pub updated_at: Timestamp,
}

/// Validated input for inserting a question.
#[derive(Debug, Clone)]
pub struct CreateQuestion {
    pub question: String,
    pub answer: String,
    pub category: Option<DbId>,
    pub difficulty: i32,
}

/// Body of `POST /questions`.
///
/// Every field is optional at the wire level so missing values surface as
/// validation failures rather than JSON errors.
#[derive(Debug, Default, Deserialize)]
pub struct CreateQuestionRequest {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_int")]
    pub category: Option<DbId>,
    #[serde(default, deserialize_with = "lenient::optional_int32")]
    pub difficulty: Option<i32>,
}

/// Body of `POST /questions/search`.
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuestionsRequest {
    #[serde(default, rename = "searchTerm")]
    pub search_term: Option<String>,
}
