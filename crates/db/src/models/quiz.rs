//! Quiz round request body.

use serde::Deserialize;
use trivia_core::lenient;
use trivia_core::types::DbId;

/// Category selector sent by the quiz client, e.g.
/// `{ "id": 5, "type": "Entertainment" }`. An id of `0` means any category.
#[derive(Debug, Clone, Deserialize)]
pub struct QuizCategory {
    #[serde(default, deserialize_with = "lenient::optional_int")]
    pub id: Option<DbId>,
    #[serde(default, rename = "type")]
    pub category_type: Option<String>,
}

/// Body of `POST /quizzes`.
///
/// Ids in `previous_questions` may be numbers or numeric strings, like
/// `quiz_category.id`.
#[derive(Debug, Default, Deserialize)]
pub struct QuizRequest {
    #[serde(default, deserialize_with = "lenient::optional_int_list")]
    pub previous_questions: Option<Vec<DbId>>,
    #[serde(default)]
    pub quiz_category: Option<QuizCategory>,
}
