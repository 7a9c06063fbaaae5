//! Repository for the `questions` table.

use sqlx::PgPool;
use trivia_core::filter::QuestionFilter;
use trivia_core::search::{contains_pattern, LIKE_ESCAPE};
use trivia_core::types::DbId;

use crate::models::question::{CreateQuestion, Question};

/// Column list for questions queries.
const COLUMNS: &str = "id, question, answer, category, difficulty, created_at, updated_at";

/// Provides create, read, and delete operations for questions. Questions
/// have no update path.
pub struct QuestionRepo;

impl QuestionRepo {
    /// List every question, ordered by id ascending.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM questions ORDER BY id ASC");
        sqlx::query_as::<_, Question>(&query).fetch_all(pool).await
    }

    /// List questions matching `filter`, ordered by id ascending.
    pub async fn list_filtered(
        pool: &PgPool,
        filter: &QuestionFilter,
    ) -> Result<Vec<Question>, sqlx::Error> {
        if filter.is_unrestricted() {
            return Self::list_all(pool).await;
        }

        // Build dynamic WHERE clauses.
        let mut conditions = Vec::new();
        let mut bind_idx = 1u32;

        if filter.category.is_some() {
            conditions.push(format!("category = ${bind_idx}"));
            bind_idx += 1;
        }
        if !filter.exclude_ids.is_empty() {
            conditions.push(format!("NOT (id = ANY(${bind_idx}))"));
            bind_idx += 1;
        }
        if filter.text_contains.is_some() {
            conditions.push(format!("question ILIKE ${bind_idx} ESCAPE '{LIKE_ESCAPE}'"));
        }

        let query = format!(
            "SELECT {COLUMNS} FROM questions WHERE {} ORDER BY id ASC",
            conditions.join(" AND ")
        );

        let mut q = sqlx::query_as::<_, Question>(&query);

        // Bind dynamic parameters in order.
        if let Some(category) = filter.category {
            q = q.bind(category);
        }
        if !filter.exclude_ids.is_empty() {
            q = q.bind(filter.exclude_ids.as_slice());
        }
        if let Some(ref term) = filter.text_contains {
            q = q.bind(contains_pattern(term));
        }

        q.fetch_all(pool).await
    }

    /// Find a question by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Question>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM questions WHERE id = $1");
        sqlx::query_as::<_, Question>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a question, returning the created row with its assigned id.
    pub async fn create(pool: &PgPool, input: &CreateQuestion) -> Result<Question, sqlx::Error> {
        let query = format!(
            "INSERT INTO questions (question, answer, category, difficulty)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(&input.question)
            .bind(&input.answer)
            .bind(input.category)
            .bind(input.difficulty)
            .fetch_one(pool)
            .await
    }

    /// Delete a question by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Total number of questions.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM questions")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
