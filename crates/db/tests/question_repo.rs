//! Integration tests for the question and category repositories.
//!
//! Exercises the repository layer against a real database:
//! - Create, find, delete, count
//! - Filtered listing (category, exclusions, text search)
//! - Quiz pool construction

use sqlx::PgPool;
use trivia_core::filter::QuestionFilter;
use trivia_core::quiz::pool_filter;
use trivia_db::models::question::CreateQuestion;
use trivia_db::repositories::{CategoryRepo, QuestionRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_question(text: &str, category: Option<i64>) -> CreateQuestion {
    CreateQuestion {
        question: text.to_string(),
        answer: "answer".to_string(),
        category,
        difficulty: 2,
    }
}

async fn seed(pool: &PgPool, rows: &[(&str, Option<i64>)]) -> Vec<i64> {
    let mut ids = Vec::new();
    for (text, category) in rows {
        let q = QuestionRepo::create(pool, &new_question(text, *category))
            .await
            .unwrap();
        ids.push(q.id);
    }
    ids
}

// ---------------------------------------------------------------------------
// CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_assigns_id_and_increments_count(pool: PgPool) {
    let before = QuestionRepo::count(&pool).await.unwrap();

    let created = QuestionRepo::create(
        &pool,
        &CreateQuestion {
            question: "What is the capital of France".to_string(),
            answer: "Paris".to_string(),
            category: Some(5),
            difficulty: 2,
        },
    )
    .await
    .unwrap();

    assert!(created.id > 0);
    assert_eq!(created.question, "What is the capital of France");
    assert_eq!(created.answer, "Paris");
    assert_eq!(created.category, Some(5));
    assert_eq!(created.difficulty, 2);
    assert_eq!(QuestionRepo::count(&pool).await.unwrap(), before + 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_accepts_unknown_category(pool: PgPool) {
    // Category references are not enforced at write time.
    let created = QuestionRepo::create(&pool, &new_question("Orphan?", Some(999)))
        .await
        .unwrap();
    assert_eq!(created.category, Some(999));
    assert!(CategoryRepo::find_by_id(&pool, 999).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_by_id(pool: PgPool) {
    let ids = seed(&pool, &[("Who painted the Mona Lisa?", Some(2))]).await;

    let found = QuestionRepo::find_by_id(&pool, ids[0]).await.unwrap().unwrap();
    assert_eq!(found.question, "Who painted the Mona Lisa?");

    assert!(QuestionRepo::find_by_id(&pool, 999_999).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete(pool: PgPool) {
    let ids = seed(&pool, &[("Delete me", None), ("Keep me", None)]).await;

    assert!(QuestionRepo::delete(&pool, ids[0]).await.unwrap());
    assert!(QuestionRepo::find_by_id(&pool, ids[0]).await.unwrap().is_none());
    assert_eq!(QuestionRepo::count(&pool).await.unwrap(), 1);

    // Second delete finds nothing.
    assert!(!QuestionRepo::delete(&pool, ids[0]).await.unwrap());
    assert!(!QuestionRepo::delete(&pool, 999_999).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_difficulty_check_constraint(pool: PgPool) {
    let mut input = new_question("Too hard", None);
    input.difficulty = 9;
    assert!(QuestionRepo::create(&pool, &input).await.is_err());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_all_ordered_by_id(pool: PgPool) {
    let ids = seed(&pool, &[("a", None), ("b", Some(1)), ("c", Some(2))]).await;

    let all = QuestionRepo::list_all(&pool).await.unwrap();
    let listed: Vec<i64> = all.iter().map(|q| q.id).collect();
    assert_eq!(listed, ids);
}

// ---------------------------------------------------------------------------
// Filtered listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_filter_by_category(pool: PgPool) {
    seed(
        &pool,
        &[("s1", Some(1)), ("a1", Some(2)), ("s2", Some(1)), ("none", None)],
    )
    .await;

    let science = QuestionRepo::list_filtered(&pool, &QuestionFilter::all().in_category(1))
        .await
        .unwrap();
    assert_eq!(science.len(), 2);
    assert!(science.iter().all(|q| q.category == Some(1)));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_filter_excluding_ids(pool: PgPool) {
    let ids = seed(&pool, &[("q1", None), ("q2", None), ("q3", None)]).await;

    let rest = QuestionRepo::list_filtered(
        &pool,
        &QuestionFilter::all().excluding([ids[0], ids[2]]),
    )
    .await
    .unwrap();
    assert_eq!(rest.len(), 1);
    assert_eq!(rest[0].id, ids[1]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_filter_text_is_case_insensitive(pool: PgPool) {
    seed(
        &pool,
        &[
            ("What is the capital one of Spain?", Some(3)),
            ("Which ONE is a mammal?", Some(1)),
            ("Unrelated", Some(4)),
        ],
    )
    .await;

    let found = QuestionRepo::list_filtered(&pool, &QuestionFilter::all().containing("one"))
        .await
        .unwrap();
    assert_eq!(found.len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_filter_text_wildcards_match_literally(pool: PgPool) {
    seed(&pool, &[("100% sure?", None), ("1000 years", None)]).await;

    let found = QuestionRepo::list_filtered(&pool, &QuestionFilter::all().containing("100%"))
        .await
        .unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].question, "100% sure?");

    let underscore =
        QuestionRepo::list_filtered(&pool, &QuestionFilter::all().containing("_"))
            .await
            .unwrap();
    assert!(underscore.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_filters_combine(pool: PgPool) {
    let ids = seed(
        &pool,
        &[
            ("river one", Some(3)),
            ("river two", Some(3)),
            ("river three", Some(4)),
        ],
    )
    .await;

    let filter = QuestionFilter::all()
        .in_category(3)
        .excluding([ids[0]])
        .containing("RIVER");
    let found = QuestionRepo::list_filtered(&pool, &filter).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, ids[1]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_quiz_pool_drains(pool: PgPool) {
    let ids = seed(
        &pool,
        &[("g1", Some(3)), ("g2", Some(3)), ("h1", Some(4))],
    )
    .await;

    let mut previous: Vec<i64> = Vec::new();
    loop {
        let candidates = QuestionRepo::list_filtered(&pool, &pool_filter(Some(3), &previous))
            .await
            .unwrap();
        let Some(next) = candidates.first() else {
            break;
        };
        assert_eq!(next.category, Some(3));
        assert!(!previous.contains(&next.id));
        previous.push(next.id);
    }

    previous.sort_unstable();
    assert_eq!(previous, vec![ids[0], ids[1]]);
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_category_lookup(pool: PgPool) {
    let all = CategoryRepo::list(&pool).await.unwrap();
    assert_eq!(all.len(), 6);
    assert_eq!(all[0].id, 1);

    let sports = CategoryRepo::find_by_id(&pool, 6).await.unwrap().unwrap();
    assert_eq!(sports.category_type, "Sports");

    assert!(CategoryRepo::find_by_id(&pool, 1000).await.unwrap().is_none());
}
