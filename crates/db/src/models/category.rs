//! Category model.

use serde::Serialize;
use sqlx::FromRow;
use trivia_core::types::{DbId, Timestamp};

/// A row from the `categories` table.
///
/// Serializes as `{ "id": .., "type": .. }`; timestamps stay server-side.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Category {
    pub id: DbId,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub category_type: String,
    #[serde(skip)]
    pub created_at: Timestamp,
    #[serde(skip)]
    pub updated_at: Timestamp,
}
