//! Shared response envelope for API handlers.
//!
//! Every successful response is a JSON object carrying `"success": true`
//! alongside the operation's own fields. Use [`Envelope`] instead of ad-hoc
//! `serde_json::json!` so payloads stay typed.

use serde::Serialize;

/// Standard `{ "success": true, ...fields }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(Envelope::ok(QuizResponse { question, total_questions })))
/// ```
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub success: bool,
    #[serde(flatten)]
    pub body: T,
}

impl<T: Serialize> Envelope<T> {
    /// Wrap a successful payload.
    pub fn ok(body: T) -> Self {
        Self {
            success: true,
            body,
        }
    }
}
