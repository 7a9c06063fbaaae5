use crate::types::DbId;

/// Failure classes surfaced to clients.
///
/// Every [`CoreError`] belongs to exactly one kind; the HTTP layer maps the
/// kind to a status code and response envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or missing required input (400).
    BadRequest,
    /// The referenced entity or page does not exist (404).
    NotFound,
    /// Well-formed request that cannot be completed (422).
    Unprocessable,
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("No {entity} available")]
    NoneAvailable { entity: &'static str },

    #[error("Page {page} is beyond the available data")]
    PageOutOfRange { page: u32 },

    #[error("Search term must not be empty")]
    EmptySearchTerm,

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Cannot process request: {0}")]
    Unprocessable(String),
}

impl CoreError {
    /// The failure class of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::BadRequest(_) => ErrorKind::BadRequest,
            CoreError::NotFound { .. }
            | CoreError::NoneAvailable { .. }
            | CoreError::PageOutOfRange { .. }
            | CoreError::EmptySearchTerm => ErrorKind::NotFound,
            CoreError::Validation(_) | CoreError::Unprocessable(_) => ErrorKind::Unprocessable,
        }
    }
}
