use thiserror::Error;

/// Error type for case study operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CaseError {
    #[error("Case not found: {0}")]
    NotFound(i64),

    #[error("Case title must not be empty")]
    EmptyTitle,

    #[error("Database error: {0}")]
    DatabaseError(String),
}
