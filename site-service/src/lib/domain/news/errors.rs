use thiserror::Error;

/// Error type for news operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NewsError {
    #[error("News not found: {0}")]
    NotFound(i64),

    #[error("News title must not be empty")]
    EmptyTitle,

    #[error("Database error: {0}")]
    DatabaseError(String),
}
