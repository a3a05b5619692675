use thiserror::Error;

/// Error type for page view tracking
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PageViewError {
    #[error("Page name is empty")]
    EmptyPage,

    #[error("Page name too long: maximum {max} characters, got {actual}")]
    PageTooLong { max: usize, actual: usize },

    #[error("Database error: {0}")]
    DatabaseError(String),
}
