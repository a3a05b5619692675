use thiserror::Error;

/// Error type for Slug validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SlugError {
    #[error("Slug is empty")]
    Empty,

    #[error("Slug too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error type for service offering operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OfferingError {
    #[error("Invalid slug: {0}")]
    InvalidSlug(#[from] SlugError),

    #[error("Service name must not be empty")]
    EmptyName,

    #[error("Service not found: {0}")]
    NotFound(i64),

    #[error("Service not found with slug: {0}")]
    NotFoundBySlug(String),

    #[error("Service slug already exists: {0}")]
    SlugAlreadyExists(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
