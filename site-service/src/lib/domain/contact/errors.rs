use thiserror::Error;

use crate::domain::account::errors::EmailError;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ContactStatusError {
    #[error("Unknown contact status: {0} (expected pending, processing or completed)")]
    Unknown(String),
}

/// Error type for contact request operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Invalid status: {0}")]
    InvalidStatus(#[from] ContactStatusError),

    #[error("Contact {0} must not be empty")]
    MissingField(&'static str),

    #[error("Contact not found: {0}")]
    NotFound(i64),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
