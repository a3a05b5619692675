use thiserror::Error;

/// Error type for company profile operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CompanyError {
    #[error("Company name must not be empty")]
    EmptyName,

    #[error("Database error: {0}")]
    DatabaseError(String),
}
