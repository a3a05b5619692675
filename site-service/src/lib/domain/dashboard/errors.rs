use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DashboardError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}
