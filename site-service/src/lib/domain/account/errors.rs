use thiserror::Error;

/// Error for Username validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UsernameError {
    #[error("Username too short: minimum {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },

    #[error("Username too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },

    #[error(
        "Username contains invalid characters (only alphanumeric, underscore, and hyphen allowed)"
    )]
    InvalidCharacters,
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Error for account management operations
#[derive(Debug, Clone, Error)]
pub enum AccountError {
    #[error("Invalid username: {0}")]
    InvalidUsername(#[from] UsernameError),

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Password error: {0}")]
    Password(#[from] auth::PasswordError),

    #[error("Password must not be empty")]
    EmptyPassword,

    #[error("Account not found with username: {0}")]
    NotFoundByUsername(String),

    #[error("Username already exists: {0}")]
    UsernameAlreadyExists(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Rejections produced by login and by the request gate.
///
/// Callers see only "authentication failed" or "not allowed"; the variant is
/// kept for logs.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Missing or malformed bearer credentials")]
    MissingCredentials,

    #[error("Token is invalid or expired")]
    TokenInvalid,

    #[error("Account not found for token subject")]
    AccountNotFound,

    #[error("Account is inactive")]
    AccountInactive,

    #[error("Superuser privilege required")]
    InsufficientPrivilege,

    #[error("Account lookup failed: {0}")]
    Repository(String),

    #[error("Token issuance failed: {0}")]
    Internal(String),
}

impl From<AccountError> for AuthError {
    fn from(err: AccountError) -> Self {
        AuthError::Repository(err.to_string())
    }
}

impl From<auth::AuthenticationError> for AuthError {
    fn from(err: auth::AuthenticationError) -> Self {
        match err {
            auth::AuthenticationError::InvalidCredentials => AuthError::InvalidCredentials,
            auth::AuthenticationError::JwtError(e) => AuthError::Internal(e.to_string()),
        }
    }
}
