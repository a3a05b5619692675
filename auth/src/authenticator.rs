use chrono::DateTime;
use chrono::Utc;

use crate::config::AuthConfig;
use crate::jwt::JwtError;
use crate::jwt::TokenIssuer;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password verification and token issuance.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_issuer: TokenIssuer,
    decoy_hash: String,
}

/// Result of successful authentication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken {
    /// Signed bearer token
    pub access_token: String,

    /// Instant after which the token is rejected
    pub expires_at: DateTime<Utc>,
}

impl AccessToken {
    pub const TOKEN_TYPE: &'static str = "bearer";
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// Hashes one throwaway password up front so that logins for unknown
    /// usernames cost the same as logins with a wrong password.
    pub fn new(config: &AuthConfig) -> Self {
        let password_hasher = PasswordHasher::new();
        let decoy_hash = password_hasher
            .hash("decoy-password-never-matches")
            .unwrap_or_default();

        Self {
            password_hasher,
            token_issuer: TokenIssuer::new(config),
            decoy_hash,
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify credentials and issue a token for `subject`.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `subject` - Username to embed in the token
    /// * `now` - Issuance instant
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match (or the hash is unusable)
    /// * `JwtError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        subject: &str,
        now: DateTime<Utc>,
    ) -> Result<AccessToken, AuthenticationError> {
        if !self.password_hasher.verify(password, stored_hash) {
            return Err(AuthenticationError::InvalidCredentials);
        }

        self.issue_token(subject, now)
            .map_err(AuthenticationError::from)
    }

    /// Burn one password verification and fail.
    ///
    /// Called when the username is unknown, so the response time does not
    /// reveal whether the account exists.
    pub fn reject_unknown_account(&self, password: &str) -> AuthenticationError {
        let _ = self.password_hasher.verify(password, &self.decoy_hash);
        AuthenticationError::InvalidCredentials
    }

    /// Issue a token without password verification.
    ///
    /// # Errors
    /// * `JwtError` - Token generation failed
    pub fn issue_token(&self, subject: &str, now: DateTime<Utc>) -> Result<AccessToken, JwtError> {
        let issued = self.token_issuer.issue(subject, now)?;
        let expires_at = issued
            .claims
            .expires_at()
            .ok_or_else(|| JwtError::EncodingFailed("expiry out of range".to_string()))?;

        Ok(AccessToken {
            access_token: issued.token,
            expires_at,
        })
    }

    /// Validate a token at `now` and return its subject.
    ///
    /// # Errors
    /// * `JwtError` - Token is malformed, forged, or expired
    pub fn validate_token(&self, token: &str, now: DateTime<Utc>) -> Result<String, JwtError> {
        self.token_issuer.verify(token, now)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    fn authenticator() -> Authenticator {
        Authenticator::new(&AuthConfig::new("test_secret_key_at_least_32_bytes!"))
    }

    #[test]
    fn test_authenticate_success() {
        let authenticator = authenticator();
        let now = Utc::now();

        let hash = authenticator
            .hash_password("my_password")
            .expect("Failed to hash password");

        let result = authenticator
            .authenticate("my_password", &hash, "admin", now)
            .expect("Authentication failed");

        assert!(!result.access_token.is_empty());
        assert_eq!(
            result.expires_at.timestamp(),
            now.timestamp() + Duration::minutes(30).num_seconds()
        );

        let subject = authenticator
            .validate_token(&result.access_token, now)
            .expect("Token validation failed");
        assert_eq!(subject, "admin");
    }

    #[test]
    fn test_authenticate_invalid_password() {
        let authenticator = authenticator();

        let hash = authenticator
            .hash_password("my_password")
            .expect("Failed to hash password");

        let result = authenticator.authenticate("wrong_password", &hash, "admin", Utc::now());
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_authenticate_with_corrupt_hash_is_invalid_credentials() {
        let authenticator = authenticator();

        let result = authenticator.authenticate("anything", "not-a-phc-string", "admin", Utc::now());
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_reject_unknown_account() {
        let authenticator = authenticator();

        assert!(matches!(
            authenticator.reject_unknown_account("decoy-password-never-matches"),
            AuthenticationError::InvalidCredentials
        ));
    }

    #[test]
    fn test_validate_expired_token() {
        let authenticator = authenticator();
        let now = Utc::now();

        let token = authenticator
            .issue_token("admin", now)
            .expect("Failed to issue token");

        let later = now + Duration::minutes(31);
        assert_eq!(
            authenticator.validate_token(&token.access_token, later),
            Err(JwtError::TokenExpired)
        );
    }

    #[test]
    fn test_validate_invalid_token() {
        let result = authenticator().validate_token("invalid.token.here", Utc::now());
        assert!(result.is_err());
    }
}
