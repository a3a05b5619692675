use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;

use super::claims::Claims;
use super::errors::JwtError;
use super::handler::JwtHandler;
use crate::config::AuthConfig;

/// A freshly issued access token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub token: String,
    pub claims: Claims,
}

/// Issues and verifies time-limited access tokens.
///
/// Tokens are stateless: nothing is stored server-side, so a token stays
/// valid until it expires. Both operations take the current time as an
/// argument.
pub struct TokenIssuer {
    handler: JwtHandler,
    ttl: Duration,
}

impl TokenIssuer {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            handler: JwtHandler::new(config.secret()),
            ttl: config.token_ttl(),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issue a token for `subject` that expires `ttl` after `now`.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(&self, subject: &str, now: DateTime<Utc>) -> Result<IssuedToken, JwtError> {
        let claims = Claims::issued(subject, now, self.ttl);
        let token = self.handler.encode(&claims)?;

        Ok(IssuedToken { token, claims })
    }

    /// Verify a token at `now` and return its subject.
    ///
    /// # Errors
    /// * `InvalidSignature` - Signature does not match
    /// * `DecodingFailed` - Token is malformed or truncated
    /// * `TokenExpired` - `now` is at or past the token's expiry
    pub fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<String, JwtError> {
        let claims: Claims = self.handler.decode(token)?;

        if claims.is_expired(now) {
            return Err(JwtError::TokenExpired);
        }

        Ok(claims.sub)
    }
}
