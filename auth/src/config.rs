use std::fmt;

use chrono::Duration;

/// Token signing settings shared by the issuer and the request gate.
///
/// Built once at startup and passed by reference into constructors; nothing
/// reads it from global state.
#[derive(Clone)]
pub struct AuthConfig {
    secret: Vec<u8>,
    token_ttl: Duration,
}

impl AuthConfig {
    pub const DEFAULT_TOKEN_TTL_MINUTES: i64 = 30;

    /// Create a configuration with the default token lifetime.
    ///
    /// # Arguments
    /// * `secret` - HMAC key for HS256; use at least 32 bytes
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            secret: secret.into(),
            token_ttl: Duration::minutes(Self::DEFAULT_TOKEN_TTL_MINUTES),
        }
    }

    /// Override the token lifetime.
    pub fn with_token_ttl(mut self, token_ttl: Duration) -> Self {
        self.token_ttl = token_ttl;
        self
    }

    pub fn secret(&self) -> &[u8] {
        &self.secret
    }

    pub fn token_ttl(&self) -> Duration {
        self.token_ttl
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("secret", &"[redacted]")
            .field("token_ttl", &self.token_ttl)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ttl_is_thirty_minutes() {
        let config = AuthConfig::new("secret");
        assert_eq!(config.token_ttl(), Duration::minutes(30));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = AuthConfig::new("super-secret-value");
        let rendered = format!("{:?}", config);

        assert!(!rendered.contains("super-secret-value"));
        assert!(rendered.contains("redacted"));
    }
}
