use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Access token claims.
///
/// The subject is the account's username. Timestamps are whole Unix seconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (username the token was issued for)
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Build claims for a token issued at `now` that lives for `ttl`.
    ///
    /// # Arguments
    /// * `subject` - Username the token identifies
    /// * `now` - Issuance instant (truncated to whole seconds)
    /// * `ttl` - Token lifetime
    pub fn issued(subject: impl ToString, now: DateTime<Utc>, ttl: Duration) -> Self {
        let iat = now.timestamp();

        Self {
            sub: subject.to_string(),
            iat,
            exp: iat + ttl.num_seconds(),
        }
    }

    /// Check if the token is expired at `now`.
    ///
    /// The expiry instant itself is already outside the validity window.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }

    /// Expiry as a timestamp, if representable.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(seconds: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(seconds, 0).unwrap()
    }

    #[test]
    fn test_issued() {
        let claims = Claims::issued("admin", at(1_700_000_000), Duration::minutes(30));

        assert_eq!(claims.sub, "admin");
        assert_eq!(claims.iat, 1_700_000_000);
        assert_eq!(claims.exp - claims.iat, 30 * 60);
        assert_eq!(claims.expires_at(), Some(at(1_700_001_800)));
    }

    #[test]
    fn test_issued_truncates_subsecond_now() {
        let now = at(1_700_000_000) + Duration::milliseconds(999);
        let claims = Claims::issued("admin", now, Duration::seconds(10));

        assert_eq!(claims.iat, 1_700_000_000);
        assert_eq!(claims.exp, 1_700_000_010);
    }

    #[test]
    fn test_is_expired() {
        let claims = Claims::issued("admin", at(1000), Duration::seconds(100));

        assert!(!claims.is_expired(at(1000)));
        assert!(!claims.is_expired(at(1099)));
        assert!(claims.is_expired(at(1100))); // Exactly at expiration
        assert!(claims.is_expired(at(1101)));
    }
}
