//! Authentication utilities library
//!
//! Provides the authentication core for the site backend:
//! - Password hashing (Argon2id)
//! - Time-limited HS256 access tokens with an explicit clock
//! - Login coordination
//!
//! The service crate defines its own account storage and request gate on top
//! of these pieces.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("other_password", &hash));
//! ```
//!
//! ## Tokens
//! ```
//! use auth::{AuthConfig, TokenIssuer};
//! use chrono::{Duration, Utc};
//!
//! let config = AuthConfig::new("secret_key_at_least_32_bytes_long!");
//! let issuer = TokenIssuer::new(&config);
//!
//! let now = Utc::now();
//! let issued = issuer.issue("admin", now).unwrap();
//! assert_eq!(issuer.verify(&issued.token, now).unwrap(), "admin");
//! assert!(issuer.verify(&issued.token, now + Duration::minutes(30)).is_err());
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{AuthConfig, Authenticator};
//! use chrono::Utc;
//!
//! let auth = Authenticator::new(&AuthConfig::new("secret_key_at_least_32_bytes_long!"));
//!
//! let hash = auth.hash_password("password123").unwrap();
//!
//! let result = auth.authenticate("password123", &hash, "admin", Utc::now()).unwrap();
//! let subject = auth.validate_token(&result.access_token, Utc::now()).unwrap();
//! assert_eq!(subject, "admin");
//! ```

pub mod authenticator;
pub mod config;
pub mod jwt;
pub mod password;

pub use authenticator::AccessToken;
pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use config::AuthConfig;
pub use jwt::Claims;
pub use jwt::IssuedToken;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::TokenIssuer;
pub use password::PasswordError;
pub use password::PasswordHasher;
