use async_trait::async_trait;
use auth::AccessToken;
use chrono::DateTime;
use chrono::Utc;

use crate::domain::account::errors::AccountError;
use crate::domain::account::errors::AuthError;
use crate::domain::account::models::Account;
use crate::domain::account::models::AuthenticatedAccount;
use crate::domain::account::models::CreateAccountCommand;
use crate::domain::account::models::NewAccount;
use crate::domain::account::models::Username;

/// Port for login and per-request authentication.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Exchange a username and password for an access token.
    ///
    /// # Arguments
    /// * `username` - Raw username as submitted
    /// * `password` - Plaintext password
    /// * `now` - Issuance instant
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown username or wrong password (indistinguishable)
    /// * `AccountInactive` - Password matched but the account is deactivated
    /// * `Repository` - Account lookup failed
    /// * `Internal` - Token could not be issued
    async fn login(
        &self,
        username: &str,
        password: &str,
        now: DateTime<Utc>,
    ) -> Result<AccessToken, AuthError>;

    /// Resolve a bearer token into the account it was issued for.
    ///
    /// # Arguments
    /// * `token` - Bearer token taken from the Authorization header
    /// * `now` - Verification instant
    ///
    /// # Errors
    /// * `TokenInvalid` - Bad signature, malformed, or expired token
    /// * `AccountNotFound` - Token subject has no account
    /// * `AccountInactive` - Account is deactivated
    /// * `Repository` - Account lookup failed
    async fn authenticate(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<AuthenticatedAccount, AuthError>;
}

/// Port for operator-driven account management.
#[async_trait]
pub trait AccountServicePort: Send + Sync + 'static {
    /// Create a new active account.
    ///
    /// # Errors
    /// * `EmptyPassword` - Password is empty
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `DatabaseError` - Database operation failed
    async fn create_account(&self, command: CreateAccountCommand) -> Result<Account, AccountError>;

    /// Create the bootstrap account when no account exists yet.
    ///
    /// # Returns
    /// The created account, or None when accounts already exist
    async fn ensure_bootstrap_account(
        &self,
        command: CreateAccountCommand,
    ) -> Result<Option<Account>, AccountError>;

    /// Replace an account's password.
    ///
    /// # Errors
    /// * `EmptyPassword` - Password is empty
    /// * `NotFoundByUsername` - No account with this username
    async fn reset_password(
        &self,
        username: &Username,
        password: &str,
    ) -> Result<Account, AccountError>;

    /// Activate or deactivate an account.
    async fn set_active(&self, username: &Username, active: bool)
        -> Result<Account, AccountError>;

    /// Grant or revoke the superuser flag.
    async fn set_superuser(
        &self,
        username: &Username,
        superuser: bool,
    ) -> Result<Account, AccountError>;
}

/// Persistence operations for accounts (the identity store).
#[async_trait]
pub trait AccountRepository: Send + Sync + 'static {
    /// Persist a new account.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, account: NewAccount) -> Result<Account, AccountError>;

    /// Retrieve account by username.
    ///
    /// # Returns
    /// Optional account (None if not found)
    async fn find_by_username(&self, username: &Username)
        -> Result<Option<Account>, AccountError>;

    /// Count stored accounts.
    async fn count(&self) -> Result<i64, AccountError>;

    /// Write back a mutated account.
    ///
    /// # Errors
    /// * `NotFoundByUsername` - Account no longer exists
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, account: Account) -> Result<Account, AccountError>;
}
