use std::sync::Arc;

use async_trait::async_trait;
use auth::AccessToken;
use auth::Authenticator;
use chrono::DateTime;
use chrono::Utc;

use crate::domain::account::errors::AccountError;
use crate::domain::account::errors::AuthError;
use crate::domain::account::models::Account;
use crate::domain::account::models::AuthenticatedAccount;
use crate::domain::account::models::CreateAccountCommand;
use crate::domain::account::models::NewAccount;
use crate::domain::account::models::Username;
use crate::domain::account::ports::AccountRepository;
use crate::domain::account::ports::AccountServicePort;
use crate::domain::account::ports::AuthServicePort;

/// Login and request-gate logic over the identity store.
///
/// Read-only against the repository. The authenticator carries the token
/// secret and lifetime from the startup configuration.
pub struct AuthService<AR>
where
    AR: AccountRepository,
{
    repository: Arc<AR>,
    authenticator: Arc<Authenticator>,
}

impl<AR> AuthService<AR>
where
    AR: AccountRepository,
{
    pub fn new(repository: Arc<AR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }
}

/// Reject accounts without the superuser flag.
///
/// Guards the company profile update.
pub fn require_superuser(account: &AuthenticatedAccount) -> Result<(), AuthError> {
    if account.is_superuser() {
        Ok(())
    } else {
        Err(AuthError::InsufficientPrivilege)
    }
}

#[async_trait]
impl<AR> AuthServicePort for AuthService<AR>
where
    AR: AccountRepository,
{
    async fn login(
        &self,
        username: &str,
        password: &str,
        now: DateTime<Utc>,
    ) -> Result<AccessToken, AuthError> {
        // A name that fails validation cannot exist in the store
        let account = match Username::new(username.to_string()) {
            Ok(username) => self.repository.find_by_username(&username).await?,
            Err(_) => None,
        };

        let Some(account) = account else {
            tracing::warn!(username = %username, reason = "unknown_account", "Login rejected");
            return Err(self.authenticator.reject_unknown_account(password).into());
        };

        let token = self
            .authenticator
            .authenticate(password, &account.password_hash, account.username.as_str(), now)
            .map_err(|e| {
                tracing::warn!(username = %username, reason = %e, "Login rejected");
                AuthError::from(e)
            })?;

        // Checked only after the password matched; the issued token is dropped
        if !account.is_active {
            tracing::warn!(username = %username, reason = "inactive_account", "Login rejected");
            return Err(AuthError::AccountInactive);
        }

        tracing::info!(
            account_id = %account.id,
            username = %account.username,
            expires_at = %token.expires_at,
            "Access token issued"
        );

        Ok(token)
    }

    async fn authenticate(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<AuthenticatedAccount, AuthError> {
        let subject = self.authenticator.validate_token(token, now).map_err(|e| {
            tracing::debug!(reason = %e, "Token verification failed");
            AuthError::TokenInvalid
        })?;

        let username = Username::new(subject).map_err(|_| AuthError::AccountNotFound)?;

        let account = self
            .repository
            .find_by_username(&username)
            .await?
            .ok_or(AuthError::AccountNotFound)?;

        if !account.is_active {
            return Err(AuthError::AccountInactive);
        }

        Ok(AuthenticatedAccount::new(account))
    }
}

/// Account management used by the seeding step and the operator CLI.
pub struct AccountService<AR>
where
    AR: AccountRepository,
{
    repository: Arc<AR>,
    password_hasher: auth::PasswordHasher,
}

impl<AR> AccountService<AR>
where
    AR: AccountRepository,
{
    pub fn new(repository: Arc<AR>) -> Self {
        Self {
            repository,
            password_hasher: auth::PasswordHasher::new(),
        }
    }

    fn hash_password(&self, password: &str) -> Result<String, AccountError> {
        if password.is_empty() {
            return Err(AccountError::EmptyPassword);
        }

        Ok(self.password_hasher.hash(password)?)
    }

    async fn find_existing(&self, username: &Username) -> Result<Account, AccountError> {
        self.repository
            .find_by_username(username)
            .await?
            .ok_or_else(|| AccountError::NotFoundByUsername(username.to_string()))
    }
}

#[async_trait]
impl<AR> AccountServicePort for AccountService<AR>
where
    AR: AccountRepository,
{
    async fn create_account(&self, command: CreateAccountCommand) -> Result<Account, AccountError> {
        let password_hash = self.hash_password(&command.password)?;

        let account = self
            .repository
            .create(NewAccount {
                username: command.username,
                email: command.email,
                password_hash,
                is_active: true,
                is_superuser: command.is_superuser,
            })
            .await?;

        tracing::info!(
            account_id = %account.id,
            username = %account.username,
            superuser = account.is_superuser,
            "Account created"
        );

        Ok(account)
    }

    async fn ensure_bootstrap_account(
        &self,
        command: CreateAccountCommand,
    ) -> Result<Option<Account>, AccountError> {
        if self.repository.count().await? > 0 {
            return Ok(None);
        }

        self.create_account(command).await.map(Some)
    }

    async fn reset_password(
        &self,
        username: &Username,
        password: &str,
    ) -> Result<Account, AccountError> {
        let mut account = self.find_existing(username).await?;
        account.password_hash = self.hash_password(password)?;

        self.repository.update(account).await
    }

    async fn set_active(
        &self,
        username: &Username,
        active: bool,
    ) -> Result<Account, AccountError> {
        let mut account = self.find_existing(username).await?;
        account.is_active = active;

        self.repository.update(account).await
    }

    async fn set_superuser(
        &self,
        username: &Username,
        superuser: bool,
    ) -> Result<Account, AccountError> {
        let mut account = self.find_existing(username).await?;
        account.is_superuser = superuser;

        self.repository.update(account).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use auth::AuthConfig;
    use chrono::Duration;
    use mockall::mock;

    use super::*;
    use crate::domain::account::models::AccountId;
    use crate::domain::account::models::EmailAddress;

    mock! {
        pub TestAccountRepository {}

        #[async_trait]
        impl AccountRepository for TestAccountRepository {
            async fn create(&self, account: NewAccount) -> Result<Account, AccountError>;
            async fn find_by_username(&self, username: &Username) -> Result<Option<Account>, AccountError>;
            async fn count(&self) -> Result<i64, AccountError>;
            async fn update(&self, account: Account) -> Result<Account, AccountError>;
        }
    }

    const SECRET: &str = "test-secret-key-for-jwt-signing-at-least-32-bytes";

    fn authenticator() -> Arc<Authenticator> {
        Arc::new(Authenticator::new(&AuthConfig::new(SECRET)))
    }

    fn account(username: &str, password: &str) -> Account {
        Account {
            id: AccountId(1),
            username: Username::new(username.to_string()).unwrap(),
            email: EmailAddress::new(format!("{}@example.com", username)).unwrap(),
            password_hash: auth::PasswordHasher::new().hash(password).unwrap(),
            is_active: true,
            is_superuser: false,
            created_at: Utc::now(),
        }
    }

    fn repository_returning(account: Option<Account>) -> MockTestAccountRepository {
        let mut repository = MockTestAccountRepository::new();
        repository
            .expect_find_by_username()
            .returning(move |_| Ok(account.clone()));
        repository
    }

    #[tokio::test]
    async fn test_login_success() {
        let service = AuthService::new(
            Arc::new(repository_returning(Some(account("admin", "admin123")))),
            authenticator(),
        );
        let now = Utc::now();

        let token = service
            .login("admin", "admin123", now)
            .await
            .expect("Login failed");

        assert!(!token.access_token.is_empty());
        assert_eq!(
            token.expires_at.timestamp(),
            now.timestamp() + Duration::minutes(30).num_seconds()
        );
    }

    #[tokio::test]
    async fn test_login_wrong_password_is_invalid_credentials() {
        let mut inactive = account("admin", "admin123");
        inactive.is_active = false;

        for candidate in [account("admin", "admin123"), inactive] {
            let service =
                AuthService::new(Arc::new(repository_returning(Some(candidate))), authenticator());

            let result = service.login("admin", "wrong-password", Utc::now()).await;
            assert_eq!(result.unwrap_err(), AuthError::InvalidCredentials);
        }
    }

    #[tokio::test]
    async fn test_login_unknown_user_is_invalid_credentials() {
        let service = AuthService::new(Arc::new(repository_returning(None)), authenticator());

        let result = service.login("nobody", "admin123", Utc::now()).await;
        assert_eq!(result.unwrap_err(), AuthError::InvalidCredentials);
    }

    #[tokio::test]
    async fn test_login_malformed_username_skips_lookup() {
        let mut repository = MockTestAccountRepository::new();
        repository.expect_find_by_username().times(0);
        let service = AuthService::new(Arc::new(repository), authenticator());

        let result = service.login("a b", "admin123", Utc::now()).await;
        assert_eq!(result.unwrap_err(), AuthError::InvalidCredentials);
    }

    #[tokio::test]
    async fn test_login_inactive_account_with_correct_password() {
        let mut inactive = account("hongzs", "hongzs123");
        inactive.is_active = false;
        let service = AuthService::new(Arc::new(repository_returning(Some(inactive))), authenticator());

        let result = service.login("hongzs", "hongzs123", Utc::now()).await;
        assert_eq!(result.unwrap_err(), AuthError::AccountInactive);
    }

    #[tokio::test]
    async fn test_authenticate_within_ttl() {
        let authenticator = authenticator();
        let service = AuthService::new(
            Arc::new(repository_returning(Some(account("admin", "admin123")))),
            Arc::clone(&authenticator),
        );
        let t0 = Utc::now();
        let token = authenticator.issue_token("admin", t0).unwrap();

        let just_before = t0 + Duration::minutes(29) + Duration::seconds(59);
        let resolved = service
            .authenticate(&token.access_token, just_before)
            .await
            .expect("Token should still be valid");
        assert_eq!(resolved.account().username.as_str(), "admin");

        let just_after = t0 + Duration::minutes(30) + Duration::seconds(1);
        let result = service.authenticate(&token.access_token, just_after).await;
        assert_eq!(result.unwrap_err(), AuthError::TokenInvalid);
    }

    #[tokio::test]
    async fn test_authenticate_tampered_token() {
        let mut repository = MockTestAccountRepository::new();
        repository.expect_find_by_username().times(0);
        let authenticator = authenticator();
        let service = AuthService::new(Arc::new(repository), Arc::clone(&authenticator));

        let now = Utc::now();
        let token = authenticator.issue_token("admin", now).unwrap().access_token;
        let mut tampered = token.into_bytes();
        let last = tampered.len() - 10;
        tampered[last] = if tampered[last] == b'x' { b'y' } else { b'x' };
        let tampered = String::from_utf8(tampered).unwrap();

        let result = service.authenticate(&tampered, now).await;
        assert_eq!(result.unwrap_err(), AuthError::TokenInvalid);
    }

    #[tokio::test]
    async fn test_authenticate_inactive_account_with_fresh_token() {
        let mut inactive = account("hongzs", "hongzs123");
        inactive.is_active = false;
        let authenticator = authenticator();
        let service = AuthService::new(
            Arc::new(repository_returning(Some(inactive))),
            Arc::clone(&authenticator),
        );

        let now = Utc::now();
        let token = authenticator.issue_token("hongzs", now).unwrap();

        let result = service.authenticate(&token.access_token, now).await;
        assert_eq!(result.unwrap_err(), AuthError::AccountInactive);
    }

    #[tokio::test]
    async fn test_authenticate_unknown_subject() {
        let authenticator = authenticator();
        let service = AuthService::new(Arc::new(repository_returning(None)), Arc::clone(&authenticator));

        let now = Utc::now();
        let token = authenticator.issue_token("deleted-user", now).unwrap();

        let result = service.authenticate(&token.access_token, now).await;
        assert_eq!(result.unwrap_err(), AuthError::AccountNotFound);
    }

    #[tokio::test]
    async fn test_superuser_guard_follows_flag_change() {
        let stored = Arc::new(Mutex::new(account("editor", "editor123")));

        let mut repository = MockTestAccountRepository::new();
        let read = Arc::clone(&stored);
        repository
            .expect_find_by_username()
            .returning(move |_| Ok(Some(read.lock().unwrap().clone())));
        let write = Arc::clone(&stored);
        repository.expect_update().returning(move |account| {
            *write.lock().unwrap() = account.clone();
            Ok(account)
        });
        let repository = Arc::new(repository);

        let authenticator = authenticator();
        let auth_service = AuthService::new(Arc::clone(&repository), Arc::clone(&authenticator));
        let account_service = AccountService::new(Arc::clone(&repository));

        let now = Utc::now();
        let token = authenticator.issue_token("editor", now).unwrap().access_token;

        let before = auth_service.authenticate(&token, now).await.unwrap();
        assert_eq!(
            require_superuser(&before),
            Err(AuthError::InsufficientPrivilege)
        );

        let username = Username::new("editor".to_string()).unwrap();
        account_service
            .set_superuser(&username, true)
            .await
            .expect("Failed to flag superuser");

        let after = auth_service.authenticate(&token, now).await.unwrap();
        assert_eq!(require_superuser(&after), Ok(()));
    }

    #[tokio::test]
    async fn test_create_account_hashes_password() {
        let mut repository = MockTestAccountRepository::new();
        repository
            .expect_create()
            .withf(|new| {
                new.username.as_str() == "admin"
                    && new.password_hash.starts_with("$argon2")
                    && new.is_active
                    && new.is_superuser
            })
            .times(1)
            .returning(|new| {
                Ok(Account {
                    id: AccountId(7),
                    username: new.username,
                    email: new.email,
                    password_hash: new.password_hash,
                    is_active: new.is_active,
                    is_superuser: new.is_superuser,
                    created_at: Utc::now(),
                })
            });

        let service = AccountService::new(Arc::new(repository));
        let command = CreateAccountCommand {
            username: Username::new("admin".to_string()).unwrap(),
            email: EmailAddress::new("admin@yiran-huanxin.com".to_string()).unwrap(),
            password: "admin123".to_string(),
            is_superuser: true,
        };

        let account = service.create_account(command).await.unwrap();
        assert_eq!(account.id, AccountId(7));
        assert!(auth::PasswordHasher::new().verify("admin123", &account.password_hash));
    }

    #[tokio::test]
    async fn test_create_account_rejects_empty_password() {
        let mut repository = MockTestAccountRepository::new();
        repository.expect_create().times(0);

        let service = AccountService::new(Arc::new(repository));
        let command = CreateAccountCommand {
            username: Username::new("admin".to_string()).unwrap(),
            email: EmailAddress::new("admin@yiran-huanxin.com".to_string()).unwrap(),
            password: String::new(),
            is_superuser: false,
        };

        let result = service.create_account(command).await;
        assert!(matches!(result, Err(AccountError::EmptyPassword)));
    }

    #[tokio::test]
    async fn test_bootstrap_skipped_when_accounts_exist() {
        let mut repository = MockTestAccountRepository::new();
        repository.expect_count().times(1).returning(|| Ok(2));
        repository.expect_create().times(0);

        let service = AccountService::new(Arc::new(repository));
        let command = CreateAccountCommand {
            username: Username::new("admin".to_string()).unwrap(),
            email: EmailAddress::new("admin@yiran-huanxin.com".to_string()).unwrap(),
            password: "admin123".to_string(),
            is_superuser: true,
        };

        assert!(service
            .ensure_bootstrap_account(command)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_reset_password_unknown_account() {
        let service = AccountService::new(Arc::new(repository_returning(None)));
        let username = Username::new("ghost".to_string()).unwrap();

        let result = service.reset_password(&username, "new-password").await;
        assert!(matches!(result, Err(AccountError::NotFoundByUsername(_))));
    }
}
