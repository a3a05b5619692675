use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;

use super::unique_violation;
use crate::domain::account::errors::AccountError;
use crate::domain::account::models::Account;
use crate::domain::account::models::AccountId;
use crate::domain::account::models::EmailAddress;
use crate::domain::account::models::NewAccount;
use crate::domain::account::models::Username;
use crate::domain::account::ports::AccountRepository;

const ACCOUNT_COLUMNS: &str =
    "id, username, email, password_hash, is_active, is_superuser, created_at";

pub struct PostgresAccountRepository {
    pool: PgPool,
}

impl PostgresAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct AccountRow {
    id: i64,
    username: String,
    email: String,
    password_hash: String,
    is_active: bool,
    is_superuser: bool,
    created_at: DateTime<Utc>,
}

impl TryFrom<AccountRow> for Account {
    type Error = AccountError;

    fn try_from(row: AccountRow) -> Result<Self, Self::Error> {
        Ok(Account {
            id: AccountId(row.id),
            username: Username::new(row.username)?,
            email: EmailAddress::new(row.email)?,
            password_hash: row.password_hash,
            is_active: row.is_active,
            is_superuser: row.is_superuser,
            created_at: row.created_at,
        })
    }
}

fn map_write_error(e: sqlx::Error, username: &Username) -> AccountError {
    match unique_violation(&e) {
        Some("accounts_username_key") => AccountError::UsernameAlreadyExists(username.to_string()),
        _ => AccountError::DatabaseError(e.to_string()),
    }
}

#[async_trait]
impl AccountRepository for PostgresAccountRepository {
    async fn create(&self, account: NewAccount) -> Result<Account, AccountError> {
        let row: AccountRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO accounts (username, email, password_hash, is_active, is_superuser)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {ACCOUNT_COLUMNS}
            "#
        ))
        .bind(account.username.as_str())
        .bind(account.email.as_str())
        .bind(&account.password_hash)
        .bind(account.is_active)
        .bind(account.is_superuser)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, &account.username))?;

        row.try_into()
    }

    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<Account>, AccountError> {
        let row: Option<AccountRow> = sqlx::query_as(&format!(
            "SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE username = $1"
        ))
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AccountError::DatabaseError(e.to_string()))?;

        row.map(Account::try_from).transpose()
    }

    async fn count(&self) -> Result<i64, AccountError> {
        sqlx::query_scalar("SELECT COUNT(*) FROM accounts")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AccountError::DatabaseError(e.to_string()))
    }

    async fn update(&self, account: Account) -> Result<Account, AccountError> {
        let row: Option<AccountRow> = sqlx::query_as(&format!(
            r#"
            UPDATE accounts
            SET username = $2, email = $3, password_hash = $4, is_active = $5, is_superuser = $6
            WHERE id = $1
            RETURNING {ACCOUNT_COLUMNS}
            "#
        ))
        .bind(account.id.0)
        .bind(account.username.as_str())
        .bind(account.email.as_str())
        .bind(&account.password_hash)
        .bind(account.is_active)
        .bind(account.is_superuser)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_write_error(e, &account.username))?;

        row.ok_or_else(|| AccountError::NotFoundByUsername(account.username.to_string()))?
            .try_into()
    }
}
