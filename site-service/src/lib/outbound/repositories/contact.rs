use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;

use crate::domain::account::models::EmailAddress;
use crate::domain::contact::errors::ContactError;
use crate::domain::contact::models::Contact;
use crate::domain::contact::models::ContactStatus;
use crate::domain::contact::models::SubmitContactCommand;
use crate::domain::contact::ports::ContactRepository;
use crate::domain::page::Page;

pub(crate) const CONTACT_COLUMNS: &str =
    "id, name, phone, email, address, service_type, message, status, created_at, updated_at";

pub struct PostgresContactRepository {
    pool: PgPool,
}

impl PostgresContactRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
pub(crate) struct ContactRow {
    id: i64,
    name: String,
    phone: String,
    email: Option<String>,
    address: Option<String>,
    service_type: Option<String>,
    message: Option<String>,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl TryFrom<ContactRow> for Contact {
    type Error = ContactError;

    fn try_from(row: ContactRow) -> Result<Self, Self::Error> {
        let email = row
            .email
            .filter(|email| !email.is_empty())
            .map(EmailAddress::new)
            .transpose()
            .map_err(|e| {
                ContactError::DatabaseError(format!("stored contact {}: {}", row.id, e))
            })?;
        let status = row.status.parse::<ContactStatus>().map_err(|e| {
            ContactError::DatabaseError(format!("stored contact {}: {}", row.id, e))
        })?;

        Ok(Contact {
            id: row.id,
            name: row.name,
            phone: row.phone,
            email,
            address: row.address,
            service_type: row.service_type,
            message: row.message,
            status,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn database_error(e: sqlx::Error) -> ContactError {
    ContactError::DatabaseError(e.to_string())
}

#[async_trait]
impl ContactRepository for PostgresContactRepository {
    async fn create(&self, command: SubmitContactCommand) -> Result<Contact, ContactError> {
        let row: ContactRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO contacts (name, phone, email, address, service_type, message, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {CONTACT_COLUMNS}
            "#
        ))
        .bind(&command.name)
        .bind(&command.phone)
        .bind(command.email.as_ref().map(EmailAddress::as_str))
        .bind(&command.address)
        .bind(&command.service_type)
        .bind(&command.message)
        .bind(ContactStatus::default().as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(database_error)?;

        row.try_into()
    }

    async fn list(&self, page: Page) -> Result<Vec<Contact>, ContactError> {
        let rows: Vec<ContactRow> = sqlx::query_as(&format!(
            "SELECT {CONTACT_COLUMNS} FROM contacts ORDER BY id OFFSET $1 LIMIT $2"
        ))
        .bind(page.skip)
        .bind(page.limit)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        rows.into_iter().map(Contact::try_from).collect()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Contact>, ContactError> {
        let row: Option<ContactRow> =
            sqlx::query_as(&format!("SELECT {CONTACT_COLUMNS} FROM contacts WHERE id = $1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(database_error)?;

        row.map(Contact::try_from).transpose()
    }

    async fn update_status(
        &self,
        id: i64,
        status: ContactStatus,
    ) -> Result<Option<Contact>, ContactError> {
        let row: Option<ContactRow> = sqlx::query_as(&format!(
            r#"
            UPDATE contacts
            SET status = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING {CONTACT_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(status.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        row.map(Contact::try_from).transpose()
    }
}
