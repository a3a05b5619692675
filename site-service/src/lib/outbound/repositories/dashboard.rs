use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

use super::contact::ContactRow;
use super::contact::CONTACT_COLUMNS;
use crate::domain::contact::models::Contact;
use crate::domain::contact::models::ContactStatus;
use crate::domain::dashboard::errors::DashboardError;
use crate::domain::dashboard::ports::DashboardRepository;

pub struct PostgresDashboardRepository {
    pool: PgPool,
}

impl PostgresDashboardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn count(&self, sql: &str) -> Result<i64, DashboardError> {
        sqlx::query_scalar(sql)
            .fetch_one(&self.pool)
            .await
            .map_err(database_error)
    }
}

fn database_error(e: impl ToString) -> DashboardError {
    DashboardError::DatabaseError(e.to_string())
}

#[async_trait]
impl DashboardRepository for PostgresDashboardRepository {
    async fn count_contacts(&self, status: Option<ContactStatus>) -> Result<i64, DashboardError> {
        sqlx::query_scalar("SELECT COUNT(*) FROM contacts WHERE ($1::TEXT IS NULL OR status = $1)")
            .bind(status.map(|status| status.as_str()))
            .fetch_one(&self.pool)
            .await
            .map_err(database_error)
    }

    async fn count_contacts_since(&self, date: NaiveDate) -> Result<i64, DashboardError> {
        sqlx::query_scalar("SELECT COUNT(*) FROM contacts WHERE created_at >= $1::DATE")
            .bind(date)
            .fetch_one(&self.pool)
            .await
            .map_err(database_error)
    }

    async fn count_news(&self) -> Result<i64, DashboardError> {
        self.count("SELECT COUNT(*) FROM news").await
    }

    async fn count_cases(&self) -> Result<i64, DashboardError> {
        self.count("SELECT COUNT(*) FROM cases").await
    }

    async fn count_offerings(&self) -> Result<i64, DashboardError> {
        self.count("SELECT COUNT(*) FROM services").await
    }

    async fn latest_contacts(&self, limit: i64) -> Result<Vec<Contact>, DashboardError> {
        let rows: Vec<ContactRow> = sqlx::query_as(&format!(
            "SELECT {CONTACT_COLUMNS} FROM contacts ORDER BY created_at DESC, id DESC LIMIT $1"
        ))
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        rows.into_iter()
            .map(|row| Contact::try_from(row).map_err(database_error))
            .collect()
    }
}
