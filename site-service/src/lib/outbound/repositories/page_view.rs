use async_trait::async_trait;
use chrono::DateTime;
use chrono::NaiveDate;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;

use crate::domain::page_view::errors::PageViewError;
use crate::domain::page_view::models::DailyCount;
use crate::domain::page_view::models::PageCount;
use crate::domain::page_view::models::PageView;
use crate::domain::page_view::models::RecordPageViewCommand;
use crate::domain::page_view::ports::PageViewRepository;

pub struct PostgresPageViewRepository {
    pool: PgPool,
}

impl PostgresPageViewRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct PageViewRow {
    id: i64,
    page: String,
    ip_address: Option<String>,
    user_agent: Option<String>,
    view_date: NaiveDate,
    created_at: DateTime<Utc>,
}

impl From<PageViewRow> for PageView {
    fn from(row: PageViewRow) -> Self {
        PageView {
            id: row.id,
            page: row.page,
            ip_address: row.ip_address,
            user_agent: row.user_agent,
            view_date: row.view_date,
            created_at: row.created_at,
        }
    }
}

#[derive(FromRow)]
struct DailyCountRow {
    view_date: NaiveDate,
    count: i64,
}

#[derive(FromRow)]
struct PageCountRow {
    page: String,
    count: i64,
}

fn database_error(e: sqlx::Error) -> PageViewError {
    PageViewError::DatabaseError(e.to_string())
}

#[async_trait]
impl PageViewRepository for PostgresPageViewRepository {
    async fn record(&self, command: RecordPageViewCommand) -> Result<PageView, PageViewError> {
        let row: PageViewRow = sqlx::query_as(
            r#"
            INSERT INTO page_views (page, ip_address, user_agent, view_date)
            VALUES ($1, $2, $3, $4)
            RETURNING id, page, ip_address, user_agent, view_date, created_at
            "#,
        )
        .bind(&command.page)
        .bind(&command.ip_address)
        .bind(&command.user_agent)
        .bind(command.view_date)
        .fetch_one(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(row.into())
    }

    async fn count_all(&self) -> Result<i64, PageViewError> {
        sqlx::query_scalar("SELECT COUNT(*) FROM page_views")
            .fetch_one(&self.pool)
            .await
            .map_err(database_error)
    }

    async fn count_on(&self, date: NaiveDate) -> Result<i64, PageViewError> {
        sqlx::query_scalar("SELECT COUNT(*) FROM page_views WHERE view_date = $1")
            .bind(date)
            .fetch_one(&self.pool)
            .await
            .map_err(database_error)
    }

    async fn count_since(&self, date: NaiveDate) -> Result<i64, PageViewError> {
        sqlx::query_scalar("SELECT COUNT(*) FROM page_views WHERE view_date >= $1")
            .bind(date)
            .fetch_one(&self.pool)
            .await
            .map_err(database_error)
    }

    async fn daily_counts_since(&self, date: NaiveDate) -> Result<Vec<DailyCount>, PageViewError> {
        let rows: Vec<DailyCountRow> = sqlx::query_as(
            r#"
            SELECT view_date, COUNT(*) AS count
            FROM page_views
            WHERE view_date >= $1
            GROUP BY view_date
            ORDER BY view_date
            "#,
        )
        .bind(date)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(rows
            .into_iter()
            .map(|row| DailyCount {
                date: row.view_date,
                count: row.count,
            })
            .collect())
    }

    async fn top_pages(&self, limit: i64) -> Result<Vec<PageCount>, PageViewError> {
        let rows: Vec<PageCountRow> = sqlx::query_as(
            r#"
            SELECT page, COUNT(*) AS count
            FROM page_views
            GROUP BY page
            ORDER BY count DESC, page
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(rows
            .into_iter()
            .map(|row| PageCount {
                page: row.page,
                count: row.count,
            })
            .collect())
    }
}
