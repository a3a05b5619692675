use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;

use super::decode_list;
use super::encode_list;
use crate::domain::news::errors::NewsError;
use crate::domain::news::models::CreateNewsCommand;
use crate::domain::news::models::News;
use crate::domain::news::models::NewsFilter;
use crate::domain::news::ports::NewsRepository;

const NEWS_COLUMNS: &str = "id, title, summary, content, cover_image, images, category, \
     is_published, view_count, created_at, updated_at";

pub struct PostgresNewsRepository {
    pool: PgPool,
}

impl PostgresNewsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct NewsRow {
    id: i64,
    title: String,
    summary: Option<String>,
    content: String,
    cover_image: Option<String>,
    images: Option<String>,
    category: String,
    is_published: bool,
    view_count: i32,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl From<NewsRow> for News {
    fn from(row: NewsRow) -> Self {
        News {
            id: row.id,
            title: row.title,
            summary: row.summary,
            content: row.content,
            cover_image: row.cover_image,
            images: decode_list(row.images.as_deref()),
            category: row.category,
            is_published: row.is_published,
            view_count: row.view_count,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

fn database_error(e: sqlx::Error) -> NewsError {
    NewsError::DatabaseError(e.to_string())
}

#[async_trait]
impl NewsRepository for PostgresNewsRepository {
    async fn list(&self, filter: &NewsFilter) -> Result<Vec<News>, NewsError> {
        let rows: Vec<NewsRow> = sqlx::query_as(&format!(
            r#"
            SELECT {NEWS_COLUMNS}
            FROM news
            WHERE ($1::TEXT IS NULL OR category = $1)
              AND ($2::BOOLEAN IS NULL OR is_published = $2)
            ORDER BY created_at DESC, id DESC
            OFFSET $3
            LIMIT $4
            "#
        ))
        .bind(filter.category.as_deref())
        .bind(filter.published)
        .bind(filter.page.skip)
        .bind(filter.page.limit)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(rows.into_iter().map(News::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<News>, NewsError> {
        let row: Option<NewsRow> =
            sqlx::query_as(&format!("SELECT {NEWS_COLUMNS} FROM news WHERE id = $1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(database_error)?;

        Ok(row.map(News::from))
    }

    async fn increment_view_count(&self, id: i64) -> Result<Option<News>, NewsError> {
        let row: Option<NewsRow> = sqlx::query_as(&format!(
            r#"
            UPDATE news
            SET view_count = view_count + 1
            WHERE id = $1
            RETURNING {NEWS_COLUMNS}
            "#
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(row.map(News::from))
    }

    async fn create(&self, command: CreateNewsCommand) -> Result<News, NewsError> {
        let row: NewsRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO news (title, summary, content, cover_image, images, category, is_published)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {NEWS_COLUMNS}
            "#
        ))
        .bind(&command.title)
        .bind(&command.summary)
        .bind(&command.content)
        .bind(&command.cover_image)
        .bind(encode_list(&command.images))
        .bind(&command.category)
        .bind(command.is_published)
        .fetch_one(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(row.into())
    }

    async fn update(&self, news: News) -> Result<News, NewsError> {
        let row: Option<NewsRow> = sqlx::query_as(&format!(
            r#"
            UPDATE news
            SET title = $2, summary = $3, content = $4, cover_image = $5, images = $6,
                category = $7, is_published = $8, updated_at = NOW()
            WHERE id = $1
            RETURNING {NEWS_COLUMNS}
            "#
        ))
        .bind(news.id)
        .bind(&news.title)
        .bind(&news.summary)
        .bind(&news.content)
        .bind(&news.cover_image)
        .bind(encode_list(&news.images))
        .bind(&news.category)
        .bind(news.is_published)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        row.map(News::from).ok_or(NewsError::NotFound(news.id))
    }

    async fn delete(&self, id: i64) -> Result<bool, NewsError> {
        let result = sqlx::query("DELETE FROM news WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        Ok(result.rows_affected() > 0)
    }
}
