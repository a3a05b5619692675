use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;

use super::decode_list;
use super::encode_list;
use crate::domain::case::errors::CaseError;
use crate::domain::case::models::Case;
use crate::domain::case::models::CaseFilter;
use crate::domain::case::models::CreateCaseCommand;
use crate::domain::case::ports::CaseRepository;

const CASE_COLUMNS: &str = "id, title, description, location, service_type, area, cover_image, \
     images, is_featured, created_at, updated_at";

pub struct PostgresCaseRepository {
    pool: PgPool,
}

impl PostgresCaseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct CaseRow {
    id: i64,
    title: String,
    description: Option<String>,
    location: Option<String>,
    service_type: Option<String>,
    area: Option<String>,
    cover_image: Option<String>,
    images: Option<String>,
    is_featured: i32,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl From<CaseRow> for Case {
    fn from(row: CaseRow) -> Self {
        Case {
            id: row.id,
            title: row.title,
            description: row.description,
            location: row.location,
            service_type: row.service_type,
            area: row.area,
            cover_image: row.cover_image,
            images: decode_list(row.images.as_deref()),
            is_featured: row.is_featured,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

fn database_error(e: sqlx::Error) -> CaseError {
    CaseError::DatabaseError(e.to_string())
}

#[async_trait]
impl CaseRepository for PostgresCaseRepository {
    async fn list(&self, filter: &CaseFilter) -> Result<Vec<Case>, CaseError> {
        let rows: Vec<CaseRow> = sqlx::query_as(&format!(
            r#"
            SELECT {CASE_COLUMNS}
            FROM cases
            WHERE ($1::TEXT IS NULL OR service_type = $1)
              AND ($2::INTEGER IS NULL OR is_featured = $2)
            ORDER BY created_at DESC, id DESC
            OFFSET $3
            LIMIT $4
            "#
        ))
        .bind(filter.service_type.as_deref())
        .bind(filter.featured_flag())
        .bind(filter.page.skip)
        .bind(filter.page.limit)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(rows.into_iter().map(Case::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Case>, CaseError> {
        let row: Option<CaseRow> =
            sqlx::query_as(&format!("SELECT {CASE_COLUMNS} FROM cases WHERE id = $1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(database_error)?;

        Ok(row.map(Case::from))
    }

    async fn create(&self, command: CreateCaseCommand) -> Result<Case, CaseError> {
        let row: CaseRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO cases
                (title, description, location, service_type, area, cover_image, images, is_featured)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {CASE_COLUMNS}
            "#
        ))
        .bind(&command.title)
        .bind(&command.description)
        .bind(&command.location)
        .bind(&command.service_type)
        .bind(&command.area)
        .bind(&command.cover_image)
        .bind(encode_list(&command.images))
        .bind(command.is_featured)
        .fetch_one(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(row.into())
    }

    async fn update(&self, case: Case) -> Result<Case, CaseError> {
        let row: Option<CaseRow> = sqlx::query_as(&format!(
            r#"
            UPDATE cases
            SET title = $2, description = $3, location = $4, service_type = $5, area = $6,
                cover_image = $7, images = $8, is_featured = $9, updated_at = NOW()
            WHERE id = $1
            RETURNING {CASE_COLUMNS}
            "#
        ))
        .bind(case.id)
        .bind(&case.title)
        .bind(&case.description)
        .bind(&case.location)
        .bind(&case.service_type)
        .bind(&case.area)
        .bind(&case.cover_image)
        .bind(encode_list(&case.images))
        .bind(case.is_featured)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        row.map(Case::from).ok_or(CaseError::NotFound(case.id))
    }

    async fn delete(&self, id: i64) -> Result<bool, CaseError> {
        let result = sqlx::query("DELETE FROM cases WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        Ok(result.rows_affected() > 0)
    }
}
