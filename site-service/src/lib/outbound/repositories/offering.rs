use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;

use super::decode_list;
use super::encode_list;
use super::unique_violation;
use crate::domain::offering::errors::OfferingError;
use crate::domain::offering::models::CreateOfferingCommand;
use crate::domain::offering::models::ServiceOffering;
use crate::domain::offering::models::Slug;
use crate::domain::offering::ports::OfferingRepository;

const OFFERING_COLUMNS: &str = "id, name, slug, description, icon, image, features, price_range, \
     duration, is_featured, sort_order, created_at, updated_at";

pub struct PostgresOfferingRepository {
    pool: PgPool,
}

impl PostgresOfferingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct OfferingRow {
    id: i64,
    name: String,
    slug: String,
    description: Option<String>,
    icon: Option<String>,
    image: Option<String>,
    features: Option<String>,
    price_range: Option<String>,
    duration: Option<String>,
    is_featured: bool,
    sort_order: i32,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl TryFrom<OfferingRow> for ServiceOffering {
    type Error = OfferingError;

    fn try_from(row: OfferingRow) -> Result<Self, Self::Error> {
        Ok(ServiceOffering {
            id: row.id,
            name: row.name,
            slug: Slug::new(row.slug)?,
            description: row.description,
            icon: row.icon,
            image: row.image,
            features: decode_list(row.features.as_deref()),
            price_range: row.price_range,
            duration: row.duration,
            is_featured: row.is_featured,
            sort_order: row.sort_order,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn database_error(e: sqlx::Error) -> OfferingError {
    OfferingError::DatabaseError(e.to_string())
}

fn map_write_error(e: sqlx::Error, slug: &Slug) -> OfferingError {
    match unique_violation(&e) {
        Some("services_slug_key") => OfferingError::SlugAlreadyExists(slug.to_string()),
        _ => database_error(e),
    }
}

#[async_trait]
impl OfferingRepository for PostgresOfferingRepository {
    async fn list(&self, featured: Option<bool>) -> Result<Vec<ServiceOffering>, OfferingError> {
        let rows: Vec<OfferingRow> = sqlx::query_as(&format!(
            r#"
            SELECT {OFFERING_COLUMNS}
            FROM services
            WHERE ($1::BOOLEAN IS NULL OR is_featured = $1)
            ORDER BY sort_order ASC, created_at DESC, id DESC
            "#
        ))
        .bind(featured)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        rows.into_iter().map(ServiceOffering::try_from).collect()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ServiceOffering>, OfferingError> {
        let row: Option<OfferingRow> =
            sqlx::query_as(&format!("SELECT {OFFERING_COLUMNS} FROM services WHERE id = $1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(database_error)?;

        row.map(ServiceOffering::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &Slug) -> Result<Option<ServiceOffering>, OfferingError> {
        let row: Option<OfferingRow> = sqlx::query_as(&format!(
            "SELECT {OFFERING_COLUMNS} FROM services WHERE slug = $1"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        row.map(ServiceOffering::try_from).transpose()
    }

    async fn create(
        &self,
        command: CreateOfferingCommand,
    ) -> Result<ServiceOffering, OfferingError> {
        let row: OfferingRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO services
                (name, slug, description, icon, image, features, price_range, duration,
                 is_featured, sort_order)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {OFFERING_COLUMNS}
            "#
        ))
        .bind(&command.name)
        .bind(command.slug.as_str())
        .bind(&command.description)
        .bind(&command.icon)
        .bind(&command.image)
        .bind(encode_list(&command.features))
        .bind(&command.price_range)
        .bind(&command.duration)
        .bind(command.is_featured)
        .bind(command.sort_order)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, &command.slug))?;

        row.try_into()
    }

    async fn update(&self, offering: ServiceOffering) -> Result<ServiceOffering, OfferingError> {
        let row: Option<OfferingRow> = sqlx::query_as(&format!(
            r#"
            UPDATE services
            SET name = $2, slug = $3, description = $4, icon = $5, image = $6, features = $7,
                price_range = $8, duration = $9, is_featured = $10, sort_order = $11,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {OFFERING_COLUMNS}
            "#
        ))
        .bind(offering.id)
        .bind(&offering.name)
        .bind(offering.slug.as_str())
        .bind(&offering.description)
        .bind(&offering.icon)
        .bind(&offering.image)
        .bind(encode_list(&offering.features))
        .bind(&offering.price_range)
        .bind(&offering.duration)
        .bind(offering.is_featured)
        .bind(offering.sort_order)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_write_error(e, &offering.slug))?;

        row.ok_or(OfferingError::NotFound(offering.id))?.try_into()
    }

    async fn delete(&self, id: i64) -> Result<bool, OfferingError> {
        let result = sqlx::query("DELETE FROM services WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        Ok(result.rows_affected() > 0)
    }
}
