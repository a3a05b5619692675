use async_trait::async_trait;
use sqlx::FromRow;
use sqlx::PgPool;

use super::decode_list;
use super::encode_list;
use crate::domain::company::errors::CompanyError;
use crate::domain::company::models::Company;
use crate::domain::company::models::CompanyProfile;
use crate::domain::company::ports::CompanyRepository;

const COMPANY_COLUMNS: &str = "id, name, short_name, logo, description, phone, email, address, \
     wechat, weibo, copyright_text, icp, business_hours, banner_images, latitude, longitude";

pub struct PostgresCompanyRepository {
    pool: PgPool,
}

impl PostgresCompanyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct CompanyRow {
    id: i64,
    name: String,
    short_name: Option<String>,
    logo: Option<String>,
    description: Option<String>,
    phone: Option<String>,
    email: Option<String>,
    address: Option<String>,
    wechat: Option<String>,
    weibo: Option<String>,
    copyright_text: Option<String>,
    icp: Option<String>,
    business_hours: Option<String>,
    banner_images: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
}

impl From<CompanyRow> for Company {
    fn from(row: CompanyRow) -> Self {
        Company {
            id: row.id,
            profile: CompanyProfile {
                name: row.name,
                short_name: row.short_name,
                logo: row.logo,
                description: row.description,
                phone: row.phone,
                email: row.email,
                address: row.address,
                wechat: row.wechat,
                weibo: row.weibo,
                copyright_text: row.copyright_text,
                icp: row.icp,
                business_hours: row.business_hours,
                banner_images: decode_list(row.banner_images.as_deref()),
                latitude: row.latitude,
                longitude: row.longitude,
            },
        }
    }
}

fn database_error(e: sqlx::Error) -> CompanyError {
    CompanyError::DatabaseError(e.to_string())
}

#[async_trait]
impl CompanyRepository for PostgresCompanyRepository {
    async fn find(&self) -> Result<Option<Company>, CompanyError> {
        let row: Option<CompanyRow> =
            sqlx::query_as(&format!("SELECT {COMPANY_COLUMNS} FROM companies LIMIT 1"))
                .fetch_optional(&self.pool)
                .await
                .map_err(database_error)?;

        Ok(row.map(Company::from))
    }

    async fn ensure(&self, profile: &CompanyProfile) -> Result<Company, CompanyError> {
        sqlx::query(
            r#"
            INSERT INTO companies
                (name, short_name, logo, description, phone, email, address, wechat, weibo,
                 copyright_text, icp, business_hours, banner_images, latitude, longitude)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            ON CONFLICT (singleton) DO NOTHING
            "#,
        )
        .bind(&profile.name)
        .bind(&profile.short_name)
        .bind(&profile.logo)
        .bind(&profile.description)
        .bind(&profile.phone)
        .bind(&profile.email)
        .bind(&profile.address)
        .bind(&profile.wechat)
        .bind(&profile.weibo)
        .bind(&profile.copyright_text)
        .bind(&profile.icp)
        .bind(&profile.business_hours)
        .bind(encode_list(&profile.banner_images))
        .bind(profile.latitude)
        .bind(profile.longitude)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        self.find()
            .await?
            .ok_or_else(|| CompanyError::DatabaseError("company row missing after insert".into()))
    }

    async fn update(&self, company: Company) -> Result<Company, CompanyError> {
        let profile = &company.profile;
        let row: Option<CompanyRow> = sqlx::query_as(&format!(
            r#"
            UPDATE companies
            SET name = $2, short_name = $3, logo = $4, description = $5, phone = $6,
                email = $7, address = $8, wechat = $9, weibo = $10, copyright_text = $11,
                icp = $12, business_hours = $13, banner_images = $14, latitude = $15,
                longitude = $16
            WHERE id = $1
            RETURNING {COMPANY_COLUMNS}
            "#
        ))
        .bind(company.id)
        .bind(&profile.name)
        .bind(&profile.short_name)
        .bind(&profile.logo)
        .bind(&profile.description)
        .bind(&profile.phone)
        .bind(&profile.email)
        .bind(&profile.address)
        .bind(&profile.wechat)
        .bind(&profile.weibo)
        .bind(&profile.copyright_text)
        .bind(&profile.icp)
        .bind(&profile.business_hours)
        .bind(encode_list(&profile.banner_images))
        .bind(profile.latitude)
        .bind(profile.longitude)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        row.map(Company::from)
            .ok_or_else(|| CompanyError::DatabaseError("company row disappeared".into()))
    }
}
