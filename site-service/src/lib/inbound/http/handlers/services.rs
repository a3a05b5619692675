use axum::extract::Path;
use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::nullable;
use super::ApiError;
use super::ApiSuccess;
use super::MessageResponseData;
use crate::domain::offering::errors::OfferingError;
use crate::domain::offering::models::CreateOfferingCommand;
use crate::domain::offering::models::ServiceOffering;
use crate::domain::offering::models::Slug;
use crate::domain::offering::models::UpdateOfferingCommand;
use crate::domain::offering::ports::OfferingServicePort;
use crate::inbound::http::router::AppState;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OfferingQuery {
    featured: Option<bool>,
}

pub async fn list_services(
    State(state): State<AppState>,
    Query(query): Query<OfferingQuery>,
) -> Result<ApiSuccess<Vec<ServiceResponseData>>, ApiError> {
    state
        .offering_service
        .list_offerings(query.featured)
        .await
        .map_err(ApiError::from)
        .map(|offerings| {
            ApiSuccess::new(StatusCode::OK, offerings.iter().map(Into::into).collect())
        })
}

/// Public lookup; the path segment is the slug.
pub async fn get_service(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<ApiSuccess<ServiceResponseData>, ApiError> {
    let slug = Slug::new(slug).map_err(OfferingError::from)?;

    state
        .offering_service
        .get_offering_by_slug(&slug)
        .await
        .map_err(ApiError::from)
        .map(|ref offering| ApiSuccess::new(StatusCode::OK, offering.into()))
}

pub async fn create_service(
    State(state): State<AppState>,
    Json(body): Json<CreateServiceRequest>,
) -> Result<ApiSuccess<ServiceResponseData>, ApiError> {
    state
        .offering_service
        .create_offering(body.try_into()?)
        .await
        .map_err(ApiError::from)
        .map(|ref offering| ApiSuccess::new(StatusCode::OK, offering.into()))
}

/// Administrative update; the path segment is the numeric id.
pub async fn update_service(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<UpdateServiceRequest>,
) -> Result<ApiSuccess<ServiceResponseData>, ApiError> {
    state
        .offering_service
        .update_offering(id, body.try_into()?)
        .await
        .map_err(ApiError::from)
        .map(|ref offering| ApiSuccess::new(StatusCode::OK, offering.into()))
}

pub async fn delete_service(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<ApiSuccess<MessageResponseData>, ApiError> {
    state
        .offering_service
        .delete_offering(id)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::OK, MessageResponseData::new("服务已删除")))
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateServiceRequest {
    name: String,
    slug: String,
    description: Option<String>,
    icon: Option<String>,
    image: Option<String>,
    #[serde(default)]
    features: Vec<String>,
    price_range: Option<String>,
    duration: Option<String>,
    #[serde(default)]
    is_featured: bool,
    #[serde(default)]
    sort_order: i32,
}

impl TryFrom<CreateServiceRequest> for CreateOfferingCommand {
    type Error = OfferingError;

    fn try_from(body: CreateServiceRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            name: body.name,
            slug: Slug::new(body.slug)?,
            description: body.description,
            icon: body.icon,
            image: body.image,
            features: body.features,
            price_range: body.price_range,
            duration: body.duration,
            is_featured: body.is_featured,
            sort_order: body.sort_order,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateServiceRequest {
    name: Option<String>,
    slug: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    description: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    icon: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    image: Option<Option<String>>,
    features: Option<Vec<String>>,
    #[serde(default, deserialize_with = "nullable")]
    price_range: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    duration: Option<Option<String>>,
    is_featured: Option<bool>,
    sort_order: Option<i32>,
}

impl TryFrom<UpdateServiceRequest> for UpdateOfferingCommand {
    type Error = OfferingError;

    fn try_from(body: UpdateServiceRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            name: body.name,
            slug: body.slug.map(Slug::new).transpose()?,
            description: body.description,
            icon: body.icon,
            image: body.image,
            features: body.features,
            price_range: body.price_range,
            duration: body.duration,
            is_featured: body.is_featured,
            sort_order: body.sort_order,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceResponseData {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub image: Option<String>,
    pub features: Vec<String>,
    pub price_range: Option<String>,
    pub duration: Option<String>,
    pub is_featured: bool,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
}

impl From<&ServiceOffering> for ServiceResponseData {
    fn from(offering: &ServiceOffering) -> Self {
        Self {
            id: offering.id,
            name: offering.name.clone(),
            slug: offering.slug.as_str().to_string(),
            description: offering.description.clone(),
            icon: offering.icon.clone(),
            image: offering.image.clone(),
            features: offering.features.clone(),
            price_range: offering.price_range.clone(),
            duration: offering.duration.clone(),
            is_featured: offering.is_featured,
            sort_order: offering.sort_order,
            created_at: offering.created_at,
        }
    }
}
