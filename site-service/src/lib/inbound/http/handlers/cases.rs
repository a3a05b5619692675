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
use super::PageParams;
use crate::domain::case::models::Case;
use crate::domain::case::models::CaseFilter;
use crate::domain::case::models::CreateCaseCommand;
use crate::domain::case::models::UpdateCaseCommand;
use crate::domain::case::ports::CaseServicePort;
use crate::inbound::http::router::AppState;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CaseQuery {
    service_type: Option<String>,
    featured: Option<bool>,
}

pub async fn list_cases(
    State(state): State<AppState>,
    Query(page): Query<PageParams>,
    Query(query): Query<CaseQuery>,
) -> Result<ApiSuccess<Vec<CaseResponseData>>, ApiError> {
    let filter = CaseFilter {
        page: page.into(),
        service_type: query.service_type,
        featured: query.featured,
    };

    state
        .case_service
        .list_cases(filter)
        .await
        .map_err(ApiError::from)
        .map(|cases| ApiSuccess::new(StatusCode::OK, cases.iter().map(Into::into).collect()))
}

pub async fn get_case(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<ApiSuccess<CaseResponseData>, ApiError> {
    state
        .case_service
        .get_case(id)
        .await
        .map_err(ApiError::from)
        .map(|ref case| ApiSuccess::new(StatusCode::OK, case.into()))
}

pub async fn create_case(
    State(state): State<AppState>,
    Json(body): Json<CreateCaseRequest>,
) -> Result<ApiSuccess<CaseResponseData>, ApiError> {
    state
        .case_service
        .create_case(body.into())
        .await
        .map_err(ApiError::from)
        .map(|ref case| ApiSuccess::new(StatusCode::OK, case.into()))
}

pub async fn update_case(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<UpdateCaseRequest>,
) -> Result<ApiSuccess<CaseResponseData>, ApiError> {
    state
        .case_service
        .update_case(id, body.into())
        .await
        .map_err(ApiError::from)
        .map(|ref case| ApiSuccess::new(StatusCode::OK, case.into()))
}

pub async fn delete_case(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<ApiSuccess<MessageResponseData>, ApiError> {
    state
        .case_service
        .delete_case(id)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::OK, MessageResponseData::new("案例已删除")))
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateCaseRequest {
    title: String,
    description: Option<String>,
    location: Option<String>,
    service_type: Option<String>,
    area: Option<String>,
    cover_image: Option<String>,
    #[serde(default)]
    images: Vec<String>,
    #[serde(default)]
    is_featured: i32,
}

impl From<CreateCaseRequest> for CreateCaseCommand {
    fn from(body: CreateCaseRequest) -> Self {
        Self {
            title: body.title,
            description: body.description,
            location: body.location,
            service_type: body.service_type,
            area: body.area,
            cover_image: body.cover_image,
            images: body.images,
            is_featured: body.is_featured,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCaseRequest {
    title: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    description: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    location: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    service_type: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    area: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    cover_image: Option<Option<String>>,
    images: Option<Vec<String>>,
    is_featured: Option<i32>,
}

impl From<UpdateCaseRequest> for UpdateCaseCommand {
    fn from(body: UpdateCaseRequest) -> Self {
        Self {
            title: body.title,
            description: body.description,
            location: body.location,
            service_type: body.service_type,
            area: body.area,
            cover_image: body.cover_image,
            images: body.images,
            is_featured: body.is_featured,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseResponseData {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub service_type: Option<String>,
    pub area: Option<String>,
    pub cover_image: Option<String>,
    pub images: Vec<String>,
    pub is_featured: i32,
    pub created_at: DateTime<Utc>,
}

impl From<&Case> for CaseResponseData {
    fn from(case: &Case) -> Self {
        Self {
            id: case.id,
            title: case.title.clone(),
            description: case.description.clone(),
            location: case.location.clone(),
            service_type: case.service_type.clone(),
            area: case.area.clone(),
            cover_image: case.cover_image.clone(),
            images: case.images.clone(),
            is_featured: case.is_featured,
            created_at: case.created_at,
        }
    }
}
