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
use crate::domain::news::models::CreateNewsCommand;
use crate::domain::news::models::News;
use crate::domain::news::models::NewsFilter;
use crate::domain::news::models::UpdateNewsCommand;
use crate::domain::news::models::DEFAULT_CATEGORY;
use crate::domain::news::ports::NewsServicePort;
use crate::inbound::http::router::AppState;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewsQuery {
    category: Option<String>,
    published: Option<bool>,
}

pub async fn list_news(
    State(state): State<AppState>,
    Query(page): Query<PageParams>,
    Query(query): Query<NewsQuery>,
) -> Result<ApiSuccess<Vec<NewsResponseData>>, ApiError> {
    let filter = NewsFilter {
        page: page.into(),
        category: query.category,
        published: query.published,
    };

    state
        .news_service
        .list_news(filter)
        .await
        .map_err(ApiError::from)
        .map(|news| ApiSuccess::new(StatusCode::OK, news.iter().map(Into::into).collect()))
}

pub async fn get_news(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<ApiSuccess<NewsResponseData>, ApiError> {
    state
        .news_service
        .view_news(id)
        .await
        .map_err(ApiError::from)
        .map(|ref news| ApiSuccess::new(StatusCode::OK, news.into()))
}

pub async fn create_news(
    State(state): State<AppState>,
    Json(body): Json<CreateNewsRequest>,
) -> Result<ApiSuccess<NewsResponseData>, ApiError> {
    state
        .news_service
        .create_news(body.into())
        .await
        .map_err(ApiError::from)
        .map(|ref news| ApiSuccess::new(StatusCode::OK, news.into()))
}

pub async fn update_news(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<UpdateNewsRequest>,
) -> Result<ApiSuccess<NewsResponseData>, ApiError> {
    state
        .news_service
        .update_news(id, body.into())
        .await
        .map_err(ApiError::from)
        .map(|ref news| ApiSuccess::new(StatusCode::OK, news.into()))
}

pub async fn delete_news(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<ApiSuccess<MessageResponseData>, ApiError> {
    state
        .news_service
        .delete_news(id)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::OK, MessageResponseData::new("新闻已删除")))
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateNewsRequest {
    title: String,
    summary: Option<String>,
    content: String,
    cover_image: Option<String>,
    #[serde(default)]
    images: Vec<String>,
    #[serde(default = "default_category")]
    category: String,
    #[serde(default = "published_by_default")]
    is_published: bool,
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

fn published_by_default() -> bool {
    true
}

impl From<CreateNewsRequest> for CreateNewsCommand {
    fn from(body: CreateNewsRequest) -> Self {
        Self {
            title: body.title,
            summary: body.summary,
            content: body.content,
            cover_image: body.cover_image,
            images: body.images,
            category: body.category,
            is_published: body.is_published,
        }
    }
}

/// Sparse patch body; absent fields are left alone, `null` clears the
/// optional ones.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateNewsRequest {
    title: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    summary: Option<Option<String>>,
    content: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    cover_image: Option<Option<String>>,
    images: Option<Vec<String>>,
    category: Option<String>,
    is_published: Option<bool>,
}

impl From<UpdateNewsRequest> for UpdateNewsCommand {
    fn from(body: UpdateNewsRequest) -> Self {
        Self {
            title: body.title,
            summary: body.summary,
            content: body.content,
            cover_image: body.cover_image,
            images: body.images,
            category: body.category,
            is_published: body.is_published,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsResponseData {
    pub id: i64,
    pub title: String,
    pub summary: Option<String>,
    pub content: String,
    pub cover_image: Option<String>,
    pub images: Vec<String>,
    pub category: String,
    pub is_published: bool,
    pub view_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<&News> for NewsResponseData {
    fn from(news: &News) -> Self {
        Self {
            id: news.id,
            title: news.title.clone(),
            summary: news.summary.clone(),
            content: news.content.clone(),
            cover_image: news.cover_image.clone(),
            images: news.images.clone(),
            category: news.category.clone(),
            is_published: news.is_published,
            view_count: news.view_count,
            created_at: news.created_at,
            updated_at: news.updated_at,
        }
    }
}
