use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use chrono::DateTime;
use chrono::Local;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::dashboard::models::DashboardStats;
use crate::domain::dashboard::models::RecentContact;
use crate::domain::dashboard::ports::DashboardServicePort;
use crate::inbound::http::router::AppState;

const DEFAULT_RECENT_LIMIT: u32 = 5;

pub async fn dashboard_stats(
    State(state): State<AppState>,
) -> Result<ApiSuccess<DashboardStatsResponseData>, ApiError> {
    state
        .dashboard_service
        .stats(Local::now().date_naive())
        .await
        .map_err(ApiError::from)
        .map(|ref stats| ApiSuccess::new(StatusCode::OK, stats.into()))
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecentQuery {
    #[serde(default = "default_recent_limit")]
    limit: u32,
}

fn default_recent_limit() -> u32 {
    DEFAULT_RECENT_LIMIT
}

pub async fn recent_contacts(
    State(state): State<AppState>,
    Query(query): Query<RecentQuery>,
) -> Result<ApiSuccess<Vec<RecentContactResponseData>>, ApiError> {
    state
        .dashboard_service
        .recent_contacts(i64::from(query.limit))
        .await
        .map_err(ApiError::from)
        .map(|contacts| ApiSuccess::new(StatusCode::OK, contacts.iter().map(Into::into).collect()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardStatsResponseData {
    pub pending_contacts: i64,
    pub total_contacts: i64,
    pub total_news: i64,
    pub total_cases: i64,
    pub total_services: i64,
    pub contacts_this_month: i64,
}

impl From<&DashboardStats> for DashboardStatsResponseData {
    fn from(stats: &DashboardStats) -> Self {
        Self {
            pending_contacts: stats.pending_contacts,
            total_contacts: stats.total_contacts,
            total_news: stats.total_news,
            total_cases: stats.total_cases,
            total_services: stats.total_services,
            contacts_this_month: stats.contacts_this_month,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecentContactResponseData {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub service_type: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<&RecentContact> for RecentContactResponseData {
    fn from(contact: &RecentContact) -> Self {
        Self {
            id: contact.id,
            name: contact.name.clone(),
            phone: contact.phone.clone(),
            service_type: contact.service_type.clone(),
            status: contact.status.to_string(),
            created_at: contact.created_at,
        }
    }
}
