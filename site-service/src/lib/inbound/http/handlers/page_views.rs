use std::net::SocketAddr;

use axum::extract::ConnectInfo;
use axum::extract::Query;
use axum::extract::State;
use axum::http::header;
use axum::http::HeaderMap;
use axum::http::StatusCode;
use chrono::Local;
use chrono::NaiveDate;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::page_view::models::DailyCount;
use crate::domain::page_view::models::PageCount;
use crate::domain::page_view::models::PageViewStats;
use crate::domain::page_view::models::RecordPageViewCommand;
use crate::domain::page_view::ports::PageViewServicePort;
use crate::inbound::http::router::AppState;

#[derive(Debug, Clone, Deserialize)]
pub struct RecordQuery {
    page: String,
}

pub async fn record_page_view(
    State(state): State<AppState>,
    client: Option<ConnectInfo<SocketAddr>>,
    headers: HeaderMap,
    Query(query): Query<RecordQuery>,
) -> Result<ApiSuccess<RecordedResponseData>, ApiError> {
    let ip_address = client.map(|ConnectInfo(addr)| addr.ip().to_string());
    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    let command =
        RecordPageViewCommand::new(query.page, ip_address, user_agent, Local::now().date_naive())?;

    state
        .page_view_service
        .record_view(command)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::OK, RecordedResponseData::ok()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordedResponseData {
    pub status: String,
}

impl RecordedResponseData {
    fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

pub async fn page_view_stats(
    State(state): State<AppState>,
) -> Result<ApiSuccess<PageViewStatsResponseData>, ApiError> {
    state
        .page_view_service
        .stats(Local::now().date_naive())
        .await
        .map_err(ApiError::from)
        .map(|stats| ApiSuccess::new(StatusCode::OK, stats.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageViewStatsResponseData {
    pub total_views: i64,
    pub today_views: i64,
    pub yesterday_views: i64,
    pub week_views: i64,
    pub month_views: i64,
    pub daily_stats: Vec<DailyCountData>,
    pub page_stats: Vec<PageCountData>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyCountData {
    pub date: NaiveDate,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageCountData {
    pub page: String,
    pub count: i64,
}

impl From<DailyCount> for DailyCountData {
    fn from(day: DailyCount) -> Self {
        Self {
            date: day.date,
            count: day.count,
        }
    }
}

impl From<PageCount> for PageCountData {
    fn from(page: PageCount) -> Self {
        Self {
            page: page.page,
            count: page.count,
        }
    }
}

impl From<PageViewStats> for PageViewStatsResponseData {
    fn from(stats: PageViewStats) -> Self {
        Self {
            total_views: stats.total_views,
            today_views: stats.today_views,
            yesterday_views: stats.yesterday_views,
            week_views: stats.week_views,
            month_views: stats.month_views,
            daily_stats: stats.daily_stats.into_iter().map(Into::into).collect(),
            page_stats: stats.page_stats.into_iter().map(Into::into).collect(),
        }
    }
}
