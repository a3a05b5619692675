use axum::http::StatusCode;
use serde::Serialize;

use super::ApiSuccess;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthResponseData {
    pub status: &'static str,
    pub message: &'static str,
}

pub async fn health() -> ApiSuccess<HealthResponseData> {
    ApiSuccess::new(
        StatusCode::OK,
        HealthResponseData {
            status: "healthy",
            message: "宜然焕新API服务运行正常",
        },
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BannerResponseData {
    pub message: &'static str,
    pub health: &'static str,
}

pub async fn banner() -> ApiSuccess<BannerResponseData> {
    ApiSuccess::new(
        StatusCode::OK,
        BannerResponseData {
            message: "宜然焕新官网API",
            health: "/health",
        },
    )
}
