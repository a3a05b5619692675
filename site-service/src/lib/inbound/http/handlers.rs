use axum::extract::rejection::JsonRejection;
use axum::http::header;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;

use crate::domain::account::errors::AuthError;
use crate::domain::case::errors::CaseError;
use crate::domain::company::errors::CompanyError;
use crate::domain::contact::errors::ContactError;
use crate::domain::dashboard::errors::DashboardError;
use crate::domain::news::errors::NewsError;
use crate::domain::offering::errors::OfferingError;
use crate::domain::page::Page;
use crate::domain::page_view::errors::PageViewError;

pub mod auth;
pub mod cases;
pub mod company;
pub mod contacts;
pub mod dashboard;
pub mod health;
pub mod news;
pub mod page_views;
pub mod services;

/// Successful response: the bare JSON body with a status code.
#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<T>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// `{"message": ...}` acknowledgement body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageResponseData {
    pub message: String,
}

impl MessageResponseData {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

const CREDENTIALS_REJECTED: &str = "Could not validate credentials";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    UnprocessableEntity(String),
    BadRequest(String),
    NotFound(String),
    Unauthorized(String),
    Forbidden(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            ApiError::Unauthorized(msg) => {
                return (
                    StatusCode::UNAUTHORIZED,
                    [(header::WWW_AUTHENTICATE, "Bearer")],
                    Json(ApiErrorBody { detail: msg }),
                )
                    .into_response();
            }
        };

        (status, Json(ApiErrorBody { detail: message })).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorBody {
    pub detail: String,
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => {
                ApiError::Unauthorized("Incorrect username or password".to_string())
            }
            AuthError::MissingCredentials
            | AuthError::TokenInvalid
            | AuthError::AccountNotFound
            | AuthError::AccountInactive => ApiError::Unauthorized(CREDENTIALS_REJECTED.to_string()),
            AuthError::InsufficientPrivilege => {
                ApiError::Forbidden("Not enough privileges".to_string())
            }
            AuthError::Repository(_) | AuthError::Internal(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<NewsError> for ApiError {
    fn from(err: NewsError) -> Self {
        match err {
            NewsError::NotFound(_) => ApiError::NotFound(err.to_string()),
            NewsError::EmptyTitle => ApiError::UnprocessableEntity(err.to_string()),
            NewsError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<CaseError> for ApiError {
    fn from(err: CaseError) -> Self {
        match err {
            CaseError::NotFound(_) => ApiError::NotFound(err.to_string()),
            CaseError::EmptyTitle => ApiError::UnprocessableEntity(err.to_string()),
            CaseError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<OfferingError> for ApiError {
    fn from(err: OfferingError) -> Self {
        match err {
            OfferingError::NotFound(_) | OfferingError::NotFoundBySlug(_) => {
                ApiError::NotFound(err.to_string())
            }
            OfferingError::SlugAlreadyExists(_) => ApiError::BadRequest(err.to_string()),
            OfferingError::InvalidSlug(_) | OfferingError::EmptyName => {
                ApiError::UnprocessableEntity(err.to_string())
            }
            OfferingError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<ContactError> for ApiError {
    fn from(err: ContactError) -> Self {
        match err {
            ContactError::NotFound(_) => ApiError::NotFound(err.to_string()),
            ContactError::InvalidEmail(_)
            | ContactError::InvalidStatus(_)
            | ContactError::MissingField(_) => ApiError::UnprocessableEntity(err.to_string()),
            ContactError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<CompanyError> for ApiError {
    fn from(err: CompanyError) -> Self {
        match err {
            CompanyError::EmptyName => ApiError::UnprocessableEntity(err.to_string()),
            CompanyError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<PageViewError> for ApiError {
    fn from(err: PageViewError) -> Self {
        match err {
            PageViewError::EmptyPage | PageViewError::PageTooLong { .. } => {
                ApiError::UnprocessableEntity(err.to_string())
            }
            PageViewError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<DashboardError> for ApiError {
    fn from(err: DashboardError) -> Self {
        ApiError::InternalServerError(err.to_string())
    }
}

/// Body rejections taken as a `Result` by handlers that must authorize first.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection.status() {
            StatusCode::UNPROCESSABLE_ENTITY => ApiError::UnprocessableEntity(rejection.body_text()),
            _ => ApiError::BadRequest(rejection.body_text()),
        }
    }
}

/// `skip`/`limit` query parameters.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PageParams {
    #[serde(default)]
    pub skip: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_limit() -> u32 {
    Page::DEFAULT_LIMIT as u32
}

impl From<PageParams> for Page {
    fn from(params: PageParams) -> Self {
        Page::new(i64::from(params.skip), i64::from(params.limit))
    }
}

/// Deserialize a field that distinguishes "absent" from "explicitly null".
///
/// Use with `#[serde(default, deserialize_with = "nullable")]` on an
/// `Option<Option<T>>`: absent is `None`, `null` is `Some(None)`.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "nullable")]
        summary: Option<Option<String>>,
    }

    #[test]
    fn test_nullable_distinguishes_absent_and_null() {
        let absent: Patch = serde_json::from_value(json!({})).unwrap();
        let null: Patch = serde_json::from_value(json!({ "summary": null })).unwrap();
        let set: Patch = serde_json::from_value(json!({ "summary": "text" })).unwrap();

        assert_eq!(absent.summary, None);
        assert_eq!(null.summary, Some(None));
        assert_eq!(set.summary, Some(Some("text".to_string())));
    }

    #[test]
    fn test_auth_rejections_are_uniform() {
        for err in [
            AuthError::MissingCredentials,
            AuthError::TokenInvalid,
            AuthError::AccountNotFound,
            AuthError::AccountInactive,
        ] {
            assert_eq!(
                ApiError::from(err),
                ApiError::Unauthorized(CREDENTIALS_REJECTED.to_string())
            );
        }
        assert!(matches!(
            ApiError::from(AuthError::InsufficientPrivilege),
            ApiError::Forbidden(_)
        ));
    }

    #[test]
    fn test_unauthorized_carries_challenge_header() {
        let response = ApiError::Unauthorized(CREDENTIALS_REJECTED.to_string()).into_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Bearer"
        );
    }

    #[test]
    fn test_duplicate_slug_is_bad_request() {
        assert_eq!(
            ApiError::from(OfferingError::SlugAlreadyExists("wall-renovation".to_string())),
            ApiError::BadRequest("Service slug already exists: wall-renovation".to_string())
        );
    }
}
