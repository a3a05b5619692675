use auth::AccessToken;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Form;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::account::models::AuthenticatedAccount;
use crate::domain::account::ports::AuthServicePort;
use crate::inbound::http::router::AppState;

/// OAuth2 password-flow form body.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginForm {
    username: String,
    password: String,
}

pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<ApiSuccess<TokenResponseData>, ApiError> {
    state
        .auth_service
        .login(&form.username, &form.password, Utc::now())
        .await
        .map_err(ApiError::from)
        .map(|ref token| ApiSuccess::new(StatusCode::OK, token.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenResponseData {
    pub access_token: String,
    pub token_type: String,
}

impl From<&AccessToken> for TokenResponseData {
    fn from(token: &AccessToken) -> Self {
        Self {
            access_token: token.access_token.clone(),
            token_type: AccessToken::TOKEN_TYPE.to_string(),
        }
    }
}

pub async fn me(
    Extension(account): Extension<AuthenticatedAccount>,
) -> Result<ApiSuccess<AccountResponseData>, ApiError> {
    Ok(ApiSuccess::new(StatusCode::OK, (&account).into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountResponseData {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub is_active: bool,
    pub is_superuser: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&AuthenticatedAccount> for AccountResponseData {
    fn from(authenticated: &AuthenticatedAccount) -> Self {
        let account = authenticated.account();
        Self {
            id: account.id.0,
            username: account.username.as_str().to_string(),
            email: account.email.as_str().to_string(),
            is_active: account.is_active,
            is_superuser: account.is_superuser,
            created_at: account.created_at,
        }
    }
}
