use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;
use chrono::Utc;

use crate::domain::account::errors::AuthError;
use crate::domain::account::ports::AuthServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Resolve the bearer token into an account and store it in the request
/// extensions as `AuthenticatedAccount`.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let result = match bearer_token(&req) {
        Some(token) => state.auth_service.authenticate(token, Utc::now()).await,
        None => Err(AuthError::MissingCredentials),
    };

    let account = result.map_err(|e| {
        tracing::warn!(
            reason = ?e,
            method = %req.method(),
            uri = %req.uri(),
            "Request rejected by auth gate"
        );
        ApiError::from(e)
    })?;

    tracing::debug!(username = %account.account().username, "Request authenticated");
    req.extensions_mut().insert(account);

    Ok(next.run(req).await)
}

fn bearer_token(req: &Request) -> Option<&str> {
    let value = req.headers().get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();

    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}
