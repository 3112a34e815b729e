use axum::extract::Request;
use axum::extract::State;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use super::handlers::ApiError;
use crate::domain::account::models::AccountId;
use crate::inbound::http::router::AppState;

/// Extension type carrying the validated subject for downstream handlers
#[derive(Debug, Clone)]
pub struct AuthenticatedAccount {
    pub account_id: AccountId,
}

/// Request-scoped authentication gate.
///
/// Canonical token transport is the `Authorization: Bearer <token>` header;
/// cookies are not consulted. Every failure mode (missing token, malformed
/// header, bad signature, foreign algorithm, expiry) produces the same
/// `AUTH_REQUIRED` response so the wire leaks nothing about which check
/// failed; the cause is logged server-side. Rejection is terminal: the
/// response is written immediately and no downstream stage runs.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_bearer_token(&req)?;

    let claims = state.authenticator.validate_token(token).map_err(|e| {
        tracing::warn!(error = %e, "Token validation failed");
        ApiError::Unauthenticated.into_response()
    })?;

    let account_id = AccountId::from_string(&claims.sub).map_err(|e| {
        tracing::warn!(error = %e, "Token subject is not a valid account id");
        ApiError::Unauthenticated.into_response()
    })?;

    req.extensions_mut().insert(AuthenticatedAccount { account_id });

    Ok(next.run(req).await)
}

fn extract_bearer_token(req: &Request) -> Result<&str, Response> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            ApiError::Unauthenticated.into_response()
        })?;

    let auth_str = auth_header.to_str().map_err(|_| {
        tracing::warn!("Authorization header is not valid UTF-8");
        ApiError::Unauthenticated.into_response()
    })?;

    let token = auth_str.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("Authorization header is not a Bearer token");
        ApiError::Unauthenticated.into_response()
    })?;

    Ok(token)
}
