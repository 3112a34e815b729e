use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Duration;
use serde::Deserialize;
use serde::Serialize;

use super::AccountData;
use super::ApiError;
use super::ApiSuccess;
use crate::account::errors::AccountError;
use crate::domain::account::models::EmailAddress;
use crate::inbound::http::router::AppState;

/// Login endpoint.
///
/// Any credential failure (malformed email, unknown email, wrong password)
/// collapses into the one `AUTH_INVALID` response. Distinct responses here
/// would let a caller probe which emails are registered.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    let email =
        EmailAddress::new(body.email).map_err(|_| ApiError::InvalidCredentials)?;

    let account = state
        .account_service
        .get_account_by_email(&email)
        .await
        .map_err(|e| match e {
            AccountError::NotFound(_) => {
                tracing::warn!(email = %email, "Login for unknown email");
                ApiError::InvalidCredentials
            }
            _ => ApiError::from(e),
        })?;

    let result = state
        .authenticator
        .authenticate(
            &body.password,
            &account.password_hash,
            &account.id.to_string(),
            Duration::hours(state.token_ttl_hours),
        )
        .map_err(|e| match e {
            auth::AuthenticationError::InvalidCredentials => {
                tracing::warn!(email = %email, "Login with wrong password");
                ApiError::InvalidCredentials
            }
            auth::AuthenticationError::Password(err) => {
                ApiError::Internal(format!("Password verification failed: {}", err))
            }
            auth::AuthenticationError::Token(err) => {
                ApiError::Internal(format!("Token issuance failed: {}", err))
            }
        })?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        LoginResponseData {
            token: result.access_token,
            account: (&account).into(),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub token: String,
    pub account: AccountData,
}
