use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::AccountData;
use super::ApiError;
use super::ApiSuccess;
use crate::account::errors::AccountError;
use crate::inbound::http::middleware::AuthenticatedAccount;
use crate::inbound::http::router::AppState;

/// Authenticated probe endpoint.
///
/// Only reachable through the auth gate; the subject arrives via the
/// request extension the gate inserted.
pub async fn me(
    State(state): State<AppState>,
    Extension(authenticated): Extension<AuthenticatedAccount>,
) -> Result<ApiSuccess<AccountData>, ApiError> {
    let account = state
        .account_service
        .get_account(&authenticated.account_id)
        .await
        .map_err(|e| match e {
            // A valid token for a deleted account is still not authenticated.
            AccountError::NotFound(_) => {
                tracing::warn!(account_id = %authenticated.account_id, "Token subject no longer exists");
                ApiError::Unauthenticated
            }
            _ => ApiError::from(e),
        })?;

    Ok(ApiSuccess::new(StatusCode::OK, (&account).into()))
}
