use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;
use serde_json::json;

use crate::account::errors::AccountError;
use crate::account::models::Account;

pub mod login;
pub mod me;
pub mod signup;

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

/// Wire-visible error taxonomy.
///
/// Every failure that reaches a client is exactly one of these kinds,
/// serialized as `{code, message, details?}` with its mapped status. Raw
/// causes stay server-side: `Internal` carries its detail for logging only
/// and serializes a generic message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InvalidInput {
        message: String,
        details: Option<serde_json::Value>,
    },
    InvalidCredentials,
    DuplicateIdentity,
    Unauthenticated,
    Internal(String),
}

impl ApiError {
    /// Stable wire code for this kind.
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::InvalidInput { .. } => "VALIDATION_ERROR",
            ApiError::InvalidCredentials => "AUTH_INVALID",
            ApiError::DuplicateIdentity => "DB_DUPLICATE",
            ApiError::Unauthenticated => "AUTH_REQUIRED",
            ApiError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ApiError::DuplicateIdentity => StatusCode::CONFLICT,
            ApiError::Unauthenticated => StatusCode::UNAUTHORIZED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        Self::Internal(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.code();
        let status = self.status();

        let (message, details) = match self {
            ApiError::InvalidInput { message, details } => (message, details),
            ApiError::InvalidCredentials => ("Invalid credentials".to_string(), None),
            ApiError::DuplicateIdentity => ("Email already registered".to_string(), None),
            ApiError::Unauthenticated => ("Authentication required".to_string(), None),
            ApiError::Internal(cause) => {
                // The cause is logged here and never serialized to the client.
                tracing::error!(error = %cause, "Internal error");
                ("Internal server error".to_string(), None)
            }
        };

        (
            status,
            Json(ApiErrorBody {
                code,
                message,
                details,
            }),
        )
            .into_response()
    }
}

impl From<AccountError> for ApiError {
    fn from(err: AccountError) -> Self {
        match err {
            AccountError::WeakPassword(violations) => ApiError::InvalidInput {
                message: "Password does not meet policy".to_string(),
                details: Some(json!({
                    "password": violations
                        .reasons
                        .iter()
                        .map(|r| r.code())
                        .collect::<Vec<_>>()
                })),
            },
            AccountError::InvalidEmail(e) => ApiError::InvalidInput {
                message: e.to_string(),
                details: Some(json!({ "field": "email" })),
            },
            AccountError::InvalidDisplayName(e) => ApiError::InvalidInput {
                message: e.to_string(),
                details: Some(json!({ "field": "display_name" })),
            },
            AccountError::InvalidAccountId(e) => ApiError::InvalidInput {
                message: e.to_string(),
                details: None,
            },
            AccountError::EmailAlreadyExists(_) => ApiError::DuplicateIdentity,
            AccountError::InvalidCredentials => ApiError::InvalidCredentials,
            AccountError::NotFound(_)
            | AccountError::Password(_)
            | AccountError::DatabaseError(_) => ApiError::Internal(err.to_string()),
        }
    }
}

/// Wire representation of an account: the created record minus the secret.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountData {
    pub id: String,
    pub email: String,
    pub display_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Account> for AccountData {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id.to_string(),
            email: account.email.as_str().to_string(),
            display_name: account.display_name.as_str().to_string(),
            created_at: account.created_at,
            updated_at: account.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorBody {
    pub code: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}
