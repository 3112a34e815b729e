use auth::PasswordPolicy;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

use super::AccountData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::account::models::DisplayName;
use crate::domain::account::models::EmailAddress;
use crate::domain::account::models::SignupCommand;
use crate::inbound::http::router::AppState;

pub async fn signup(
    State(state): State<AppState>,
    Json(body): Json<SignupRequest>,
) -> Result<ApiSuccess<AccountData>, ApiError> {
    state
        .account_service
        .signup(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref account| ApiSuccess::new(StatusCode::CREATED, account.into()))
}

/// HTTP request body for signup (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SignupRequest {
    email: String,
    password: String,
    display_name: String,
}

/// Everything wrong with a signup request, keyed by field.
///
/// Validation checks every field before failing so the client gets the full
/// picture in one round trip instead of fixing one field per attempt.
#[derive(Debug, Clone, Error)]
#[error("Signup validation failed")]
struct ParseSignupRequestError {
    fields: serde_json::Map<String, serde_json::Value>,
}

impl SignupRequest {
    fn try_into_command(self) -> Result<SignupCommand, ParseSignupRequestError> {
        let mut fields = serde_json::Map::new();

        let email = EmailAddress::new(self.email);
        if let Err(e) = &email {
            fields.insert("email".to_string(), json!(e.to_string()));
        }

        let display_name = DisplayName::new(self.display_name);
        if let Err(e) = &display_name {
            fields.insert("display_name".to_string(), json!(e.to_string()));
        }

        if let Err(violations) = PasswordPolicy::default().validate(&self.password) {
            fields.insert(
                "password".to_string(),
                json!(violations
                    .reasons
                    .iter()
                    .map(|r| r.code())
                    .collect::<Vec<_>>()),
            );
        }

        match (email, display_name) {
            (Ok(email), Ok(display_name)) if fields.is_empty() => {
                Ok(SignupCommand::new(email, self.password, display_name))
            }
            _ => Err(ParseSignupRequestError { fields }),
        }
    }
}

impl From<ParseSignupRequestError> for ApiError {
    fn from(err: ParseSignupRequestError) -> Self {
        ApiError::InvalidInput {
            message: err.to_string(),
            details: Some(serde_json::Value::Object(err.fields)),
        }
    }
}
