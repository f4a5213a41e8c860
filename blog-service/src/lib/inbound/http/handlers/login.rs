use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

/// Exchange credentials for a bearer token.
///
/// An unknown email and a wrong password both answer 401 with the same
/// message, so callers cannot probe which addresses are registered.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequestBody>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    let email = EmailAddress::new(body.email)
        .map_err(|_| ApiError::Unauthorized("Invalid credentials".to_string()))?;

    let user = state
        .user_service
        .get_user_by_email(&email)
        .await
        .map_err(|e| match e {
            UserError::NotFoundByEmail(_) => {
                ApiError::Unauthorized("Invalid credentials".to_string())
            }
            _ => ApiError::from(e),
        })?;

    let result = state
        .authenticator
        .login(&body.password, &user.password_hash, user.email.as_str())
        .map_err(|e| match e {
            auth::AuthenticationError::InvalidCredentials => {
                ApiError::Unauthorized("Invalid credentials".to_string())
            }
            auth::AuthenticationError::Password(err) => {
                ApiError::InternalServerError(format!("Password verification failed: {}", err))
            }
            auth::AuthenticationError::Token(err) => {
                ApiError::InternalServerError(format!("Token issuance failed: {}", err))
            }
        })?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        LoginResponseData {
            access_token: result.access_token,
            token_type: "bearer",
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub access_token: String,
    pub token_type: &'static str,
}
