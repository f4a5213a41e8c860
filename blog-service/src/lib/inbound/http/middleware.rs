use axum::extract::Request;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;

use crate::domain::user::models::EmailAddress;
use crate::inbound::http::router::AppState;

/// Extension type carrying the authenticated subject into handlers
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub email: EmailAddress,
}

/// Middleware that validates bearer tokens on protected routes.
///
/// Every rejection produces the same 401 body: whether the token was
/// missing, expired, tampered with, or signed with the wrong key is logged
/// server-side but never revealed to the caller.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_bearer_token(&req).ok_or_else(|| {
        tracing::warn!("Missing or malformed Authorization header");
        unauthorized()
    })?;

    let token_data = state.authenticator.verify_token(token).map_err(|e| {
        tracing::warn!("Token verification failed: {}", e);
        unauthorized()
    })?;

    // The subject is the stored identity's email; anything else in a
    // correctly signed token still gets the uniform rejection
    let email = EmailAddress::new(token_data.subject).map_err(|e| {
        tracing::warn!("Token subject is not a valid email: {}", e);
        unauthorized()
    })?;

    req.extensions_mut().insert(AuthenticatedUser { email });

    Ok(next.run(req).await)
}

/// The one unauthorized response every gate failure collapses into.
fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({
            "error": "Could not validate credentials"
        })),
    )
        .into_response()
}

fn extract_bearer_token(req: &Request) -> Option<&str> {
    let auth_header = req.headers().get(http::header::AUTHORIZATION)?;
    let auth_str = auth_header.to_str().ok()?;

    auth_str.strip_prefix("Bearer ")
}
