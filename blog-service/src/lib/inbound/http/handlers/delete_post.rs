use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::post::models::PostId;
use crate::domain::post::ports::PostServicePort;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::post::errors::PostError;

pub async fn delete_post(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path(post_id): Path<String>,
) -> Result<ApiSuccess<()>, ApiError> {
    let post_id = PostId::from_string(&post_id).map_err(PostError::from)?;

    let requester = state
        .user_service
        .get_user_by_email(&auth_user.email)
        .await
        .map_err(ApiError::from)?;

    state
        .post_service
        .delete_post(&post_id, requester.id)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::NO_CONTENT, ()))
}
