use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::create_post::PostResponseData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::post::models::PostId;
use crate::domain::post::ports::PostServicePort;
use crate::inbound::http::router::AppState;

pub async fn get_post(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
) -> Result<ApiSuccess<PostResponseData>, ApiError> {
    let post_id = PostId::from_string(&post_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .post_service
        .get_post(&post_id)
        .await
        .map_err(ApiError::from)
        .map(|ref post| ApiSuccess::new(StatusCode::OK, post.into()))
}
