use axum::extract::State;
use axum::http::StatusCode;

use super::create_post::PostResponseData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::post::ports::PostServicePort;
use crate::inbound::http::router::AppState;

pub async fn list_posts(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<PostResponseData>>, ApiError> {
    state
        .post_service
        .list_posts()
        .await
        .map_err(ApiError::from)
        .map(|posts| {
            let data = posts.iter().map(PostResponseData::from).collect();
            ApiSuccess::new(StatusCode::OK, data)
        })
}
