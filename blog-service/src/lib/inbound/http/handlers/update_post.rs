use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::create_post::PostResponseData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::post::models::PostId;
use crate::domain::post::models::PostTitle;
use crate::domain::post::models::UpdatePostCommand;
use crate::domain::post::ports::PostServicePort;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::post::errors::PostError;

/// HTTP request body for updating a post (raw JSON)
#[derive(Debug, Deserialize)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub body: Option<String>,
}

impl UpdatePostRequest {
    fn try_into_command(self) -> Result<UpdatePostCommand, PostError> {
        let title = self.title.map(PostTitle::new).transpose()?;

        Ok(UpdatePostCommand {
            title,
            body: self.body,
        })
    }
}

pub async fn update_post(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path(post_id): Path<String>,
    Json(req): Json<UpdatePostRequest>,
) -> Result<ApiSuccess<PostResponseData>, ApiError> {
    let post_id = PostId::from_string(&post_id).map_err(PostError::from)?;
    let command = req.try_into_command()?;

    let requester = state
        .user_service
        .get_user_by_email(&auth_user.email)
        .await
        .map_err(ApiError::from)?;

    state
        .post_service
        .update_post(&post_id, command, requester.id)
        .await
        .map_err(ApiError::from)
        .map(|ref post| ApiSuccess::new(StatusCode::OK, post.into()))
}
