use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::post::models::CreatePostCommand;
use crate::domain::post::models::Post;
use crate::domain::post::models::PostTitle;
use crate::domain::post::ports::PostServicePort;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_post(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Json(body): Json<CreatePostRequest>,
) -> Result<ApiSuccess<PostResponseData>, ApiError> {
    let title =
        PostTitle::new(body.title).map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

    let command = CreatePostCommand {
        title,
        body: body.body,
    };

    // The token carries the author's email; the stored identity supplies the id
    let author = state
        .user_service
        .get_user_by_email(&auth_user.email)
        .await
        .map_err(ApiError::from)?;

    state
        .post_service
        .create_post(command, author.id)
        .await
        .map_err(ApiError::from)
        .map(|ref post| ApiSuccess::new(StatusCode::CREATED, post.into()))
}

/// HTTP request body for creating a post (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatePostRequest {
    title: String,
    body: String,
}

/// Response body shared by the post handlers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostResponseData {
    pub id: String,
    pub title: String,
    pub body: String,
    pub author_id: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Post> for PostResponseData {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id.to_string(),
            title: post.title.as_str().to_string(),
            body: post.body.clone(),
            author_id: post.author_id.to_string(),
            created_at: post.created_at,
        }
    }
}
