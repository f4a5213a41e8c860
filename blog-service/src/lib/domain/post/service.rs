use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::post::models::CreatePostCommand;
use crate::domain::post::models::Post;
use crate::domain::post::models::PostId;
use crate::domain::post::models::UpdatePostCommand;
use crate::domain::user::models::UserId;
use crate::post::errors::PostError;
use crate::post::ports::PostRepository;
use crate::post::ports::PostServicePort;

/// Domain service implementation for post operations.
///
/// Concrete implementation of PostServicePort with dependency injection.
pub struct PostService<PR>
where
    PR: PostRepository,
{
    repository: Arc<PR>,
}

impl<PR> PostService<PR>
where
    PR: PostRepository,
{
    /// Create a new post service with an injected repository.
    pub fn new(repository: Arc<PR>) -> Self {
        Self { repository }
    }

    /// Fetch a post and check the requester owns it.
    async fn get_owned_post(&self, id: &PostId, requester: UserId) -> Result<Post, PostError> {
        let post = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(PostError::NotFound(id.to_string()))?;

        if post.author_id != requester {
            return Err(PostError::NotAuthor {
                post_id: id.to_string(),
                user_id: requester.to_string(),
            });
        }

        Ok(post)
    }
}

#[async_trait]
impl<PR> PostServicePort for PostService<PR>
where
    PR: PostRepository,
{
    async fn create_post(
        &self,
        command: CreatePostCommand,
        author_id: UserId,
    ) -> Result<Post, PostError> {
        let post = Post {
            id: PostId::new(),
            title: command.title,
            body: command.body,
            author_id,
            created_at: Utc::now(),
        };

        let created_post = self.repository.create(post).await?;

        tracing::info!(post_id = %created_post.id, author_id = %author_id, "Post created");

        Ok(created_post)
    }

    async fn get_post(&self, id: &PostId) -> Result<Post, PostError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(PostError::NotFound(id.to_string()))
    }

    async fn list_posts(&self) -> Result<Vec<Post>, PostError> {
        self.repository.list_all().await
    }

    async fn update_post(
        &self,
        id: &PostId,
        command: UpdatePostCommand,
        requester: UserId,
    ) -> Result<Post, PostError> {
        let mut post = self.get_owned_post(id, requester).await?;

        if let Some(new_title) = command.title {
            post.title = new_title;
        }

        if let Some(new_body) = command.body {
            post.body = new_body;
        }

        self.repository.update(post).await
    }

    async fn delete_post(&self, id: &PostId, requester: UserId) -> Result<(), PostError> {
        self.get_owned_post(id, requester).await?;

        self.repository.delete(id).await
    }
}
