use async_trait::async_trait;

use crate::domain::post::models::CreatePostCommand;
use crate::domain::post::models::Post;
use crate::domain::post::models::PostId;
use crate::domain::post::models::UpdatePostCommand;
use crate::domain::user::models::UserId;
use crate::post::errors::PostError;

/// Port for post domain service operations.
#[async_trait]
pub trait PostServicePort: Send + Sync + 'static {
    /// Create a new post owned by `author_id`.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create_post(
        &self,
        command: CreatePostCommand,
        author_id: UserId,
    ) -> Result<Post, PostError>;

    /// Retrieve post by unique identifier.
    ///
    /// # Errors
    /// * `NotFound` - Post does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_post(&self, id: &PostId) -> Result<Post, PostError>;

    /// Retrieve all posts, newest first.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_posts(&self) -> Result<Vec<Post>, PostError>;

    /// Update an existing post with optional fields.
    ///
    /// Only the post's author may update it.
    ///
    /// # Errors
    /// * `NotFound` - Post does not exist
    /// * `NotAuthor` - Requester does not own the post
    /// * `DatabaseError` - Database operation failed
    async fn update_post(
        &self,
        id: &PostId,
        command: UpdatePostCommand,
        requester: UserId,
    ) -> Result<Post, PostError>;

    /// Delete an existing post.
    ///
    /// Only the post's author may delete it.
    ///
    /// # Errors
    /// * `NotFound` - Post does not exist
    /// * `NotAuthor` - Requester does not own the post
    /// * `DatabaseError` - Database operation failed
    async fn delete_post(&self, id: &PostId, requester: UserId) -> Result<(), PostError>;
}

/// Persistence operations for the post aggregate.
#[async_trait]
pub trait PostRepository: Send + Sync + 'static {
    /// Persist new post to storage.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, post: Post) -> Result<Post, PostError>;

    /// Retrieve post by identifier.
    ///
    /// # Returns
    /// Optional post entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: &PostId) -> Result<Option<Post>, PostError>;

    /// Retrieve all posts ordered by creation time, newest first.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_all(&self) -> Result<Vec<Post>, PostError>;

    /// Update existing post in storage.
    ///
    /// # Errors
    /// * `NotFound` - Post does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, post: Post) -> Result<Post, PostError>;

    /// Remove post from storage.
    ///
    /// # Errors
    /// * `NotFound` - Post does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: &PostId) -> Result<(), PostError>;
}
