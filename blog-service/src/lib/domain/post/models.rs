use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::post::errors::PostIdError;
use crate::domain::post::errors::PostTitleError;
use crate::domain::user::models::UserId;

/// Blog post aggregate entity.
#[derive(Debug, Clone)]
pub struct Post {
    pub id: PostId,
    pub title: PostTitle,
    pub body: String,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
}

/// Post unique identifier value object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PostId(pub Uuid);

impl PostId {
    /// Generate a new random post ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a post ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, PostIdError> {
        Uuid::parse_str(s)
            .map(PostId)
            .map_err(|e| PostIdError::InvalidFormat(e.to_string()))
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Post title value object with validation.
///
/// Ensures the title is non-empty and within the 200 character limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostTitle(String);

impl PostTitle {
    const MAX_LENGTH: usize = 200;

    /// Create a new validated post title.
    ///
    /// # Errors
    /// * `Empty` - Title is empty string
    /// * `TooLong` - Title exceeds 200 characters
    pub fn new(title: String) -> Result<Self, PostTitleError> {
        let length = title.len();
        if length == 0 {
            Err(PostTitleError::Empty)
        } else if length > Self::MAX_LENGTH {
            Err(PostTitleError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(title))
        }
    }

    /// Get title as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to create a new post with domain types
#[derive(Debug)]
pub struct CreatePostCommand {
    pub title: PostTitle,
    pub body: String,
}

/// Command to update an existing post with optional validated fields.
///
/// Only provided fields are updated.
#[derive(Debug)]
pub struct UpdatePostCommand {
    pub title: Option<PostTitle>,
    pub body: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_title_valid() {
        let title = PostTitle::new("A day in the life".to_string()).unwrap();
        assert_eq!(title.as_str(), "A day in the life");
    }

    #[test]
    fn test_post_title_empty() {
        assert!(matches!(
            PostTitle::new(String::new()),
            Err(PostTitleError::Empty)
        ));
    }

    #[test]
    fn test_post_title_too_long() {
        let result = PostTitle::new("x".repeat(201));
        assert!(matches!(result, Err(PostTitleError::TooLong { .. })));
    }
}
