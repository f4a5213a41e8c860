use thiserror::Error;

/// Error for PostId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PostIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for PostTitle validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PostTitleError {
    #[error("Post title cannot be empty")]
    Empty,

    #[error("Post title too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Top-level error for all post-related operations
#[derive(Debug, Clone, Error)]
pub enum PostError {
    // Value object validation errors (automatically converted via #[from])
    #[error("Invalid post ID: {0}")]
    InvalidPostId(#[from] PostIdError),

    #[error("Invalid post title: {0}")]
    InvalidTitle(#[from] PostTitleError),

    // Domain-level errors
    #[error("Post not found: {0}")]
    NotFound(String),

    #[error("User {user_id} is not the author of post {post_id}")]
    NotAuthor { post_id: String, user_id: String },

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for PostError {
    fn from(err: anyhow::Error) -> Self {
        PostError::Unknown(err.to_string())
    }
}
