use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::post::models::Post;
use crate::domain::post::models::PostId;
use crate::domain::post::models::PostTitle;
use crate::domain::post::ports::PostRepository;
use crate::domain::user::models::UserId;
use crate::post::errors::PostError;

pub struct PostgresPostRepository {
    pool: PgPool,
}

impl PostgresPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Raw posts row; validated into the domain entity on the way out.
#[derive(sqlx::FromRow)]
struct PostRow {
    id: Uuid,
    title: String,
    body: String,
    author_id: Uuid,
    created_at: DateTime<Utc>,
}

impl PostRow {
    fn try_into_post(self) -> Result<Post, PostError> {
        Ok(Post {
            id: PostId(self.id),
            title: PostTitle::new(self.title)?,
            body: self.body,
            author_id: UserId(self.author_id),
            created_at: self.created_at,
        })
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn create(&self, post: Post) -> Result<Post, PostError> {
        sqlx::query(
            r#"
            INSERT INTO posts (id, title, body, author_id, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(post.id.0)
        .bind(post.title.as_str())
        .bind(&post.body)
        .bind(post.author_id.0)
        .bind(post.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        Ok(post)
    }

    async fn find_by_id(&self, id: &PostId) -> Result<Option<Post>, PostError> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT id, title, body, author_id, created_at
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        row.map(PostRow::try_into_post).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Post>, PostError> {
        let rows = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT id, title, body, author_id, created_at
            FROM posts
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(PostRow::try_into_post).collect()
    }

    async fn update(&self, post: Post) -> Result<Post, PostError> {
        let result = sqlx::query(
            r#"
            UPDATE posts
            SET title = $2, body = $3
            WHERE id = $1
            "#,
        )
        .bind(post.id.0)
        .bind(post.title.as_str())
        .bind(&post.body)
        .execute(&self.pool)
        .await
        .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(PostError::NotFound(post.id.to_string()));
        }

        Ok(post)
    }

    async fn delete(&self, id: &PostId) -> Result<(), PostError> {
        let result = sqlx::query(
            r#"
            DELETE FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(PostError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
