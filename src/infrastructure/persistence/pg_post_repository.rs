//! PostgreSQL implementation of post repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewPost, Post};
use crate::domain::repositories::PostRepository;
use crate::error::AppError;

/// PostgreSQL repository for post storage and listing.
///
/// Listings order by `created_at DESC` with `id DESC` as a tie-breaker so
/// posts created within the same timestamp keep a stable order.
pub struct PgPostRepository {
    pool: Arc<PgPool>,
}

impl PgPostRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, AppError> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, text, user_id, created_at, updated_at
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(post)
    }

    async fn list_by_user(
        &self,
        user_id: i64,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Post>, AppError> {
        let posts = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, text, user_id, created_at, updated_at
            FROM posts
            WHERE user_id = $1
            ORDER BY created_at DESC, id DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(posts)
    }

    async fn list_feed(
        &self,
        user_id: i64,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Post>, AppError> {
        let posts = sqlx::query_as::<_, Post>(
            r#"
            SELECT p.id, p.text, p.user_id, p.created_at, p.updated_at
            FROM posts p
            WHERE p.user_id = $1
               OR p.user_id IN (
                    SELECT s.publisher_id
                    FROM user_subscriptions s
                    WHERE s.subscriber_id = $1
               )
            ORDER BY p.created_at DESC, p.id DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(posts)
    }

    async fn create(&self, new_post: NewPost) -> Result<Post, AppError> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            INSERT INTO posts (text, user_id)
            VALUES ($1, $2)
            RETURNING id, text, user_id, created_at, updated_at
            "#,
        )
        .bind(new_post.text)
        .bind(new_post.user_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(post)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
