//! PostgreSQL implementation of user repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewUser, User, UserPatch};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// Shared SELECT list: the user row plus its derived subscription counts.
const USER_SELECT: &str = r#"
    u.id,
    u.name,
    u.email,
    u.password_hash,
    u.created_at,
    u.updated_at,
    (SELECT COUNT(*) FROM user_subscriptions s WHERE s.subscriber_id = u.id) AS subscriptions_count,
    (SELECT COUNT(*) FROM user_subscriptions s WHERE s.publisher_id = u.id) AS subscribers_count
"#;

/// PostgreSQL repository for account storage.
///
/// Uses SQLx prepared statements for SQL injection protection. Subscription
/// counts are computed with correlated subqueries on every read.
pub struct PgUserRepository {
    pool: Arc<PgPool>,
}

impl PgUserRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_SELECT} FROM users u WHERE u.id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_SELECT} FROM users u WHERE u.email = $1"
        ))
        .bind(email)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(user)
    }

    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        // A fresh account has no subscription edges yet, so the counts are
        // constant zeros instead of subqueries.
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, password_hash)
            VALUES ($1, $2, $3)
            RETURNING
                id, name, email, password_hash, created_at, updated_at,
                0::bigint AS subscriptions_count,
                0::bigint AS subscribers_count
            "#,
        )
        .bind(new_user.name)
        .bind(new_user.email)
        .bind(new_user.password_hash)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(user)
    }

    async fn update(&self, id: i64, patch: UserPatch) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users u
            SET name = $2,
                password_hash = COALESCE($3, password_hash),
                updated_at = NOW()
            WHERE u.id = $1
            RETURNING
                u.id, u.name, u.email, u.password_hash, u.created_at, u.updated_at,
                (SELECT COUNT(*) FROM user_subscriptions s WHERE s.subscriber_id = u.id) AS subscriptions_count,
                (SELECT COUNT(*) FROM user_subscriptions s WHERE s.publisher_id = u.id) AS subscribers_count
            "#,
        )
        .bind(id)
        .bind(patch.name)
        .bind(patch.password_hash)
        .fetch_optional(self.pool.as_ref())
        .await?;

        user.ok_or(AppError::NotFound)
    }

    async fn list_subscriptions(&self, user_id: i64) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>(&format!(
            r#"
            SELECT {USER_SELECT}
            FROM users u
            INNER JOIN user_subscriptions su ON su.publisher_id = u.id
            WHERE su.subscriber_id = $1
            ORDER BY u.id
            "#
        ))
        .bind(user_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(users)
    }

    async fn list_subscribers(&self, user_id: i64) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>(&format!(
            r#"
            SELECT {USER_SELECT}
            FROM users u
            INNER JOIN user_subscriptions su ON su.subscriber_id = u.id
            WHERE su.publisher_id = $1
            ORDER BY u.id
            "#
        ))
        .bind(user_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(users)
    }
}
