//! PostgreSQL implementation of subscription repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::Subscription;
use crate::domain::repositories::SubscriptionRepository;
use crate::error::AppError;

/// PostgreSQL repository for follow edges.
///
/// The `(subscriber_id, publisher_id)` primary key guards against
/// duplicate inserts from concurrent subscribe calls.
pub struct PgSubscriptionRepository {
    pool: Arc<PgPool>,
}

impl PgSubscriptionRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubscriptionRepository for PgSubscriptionRepository {
    async fn create(
        &self,
        subscriber_id: i64,
        publisher_id: i64,
    ) -> Result<Subscription, AppError> {
        let edge = sqlx::query_as::<_, Subscription>(
            r#"
            INSERT INTO user_subscriptions (subscriber_id, publisher_id)
            VALUES ($1, $2)
            RETURNING subscriber_id, publisher_id
            "#,
        )
        .bind(subscriber_id)
        .bind(publisher_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(edge)
    }

    async fn delete(&self, subscriber_id: i64, publisher_id: i64) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            DELETE FROM user_subscriptions
            WHERE subscriber_id = $1 AND publisher_id = $2
            "#,
        )
        .bind(subscriber_id)
        .bind(publisher_id)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn exists(&self, subscriber_id: i64, publisher_id: i64) -> Result<bool, AppError> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM user_subscriptions
            WHERE subscriber_id = $1 AND publisher_id = $2
            "#,
        )
        .bind(subscriber_id)
        .bind(publisher_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(count > 0)
    }
}
