//! Subscription use cases: follow and unfollow between users.

use std::sync::Arc;

use crate::domain::repositories::{SubscriptionRepository, UserRepository};
use crate::error::AppError;

/// Service for managing follow relationships.
pub struct SubscriptionService {
    subscriptions: Arc<dyn SubscriptionRepository>,
    users: Arc<dyn UserRepository>,
}

impl SubscriptionService {
    /// Creates a new subscription service.
    pub fn new(
        subscriptions: Arc<dyn SubscriptionRepository>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            subscriptions,
            users,
        }
    }

    /// Subscribes the caller to a publisher.
    ///
    /// There is no existence pre-check on the edge; two concurrent subscribes
    /// race on the unique pair constraint and the loser surfaces as an
    /// internal error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the publisher does not exist,
    /// [`AppError::SubscribeHimself`] on a self-subscribe, and
    /// [`AppError::Internal`] on database errors.
    pub async fn subscribe(&self, subscriber_id: i64, publisher_id: i64) -> Result<(), AppError> {
        let publisher = self
            .users
            .find_by_id(publisher_id)
            .await?
            .ok_or(AppError::NotFound)?;

        if publisher.id == subscriber_id {
            return Err(AppError::SubscribeHimself);
        }

        self.subscriptions
            .create(subscriber_id, publisher.id)
            .await?;

        tracing::info!(subscriber_id, publisher_id = publisher.id, "subscribed");

        Ok(())
    }

    /// Unsubscribes the caller from a publisher.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the publisher does not exist,
    /// [`AppError::NotSubscribed`] when there is no edge to remove, and
    /// [`AppError::Internal`] on database errors.
    pub async fn unsubscribe(&self, subscriber_id: i64, publisher_id: i64) -> Result<(), AppError> {
        let publisher = self
            .users
            .find_by_id(publisher_id)
            .await?
            .ok_or(AppError::NotFound)?;

        if !self
            .subscriptions
            .exists(subscriber_id, publisher.id)
            .await?
        {
            return Err(AppError::NotSubscribed);
        }

        self.subscriptions
            .delete(subscriber_id, publisher.id)
            .await?;

        tracing::info!(subscriber_id, publisher_id = publisher.id, "unsubscribed");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Subscription, User};
    use crate::domain::repositories::{MockSubscriptionRepository, MockUserRepository};
    use chrono::Utc;

    fn sample_user(id: i64) -> User {
        let now = Utc::now();
        User {
            id,
            name: "Bob".to_string(),
            email: format!("user{id}@example.com"),
            password_hash: "$argon2id$stub".to_string(),
            created_at: now,
            updated_at: now,
            subscriptions_count: 0,
            subscribers_count: 0,
        }
    }

    #[tokio::test]
    async fn test_subscribe_success() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_id()
            .times(1)
            .returning(|id| Ok(Some(sample_user(id))));

        let mut subscriptions = MockSubscriptionRepository::new();
        subscriptions
            .expect_create()
            .withf(|subscriber_id, publisher_id| *subscriber_id == 1 && *publisher_id == 2)
            .times(1)
            .returning(|subscriber_id, publisher_id| {
                Ok(Subscription {
                    subscriber_id,
                    publisher_id,
                })
            });

        SubscriptionService::new(Arc::new(subscriptions), Arc::new(users))
            .subscribe(1, 2)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_subscribe_to_missing_publisher_not_found() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_id().times(1).returning(|_| Ok(None));

        let result = SubscriptionService::new(
            Arc::new(MockSubscriptionRepository::new()),
            Arc::new(users),
        )
        .subscribe(1, 42)
        .await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound));
    }

    #[tokio::test]
    async fn test_subscribe_to_self_rejected() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_id()
            .times(1)
            .returning(|id| Ok(Some(sample_user(id))));

        let result = SubscriptionService::new(
            Arc::new(MockSubscriptionRepository::new()),
            Arc::new(users),
        )
        .subscribe(1, 1)
        .await;

        assert!(matches!(result.unwrap_err(), AppError::SubscribeHimself));
    }

    #[tokio::test]
    async fn test_unsubscribe_success() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_id()
            .times(1)
            .returning(|id| Ok(Some(sample_user(id))));

        let mut subscriptions = MockSubscriptionRepository::new();
        subscriptions
            .expect_exists()
            .times(1)
            .returning(|_, _| Ok(true));
        subscriptions
            .expect_delete()
            .withf(|subscriber_id, publisher_id| *subscriber_id == 1 && *publisher_id == 2)
            .times(1)
            .returning(|_, _| Ok(true));

        SubscriptionService::new(Arc::new(subscriptions), Arc::new(users))
            .unsubscribe(1, 2)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_unsubscribe_without_subscription_rejected() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_id()
            .times(1)
            .returning(|id| Ok(Some(sample_user(id))));

        let mut subscriptions = MockSubscriptionRepository::new();
        subscriptions
            .expect_exists()
            .times(1)
            .returning(|_, _| Ok(false));

        let result = SubscriptionService::new(Arc::new(subscriptions), Arc::new(users))
            .unsubscribe(1, 2)
            .await;

        assert!(matches!(result.unwrap_err(), AppError::NotSubscribed));
    }

    #[tokio::test]
    async fn test_unsubscribe_from_missing_publisher_not_found() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_id().times(1).returning(|_| Ok(None));

        let result = SubscriptionService::new(
            Arc::new(MockSubscriptionRepository::new()),
            Arc::new(users),
        )
        .unsubscribe(1, 42)
        .await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound));
    }
}
