//! Repository trait for subscription edges.

use crate::domain::entities::Subscription;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for follow relationships.
///
/// The `(subscriber, publisher)` pair is unique at the database level. There
/// is no pre-insert existence check; a concurrent duplicate insert fails on
/// the constraint instead.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgSubscriptionRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubscriptionRepository: Send + Sync {
    /// Inserts a follow edge and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors, including a
    /// duplicate pair insert.
    async fn create(
        &self,
        subscriber_id: i64,
        publisher_id: i64,
    ) -> Result<Subscription, AppError>;

    /// Removes a follow edge.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the edge existed and was removed
    /// - `Ok(false)` if there was no such edge
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, subscriber_id: i64, publisher_id: i64) -> Result<bool, AppError>;

    /// Returns true if the subscriber currently follows the publisher.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn exists(&self, subscriber_id: i64, publisher_id: i64) -> Result<bool, AppError>;
}
