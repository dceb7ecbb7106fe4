//! Repository trait for user accounts.

use crate::domain::entities::{NewUser, User, UserPatch};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for account storage.
///
/// Every returned [`User`] carries its derived `subscriptions_count` and
/// `subscribers_count`, so callers never need a second round trip for them.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUserRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Finds a user by their database ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;

    /// Finds a user by their unique email.
    ///
    /// Used by login and by signup's uniqueness check.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// Creates a new account and returns the stored row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors, including a lost
    /// race on the email unique constraint.
    async fn create(&self, user: NewUser) -> Result<User, AppError>;

    /// Applies a profile patch and returns the updated row.
    ///
    /// Bumps `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, patch: UserPatch) -> Result<User, AppError>;

    /// Lists the publishers the given user is subscribed to.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_subscriptions(&self, user_id: i64) -> Result<Vec<User>, AppError>;

    /// Lists the subscribers following the given user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_subscribers(&self, user_id: i64) -> Result<Vec<User>, AppError>;
}
