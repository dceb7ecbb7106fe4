//! Repository trait for posts.

use crate::domain::entities::{NewPost, Post};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for post storage and listing.
///
/// Listings are ordered newest-first; paging is expressed as `limit`/`offset`
/// computed by the service layer.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgPostRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Finds a post by its database ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, AppError>;

    /// Lists one user's posts, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_by_user(
        &self,
        user_id: i64,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Post>, AppError>;

    /// Lists the feed for a user: their own posts plus posts of every
    /// publisher they are subscribed to, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_feed(
        &self,
        user_id: i64,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Post>, AppError>;

    /// Creates a post and returns the stored row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, post: NewPost) -> Result<Post, AppError>;

    /// Deletes a post by ID.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if a row was removed
    /// - `Ok(false)` if no such post existed
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
