//! Post use cases: authoring, deletion, per-user pages and the feed.

use std::sync::Arc;
use validator::Validate;

use crate::api::dto::create_post::CreatePostRequest;
use crate::domain::entities::{NewPost, Post};
use crate::domain::repositories::{PostRepository, UserRepository};
use crate::error::AppError;

/// Fixed page size for every post listing.
pub const POSTS_PER_PAGE: i64 = 10;

/// Service for writing and listing posts.
pub struct PostService {
    posts: Arc<dyn PostRepository>,
    users: Arc<dyn UserRepository>,
}

impl PostService {
    /// Creates a new post service.
    pub fn new(posts: Arc<dyn PostRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { posts, users }
    }

    /// Lists one page of a user's posts, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    pub async fn list_for_user(&self, user_id: i64, page: u32) -> Result<Vec<Post>, AppError> {
        if self.users.find_by_id(user_id).await?.is_none() {
            return Err(AppError::NotFound);
        }

        self.posts
            .list_by_user(user_id, POSTS_PER_PAGE, offset_for(page))
            .await
    }

    /// Lists one page of the caller's feed: own posts plus posts from every
    /// subscribed publisher, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn feed(&self, user_id: i64, page: u32) -> Result<Vec<Post>, AppError> {
        self.posts
            .list_feed(user_id, POSTS_PER_PAGE, offset_for(page))
            .await
    }

    /// Creates a post owned by the caller.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the owning account vanished,
    /// [`AppError::Validation`] on rule violations, and
    /// [`AppError::Internal`] on database errors.
    pub async fn create(&self, user_id: i64, payload: CreatePostRequest) -> Result<Post, AppError> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(AppError::NotFound)?;

        payload.validate()?;

        let post = self
            .posts
            .create(NewPost {
                text: payload.text.unwrap_or_default(),
                user_id: user.id,
            })
            .await?;

        tracing::info!(post_id = post.id, user_id = user.id, "created post");

        Ok(post)
    }

    /// Deletes a post after an ownership check.
    ///
    /// An existing post owned by someone else is a permission failure, never
    /// a missing resource.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the post does not exist,
    /// [`AppError::AccessDenied`] if the caller does not own it, and
    /// [`AppError::Internal`] on database errors.
    pub async fn delete(&self, user_id: i64, post_id: i64) -> Result<(), AppError> {
        let post = self
            .posts
            .find_by_id(post_id)
            .await?
            .ok_or(AppError::NotFound)?;

        if !post.is_owned_by(user_id) {
            return Err(AppError::AccessDenied);
        }

        self.posts.delete(post.id).await?;

        tracing::info!(post_id = post.id, user_id, "deleted post");

        Ok(())
    }
}

/// Translates a 1-based page number into a row offset. Page values below 1
/// clamp to the first page.
fn offset_for(page: u32) -> i64 {
    (i64::from(page.max(1)) - 1) * POSTS_PER_PAGE
}
