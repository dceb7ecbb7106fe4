//! Repository trait definitions for the domain layer.
//!
//! This module defines the repository interfaces (traits) that abstract data access
//! operations following the Repository pattern. These traits are implemented by
//! concrete repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`UserRepository`] - Account storage and subscription listings
//! - [`PostRepository`] - Post storage, per-user pages and the feed
//! - [`SubscriptionRepository`] - Follow edges between users
//! - [`TokenRepository`] - Bearer access token authentication

pub mod post_repository;
pub mod subscription_repository;
pub mod token_repository;
pub mod user_repository;

pub use post_repository::PostRepository;
pub use subscription_repository::SubscriptionRepository;
pub use token_repository::{AccessToken, TokenRepository};
pub use user_repository::UserRepository;

#[cfg(test)]
pub use post_repository::MockPostRepository;
#[cfg(test)]
pub use subscription_repository::MockSubscriptionRepository;
#[cfg(test)]
pub use token_repository::MockTokenRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
