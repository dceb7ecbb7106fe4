//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx prepared
//! statements, decoded through `FromRow` entities.
//!
//! # Repositories
//!
//! - [`PgUserRepository`] - Account storage and subscription listings
//! - [`PgPostRepository`] - Post storage, per-user pages and the feed
//! - [`PgSubscriptionRepository`] - Follow edges between users
//! - [`PgTokenRepository`] - Access token storage and validation

pub mod pg_post_repository;
pub mod pg_subscription_repository;
pub mod pg_token_repository;
pub mod pg_user_repository;

pub use pg_post_repository::PgPostRepository;
pub use pg_subscription_repository::PgSubscriptionRepository;
pub use pg_token_repository::PgTokenRepository;
pub use pg_user_repository::PgUserRepository;
