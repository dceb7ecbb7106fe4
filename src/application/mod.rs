//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! validation, and business rules. Services consume repository traits and provide
//! a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::user_service::UserService`] - Signup, profiles and subscription listings
//! - [`services::post_service::PostService`] - Post authoring, pages and the feed
//! - [`services::subscription_service::SubscriptionService`] - Follow and unfollow
//! - [`services::auth_service::AuthService`] - Bearer token issue and validation

pub mod services;
