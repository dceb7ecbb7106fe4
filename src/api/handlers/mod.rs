//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod auth;
pub mod health;
pub mod posts;
pub mod subscriptions;
pub mod users;

pub use auth::{login_handler, logout_handler, signup_handler};
pub use health::health_handler;
pub use posts::{create_post_handler, delete_post_handler, feed_handler, user_posts_handler};
pub use subscriptions::{subscribe_handler, unsubscribe_handler};
pub use users::{
    profile_handler, show_user_handler, subscribers_handler, subscriptions_handler,
    update_user_handler,
};
