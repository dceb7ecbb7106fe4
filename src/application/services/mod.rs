//! Business logic services for the application layer.

pub mod auth_service;
pub mod post_service;
pub mod subscription_service;
pub mod user_service;

pub use auth_service::{AuthService, AuthenticatedUser, IssuedToken};
pub use post_service::{POSTS_PER_PAGE, PostService};
pub use subscription_service::SubscriptionService;
pub use user_service::UserService;
