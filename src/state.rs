//! Shared application state injected into handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::application::services::{AuthService, PostService, SubscriptionService, UserService};

/// Cloned into every handler; services are shared behind [`Arc`].
///
/// The pool is kept alongside the services for the health check, which
/// talks to the database directly instead of going through a repository.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<PgPool>,
    pub auth_service: Arc<AuthService>,
    pub user_service: Arc<UserService>,
    pub post_service: Arc<PostService>,
    pub subscription_service: Arc<SubscriptionService>,
}
