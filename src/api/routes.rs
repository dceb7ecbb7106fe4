//! API route configuration.
//!
//! Routes come in three groups: the credential endpoints under `/auth`,
//! public profile and post reads, and everything else behind Bearer token
//! authentication via [`crate::api::middleware::auth`].

use crate::api::handlers::{
    create_post_handler, delete_post_handler, feed_handler, login_handler, logout_handler,
    profile_handler, show_user_handler, signup_handler, subscribe_handler, subscribers_handler,
    subscriptions_handler, unsubscribe_handler, update_user_handler, user_posts_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, patch, post},
};

/// Credential endpoints. Public, but rate limited harder than the rest.
///
/// # Endpoints
///
/// - `POST /auth/signup` - Register a new account
/// - `POST /auth/login`  - Exchange credentials for a Bearer token
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/signup", post(signup_handler))
        .route("/auth/login", post(login_handler))
}

/// Read-only routes reachable without a token.
///
/// # Endpoints
///
/// - `GET /users/{id}`               - A user's public profile
/// - `GET /users/{id}/subscriptions` - Users this user subscribes to
/// - `GET /users/{id}/subscribers`   - Users subscribed to this user
/// - `GET /posts/{id}`               - A user's posts, paginated (`{id}` is a user id)
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/users/{id}", get(show_user_handler))
        .route("/users/{id}/subscriptions", get(subscriptions_handler))
        .route("/users/{id}/subscribers", get(subscribers_handler))
        .route("/posts/{id}", get(user_posts_handler))
}

/// Routes protected by Bearer token authentication.
///
/// # Endpoints
///
/// - `GET    /auth/logout`            - Revoke the presented token
/// - `GET    /profile`                - The caller's own profile
/// - `PATCH  /users`                  - Update the caller's name/password
/// - `POST   /users/{id}/subscribe`   - Subscribe the caller to a user
/// - `DELETE /users/{id}/unsubscribe` - Drop the caller's subscription
/// - `GET    /posts/feed`             - The caller's feed, paginated
/// - `POST   /posts`                  - Publish a post
/// - `DELETE /posts/{id}`             - Delete the caller's post (`{id}` is a post id)
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/logout", get(logout_handler))
        .route("/profile", get(profile_handler))
        .route("/users", patch(update_user_handler))
        .route("/users/{id}/subscribe", post(subscribe_handler))
        .route("/users/{id}/unsubscribe", delete(unsubscribe_handler))
        .route("/posts/feed", get(feed_handler))
        .route("/posts/{id}", delete(delete_post_handler))
        .route("/posts", post(create_post_handler))
}
