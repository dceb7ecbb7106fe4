//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /health`       - Health check: database connectivity (public)
//! - `/api/auth/*`       - Signup and login (public, strict rate limit)
//! - `/api/users/{id}*`, `GET /api/posts/{userId}` - Profile and post reads (public)
//! - `/api/*`            - The rest of the REST API (Bearer token required)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket (configurable for proxy deployments)
//! - **Authentication** - Bearer token on account, write and feed routes
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{auth, rate_limit, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `behind_proxy` - when `true`, rate limiting reads client IP from
///   `X-Forwarded-For` / `X-Real-IP` headers instead of the peer socket address;
///   enable only when the service runs behind a trusted reverse proxy
pub fn app_router(state: AppState, behind_proxy: bool) -> NormalizePath<Router> {
    let auth_api = api::routes::auth_routes();
    let auth_api = if behind_proxy {
        auth_api.layer(rate_limit::proxy_secure_layer())
    } else {
        auth_api.layer(rate_limit::secure_layer())
    };

    let public = api::routes::public_routes();
    let public = if behind_proxy {
        public.layer(rate_limit::proxy_layer())
    } else {
        public.layer(rate_limit::layer())
    };

    let protected = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
    let protected = if behind_proxy {
        protected.layer(rate_limit::proxy_layer())
    } else {
        protected.layer(rate_limit::layer())
    };

    let router = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", auth_api.merge(public).merge(protected))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
