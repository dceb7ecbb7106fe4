//! Bearer token authentication middleware.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;

use crate::{error::AppError, state::AppState};

/// Authenticates requests using Bearer tokens from Authorization header.
///
/// # Header Format
///
/// ```text
/// Authorization: Bearer <token>
/// ```
///
/// # Authentication Flow
///
/// 1. Extract token from `Authorization` header
/// 2. Validate token hash against database
/// 3. Check if token is revoked or expired
/// 4. Attach the authenticated user to request extensions
/// 5. Continue to next middleware/handler
///
/// # Errors
///
/// Returns `403 Forbidden` ("Access denied") if:
/// - Authorization header is missing
/// - Token format is invalid
/// - Token is not found, revoked or expired
///
/// The logout route is the exception: a dead token there yields
/// `401 Unauthorized` ("Failed to logout"), so clients can tell a
/// no-op logout apart from a blocked API call.
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, routing::get, middleware};
/// use crate::api::middleware::auth;
///
/// let protected = Router::new()
///     .route("/api/profile", get(profile_handler))
///     .layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBearer(token) = AuthBearer::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| denial_for_path(parts.uri.path()))?;

    let current = st
        .auth_service
        .authenticate(&token)
        .await?
        .ok_or_else(|| denial_for_path(parts.uri.path()))?;

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(current);

    Ok(next.run(req).await)
}

/// Picks the failure returned for a dead or missing token on this path.
fn denial_for_path(path: &str) -> AppError {
    if path.ends_with("/auth/logout") {
        AppError::UnauthorizedLogout
    } else {
        AppError::AccessDenied
    }
}
