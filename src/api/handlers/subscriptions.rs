//! Handlers for subscribing to and unsubscribing from users.

use axum::{
    Extension,
    extract::{Path, State},
    http::StatusCode,
};

use crate::application::services::AuthenticatedUser;
use crate::error::AppError;
use crate::state::AppState;

/// Subscribes the caller to another user's posts.
///
/// # Endpoint
///
/// `POST /api/users/{id}/subscribe`
///
/// # Responses
///
/// - **204 No Content**: subscription stored
/// - **400 Bad Request**: caller tried to subscribe to themselves
/// - **404 Not Found**: no such user
pub async fn subscribe_handler(
    State(state): State<AppState>,
    Extension(current): Extension<AuthenticatedUser>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state
        .subscription_service
        .subscribe(current.user_id, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Removes the caller's subscription to another user.
///
/// # Endpoint
///
/// `DELETE /api/users/{id}/unsubscribe`
///
/// # Responses
///
/// - **204 No Content**: subscription removed
/// - **400 Bad Request**: there was no subscription to remove
/// - **404 Not Found**: no such user
pub async fn unsubscribe_handler(
    State(state): State<AppState>,
    Extension(current): Extension<AuthenticatedUser>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state
        .subscription_service
        .unsubscribe(current.user_id, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
