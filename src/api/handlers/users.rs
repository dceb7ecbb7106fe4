//! Handlers for user profiles and their subscription listings.

use axum::{
    Extension, Json,
    extract::{Path, State},
};

use crate::api::dto::update_profile::UpdateProfileRequest;
use crate::api::dto::user::UserResponse;
use crate::application::services::AuthenticatedUser;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the authenticated caller's own profile.
///
/// # Endpoint
///
/// `GET /api/profile`
pub async fn profile_handler(
    State(state): State<AppState>,
    Extension(current): Extension<AuthenticatedUser>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state.user_service.get_by_id(current.user_id).await?;

    Ok(Json(user.into()))
}

/// Returns a single user's public profile.
///
/// # Endpoint
///
/// `GET /api/users/{id}`
///
/// # Responses
///
/// - **200 OK**: the profile with derived subscription counts
/// - **404 Not Found**: no such user
pub async fn show_user_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state.user_service.get_by_id(id).await?;

    Ok(Json(user.into()))
}

/// Updates the caller's name and, optionally, password.
///
/// # Endpoint
///
/// `PATCH /api/users`
///
/// # Responses
///
/// - **200 OK**: the refreshed profile
/// - **422 Unprocessable Entity**: validation failed
pub async fn update_user_handler(
    State(state): State<AppState>,
    Extension(current): Extension<AuthenticatedUser>,
    Json(payload): Json<UpdateProfileRequest>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state
        .user_service
        .update_profile(current.user_id, payload)
        .await?;

    Ok(Json(user.into()))
}

/// Lists the users a given user subscribes to.
///
/// # Endpoint
///
/// `GET /api/users/{id}/subscriptions`
pub async fn subscriptions_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = state.user_service.subscriptions(id).await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Lists the users subscribed to a given user.
///
/// # Endpoint
///
/// `GET /api/users/{id}/subscribers`
pub async fn subscribers_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = state.user_service.subscribers(id).await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}
