//! Handlers for signup, login and logout.

use axum::{Extension, Json, extract::State, http::StatusCode};

use crate::api::dto::envelope::MessageResponse;
use crate::api::dto::login::{LoginRequest, LoginResponse};
use crate::api::dto::signup::SignupRequest;
use crate::application::services::AuthenticatedUser;
use crate::error::AppError;
use crate::state::AppState;

/// Registers a new account.
///
/// # Endpoint
///
/// `POST /api/auth/signup`
///
/// # Responses
///
/// - **201 Created**: `{"message": "User created"}`
/// - **422 Unprocessable Entity**: validation failed, including a taken email
pub async fn signup_handler(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    state.user_service.register(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User created")),
    ))
}

/// Exchanges credentials for a fresh bearer token.
///
/// # Endpoint
///
/// `POST /api/auth/login`
///
/// # Responses
///
/// - **200 OK**: `{"access_token": "...", "token_type": "Bearer", "expires_at": "..."}`
/// - **401 Unauthorized**: unknown email or wrong password
/// - **422 Unprocessable Entity**: validation failed
pub async fn login_handler(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let issued = state.auth_service.login(payload).await?;

    Ok(Json(issued.into()))
}

/// Revokes the caller's current token.
///
/// # Endpoint
///
/// `GET /api/auth/logout`
///
/// # Responses
///
/// - **200 OK**: `{"message": "Successfully logged out"}`
/// - **401 Unauthorized**: the token was already dead
pub async fn logout_handler(
    State(state): State<AppState>,
    Extension(current): Extension<AuthenticatedUser>,
) -> Result<Json<MessageResponse>, AppError> {
    state.auth_service.logout(&current.token_hash).await?;

    Ok(Json(MessageResponse::new("Successfully logged out")))
}
