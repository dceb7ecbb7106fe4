//! Handlers for publishing, deleting and reading posts.

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
};

use crate::api::dto::create_post::CreatePostRequest;
use crate::api::dto::pagination::PageQuery;
use crate::api::dto::post::PostResponse;
use crate::application::services::AuthenticatedUser;
use crate::error::AppError;
use crate::state::AppState;

/// Lists one user's posts, newest first.
///
/// # Endpoint
///
/// `GET /api/posts/{userId}?page=N`
///
/// Pages are a fixed ten posts; past the last page the list is empty.
///
/// # Responses
///
/// - **200 OK**: a page of posts
/// - **404 Not Found**: no such user
pub async fn user_posts_handler(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Vec<PostResponse>>, AppError> {
    let posts = state
        .post_service
        .list_for_user(user_id, query.page())
        .await?;

    Ok(Json(posts.into_iter().map(PostResponse::from).collect()))
}

/// Lists the caller's feed: own posts plus posts of subscribed users.
///
/// # Endpoint
///
/// `GET /api/posts/feed?page=N`
pub async fn feed_handler(
    State(state): State<AppState>,
    Extension(current): Extension<AuthenticatedUser>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Vec<PostResponse>>, AppError> {
    let posts = state.post_service.feed(current.user_id, query.page()).await?;

    Ok(Json(posts.into_iter().map(PostResponse::from).collect()))
}

/// Publishes a post on behalf of the caller.
///
/// # Endpoint
///
/// `POST /api/posts`
///
/// # Responses
///
/// - **201 Created**: the stored post
/// - **422 Unprocessable Entity**: blank or too long text
pub async fn create_post_handler(
    State(state): State<AppState>,
    Extension(current): Extension<AuthenticatedUser>,
    Json(payload): Json<CreatePostRequest>,
) -> Result<(StatusCode, Json<PostResponse>), AppError> {
    let post = state.post_service.create(current.user_id, payload).await?;

    Ok((StatusCode::CREATED, Json(post.into())))
}

/// Deletes one of the caller's posts.
///
/// # Endpoint
///
/// `DELETE /api/posts/{id}`
///
/// # Responses
///
/// - **204 No Content**: the post is gone
/// - **403 Forbidden**: the post belongs to someone else
/// - **404 Not Found**: no such post
pub async fn delete_post_handler(
    State(state): State<AppState>,
    Extension(current): Extension<AuthenticatedUser>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.post_service.delete(current.user_id, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
