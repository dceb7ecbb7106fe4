//! Post representation returned by the API.

use serde::Serialize;

use crate::domain::entities::Post;

/// Public view of a post. Timestamps are unix seconds.
#[derive(Debug, Serialize)]
pub struct PostResponse {
    pub id: i64,
    pub text: String,
    pub user_id: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            text: post.text,
            user_id: post.user_id,
            created_at: post.created_at.timestamp(),
            updated_at: post.updated_at.timestamp(),
        }
    }
}
