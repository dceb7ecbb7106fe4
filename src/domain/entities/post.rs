//! Post entity representing a single microblog entry.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Maximum post length in characters.
pub const POST_MAX_LEN: usize = 300;

/// A microblog post owned by one user.
#[derive(Debug, Clone, FromRow)]
pub struct Post {
    pub id: i64,
    pub text: String,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Returns true if the given user owns this post.
    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.user_id == user_id
    }
}

/// Input data for creating a post.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub text: String,
    pub user_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_ownership() {
        let now = Utc::now();
        let post = Post {
            id: 10,
            text: "hello world".to_string(),
            user_id: 3,
            created_at: now,
            updated_at: now,
        };

        assert!(post.is_owned_by(3));
        assert!(!post.is_owned_by(4));
    }

    #[test]
    fn test_new_post_creation() {
        let new_post = NewPost {
            text: "first!".to_string(),
            user_id: 7,
        };

        assert_eq!(new_post.text, "first!");
        assert_eq!(new_post.user_id, 7);
    }
}
