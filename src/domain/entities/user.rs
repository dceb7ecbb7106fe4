//! User account entity and its write models.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A registered account.
///
/// `subscriptions_count` and `subscribers_count` are derived from the
/// subscription edges at query time and never stored on the row.
/// `password_hash` is an argon2 PHC string and must never leave the backend.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub subscriptions_count: i64,
    pub subscribers_count: i64,
}

/// Input data for creating an account.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// Profile update. `name` is always written; `password_hash` only when the
/// caller is changing their password.
#[derive(Debug, Clone)]
pub struct UserPatch {
    pub name: String,
    pub password_hash: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_creation() {
        let now = Utc::now();
        let user = User {
            id: 1,
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: "$argon2id$stub".to_string(),
            created_at: now,
            updated_at: now,
            subscriptions_count: 0,
            subscribers_count: 0,
        };

        assert_eq!(user.id, 1);
        assert_eq!(user.email, "alice@example.com");
        assert_eq!(user.subscriptions_count, 0);
        assert_eq!(user.subscribers_count, 0);
    }

    #[test]
    fn test_user_patch_without_password() {
        let patch = UserPatch {
            name: "Renamed".to_string(),
            password_hash: None,
        };

        assert_eq!(patch.name, "Renamed");
        assert!(patch.password_hash.is_none());
    }
}
