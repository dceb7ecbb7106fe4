//! User representation returned by the API.

use serde::Serialize;

use crate::domain::entities::User;

/// Public view of an account.
///
/// Timestamps are unix seconds; the password hash never crosses this
/// boundary. Counts come pre-computed from the repository.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: i64,
    pub updated_at: i64,
    pub subscriptions_count: i64,
    pub subscribers_count: i64,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            created_at: user.created_at.timestamp(),
            updated_at: user.updated_at.timestamp(),
            subscriptions_count: user.subscriptions_count,
            subscribers_count: user.subscribers_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    #[test]
    fn test_serializes_timestamps_as_unix_seconds() {
        let at = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        let user = User {
            id: 1,
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: "$argon2id$stub".to_string(),
            created_at: at,
            updated_at: at,
            subscriptions_count: 2,
            subscribers_count: 3,
        };

        let value = serde_json::to_value(UserResponse::from(user)).unwrap();

        assert_eq!(
            value,
            json!({
                "id": 1,
                "name": "Alice",
                "email": "alice@example.com",
                "created_at": at.timestamp(),
                "updated_at": at.timestamp(),
                "subscriptions_count": 2,
                "subscribers_count": 3,
            })
        );
        assert!(value.get("password_hash").is_none());
    }
}
