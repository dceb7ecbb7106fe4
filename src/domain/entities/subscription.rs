//! Subscription edge between two users.

use sqlx::FromRow;

/// A follow relationship: `subscriber` receives `publisher`'s posts.
///
/// The pair is unique; the table carries no timestamps.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Subscription {
    pub subscriber_id: i64,
    pub publisher_id: i64,
}

impl Subscription {
    /// Returns true if the edge would point a user at themselves.
    pub fn is_self_referential(&self) -> bool {
        self.subscriber_id == self.publisher_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_referential_edge() {
        let edge = Subscription {
            subscriber_id: 1,
            publisher_id: 1,
        };
        assert!(edge.is_self_referential());

        let edge = Subscription {
            subscriber_id: 1,
            publisher_id: 2,
        };
        assert!(!edge.is_self_referential());
    }
}
