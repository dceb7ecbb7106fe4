//! Repository trait for bearer access tokens.

use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Access token entity with metadata.
///
/// Tokens are stored as keyed HMAC-SHA256 hashes; the plaintext is handed to
/// the client once at login and never persisted.
#[derive(Debug, Clone, FromRow)]
pub struct AccessToken {
    pub id: i64,
    pub user_id: i64,
    pub token_hash: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub revoked_at: Option<DateTime<Utc>>,
}

impl AccessToken {
    /// Returns true if the token can still authenticate requests.
    pub fn is_live(&self, now: DateTime<Utc>) -> bool {
        self.revoked_at.is_none() && self.expires_at > now
    }
}

/// Repository interface for access token management.
///
/// Handles issuing, validating and revoking the bearer tokens created at
/// login. A token is live while it is neither revoked nor past `expires_at`.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgTokenRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Stores a freshly issued token hash for a user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(
        &self,
        user_id: i64,
        token_hash: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<AccessToken, AppError>;

    /// Finds a live token by its hash.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(token))` if the hash matches a non-revoked, non-expired token
    /// - `Ok(None)` otherwise
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_valid(&self, token_hash: &str) -> Result<Option<AccessToken>, AppError>;

    /// Revokes a token, preventing further authentication.
    ///
    /// Sets `revoked_at` to the current time.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if a live token was revoked
    /// - `Ok(false)` if no live token matched the hash
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn revoke(&self, token_hash: &str) -> Result<bool, AppError>;

    /// Revokes every live token belonging to a user.
    ///
    /// Used by the operator CLI to force a user out of all sessions.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn revoke_all_for_user(&self, user_id: i64) -> Result<u64, AppError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn sample(expires_in: i64, revoked: bool) -> AccessToken {
        let now = Utc::now();
        AccessToken {
            id: 1,
            user_id: 2,
            token_hash: "ab".repeat(32),
            created_at: now,
            expires_at: now + Duration::seconds(expires_in),
            revoked_at: revoked.then_some(now),
        }
    }

    #[test]
    fn test_live_token() {
        assert!(sample(3600, false).is_live(Utc::now()));
    }

    #[test]
    fn test_expired_token_is_dead() {
        assert!(!sample(-1, false).is_live(Utc::now()));
    }

    #[test]
    fn test_revoked_token_is_dead() {
        assert!(!sample(3600, true).is_live(Utc::now()));
    }
}
