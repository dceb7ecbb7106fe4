//! Authentication service: login, token checks and logout.

use chrono::{DateTime, Duration, Utc};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::sync::Arc;
use validator::Validate;

use crate::api::dto::login::LoginRequest;
use crate::domain::repositories::{TokenRepository, UserRepository};
use crate::error::AppError;
use crate::utils::password::verify_password;
use crate::utils::token_generator::generate_token;

type HmacSha256 = Hmac<Sha256>;

/// Identity resolved from a live bearer token.
///
/// Carried through the request as an extension so every handler works with an
/// explicit caller instead of ambient state. `token_hash` identifies the
/// session for logout.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: i64,
    pub token_hash: String,
}

/// A freshly issued token, returned to the client exactly once.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub access_token: String,
    pub expires_at: DateTime<Utc>,
}

/// Service for issuing and validating Bearer access tokens.
///
/// Tokens are hashed with HMAC-SHA256 (keyed by `signing_secret`) before
/// storage and comparison. An attacker with read-only access to the database
/// cannot verify or forge tokens without the server-side secret.
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    tokens: Arc<dyn TokenRepository>,
    signing_secret: String,
    token_ttl: Duration,
}

impl AuthService {
    /// Creates a new authentication service.
    ///
    /// # Arguments
    ///
    /// - `users` - account lookups for the login flow
    /// - `tokens` - token storage
    /// - `signing_secret` - HMAC key; must match the value used when existing
    ///   tokens were created
    /// - `token_ttl_seconds` - lifetime of issued tokens
    pub fn new(
        users: Arc<dyn UserRepository>,
        tokens: Arc<dyn TokenRepository>,
        signing_secret: String,
        token_ttl_seconds: i64,
    ) -> Self {
        Self {
            users,
            tokens,
            signing_secret,
            token_ttl: Duration::seconds(token_ttl_seconds),
        }
    }

    /// Hashes a raw token with HMAC-SHA256 using the server signing secret.
    ///
    /// Returns a 64-character lowercase hex-encoded MAC.
    fn hash_token(&self, token: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.signing_secret.as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(token.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Validates credentials and issues a fresh access token.
    ///
    /// Unknown email and wrong password are indistinguishable to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when the payload breaks the login
    /// rules, [`AppError::Unauthorized`] when the credentials do not match,
    /// and [`AppError::Internal`] on database errors.
    pub async fn login(&self, payload: LoginRequest) -> Result<IssuedToken, AppError> {
        payload.validate()?;

        let email = payload.email.as_deref().unwrap_or_default();
        let password = payload.password.as_deref().unwrap_or_default();

        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or(AppError::Unauthorized)?;

        if !verify_password(password, &user.password_hash)? {
            return Err(AppError::Unauthorized);
        }

        let token = generate_token();
        let expires_at = Utc::now() + self.token_ttl;

        let stored = self
            .tokens
            .create(user.id, &self.hash_token(&token), expires_at)
            .await?;

        tracing::info!(user_id = user.id, "issued access token");

        Ok(IssuedToken {
            access_token: token,
            expires_at: stored.expires_at,
        })
    }

    /// Resolves a raw bearer token to its owner.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(user))` for a live token
    /// - `Ok(None)` for an unknown, revoked or expired one
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn authenticate(&self, token: &str) -> Result<Option<AuthenticatedUser>, AppError> {
        let token_hash = self.hash_token(token);

        let found = self.tokens.find_valid(&token_hash).await?;

        Ok(found.map(|t| AuthenticatedUser {
            user_id: t.user_id,
            token_hash,
        }))
    }

    /// Revokes the session behind the given token hash.
    ///
    /// The middleware has already vetted the token, so a concurrent
    /// revocation losing the race is still a successful logout.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn logout(&self, token_hash: &str) -> Result<(), AppError> {
        self.tokens.revoke(token_hash).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::{AccessToken, MockTokenRepository, MockUserRepository};
    use crate::utils::password::hash_password;

    fn test_secret() -> String {
        "test-signing-secret".to_string()
    }

    fn sample_user(password: &str) -> crate::domain::entities::User {
        let now = Utc::now();
        crate::domain::entities::User {
            id: 7,
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: hash_password(password).unwrap(),
            created_at: now,
            updated_at: now,
            subscriptions_count: 0,
            subscribers_count: 0,
        }
    }

    fn login_payload(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: Some(email.to_string()),
            password: Some(password.to_string()),
        }
    }

    fn service(
        users: MockUserRepository,
        tokens: MockTokenRepository,
    ) -> AuthService {
        AuthService::new(Arc::new(users), Arc::new(tokens), test_secret(), 3600)
    }

    #[tokio::test]
    async fn test_login_success_issues_opaque_token() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_email()
            .withf(|email| email == "alice@example.com")
            .times(1)
            .returning(|_| Ok(Some(sample_user("password123"))));

        let mut tokens = MockTokenRepository::new();
        tokens
            .expect_create()
            .withf(|user_id, token_hash, expires_at| {
                let ttl = (*expires_at - Utc::now()).num_seconds();
                *user_id == 7 && token_hash.len() == 64 && (3595..=3600).contains(&ttl)
            })
            .times(1)
            .returning(|user_id, token_hash, expires_at| {
                Ok(AccessToken {
                    id: 1,
                    user_id,
                    token_hash: token_hash.to_string(),
                    created_at: Utc::now(),
                    expires_at,
                    revoked_at: None,
                })
            });

        let issued = service(users, tokens)
            .login(login_payload("alice@example.com", "password123"))
            .await
            .unwrap();

        assert_eq!(issued.access_token.len(), 48);
        let ttl = (issued.expires_at - Utc::now()).num_seconds();
        assert!((3595..=3600).contains(&ttl));
    }

    #[tokio::test]
    async fn test_login_unknown_email_is_unauthorized() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));

        let result = service(users, MockTokenRepository::new())
            .login(login_payload("ghost@example.com", "password123"))
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Unauthorized));
    }

    #[tokio::test]
    async fn test_login_wrong_password_is_unauthorized() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(Some(sample_user("password123"))));

        let result = service(users, MockTokenRepository::new())
            .login(login_payload("alice@example.com", "password124"))
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Unauthorized));
    }

    #[tokio::test]
    async fn test_login_validates_payload_first() {
        let result = service(MockUserRepository::new(), MockTokenRepository::new())
            .login(LoginRequest {
                email: None,
                password: None,
            })
            .await;

        match result.unwrap_err() {
            AppError::Validation { errors } => {
                assert!(errors.contains("email"));
                assert!(errors.contains("password"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_authenticate_live_token() {
        let mut tokens = MockTokenRepository::new();
        tokens.expect_find_valid().times(1).returning(|hash| {
            Ok(Some(AccessToken {
                id: 1,
                user_id: 7,
                token_hash: hash.to_string(),
                created_at: Utc::now(),
                expires_at: Utc::now() + Duration::hours(1),
                revoked_at: None,
            }))
        });

        let auth = service(MockUserRepository::new(), tokens)
            .authenticate("some-raw-token")
            .await
            .unwrap();

        let auth = auth.expect("token should resolve");
        assert_eq!(auth.user_id, 7);
        assert_eq!(auth.token_hash.len(), 64);
    }

    #[tokio::test]
    async fn test_authenticate_dead_token_is_none() {
        let mut tokens = MockTokenRepository::new();
        tokens.expect_find_valid().times(1).returning(|_| Ok(None));

        let auth = service(MockUserRepository::new(), tokens)
            .authenticate("expired-or-revoked")
            .await
            .unwrap();

        assert!(auth.is_none());
    }

    #[tokio::test]
    async fn test_logout_revokes_current_session() {
        let mut tokens = MockTokenRepository::new();
        tokens
            .expect_revoke()
            .withf(|hash| hash == "deadbeef")
            .times(1)
            .returning(|_| Ok(true));

        service(MockUserRepository::new(), tokens)
            .logout("deadbeef")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_hash_token_consistency() {
        let service = service(MockUserRepository::new(), MockTokenRepository::new());

        let hash1 = service.hash_token("test-token");
        let hash2 = service.hash_token("test-token");

        assert_eq!(hash1, hash2);
        assert_eq!(hash1.len(), 64);
    }

    #[tokio::test]
    async fn test_hash_token_secret_matters() {
        let svc1 = AuthService::new(
            Arc::new(MockUserRepository::new()),
            Arc::new(MockTokenRepository::new()),
            "secret-a".to_string(),
            3600,
        );
        let svc2 = AuthService::new(
            Arc::new(MockUserRepository::new()),
            Arc::new(MockTokenRepository::new()),
            "secret-b".to_string(),
            3600,
        );

        assert_ne!(svc1.hash_token("token"), svc2.hash_token("token"));
    }
}
