//! Account use cases: signup, profile reads and updates, subscription listings.

use std::sync::Arc;
use validator::Validate;

use crate::api::dto::signup::SignupRequest;
use crate::api::dto::update_profile::UpdateProfileRequest;
use crate::domain::entities::{NewUser, User, UserPatch};
use crate::domain::repositories::UserRepository;
use crate::error::{AppError, FieldErrors};
use crate::utils::password::hash_password;

const EMAIL_TAKEN: &str = "The email has already been taken.";

/// Service for account registration and profile management.
pub struct UserService {
    users: Arc<dyn UserRepository>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Registers a new account.
    ///
    /// Collects every rule violation, including email uniqueness, into a
    /// single validation error so the client sees the full picture at once.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] with per-field messages, or
    /// [`AppError::Internal`] on database errors.
    pub async fn register(&self, payload: SignupRequest) -> Result<User, AppError> {
        let mut errors = match payload.validate() {
            Ok(()) => FieldErrors::new(),
            Err(e) => e.into(),
        };

        if let Some(email) = payload.email.as_deref() {
            if !errors.contains("email") && self.users.find_by_email(email).await?.is_some() {
                errors.add("email", EMAIL_TAKEN);
            }
        }

        if !errors.is_empty() {
            return Err(AppError::validation(errors));
        }

        let password_hash = hash_password(payload.password.as_deref().unwrap_or_default())?;

        let user = self
            .users
            .create(NewUser {
                name: payload.name.unwrap_or_default(),
                email: payload.email.unwrap_or_default(),
                password_hash,
            })
            .await?;

        tracing::info!(user_id = user.id, "registered new account");

        Ok(user)
    }

    /// Fetches a user by ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no such user exists.
    pub async fn get_by_id(&self, id: i64) -> Result<User, AppError> {
        self.users.find_by_id(id).await?.ok_or(AppError::NotFound)
    }

    /// Updates the caller's own profile.
    ///
    /// `name` is always written; the password is re-hashed only when the
    /// payload carries one.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] on rule violations,
    /// [`AppError::NotFound`] if the account vanished, and
    /// [`AppError::Internal`] on database errors.
    pub async fn update_profile(
        &self,
        user_id: i64,
        payload: UpdateProfileRequest,
    ) -> Result<User, AppError> {
        payload.validate()?;

        let password_hash = match payload.password.as_deref() {
            Some(password) => Some(hash_password(password)?),
            None => None,
        };

        self.users
            .update(
                user_id,
                UserPatch {
                    name: payload.name.unwrap_or_default(),
                    password_hash,
                },
            )
            .await
    }

    /// Lists the publishers a user is subscribed to.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    pub async fn subscriptions(&self, user_id: i64) -> Result<Vec<User>, AppError> {
        self.get_by_id(user_id).await?;
        self.users.list_subscriptions(user_id).await
    }

    /// Lists the subscribers following a user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    pub async fn subscribers(&self, user_id: i64) -> Result<Vec<User>, AppError> {
        self.get_by_id(user_id).await?;
        self.users.list_subscribers(user_id).await
    }
}
