//! DTOs for the login endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::empty_string_as_none;
use crate::application::services::IssuedToken;

/// Login credentials.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(
        required(message = "The email field is required."),
        email(message = "The email must be a valid email address.")
    )]
    pub email: Option<String>,

    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(required(message = "The password field is required."))]
    pub password: Option<String>,
}

/// A fresh bearer token, handed to the client exactly once.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: &'static str,
    /// UTC expiry formatted as `YYYY-MM-DD HH:MM:SS`.
    pub expires_at: String,
}

impl From<IssuedToken> for LoginResponse {
    fn from(token: IssuedToken) -> Self {
        Self {
            access_token: token.access_token,
            token_type: "Bearer",
            expires_at: token.expires_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}
