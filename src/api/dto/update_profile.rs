//! DTO for profile updates.

use serde::Deserialize;
use validator::Validate;

use super::empty_string_as_none;

/// Request to change the caller's own name and, optionally, password.
///
/// The password pair is validated only when a new password is supplied.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(
        required(message = "The name field is required."),
        length(max = 255, message = "The name may not be greater than 255 characters.")
    )]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(
        length(min = 6, message = "The password must be at least 6 characters."),
        must_match(
            other = "password_confirmation",
            message = "The password confirmation does not match."
        )
    )]
    pub password: Option<String>,

    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub password_confirmation: Option<String>,
}
