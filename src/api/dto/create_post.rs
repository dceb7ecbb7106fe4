//! DTO for post creation.

use serde::Deserialize;
use validator::Validate;

use super::empty_string_as_none;

/// Request to publish a post.
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(
        required(message = "The text field is required."),
        length(max = 300, message = "The text may not be greater than 300 characters.")
    )]
    pub text: Option<String>,
}
