//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation. Request strings pass through
//! [`empty_string_as_none`] so that blank input fails the `required` rules
//! the same way missing input does.

pub mod create_post;
pub mod envelope;
pub mod health;
pub mod login;
pub mod pagination;
pub mod post;
pub mod signup;
pub mod update_profile;
pub mod user;

use serde::{Deserialize, Deserializer};

/// Deserializes an optional string, mapping empty or whitespace-only values
/// to `None` and trimming the rest.
pub(crate) fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty()))
}
