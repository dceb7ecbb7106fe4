//! DTO for the signup endpoint.

use serde::Deserialize;
use validator::Validate;

use super::empty_string_as_none;

/// Request to create a new account.
///
/// Field rules mirror the canonical account constraints: every violation is
/// collected, and the service layer adds the email uniqueness check on top.
#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(
        required(message = "The name field is required."),
        length(max = 255, message = "The name may not be greater than 255 characters.")
    )]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(
        required(message = "The email field is required."),
        email(message = "The email must be a valid email address."),
        length(max = 255, message = "The email may not be greater than 255 characters.")
    )]
    pub email: Option<String>,

    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(
        required(message = "The password field is required."),
        length(min = 6, message = "The password must be at least 6 characters."),
        must_match(
            other = "password_confirmation",
            message = "The password confirmation does not match."
        )
    )]
    pub password: Option<String>,

    /// Must repeat `password`; carries no rules of its own.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub password_confirmation: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FieldErrors;
    use serde_json::json;

    fn valid() -> SignupRequest {
        SignupRequest {
            name: Some("Alice".to_string()),
            email: Some("alice@example.com".to_string()),
            password: Some("password123".to_string()),
            password_confirmation: Some("password123".to_string()),
        }
    }

    fn errors_of(request: &SignupRequest) -> FieldErrors {
        request.validate().unwrap_err().into()
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn test_empty_request_reports_every_field() {
        let request: SignupRequest = serde_json::from_value(json!({})).unwrap();
        let errors = errors_of(&request);

        assert_eq!(
            serde_json::to_value(&errors).unwrap(),
            json!({
                "email": ["The email field is required."],
                "name": ["The name field is required."],
                "password": ["The password field is required."],
            })
        );
    }

    #[test]
    fn test_blank_strings_count_as_missing() {
        let request: SignupRequest =
            serde_json::from_value(json!({ "name": "", "email": " ", "password": "" })).unwrap();
        let errors = errors_of(&request);

        assert!(errors.contains("name"));
        assert!(errors.contains("email"));
        assert!(errors.contains("password"));
    }

    #[test]
    fn test_invalid_email_format() {
        let mut request = valid();
        request.email = Some("not-an-email".to_string());

        let errors = errors_of(&request);
        assert_eq!(
            serde_json::to_value(&errors).unwrap(),
            json!({ "email": ["The email must be a valid email address."] })
        );
    }

    #[test]
    fn test_overlong_name_rejected() {
        let mut request = valid();
        request.name = Some("x".repeat(256));

        let errors = errors_of(&request);
        assert_eq!(
            serde_json::to_value(&errors).unwrap(),
            json!({ "name": ["The name may not be greater than 255 characters."] })
        );
    }

    #[test]
    fn test_short_password_rejected() {
        let mut request = valid();
        request.password = Some("12345".to_string());
        request.password_confirmation = Some("12345".to_string());

        let errors = errors_of(&request);
        assert_eq!(
            serde_json::to_value(&errors).unwrap(),
            json!({ "password": ["The password must be at least 6 characters."] })
        );
    }

    #[test]
    fn test_mismatched_confirmation_rejected() {
        let mut request = valid();
        request.password_confirmation = Some("different123".to_string());

        let errors = errors_of(&request);
        assert_eq!(
            serde_json::to_value(&errors).unwrap(),
            json!({ "password": ["The password confirmation does not match."] })
        );
    }

    #[test]
    fn test_missing_confirmation_rejected() {
        let mut request = valid();
        request.password_confirmation = None;

        let errors = errors_of(&request);
        assert!(errors.contains("password"));
    }
}
