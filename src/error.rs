use std::collections::BTreeMap;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;

const LOGIN_FAILED: &str = "Failed to authorize user (unknown user or invalid email/password)";
const LOGOUT_FAILED: &str = "Failed to logout";
const NO_API_ACCESS: &str = "You have not access permission to API";

/// Per-field validation messages, keyed by field name.
///
/// Fields are kept sorted so error payloads are stable across runs.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<validator::ValidationErrors> for FieldErrors {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut out = Self::new();
        for (field, violations) in errors.field_errors() {
            for violation in violations {
                let message = violation
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| violation.code.to_string());
                out.add(field.to_string(), message);
            }
        }
        out
    }
}

/// Unified application error. Every fallible path in handlers, services and
/// repositories resolves to one of these variants, and `IntoResponse` turns
/// them into the flat `{message, errors}` envelope in a single place.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation failed")]
    Validation { errors: FieldErrors },
    /// Login rejected: unknown email or wrong password.
    #[error("Unauthorized")]
    Unauthorized,
    /// Token check failed on the logout route specifically.
    #[error("Unauthorized")]
    UnauthorizedLogout,
    /// Missing or dead bearer token on a protected route.
    #[error("Access denied")]
    AccessDenied,
    #[error("Resource not found")]
    NotFound,
    #[error("User trying subscribe to himself")]
    SubscribeHimself,
    #[error("User trying unsubscribe from not subscribed user")]
    NotSubscribed,
    #[error("Something went wrong")]
    Internal { detail: String },
}

impl AppError {
    pub fn validation(errors: FieldErrors) -> Self {
        Self::Validation { errors }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
    errors: Value,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, errors) = match &self {
            AppError::Validation { errors } => (StatusCode::UNPROCESSABLE_ENTITY, json!(errors)),
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, json!([LOGIN_FAILED])),
            AppError::UnauthorizedLogout => (StatusCode::UNAUTHORIZED, json!([LOGOUT_FAILED])),
            AppError::AccessDenied => (StatusCode::FORBIDDEN, json!([NO_API_ACCESS])),
            AppError::NotFound => (StatusCode::NOT_FOUND, json!([])),
            AppError::SubscribeHimself | AppError::NotSubscribed => {
                (StatusCode::BAD_REQUEST, json!([]))
            }
            AppError::Internal { detail } => {
                tracing::error!(detail = %detail, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, json!([detail]))
            }
        };

        let body = ErrorBody {
            message: self.to_string(),
            errors,
        };

        (status, Json(body)).into_response()
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::Validation {
            errors: errors.into(),
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error() {
            if db.is_unique_violation() {
                tracing::warn!(constraint = ?db.constraint(), "unique constraint violation");
            }
        }
        Self::internal(e.to_string())
    }
}
