//! Flat success envelope for write endpoints without an entity body.

use serde::Serialize;

/// `{"message": "..."}` success payload.
///
/// Error payloads are shaped by [`crate::error::AppError`]; the two share the
/// same flat layout.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub const fn new(message: &'static str) -> Self {
        Self { message }
    }
}
