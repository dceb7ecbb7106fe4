//! Utility functions shared across the application.
//!
//! - [`password`] - Argon2id password hashing and verification
//! - [`token_generator`] - Opaque access token generation

pub mod password;
pub mod token_generator;
