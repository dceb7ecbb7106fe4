//! Password hashing and verification.
//!
//! Wraps argon2id with per-password random salts. Stored values are PHC
//! strings, so parameters can change later without invalidating old hashes.

use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
    password_hash::{SaltString, rand_core::OsRng},
};

use crate::error::AppError;

/// Hashes a plaintext password into an argon2id PHC string.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the hasher rejects its input.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;

    Ok(hash.to_string())
}

/// Verifies a plaintext password against a stored PHC string.
///
/// A mismatch is `Ok(false)`, not an error; only an unparseable stored hash
/// is treated as a server fault.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the stored hash is malformed.
pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool, AppError> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|e| AppError::internal(format!("Stored password hash is invalid: {e}")))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
