//! Password hashing and verification
//!
//! Hashes are Argon2id PHC strings, so parameters travel with each stored hash.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use stand_core::DomainError;

use crate::error::{AppError, AppResult};

/// Shortest accepted password, in characters
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Hash a password using Argon2id
///
/// # Errors
/// Returns an error if hashing fails
pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {e}")))
}

/// Check a candidate password against a stored hash
///
/// # Errors
/// Returns an error only if the stored hash is malformed
pub fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid password hash format: {e}")))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// Password rules and hashing, injected into the auth service
#[derive(Debug, Clone, Default)]
pub struct PasswordService;

impl PasswordService {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Check length and confirmation, then hash
    ///
    /// # Errors
    /// Returns a validation error for a short or mismatched password
    pub fn hash_new(&self, password: &str, confirm: &str) -> AppResult<String> {
        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AppError::Validation(format!(
                "Password must be at least {MIN_PASSWORD_LENGTH} characters"
            )));
        }
        if password != confirm {
            return Err(AppError::Domain(DomainError::PasswordMismatch));
        }
        hash_password(password)
    }

    /// Verify a password and return an error if invalid
    ///
    /// # Errors
    /// Returns `AppError::InvalidCredentials` if the password doesn't match
    pub fn verify_or_error(&self, password: &str, hash: &str) -> AppResult<()> {
        if verify_password(password, hash)? {
            Ok(())
        } else {
            Err(AppError::InvalidCredentials)
        }
    }
}
