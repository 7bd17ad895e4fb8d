#[cfg(test)]
use argon2::{PasswordHash, PasswordVerifier};
use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHasher,
};

use crate::server::error::AppError;

/// Hashes a plaintext password with Argon2 and a random salt.
///
/// # Returns
/// - `Ok(String)` - PHC-formatted hash suitable for storage
/// - `Err(AppError::PasswordHash)` - The hasher rejected the input or parameters
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::PasswordHash(e.to_string()))
}

/// Checks a plaintext password against a stored PHC hash.
///
/// Returns `false` for malformed hashes as well as mismatches. Used in tests to
/// confirm what the registry persisted.
#[cfg(test)]
pub fn verify_password(password: &str, hash: &str) -> bool {
    match PasswordHash::new(hash) {
        Ok(parsed_hash) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok(),
        Err(_) => false,
    }
}
