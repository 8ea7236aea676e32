//! Password hashing and verification.
//!
//! New hashes are Argon2id in PHC string format so that algorithm parameters
//! and salt travel with the hash itself. Staff rows written by older tooling
//! carry bcrypt hashes (`$2a$`, `$2b$`, `$2y$`); those are still verified.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

const BCRYPT_PREFIXES: [&str; 3] = ["$2a$", "$2b$", "$2y$"];

/// A stored hash that could not be used for verification.
#[derive(Debug, thiserror::Error)]
pub enum PasswordError {
    #[error("argon2: {0}")]
    Argon2(argon2::password_hash::Error),

    #[error("bcrypt: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),
}

/// Hash a plaintext password using Argon2id with a random salt.
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Verify a plaintext password against a stored hash.
///
/// The scheme is picked from the hash prefix: bcrypt for `$2a$` / `$2b$` /
/// `$2y$`, PHC (Argon2) for everything else. Returns `Ok(false)` on mismatch
/// and `Err` only when the stored hash itself is unusable.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, PasswordError> {
    if BCRYPT_PREFIXES.iter().any(|p| hash.starts_with(p)) {
        return Ok(bcrypt::verify(password, hash)?);
    }

    let parsed_hash = PasswordHash::new(hash).map_err(PasswordError::Argon2)?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(PasswordError::Argon2(e)),
    }
}
