//! Authentication primitives.
//!
//! - [`password`] -- Argon2id hashing, Argon2 and bcrypt verification.
//! - [`jwt`] -- session token issuing and validation.

pub mod jwt;
pub mod password;

/// Authentication failures. Each one surfaces to clients as a 401 carrying
/// only the short phrase below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// No `Authorization: Bearer ...` header on a protected request.
    #[error("Missing token")]
    MissingToken,

    /// The token failed signature, format, or expiry checks.
    #[error("Invalid token")]
    InvalidToken,

    /// Unknown username or wrong password. The two cases are deliberately
    /// indistinguishable.
    #[error("Invalid credentials")]
    InvalidCredentials,
}
