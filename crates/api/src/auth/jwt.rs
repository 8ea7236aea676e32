//! Session token issuing and validation.
//!
//! Session tokens are HS256-signed JWTs carrying the staff identity. They are
//! not stored server-side and stop working only when they expire.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use staffdesk_core::limits::SESSION_TTL_HOURS;
use staffdesk_core::types::DbId;
use staffdesk_db::models::staff::StaffInfo;

/// Claims embedded in every session token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// The staff record's database id.
    pub id: DbId,
    pub username: String,
    /// Display name.
    pub name: String,
    /// Free-form role label.
    pub role: String,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
}

/// Signing configuration for session tokens.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret used to sign and verify tokens.
    pub secret: String,
    /// Token lifetime in hours.
    pub session_ttl_hours: i64,
}

impl JwtConfig {
    /// Config with the standard 8-hour session lifetime.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            session_ttl_hours: SESSION_TTL_HOURS,
        }
    }

    /// Session lifetime in seconds.
    pub fn session_ttl_secs(&self) -> i64 {
        self.session_ttl_hours * 3600
    }
}

/// Issue a session token for the given staff identity.
pub fn generate_session_token(
    staff: &StaffInfo,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();

    let claims = Claims {
        id: staff.id,
        username: staff.username.clone(),
        name: staff.name.clone(),
        role: staff.role.clone(),
        exp: now + config.session_ttl_secs(),
        iat: now,
    };

    encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Validate and decode a session token, returning the embedded [`Claims`].
///
/// Checks the signature and requires an unexpired `exp` claim.
pub fn validate_token(
    token: &str,
    config: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(),
    )?;
    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> JwtConfig {
        JwtConfig::new("test-secret-that-is-long-enough-for-hmac")
    }

    fn librarian() -> StaffInfo {
        StaffInfo {
            id: 42,
            username: "libadmin".to_string(),
            name: "Library Admin".to_string(),
            role: "librarian".to_string(),
        }
    }

    #[test]
    fn test_generate_and_validate_session_token() {
        let config = test_config();
        let token = generate_session_token(&librarian(), &config)
            .expect("token generation should succeed");

        let claims = validate_token(&token, &config).expect("token validation should succeed");
        assert_eq!(claims.id, 42);
        assert_eq!(claims.username, "libadmin");
        assert_eq!(claims.name, "Library Admin");
        assert_eq!(claims.role, "librarian");
        assert_eq!(claims.exp - claims.iat, 8 * 3600);
    }

    #[test]
    fn test_expired_token_fails() {
        let config = test_config();

        // Well past the default 60-second leeway.
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            id: 1,
            username: "libadmin".to_string(),
            name: "Library Admin".to_string(),
            role: "librarian".to_string(),
            exp: now - 300,
            iat: now - 8 * 3600 - 300,
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.secret.as_bytes()),
        )
        .expect("encoding should succeed");

        assert!(validate_token(&token, &config).is_err());
    }

    #[test]
    fn test_different_secrets_fail() {
        let token = generate_session_token(&librarian(), &JwtConfig::new("secret-alpha"))
            .expect("token generation should succeed");

        let result = validate_token(&token, &JwtConfig::new("secret-bravo"));
        assert!(
            result.is_err(),
            "token signed with a different secret must fail"
        );
    }

    #[test]
    fn test_garbage_token_fails() {
        assert!(validate_token("not.a.jwt", &test_config()).is_err());
        assert!(validate_token("", &test_config()).is_err());
    }
}
