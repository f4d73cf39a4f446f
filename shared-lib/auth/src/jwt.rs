//! JWT encoding and decoding utilities.

use error::AuthError;
use hmac::{Hmac, Mac};
use jwt::{SignWithKey, VerifyWithKey};
use sha2::Sha256;

use crate::claims::Claims;

type HmacSha256 = Hmac<Sha256>;

/// JWT configuration.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Secret key for signing tokens
    pub secret: String,
    /// Token validity duration in seconds
    pub expires_in_secs: i64,
}

impl JwtConfig {
    /// Create a new JWT configuration.
    pub fn new(secret: impl Into<String>, expires_in_secs: i64) -> Self {
        Self {
            secret: secret.into(),
            expires_in_secs,
        }
    }
}

/// Encode claims into a signed JWT token.
pub fn encode_token(claims: &Claims, secret: &str) -> Result<String, AuthError> {
    let key = HmacSha256::new_from_slice(secret.as_bytes()).map_err(|e| {
        tracing::error!("Failed to create HMAC key: {}", e);
        AuthError::TokenCreationFailed
    })?;

    claims.sign_with_key(&key).map_err(|e| {
        tracing::error!("Failed to encode JWT: {}", e);
        AuthError::TokenCreationFailed
    })
}

/// Decode and validate a JWT token.
///
/// A bad signature or malformed token yields `InvalidToken`; a token whose
/// signature checks out but whose expiry has passed yields `TokenExpired`.
pub fn decode_token(token: &str, secret: &str) -> Result<Claims, AuthError> {
    let key = HmacSha256::new_from_slice(secret.as_bytes()).map_err(|e| {
        tracing::error!("Failed to create HMAC key: {}", e);
        AuthError::InvalidToken
    })?;

    let claims: Claims = token.verify_with_key(&key).map_err(|e| {
        tracing::warn!("Failed to decode JWT: {}", e);
        AuthError::InvalidToken
    })?;

    if claims.is_expired() {
        return Err(AuthError::TokenExpired);
    }

    Ok(claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decode_token() {
        let secret = "test-secret-key";
        let claims = Claims::new("user123", 3600);

        let token = encode_token(&claims, secret).expect("Failed to encode");
        let decoded = decode_token(&token, secret).expect("Failed to decode");

        assert_eq!(decoded.username, "user123");
        assert_eq!(decoded.iat, claims.iat);
        assert_eq!(decoded.exp, claims.exp);
    }

    #[test]
    fn test_decode_rejects_wrong_secret() {
        let claims = Claims::new("user123", 3600);
        let token = encode_token(&claims, "secret-a").expect("Failed to encode");

        let result = decode_token(&token, "secret-b");
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[test]
    fn test_decode_rejects_expired_token() {
        let secret = "test-secret-key";
        let claims = Claims::new("user123", -60);
        let token = encode_token(&claims, secret).expect("Failed to encode");

        let result = decode_token(&token, secret);
        assert!(matches!(result, Err(AuthError::TokenExpired)));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let result = decode_token("not-a-jwt", "test-secret-key");
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }
}
