//! Session token signing and verification

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::claims::SessionClaims;
use crate::config::AuthConfig;
use crate::error::AuthError;

/// Fixed session lifetime: 4 hours
pub const SESSION_TTL_SECS: u64 = 4 * 60 * 60;

/// Sign a session token for the given email
pub fn sign_session(email: &str, config: &AuthConfig) -> Result<String, AuthError> {
    let now = chrono::Utc::now().timestamp() as u64;
    let claims = SessionClaims {
        email: email.to_string(),
        iat: now,
        exp: now + SESSION_TTL_SECS,
    };

    let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_ref());
    encode(&Header::new(Algorithm::HS256), &claims, &encoding_key).map_err(|e| {
        tracing::error!(error = %e, "Failed to sign session token");
        AuthError::TokenCreation
    })
}

/// Verify a session token and return its claims
pub fn verify_session(token: &str, config: &AuthConfig) -> Result<SessionClaims, AuthError> {
    let validation = Validation::new(Algorithm::HS256);
    let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_ref());

    let token_data = decode::<SessionClaims>(token, &decoding_key, &validation).map_err(|e| {
        tracing::debug!(error = %e, "Session token validation failed");
        AuthError::InvalidSession
    })?;

    Ok(token_data.claims)
}
