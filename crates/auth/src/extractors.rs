//! Axum extractors for session authentication
//!
//! Generic over any state `S` where `AuthConfig: FromRef<S>`.
//! This is axum's idiomatic nested-state pattern.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::extract::CookieJar;

use crate::claims::SessionClaims;
use crate::config::AuthConfig;
use crate::cookie::SESSION_COOKIE;
use crate::error::AuthError;
use crate::jwt::verify_session;

/// Authenticated session extractor (cookie-borne token)
#[derive(Debug)]
pub struct SessionUser(pub SessionClaims);

impl SessionUser {
    /// Ownership check: the session email must equal the route's target email
    pub fn authorize_subject(&self, email: &str) -> Result<(), AuthError> {
        if self.0.is_subject(email) {
            Ok(())
        } else {
            Err(AuthError::EmailMismatch)
        }
    }
}

impl<S> FromRequestParts<S> for SessionUser
where
    AuthConfig: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let config = AuthConfig::from_ref(state);

        let jar = CookieJar::from_request_parts(parts, state)
            .await
            .map_err(|_| AuthError::MissingSession)?;

        let token = jar
            .get(SESSION_COOKIE)
            .map(|cookie| cookie.value().to_string())
            .ok_or(AuthError::MissingSession)?;

        let claims = verify_session(&token, &config)?;

        Ok(SessionUser(claims))
    }
}
