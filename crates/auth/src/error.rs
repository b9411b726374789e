//! Authentication errors

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Authentication error
#[derive(Debug)]
pub enum AuthError {
    /// No session cookie on the request
    MissingSession,
    /// Session cookie present but the token is invalid or expired
    InvalidSession,
    /// Verified session belongs to a different email than the target resource
    EmailMismatch,
    /// Token signing failed
    TokenCreation,
}

impl From<AuthError> for timekeeper_common::Error {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MissingSession => {
                timekeeper_common::Error::Authentication("Session cookie required".to_string())
            }
            AuthError::InvalidSession => {
                timekeeper_common::Error::Authentication("Invalid or expired session".to_string())
            }
            AuthError::EmailMismatch => timekeeper_common::Error::Authorization(
                "Session does not match the requested email".to_string(),
            ),
            AuthError::TokenCreation => {
                timekeeper_common::Error::Internal("Failed to create session token".to_string())
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AuthError::MissingSession => (
                StatusCode::UNAUTHORIZED,
                "MISSING_SESSION",
                "Session cookie required",
            ),
            AuthError::InvalidSession => (
                StatusCode::UNAUTHORIZED,
                "INVALID_SESSION",
                "Invalid or expired session",
            ),
            AuthError::EmailMismatch => (
                StatusCode::FORBIDDEN,
                "EMAIL_MISMATCH",
                "Session does not match the requested email",
            ),
            AuthError::TokenCreation => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "TOKEN_CREATION",
                "Failed to create session token",
            ),
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}
