//! Session issue and revoke handlers

use axum::{extract::State, Json};
use axum_extra::extract::CookieJar;
use serde::Deserialize;
use serde_json::json;

use timekeeper_artifacts::ArchiveState;
use timekeeper_auth::{build_session_cookie, clear_session_cookie, sign_session, AuthError};

/// User claims supplied at login
#[derive(Debug, Deserialize)]
pub struct SessionRequest {
    pub email: String,
}

/// Issue a session cookie for the supplied user claims
pub async fn issue_session(
    State(state): State<ArchiveState>,
    jar: CookieJar,
    Json(req): Json<SessionRequest>,
) -> Result<(CookieJar, Json<serde_json::Value>), AuthError> {
    let token = sign_session(&req.email, &state.auth)?;
    let jar = jar.add(build_session_cookie(token, state.auth.environment));

    tracing::debug!(email = %req.email, "Issued session cookie");

    Ok((jar, Json(json!({ "success": true }))))
}

/// Clear the session cookie
pub async fn logout(
    State(state): State<ArchiveState>,
    jar: CookieJar,
) -> (CookieJar, Json<serde_json::Value>) {
    let jar = jar.remove(clear_session_cookie(state.auth.environment));
    (jar, Json(json!({ "success": true })))
}
