//! Contact form submission handler

use axum::{extract::State, Json};
use serde::Serialize;
use timekeeper_common::Result;
use uuid::Uuid;

use crate::api::middleware::ArchiveState;

/// Insert acknowledgement for a stored submission
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactResponse {
    pub acknowledged: bool,
    pub inserted_id: Uuid,
}

/// Store a free-form contact submission; write-only, no read-back
pub async fn submit_contact(
    State(state): State<ArchiveState>,
    Json(payload): Json<serde_json::Value>,
) -> Result<Json<ContactResponse>> {
    let inserted_id = state.repos.contacts.create(&payload).await?;

    Ok(Json(ContactResponse {
        acknowledged: true,
        inserted_id,
    }))
}
