//! Artifact management API handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use timekeeper_auth::SessionUser;
use timekeeper_common::{Error, Result};
use uuid::Uuid;

use crate::api::middleware::ArchiveState;
use crate::domain::entities::{Artifact, ArtifactDetails, LikeStatus};

/// How many records the landing-page preview shows
const TOP_LIKED_LIMIT: i64 = 6;

/// Request for creating an artifact
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateArtifactRequest {
    #[serde(flatten)]
    pub details: ArtifactDetails,
    pub adder_name: Option<String>,
    pub adder_email: Option<String>,
}

/// Query parameters for the owner listing
#[derive(Debug, Deserialize)]
pub struct AddedQuery {
    pub search: Option<String>,
}

/// Request body for the like/unlike toggle
#[derive(Debug, Deserialize)]
pub struct ToggleLikeRequest {
    pub email: String,
}

/// Response for the like/unlike toggle
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleLikeResponse {
    pub message: &'static str,
    #[serde(flatten)]
    pub status: LikeStatus,
}

/// Acknowledgement for deletes; deleting a missing record is a zero-count
/// success, not an error
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    pub deleted_count: u64,
}

/// Top-liked artifacts for the landing page, capped at six
pub async fn list_top_liked(State(state): State<ArchiveState>) -> Result<Json<Vec<Artifact>>> {
    let artifacts = state.repos.artifacts.list_top_liked(TOP_LIKED_LIMIT).await?;
    Ok(Json(artifacts))
}

/// All artifacts, ascending by like count
pub async fn list_all(State(state): State<ArchiveState>) -> Result<Json<Vec<Artifact>>> {
    let artifacts = state.repos.artifacts.list_all().await?;
    Ok(Json(artifacts))
}

/// Get a single artifact by ID
pub async fn get_artifact(
    State(state): State<ArchiveState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Artifact>> {
    let artifact = state
        .repos
        .artifacts
        .find(id)
        .await?
        .ok_or_else(|| Error::NotFound("Artifact not found".to_string()))?;

    Ok(Json(artifact))
}

/// List artifacts liked by the given email; callers may only read their own
pub async fn list_liked(
    user: SessionUser,
    State(state): State<ArchiveState>,
    Path(email): Path<String>,
) -> Result<Json<Vec<Artifact>>> {
    user.authorize_subject(&email)?;

    let artifacts = state.repos.artifacts.list_liked_by(&email).await?;
    Ok(Json(artifacts))
}

/// List artifacts added by the given email, optionally filtered by name
pub async fn list_added(
    user: SessionUser,
    State(state): State<ArchiveState>,
    Path(email): Path<String>,
    Query(query): Query<AddedQuery>,
) -> Result<Json<Vec<Artifact>>> {
    user.authorize_subject(&email)?;

    let artifacts = state
        .repos
        .artifacts
        .list_by_adder(&email, query.search.as_deref())
        .await?;
    Ok(Json(artifacts))
}

/// Create an artifact owned by the authenticated user
pub async fn create_artifact(
    user: SessionUser,
    State(state): State<ArchiveState>,
    Json(req): Json<CreateArtifactRequest>,
) -> Result<Json<Artifact>> {
    // Ownership: a submission may only be filed under the session's email
    let adder_email = match req.adder_email {
        Some(email) => {
            user.authorize_subject(&email)?;
            email
        }
        None => user.0.email.clone(),
    };

    let artifact = Artifact::new(req.details, req.adder_name, adder_email);
    let created = state.repos.artifacts.create(&artifact).await?;

    Ok(Json(created))
}

/// Replace the caller-editable fields; inserts a fresh record when the ID
/// matches nothing (upsert)
pub async fn update_artifact(
    State(state): State<ArchiveState>,
    Path(id): Path<Uuid>,
    Json(details): Json<ArtifactDetails>,
) -> Result<Json<Artifact>> {
    let artifact = state.repos.artifacts.upsert_details(id, &details).await?;
    Ok(Json(artifact))
}

/// Delete an artifact by ID
pub async fn delete_artifact(
    State(state): State<ArchiveState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteResponse>> {
    let deleted_count = state.repos.artifacts.delete(id).await?;
    Ok(Json(DeleteResponse { deleted_count }))
}

/// Toggle the acting email in an artifact's liker set
pub async fn toggle_like(
    State(state): State<ArchiveState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ToggleLikeRequest>,
) -> Result<Json<ToggleLikeResponse>> {
    let status = state
        .repos
        .artifacts
        .toggle_like(id, &req.email)
        .await?
        .ok_or_else(|| Error::NotFound("Artifact not found".to_string()))?;

    Ok(Json(ToggleLikeResponse {
        message: "Like/Unlike toggled successfully",
        status,
    }))
}
