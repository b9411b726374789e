//! Route definitions for Artifacts domain API

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use super::handlers::{artifacts, contact};
use super::middleware::ArchiveState;

/// Create artifact routes
fn artifact_routes() -> Router<ArchiveState> {
    Router::new()
        .route("/artifacts/limit", get(artifacts::list_top_liked))
        .route(
            "/artifacts",
            get(artifacts::list_all).post(artifacts::create_artifact),
        )
        .route("/artifacts/{id}", get(artifacts::get_artifact))
        .route("/artifacts/liked/{email}", get(artifacts::list_liked))
        .route("/artifacts/added/{email}", get(artifacts::list_added))
        .route("/artifacts/update/{id}", put(artifacts::update_artifact))
        .route("/artifacts/delete/{id}", delete(artifacts::delete_artifact))
        .route("/artifacts/like-unlike/{id}", post(artifacts::toggle_like))
}

/// Create contact routes
fn contact_routes() -> Router<ArchiveState> {
    Router::new().route("/contact", post(contact::submit_contact))
}

/// Create all Artifacts domain API routes
pub fn routes() -> Router<ArchiveState> {
    Router::new().merge(artifact_routes()).merge(contact_routes())
}
