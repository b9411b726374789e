//! Artifacts domain state and auth gate integration

use crate::ArchiveRepositories;
use axum::extract::FromRef;
use timekeeper_auth::AuthConfig;

/// Application state for the Artifacts domain
#[derive(Clone)]
pub struct ArchiveState {
    pub repos: ArchiveRepositories,
    pub auth: AuthConfig,
}

impl FromRef<ArchiveState> for AuthConfig {
    fn from_ref(state: &ArchiveState) -> Self {
        state.auth.clone()
    }
}
