//! Artifacts domain: museum-artifact records, like toggling, contact submissions

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{Artifact, ArtifactDetails, LikeStatus};

// Re-export repository types
pub use repository::{ArchiveRepositories, ArtifactRepository, ContactRepository};

// Re-export API types
pub use api::routes;
pub use api::ArchiveState;
