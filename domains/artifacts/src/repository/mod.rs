//! Repository layer for the Artifacts domain

mod artifacts;
mod contacts;

pub use artifacts::ArtifactRepository;
pub use contacts::ContactRepository;

use sqlx::PgPool;

/// All repositories of the Artifacts domain, sharing one pool
#[derive(Clone)]
pub struct ArchiveRepositories {
    pub artifacts: ArtifactRepository,
    pub contacts: ContactRepository,
}

impl ArchiveRepositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            artifacts: ArtifactRepository::new(pool.clone()),
            contacts: ContactRepository::new(pool),
        }
    }
}
