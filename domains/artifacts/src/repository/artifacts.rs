//! Artifact repository
//!
//! Every operation is a single statement; cross-request safety relies on the
//! store's per-row atomicity, not on application-level locking.

use crate::domain::entities::{Artifact, ArtifactDetails, LikeStatus};
use sqlx::PgPool;
use timekeeper_common::Result;
use uuid::Uuid;

/// All columns in the artifacts table, used for SELECT and RETURNING clauses.
const ARTIFACT_COLUMNS: &str = "\
    id, name, artifact_type, \
    discovered_by, discovered_at, present_location, \
    image_url, historical_context, created_at, \
    adder_name, adder_email, \
    like_count, liked_by";

/// Escape ILIKE pattern metacharacters so a search term matches literally
fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

#[derive(Clone)]
pub struct ArtifactRepository {
    pool: PgPool,
}

impl ArtifactRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find artifact by ID
    pub async fn find(&self, id: Uuid) -> Result<Option<Artifact>> {
        let query = format!("SELECT {ARTIFACT_COLUMNS} FROM artifacts WHERE id = $1");
        let artifact = sqlx::query_as::<_, Artifact>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(artifact)
    }

    /// Most-liked artifacts for the landing-page preview
    pub async fn list_top_liked(&self, limit: i64) -> Result<Vec<Artifact>> {
        let query = format!(
            "SELECT {ARTIFACT_COLUMNS} FROM artifacts \
             ORDER BY like_count DESC LIMIT $1"
        );
        let artifacts = sqlx::query_as::<_, Artifact>(&query)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;

        Ok(artifacts)
    }

    /// All artifacts, ascending by like count (the inverse of the landing
    /// preview ordering)
    pub async fn list_all(&self) -> Result<Vec<Artifact>> {
        let query = format!(
            "SELECT {ARTIFACT_COLUMNS} FROM artifacts \
             ORDER BY like_count ASC"
        );
        let artifacts = sqlx::query_as::<_, Artifact>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(artifacts)
    }

    /// Artifacts whose liker set contains the given email
    pub async fn list_liked_by(&self, email: &str) -> Result<Vec<Artifact>> {
        let query = format!(
            "SELECT {ARTIFACT_COLUMNS} FROM artifacts \
             WHERE $1 = ANY(liked_by) ORDER BY like_count DESC"
        );
        let artifacts = sqlx::query_as::<_, Artifact>(&query)
            .bind(email)
            .fetch_all(&self.pool)
            .await?;

        Ok(artifacts)
    }

    /// Artifacts owned by the given email, with an optional case-insensitive
    /// substring filter on the name. The search term is matched literally;
    /// ILIKE metacharacters have no special meaning.
    pub async fn list_by_adder(&self, email: &str, search: Option<&str>) -> Result<Vec<Artifact>> {
        let query = format!(
            "SELECT {ARTIFACT_COLUMNS} FROM artifacts \
             WHERE adder_email = $1 \
               AND ($2::TEXT IS NULL OR name ILIKE '%' || $2 || '%')"
        );
        let artifacts = sqlx::query_as::<_, Artifact>(&query)
            .bind(email)
            .bind(search.map(escape_like))
            .fetch_all(&self.pool)
            .await?;

        Ok(artifacts)
    }

    /// Create a new artifact
    pub async fn create(&self, artifact: &Artifact) -> Result<Artifact> {
        let query = format!(
            "INSERT INTO artifacts ({ARTIFACT_COLUMNS}) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13) \
             RETURNING {ARTIFACT_COLUMNS}"
        );
        let created = sqlx::query_as::<_, Artifact>(&query)
            .bind(artifact.id)
            .bind(&artifact.name)
            .bind(&artifact.artifact_type)
            .bind(&artifact.discovered_by)
            .bind(&artifact.discovered_at)
            .bind(&artifact.present_location)
            .bind(&artifact.image_url)
            .bind(&artifact.historical_context)
            .bind(&artifact.created_at)
            .bind(&artifact.adder_name)
            .bind(&artifact.adder_email)
            .bind(artifact.like_count)
            .bind(&artifact.liked_by)
            .fetch_one(&self.pool)
            .await?;

        Ok(created)
    }

    /// Replace the caller-editable fields of the matching artifact, inserting
    /// a fresh record under the supplied ID when none matches
    pub async fn upsert_details(&self, id: Uuid, details: &ArtifactDetails) -> Result<Artifact> {
        let query = format!(
            "INSERT INTO artifacts \
                 (id, name, artifact_type, discovered_by, discovered_at, \
                  present_location, image_url, historical_context, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             ON CONFLICT (id) DO UPDATE SET \
                 name = EXCLUDED.name, \
                 artifact_type = EXCLUDED.artifact_type, \
                 discovered_by = EXCLUDED.discovered_by, \
                 discovered_at = EXCLUDED.discovered_at, \
                 present_location = EXCLUDED.present_location, \
                 image_url = EXCLUDED.image_url, \
                 historical_context = EXCLUDED.historical_context, \
                 created_at = EXCLUDED.created_at \
             RETURNING {ARTIFACT_COLUMNS}"
        );
        let artifact = sqlx::query_as::<_, Artifact>(&query)
            .bind(id)
            .bind(&details.name)
            .bind(&details.artifact_type)
            .bind(&details.discovered_by)
            .bind(&details.discovered_at)
            .bind(&details.present_location)
            .bind(&details.image_url)
            .bind(&details.historical_context)
            .bind(&details.created_at)
            .fetch_one(&self.pool)
            .await?;

        Ok(artifact)
    }

    /// Delete the matching artifact; deleting a missing record is not an error
    pub async fn delete(&self, id: Uuid) -> Result<u64> {
        let result = sqlx::query("DELETE FROM artifacts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Toggle `email` in the liker set of one artifact.
    ///
    /// A single atomic mutation: membership is tested against the row's
    /// current value inside the same statement, so an already-present email
    /// is removed (and the counter decremented) and an absent one appended
    /// (and the counter incremented) without a read-modify-write window.
    /// A removal that empties the set stores NULL, keeping the
    /// "absent means zero" invariant. Returns `None` when no artifact
    /// matches.
    pub async fn toggle_like(&self, id: Uuid, email: &str) -> Result<Option<LikeStatus>> {
        let status = sqlx::query_as::<_, LikeStatus>(
            "UPDATE artifacts SET \
                 liked_by = CASE \
                     WHEN $2 = ANY(COALESCE(liked_by, ARRAY[]::TEXT[])) \
                         THEN NULLIF(array_remove(liked_by, $2), ARRAY[]::TEXT[]) \
                     ELSE array_append(COALESCE(liked_by, ARRAY[]::TEXT[]), $2) \
                 END, \
                 like_count = CASE \
                     WHEN $2 = ANY(COALESCE(liked_by, ARRAY[]::TEXT[])) \
                         THEN like_count - 1 \
                     ELSE like_count + 1 \
                 END \
             WHERE id = $1 \
             RETURNING like_count, liked_by",
        )
        .bind(id)
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        if let Some(status) = &status {
            tracing::debug!(artifact_id = %id, like_count = status.like_count, "Toggled like");
        }

        Ok(status)
    }
}
