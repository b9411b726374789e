//! Contact submission repository (insert-only)

use sqlx::PgPool;
use timekeeper_common::Result;
use uuid::Uuid;

#[derive(Clone)]
pub struct ContactRepository {
    pool: PgPool,
}

impl ContactRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Store a free-form contact submission verbatim, returning its ID
    pub async fn create(&self, payload: &serde_json::Value) -> Result<Uuid> {
        let id = Uuid::new_v4();
        sqlx::query("INSERT INTO contact_submissions (id, payload, submitted_at) VALUES ($1, $2, NOW())")
            .bind(id)
            .bind(payload)
            .execute(&self.pool)
            .await?;

        Ok(id)
    }
}
