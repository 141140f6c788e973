//! PostgreSQL implementation of the batch repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::Batch;
use crate::domain::repositories::BatchRepository;
use crate::error::AppError;

const BATCH_COLUMNS: &str = "id, uuid, user_id, name, brew_notes, tasting_notes, brewed_at, \
                             bottled_at, recipe_url, created_at, updated_at";

pub struct PgBatchRepository {
    pool: Arc<PgPool>,
}

impl PgBatchRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BatchRepository for PgBatchRepository {
    async fn list_for_user(
        &self,
        user_id: i64,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Batch>, AppError> {
        // Insertion order keeps offsets stable between page fetches.
        let batches = sqlx::query_as::<_, Batch>(&format!(
            "SELECT {BATCH_COLUMNS} FROM batches
             WHERE user_id = $1
             ORDER BY id
             OFFSET $2 LIMIT $3"
        ))
        .bind(user_id)
        .bind(offset)
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(batches)
    }

    async fn find_by_uuid(&self, user_id: i64, uuid: Uuid) -> Result<Option<Batch>, AppError> {
        let batch = sqlx::query_as::<_, Batch>(&format!(
            "SELECT {BATCH_COLUMNS} FROM batches WHERE user_id = $1 AND uuid = $2"
        ))
        .bind(user_id)
        .bind(uuid)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(batch)
    }
}
