//! Query service for brewing batches.

use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::Batch;
use crate::domain::pagination::{Page, fetch_limit, paginate};
use crate::domain::repositories::BatchRepository;
use crate::error::AppError;

/// Read-side service for batches, composing the repository range query with
/// cursor pagination.
pub struct BatchService {
    repository: Arc<dyn BatchRepository>,
}

impl BatchService {
    pub fn new(repository: Arc<dyn BatchRepository>) -> Self {
        Self { repository }
    }

    /// Fetches one page of the user's batches starting at `offset`.
    ///
    /// Over-fetches by one row to detect a following page.
    pub async fn list(&self, user_id: i64, offset: i64, first: i64) -> Result<Page<Batch>, AppError> {
        let rows = self
            .repository
            .list_for_user(user_id, offset, fetch_limit(first))
            .await?;
        Ok(paginate(rows, offset, first))
    }

    /// Fetches a single batch owned by the user.
    pub async fn get(&self, user_id: i64, uuid: Uuid) -> Result<Batch, AppError> {
        self.repository
            .find_by_uuid(user_id, uuid)
            .await?
            .ok_or_else(|| AppError::not_found("Batch not found", json!({ "uuid": uuid })))
    }
}
