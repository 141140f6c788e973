//! Query service for temperature sensors.

use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::Sensor;
use crate::domain::pagination::{Page, fetch_limit, paginate};
use crate::domain::repositories::SensorRepository;
use crate::error::AppError;

/// Read-side service for sensors.
pub struct SensorService {
    repository: Arc<dyn SensorRepository>,
}

impl SensorService {
    pub fn new(repository: Arc<dyn SensorRepository>) -> Self {
        Self { repository }
    }

    /// Fetches one page of the user's sensors starting at `offset`.
    pub async fn list(
        &self,
        user_id: i64,
        offset: i64,
        first: i64,
    ) -> Result<Page<Sensor>, AppError> {
        let rows = self
            .repository
            .list_for_user(user_id, offset, fetch_limit(first))
            .await?;
        Ok(paginate(rows, offset, first))
    }

    /// Fetches a single sensor owned by the user.
    pub async fn get(&self, user_id: i64, uuid: Uuid) -> Result<Sensor, AppError> {
        self.repository
            .find_by_uuid(user_id, uuid)
            .await?
            .ok_or_else(|| AppError::not_found("Sensor not found", json!({ "uuid": uuid })))
    }
}
