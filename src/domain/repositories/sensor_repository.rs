//! Repository trait for temperature sensors.

use crate::domain::entities::Sensor;
use crate::error::AppError;
use async_trait::async_trait;
use uuid::Uuid;

/// Repository interface for sensor queries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SensorRepository: Send + Sync {
    /// Fetches an ordered range of the user's sensors.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_for_user(
        &self,
        user_id: i64,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Sensor>, AppError>;

    /// Finds a single sensor by uuid, scoped to its owner.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_uuid(&self, user_id: i64, uuid: Uuid) -> Result<Option<Sensor>, AppError>;
}
