//! Repository trait for temperature measurements.

use crate::domain::entities::{NewTemperatureMeasurement, TemperatureMeasurement};
use crate::error::AppError;
use async_trait::async_trait;
use uuid::Uuid;

/// Filter for measurement range queries.
///
/// `sensor_id` / `batch_id` narrow the result set; both are optional and
/// combine with AND.
#[derive(Debug, Clone, Default)]
pub struct MeasurementFilter {
    pub sensor_id: Option<i64>,
    pub batch_id: Option<i64>,
}

/// Repository interface for temperature readings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MeasurementRepository: Send + Sync {
    /// Fetches an ordered range of the user's measurements, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_for_user(
        &self,
        user_id: i64,
        filter: MeasurementFilter,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<TemperatureMeasurement>, AppError>;

    /// Looks up a single measurement owned by the user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(
        &self,
        user_id: i64,
        id: Uuid,
    ) -> Result<Option<TemperatureMeasurement>, AppError>;

    /// Persists a new measurement and returns the stored row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert(
        &self,
        measurement: NewTemperatureMeasurement,
    ) -> Result<TemperatureMeasurement, AppError>;
}
