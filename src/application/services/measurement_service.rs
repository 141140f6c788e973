//! Temperature measurement queries and ingestion.

use chrono::{DateTime, Utc};
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{NewTemperatureMeasurement, TemperatureMeasurement, TemperatureUnits};
use crate::domain::pagination::{Page, fetch_limit, paginate};
use crate::domain::repositories::{
    BatchRepository, MeasurementFilter, MeasurementRepository, SensorRepository,
};
use crate::error::AppError;

/// A reading submitted through the ingestion endpoint, already validated at
/// the API boundary but not yet resolved against owned sensors/batches.
#[derive(Debug, Clone)]
pub struct RecordMeasurement {
    pub sensor_uuid: Uuid,
    pub batch_uuid: Option<Uuid>,
    pub temperature: f64,
    pub units: TemperatureUnits,
    pub recorded_at: DateTime<Utc>,
}

/// Service for listing and recording temperature measurements.
pub struct MeasurementService {
    measurements: Arc<dyn MeasurementRepository>,
    sensors: Arc<dyn SensorRepository>,
    batches: Arc<dyn BatchRepository>,
}

impl MeasurementService {
    pub fn new(
        measurements: Arc<dyn MeasurementRepository>,
        sensors: Arc<dyn SensorRepository>,
        batches: Arc<dyn BatchRepository>,
    ) -> Self {
        Self {
            measurements,
            sensors,
            batches,
        }
    }

    /// Fetches one page of the user's measurements, optionally narrowed by
    /// sensor and batch.
    ///
    /// Filter uuids must reference entities owned by the caller; unknown
    /// ones are a 404 rather than an empty page, so typos are visible.
    pub async fn list(
        &self,
        user_id: i64,
        sensor_uuid: Option<Uuid>,
        batch_uuid: Option<Uuid>,
        offset: i64,
        first: i64,
    ) -> Result<Page<TemperatureMeasurement>, AppError> {
        let mut filter = MeasurementFilter::default();

        if let Some(uuid) = sensor_uuid {
            let sensor = self.sensors.find_by_uuid(user_id, uuid).await?.ok_or_else(
                || AppError::not_found("Sensor not found", json!({ "uuid": uuid })),
            )?;
            filter.sensor_id = Some(sensor.id);
        }
        if let Some(uuid) = batch_uuid {
            let batch = self.batches.find_by_uuid(user_id, uuid).await?.ok_or_else(
                || AppError::not_found("Batch not found", json!({ "uuid": uuid })),
            )?;
            filter.batch_id = Some(batch.id);
        }

        let rows = self
            .measurements
            .list_for_user(user_id, filter, offset, fetch_limit(first))
            .await?;
        Ok(paginate(rows, offset, first))
    }

    /// Fetches a single measurement owned by the user.
    pub async fn get(
        &self,
        user_id: i64,
        id: Uuid,
    ) -> Result<TemperatureMeasurement, AppError> {
        self.measurements
            .find_by_id(user_id, id)
            .await?
            .ok_or_else(|| AppError::not_found("Measurement not found", json!({ "id": id })))
    }

    /// Records a new reading after resolving sensor (and optional batch)
    /// ownership.
    pub async fn record(
        &self,
        user_id: i64,
        input: RecordMeasurement,
    ) -> Result<TemperatureMeasurement, AppError> {
        let sensor = self
            .sensors
            .find_by_uuid(user_id, input.sensor_uuid)
            .await?
            .ok_or_else(|| {
                AppError::bad_request(
                    "Specified sensor does not exist",
                    json!({ "sensor_id": input.sensor_uuid }),
                )
            })?;

        let batch_id = match input.batch_uuid {
            Some(uuid) => Some(
                self.batches
                    .find_by_uuid(user_id, uuid)
                    .await?
                    .ok_or_else(|| {
                        AppError::bad_request(
                            "Specified batch does not exist",
                            json!({ "batch_id": uuid }),
                        )
                    })?
                    .id,
            ),
            None => None,
        };

        self.measurements
            .insert(NewTemperatureMeasurement {
                user_id,
                sensor_id: sensor.id,
                batch_id,
                temperature: input.temperature,
                units: input.units,
                recorded_at: input.recorded_at,
            })
            .await
    }
}
