//! Temperature measurement DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::api::dto::pagination::CursorQueryParams;
use crate::application::services::RecordMeasurement;
use crate::domain::entities::{TemperatureMeasurement, TemperatureUnits};

/// `POST /api/v1/measurements` request body.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RecordMeasurementRequest {
    pub sensor_id: Uuid,

    #[serde(default)]
    pub batch_id: Option<Uuid>,

    /// Plausible fermentation/mash range; wider values are sensor faults.
    #[validate(range(min = -60.0, max = 212.0))]
    pub temperature: f64,

    pub units: TemperatureUnits,

    pub recorded_at: DateTime<Utc>,
}

impl From<RecordMeasurementRequest> for RecordMeasurement {
    fn from(r: RecordMeasurementRequest) -> Self {
        Self {
            sensor_uuid: r.sensor_id,
            batch_uuid: r.batch_id,
            temperature: r.temperature,
            units: r.units,
            recorded_at: r.recorded_at,
        }
    }
}

/// Query parameters for `GET /api/v1/measurements`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementQueryParams {
    #[serde(flatten)]
    pub pagination: CursorQueryParams,

    #[serde(default)]
    pub sensor_id: Option<Uuid>,

    #[serde(default)]
    pub batch_id: Option<Uuid>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementResponse {
    pub id: Uuid,
    pub temperature: f64,
    pub units: TemperatureUnits,
    pub recorded_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl From<TemperatureMeasurement> for MeasurementResponse {
    fn from(m: TemperatureMeasurement) -> Self {
        Self {
            id: m.id,
            temperature: m.temperature,
            units: m.units,
            recorded_at: m.recorded_at,
            created_at: m.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_request_parses_wire_format() {
        let json = r#"{
            "sensorId": "4b4ef407-914a-42f9-8fd8-3a2a433cbbbf",
            "temperature": 18.5,
            "units": "CELSIUS",
            "recordedAt": "2026-08-01T12:00:00Z"
        }"#;

        let req: RecordMeasurementRequest = serde_json::from_str(json).unwrap();
        assert!(req.validate().is_ok());
        assert_eq!(req.units, TemperatureUnits::Celsius);
        assert!(req.batch_id.is_none());
    }

    #[test]
    fn test_implausible_temperature_is_rejected() {
        let req = RecordMeasurementRequest {
            sensor_id: Uuid::new_v4(),
            batch_id: None,
            temperature: 500.0,
            units: TemperatureUnits::Fahrenheit,
            recorded_at: Utc::now(),
        };
        assert!(req.validate().is_err());
    }
}
