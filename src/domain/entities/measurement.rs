//! Temperature measurement entity and units.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unit a temperature value was recorded in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(i32)]
pub enum TemperatureUnits {
    Fahrenheit = 0,
    Celsius = 1,
}

/// A single temperature reading from a sensor, optionally attributed to a
/// batch that was fermenting at the time.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TemperatureMeasurement {
    pub id: Uuid,
    pub user_id: i64,
    pub sensor_id: i64,
    pub batch_id: Option<i64>,
    pub temperature: f64,
    pub units: TemperatureUnits,
    pub recorded_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input data for recording a new measurement.
#[derive(Debug, Clone)]
pub struct NewTemperatureMeasurement {
    pub user_id: i64,
    pub sensor_id: i64,
    pub batch_id: Option<i64>,
    pub temperature: f64,
    pub units: TemperatureUnits,
    pub recorded_at: DateTime<Utc>,
}
