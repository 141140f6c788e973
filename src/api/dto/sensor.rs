//! Sensor response DTOs.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::entities::Sensor;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SensorResponse {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Sensor> for SensorResponse {
    fn from(s: Sensor) -> Self {
        Self {
            id: s.uuid,
            name: s.name,
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}
