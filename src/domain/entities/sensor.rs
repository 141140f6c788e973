//! Sensor entity for temperature-reporting hardware.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A temperature sensor registered by a user.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Sensor {
    pub id: i64,
    pub uuid: Uuid,
    pub user_id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
