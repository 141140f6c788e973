//! PostgreSQL implementation of the sensor repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::Sensor;
use crate::domain::repositories::SensorRepository;
use crate::error::AppError;

const SENSOR_COLUMNS: &str = "id, uuid, user_id, name, created_at, updated_at";

pub struct PgSensorRepository {
    pool: Arc<PgPool>,
}

impl PgSensorRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SensorRepository for PgSensorRepository {
    async fn list_for_user(
        &self,
        user_id: i64,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Sensor>, AppError> {
        let sensors = sqlx::query_as::<_, Sensor>(&format!(
            "SELECT {SENSOR_COLUMNS} FROM sensors
             WHERE user_id = $1
             ORDER BY id
             OFFSET $2 LIMIT $3"
        ))
        .bind(user_id)
        .bind(offset)
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(sensors)
    }

    async fn find_by_uuid(&self, user_id: i64, uuid: Uuid) -> Result<Option<Sensor>, AppError> {
        let sensor = sqlx::query_as::<_, Sensor>(&format!(
            "SELECT {SENSOR_COLUMNS} FROM sensors WHERE user_id = $1 AND uuid = $2"
        ))
        .bind(user_id)
        .bind(uuid)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(sensor)
    }
}
