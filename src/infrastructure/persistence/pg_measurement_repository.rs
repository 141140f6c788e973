//! PostgreSQL implementation of the measurement repository.

use async_trait::async_trait;
use sqlx::{PgPool, QueryBuilder};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{NewTemperatureMeasurement, TemperatureMeasurement};
use crate::domain::repositories::{MeasurementFilter, MeasurementRepository};
use crate::error::AppError;

const MEASUREMENT_COLUMNS: &str = "id, user_id, sensor_id, batch_id, temperature, units, \
                                   recorded_at, created_at, updated_at";

pub struct PgMeasurementRepository {
    pool: Arc<PgPool>,
}

impl PgMeasurementRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MeasurementRepository for PgMeasurementRepository {
    async fn list_for_user(
        &self,
        user_id: i64,
        filter: MeasurementFilter,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<TemperatureMeasurement>, AppError> {
        let mut query = QueryBuilder::new(format!(
            "SELECT {MEASUREMENT_COLUMNS} FROM temperature_measurements WHERE user_id = "
        ));
        query.push_bind(user_id);

        if let Some(sensor_id) = filter.sensor_id {
            query.push(" AND sensor_id = ");
            query.push_bind(sensor_id);
        }
        if let Some(batch_id) = filter.batch_id {
            query.push(" AND batch_id = ");
            query.push_bind(batch_id);
        }

        // Recording order is the pagination order.
        query.push(" ORDER BY recorded_at, id OFFSET ");
        query.push_bind(offset);
        query.push(" LIMIT ");
        query.push_bind(limit);

        let measurements = query
            .build_query_as::<TemperatureMeasurement>()
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(measurements)
    }

    async fn find_by_id(
        &self,
        user_id: i64,
        id: Uuid,
    ) -> Result<Option<TemperatureMeasurement>, AppError> {
        let measurement = sqlx::query_as::<_, TemperatureMeasurement>(&format!(
            "SELECT {MEASUREMENT_COLUMNS} FROM temperature_measurements
             WHERE user_id = $1 AND id = $2"
        ))
        .bind(user_id)
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(measurement)
    }

    async fn insert(
        &self,
        measurement: NewTemperatureMeasurement,
    ) -> Result<TemperatureMeasurement, AppError> {
        let measurement = sqlx::query_as::<_, TemperatureMeasurement>(&format!(
            "INSERT INTO temperature_measurements
                 (user_id, sensor_id, batch_id, temperature, units, recorded_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {MEASUREMENT_COLUMNS}"
        ))
        .bind(measurement.user_id)
        .bind(measurement.sensor_id)
        .bind(measurement.batch_id)
        .bind(measurement.temperature)
        .bind(measurement.units)
        .bind(measurement.recorded_at)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(measurement)
    }
}
