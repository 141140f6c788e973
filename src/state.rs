//! Shared application state injected into handlers.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{AuthService, BatchService, MeasurementService, SensorService};

/// Handle bundle cloned into every request handler.
///
/// Services are constructed once at startup with their repositories
/// injected; no handler reaches for a database connection directly except
/// the health check.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<PgPool>,
    pub auth_service: Arc<AuthService>,
    pub batch_service: Arc<BatchService>,
    pub sensor_service: Arc<SensorService>,
    pub measurement_service: Arc<MeasurementService>,
}

impl AppState {
    pub fn new(
        db: Arc<PgPool>,
        auth_service: Arc<AuthService>,
        batch_service: Arc<BatchService>,
        sensor_service: Arc<SensorService>,
        measurement_service: Arc<MeasurementService>,
    ) -> Self {
        Self {
            db,
            auth_service,
            batch_service,
            sensor_service,
            measurement_service,
        }
    }
}
