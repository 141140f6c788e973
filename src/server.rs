//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, service wiring, and Axum server lifecycle.

use crate::config::Config;
use crate::infrastructure::persistence::{
    PgBatchRepository, PgMeasurementRepository, PgSensorRepository, PgTokenRepository,
    PgUserRepository,
};
use crate::application::services::{AuthService, BatchService, MeasurementService, SensorService};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Apply migrations
/// - Repositories and services
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Database connection fails
/// - Migrations fail
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to migrate")?;

    let pool = Arc::new(pool);
    let user_repository = Arc::new(PgUserRepository::new(pool.clone()));
    let token_repository = Arc::new(PgTokenRepository::new(pool.clone()));
    let batch_repository = Arc::new(PgBatchRepository::new(pool.clone()));
    let sensor_repository = Arc::new(PgSensorRepository::new(pool.clone()));
    let measurement_repository = Arc::new(PgMeasurementRepository::new(pool.clone()));

    let auth_service = Arc::new(AuthService::new(
        token_repository,
        user_repository,
        config.login_token_ttl(),
    ));
    let batch_service = Arc::new(BatchService::new(batch_repository.clone()));
    let sensor_service = Arc::new(SensorService::new(sensor_repository.clone()));
    let measurement_service = Arc::new(MeasurementService::new(
        measurement_repository,
        sensor_repository,
        batch_repository,
    ));

    let state = AppState::new(
        pool,
        auth_service,
        batch_service,
        sensor_service,
        measurement_service,
    );

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .await?;

    Ok(())
}
