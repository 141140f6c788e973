#![allow(dead_code)]

use axum::{Router, middleware, routing::post};
use brewtrack::api::handlers::login_handler;
use brewtrack::api::middleware::auth;
use brewtrack::application::services::{
    AuthService, BatchService, MeasurementService, SensorService,
};
use brewtrack::domain::entities::{TokenKind, TokenScope};
use brewtrack::infrastructure::persistence::{
    PgBatchRepository, PgMeasurementRepository, PgSensorRepository, PgTokenRepository,
    PgUserRepository,
};
use brewtrack::state::AppState;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

pub fn create_test_state(pool: PgPool) -> AppState {
    let pool = Arc::new(pool);

    let user_repo = Arc::new(PgUserRepository::new(pool.clone()));
    let token_repo = Arc::new(PgTokenRepository::new(pool.clone()));
    let batch_repo = Arc::new(PgBatchRepository::new(pool.clone()));
    let sensor_repo = Arc::new(PgSensorRepository::new(pool.clone()));
    let measurement_repo = Arc::new(PgMeasurementRepository::new(pool.clone()));

    let auth_service = Arc::new(AuthService::new(token_repo, user_repo, None));
    let batch_service = Arc::new(BatchService::new(batch_repo.clone()));
    let sensor_service = Arc::new(SensorService::new(sensor_repo.clone()));
    let measurement_service = Arc::new(MeasurementService::new(
        measurement_repo,
        sensor_repo,
        batch_repo,
    ));

    AppState::new(
        pool,
        auth_service,
        batch_service,
        sensor_service,
        measurement_service,
    )
}

/// Full API surface without rate limiting (rate limiters need socket
/// connect-info, which `TestServer` does not provide).
pub fn create_test_app(state: AppState) -> Router {
    let protected = brewtrack::api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    Router::new()
        .nest("/api/v1", protected)
        .route("/api/v1/login", post(login_handler))
        .with_state(state)
}

/// Bcrypt hash of `password` at the minimum cost. Tests only; production
/// hashing goes through `hash_password`.
pub fn test_password_hash(password: &str) -> String {
    // Mirrors bcrypt's private minimum cost (4).
    bcrypt::hash(password, 4).unwrap()
}

pub async fn create_test_user(pool: &PgPool, email: &str, password: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO users (email, username, full_name, password_hash)
         VALUES ($1, $2, 'Test Brewer', $3)
         RETURNING id",
    )
    .bind(email)
    .bind(email.split('@').next().unwrap())
    .bind(test_password_hash(password))
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Issues a token through the real service and returns the wire credential.
pub async fn issue_wire_token(state: &AppState, user_id: i64, scope: TokenScope) -> String {
    state
        .auth_service
        .issue_token(user_id, scope, TokenKind::PersonalAccess, None)
        .await
        .unwrap()
        .wire_token()
}

pub async fn create_test_batch(pool: &PgPool, user_id: i64, name: &str) -> Uuid {
    sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO batches (user_id, name) VALUES ($1, $2) RETURNING uuid",
    )
    .bind(user_id)
    .bind(name)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_sensor(pool: &PgPool, user_id: i64, name: &str) -> Uuid {
    sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO sensors (user_id, name) VALUES ($1, $2) RETURNING uuid",
    )
    .bind(user_id)
    .bind(name)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn sensor_row_id(pool: &PgPool, uuid: Uuid) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT id FROM sensors WHERE uuid = $1")
        .bind(uuid)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_measurement(
    pool: &PgPool,
    user_id: i64,
    sensor_id: i64,
    temperature: f64,
    recorded_at: DateTime<Utc>,
) -> Uuid {
    sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO temperature_measurements (user_id, sensor_id, temperature, units, recorded_at)
         VALUES ($1, $2, $3, 1, $4)
         RETURNING id",
    )
    .bind(user_id)
    .bind(sensor_id)
    .bind(temperature)
    .bind(recorded_at)
    .fetch_one(pool)
    .await
    .unwrap()
}
