//! API route configuration.
//!
//! All API endpoints require Bearer token authentication via
//! [`crate::api::middleware::auth`].

use crate::api::handlers::{
    batch_get_handler, batch_list_handler, create_token_handler, list_tokens_handler, me_handler,
    measurement_get_handler, measurement_list_handler, measurement_record_handler,
    revoke_token_handler, sensor_get_handler, sensor_list_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get},
};

/// All API routes, protected by Bearer token authentication.
///
/// # Endpoints
///
/// - `GET    /me`                 - Fetch the authenticated user's profile
/// - `GET    /tokens`             - List the caller's active tokens
/// - `POST   /tokens`             - Mint a personal access token
/// - `DELETE /tokens/{id}`        - Revoke a token
/// - `GET    /batches`            - List batches (paginated)
/// - `GET    /batches/{uuid}`     - Fetch a single batch
/// - `GET    /sensors`            - List sensors (paginated)
/// - `GET    /sensors/{uuid}`     - Fetch a single sensor
/// - `GET    /measurements`       - List temperature measurements (paginated, filterable)
/// - `GET    /measurements/{id}`  - Fetch a single measurement
/// - `POST   /measurements`       - Record a temperature reading
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/me", get(me_handler))
        .route(
            "/tokens",
            get(list_tokens_handler).post(create_token_handler),
        )
        .route("/tokens/{id}", delete(revoke_token_handler))
        .route("/batches", get(batch_list_handler))
        .route("/batches/{uuid}", get(batch_get_handler))
        .route("/sensors", get(sensor_list_handler))
        .route("/sensors/{uuid}", get(sensor_get_handler))
        .route(
            "/measurements",
            get(measurement_list_handler).post(measurement_record_handler),
        )
        .route("/measurements/{id}", get(measurement_get_handler))
}
