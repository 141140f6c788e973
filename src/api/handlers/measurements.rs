//! Handlers for temperature measurement listing and ingestion.

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde_json::json;
use uuid::Uuid;

use crate::api::dto::measurement::{
    MeasurementQueryParams, MeasurementResponse, RecordMeasurementRequest,
};
use crate::application::services::AuthSession;
use crate::domain::entities::Permission;
use crate::domain::pagination::Page;
use crate::error::AppError;
use crate::state::AppState;
use validator::Validate;

/// Lists the authenticated user's measurements, optionally narrowed to a
/// single sensor and/or batch.
///
/// # Endpoint
///
/// `GET /api/v1/measurements?first=N&after=<cursor>&sensorId=<uuid>&batchId=<uuid>`
pub async fn measurement_list_handler(
    State(state): State<AppState>,
    Extension(session): Extension<AuthSession>,
    Query(params): Query<MeasurementQueryParams>,
) -> Result<Json<Page<MeasurementResponse>>, AppError> {
    session.require(Permission::ReadTemperatures)?;
    let (offset, first) = params.pagination.resolve()?;

    let page = state
        .measurement_service
        .list(
            session.user.id,
            params.sensor_id,
            params.batch_id,
            offset,
            first,
        )
        .await?;

    Ok(Json(page.map(MeasurementResponse::from)))
}

/// Fetches a single measurement by id.
///
/// # Endpoint
///
/// `GET /api/v1/measurements/{id}`
pub async fn measurement_get_handler(
    State(state): State<AppState>,
    Extension(session): Extension<AuthSession>,
    Path(id): Path<Uuid>,
) -> Result<Json<MeasurementResponse>, AppError> {
    session.require(Permission::ReadTemperatures)?;

    let measurement = state.measurement_service.get(session.user.id, id).await?;
    Ok(Json(measurement.into()))
}

/// Records a temperature reading from a sensor.
///
/// # Endpoint
///
/// `POST /api/v1/measurements`
///
/// Accepted from write-capable tokens, including the narrow
/// `WRITE_TEMPERATURES` scope handed to embedded devices.
pub async fn measurement_record_handler(
    State(state): State<AppState>,
    Extension(session): Extension<AuthSession>,
    Json(body): Json<RecordMeasurementRequest>,
) -> Result<(StatusCode, Json<MeasurementResponse>), AppError> {
    session.require(Permission::WriteTemperatures)?;

    body.validate().map_err(|e| {
        AppError::bad_request("Invalid measurement", json!({ "errors": e.to_string() }))
    })?;

    let stored = state
        .measurement_service
        .record(session.user.id, body.into())
        .await?;

    Ok((StatusCode::CREATED, Json(stored.into())))
}
