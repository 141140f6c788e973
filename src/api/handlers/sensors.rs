//! Handlers for sensor queries.

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
};
use uuid::Uuid;

use crate::api::dto::pagination::CursorQueryParams;
use crate::api::dto::sensor::SensorResponse;
use crate::application::services::AuthSession;
use crate::domain::entities::Permission;
use crate::domain::pagination::Page;
use crate::error::AppError;
use crate::state::AppState;

/// Lists the authenticated user's sensors as a cursor-paginated connection.
///
/// # Endpoint
///
/// `GET /api/v1/sensors?first=N&after=<cursor>`
pub async fn sensor_list_handler(
    State(state): State<AppState>,
    Extension(session): Extension<AuthSession>,
    Query(params): Query<CursorQueryParams>,
) -> Result<Json<Page<SensorResponse>>, AppError> {
    session.require(Permission::ReadAll)?;
    let (offset, first) = params.resolve()?;

    let page = state
        .sensor_service
        .list(session.user.id, offset, first)
        .await?;

    Ok(Json(page.map(SensorResponse::from)))
}

/// Fetches a single sensor by uuid.
///
/// # Endpoint
///
/// `GET /api/v1/sensors/{uuid}`
pub async fn sensor_get_handler(
    State(state): State<AppState>,
    Extension(session): Extension<AuthSession>,
    Path(uuid): Path<Uuid>,
) -> Result<Json<SensorResponse>, AppError> {
    session.require(Permission::ReadAll)?;

    let sensor = state.sensor_service.get(session.user.id, uuid).await?;
    Ok(Json(sensor.into()))
}
