//! Handlers for batch queries.

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
};
use uuid::Uuid;

use crate::api::dto::batch::BatchResponse;
use crate::api::dto::pagination::CursorQueryParams;
use crate::application::services::AuthSession;
use crate::domain::entities::Permission;
use crate::domain::pagination::Page;
use crate::error::AppError;
use crate::state::AppState;

/// Lists the authenticated user's batches as a cursor-paginated connection.
///
/// # Endpoint
///
/// `GET /api/v1/batches?first=N&after=<cursor>`
///
/// # Response
///
/// ```json
/// {
///   "edges": [{"node": {...}, "cursor": "eyJvZmZzZXQiOjF9"}],
///   "pageInfo": {"hasNextPage": true, "hasPreviousPage": false}
/// }
/// ```
pub async fn batch_list_handler(
    State(state): State<AppState>,
    Extension(session): Extension<AuthSession>,
    Query(params): Query<CursorQueryParams>,
) -> Result<Json<Page<BatchResponse>>, AppError> {
    session.require(Permission::ReadAll)?;
    let (offset, first) = params.resolve()?;

    let page = state
        .batch_service
        .list(session.user.id, offset, first)
        .await?;

    Ok(Json(page.map(BatchResponse::from)))
}

/// Fetches a single batch by uuid.
///
/// # Endpoint
///
/// `GET /api/v1/batches/{uuid}`
pub async fn batch_get_handler(
    State(state): State<AppState>,
    Extension(session): Extension<AuthSession>,
    Path(uuid): Path<Uuid>,
) -> Result<Json<BatchResponse>, AppError> {
    session.require(Permission::ReadAll)?;

    let batch = state.batch_service.get(session.user.id, uuid).await?;
    Ok(Json(batch.into()))
}
