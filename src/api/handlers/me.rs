//! Handler for the authenticated user's own profile.

use axum::{Extension, Json};

use crate::api::dto::user::UserResponse;
use crate::application::services::AuthSession;
use crate::domain::entities::Permission;
use crate::error::AppError;

/// Returns the profile of the user the presented token belongs to.
///
/// # Endpoint
///
/// `GET /api/v1/me`
pub async fn me_handler(
    Extension(session): Extension<AuthSession>,
) -> Result<Json<UserResponse>, AppError> {
    session.require(Permission::ReadAll)?;

    Ok(Json(session.user.into()))
}
