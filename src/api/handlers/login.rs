//! Handler for password login.

use axum::{Json, extract::State};
use serde_json::json;
use validator::Validate;

use crate::api::dto::login::{LoginRequest, LoginResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Exchanges a username/password for a session token.
///
/// # Endpoint
///
/// `POST /api/v1/login`
///
/// # Response
///
/// The wire credential (`tokenId:secret`) is returned exactly once; the
/// server keeps only the secret's digest. Unknown users and wrong passwords
/// produce the same 401 body.
pub async fn login_handler(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    body.validate()
        .map_err(|e| AppError::bad_request("Invalid login request", json!({ "errors": e.to_string() })))?;

    let issued = state
        .auth_service
        .login(&body.username, &body.password)
        .await?;

    Ok(Json(LoginResponse {
        token: issued.wire_token(),
    }))
}
