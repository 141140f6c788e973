//! Handlers for personal access token management.

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::api::dto::token::{CreateTokenRequest, CreateTokenResponse, TokenResponse};
use crate::application::services::AuthSession;
use crate::domain::entities::{Permission, TokenKind};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a personal access token for the authenticated user.
///
/// # Endpoint
///
/// `POST /api/v1/tokens`
///
/// The response carries the wire credential exactly once. The new token's
/// scope may be narrower than the session's but is not widened: minting is
/// a full-scope operation, so only All-scope sessions may create tokens.
pub async fn create_token_handler(
    State(state): State<AppState>,
    Extension(session): Extension<AuthSession>,
    Json(body): Json<CreateTokenRequest>,
) -> Result<(StatusCode, Json<CreateTokenResponse>), AppError> {
    session.require(Permission::ManageTokens)?;

    let issued = state
        .auth_service
        .issue_token(
            session.user.id,
            body.scope,
            TokenKind::PersonalAccess,
            body.expires_at,
        )
        .await?;

    let wire_token = issued.wire_token();
    Ok((
        StatusCode::CREATED,
        Json(CreateTokenResponse {
            token: issued.token.into(),
            wire_token,
        }),
    ))
}

/// Lists the authenticated user's tokens (metadata only).
///
/// # Endpoint
///
/// `GET /api/v1/tokens`
pub async fn list_tokens_handler(
    State(state): State<AppState>,
    Extension(session): Extension<AuthSession>,
) -> Result<Json<Vec<TokenResponse>>, AppError> {
    session.require(Permission::ManageTokens)?;

    let tokens = state.auth_service.list_tokens(session.user.id).await?;
    Ok(Json(tokens.into_iter().map(TokenResponse::from).collect()))
}

/// Revokes one of the authenticated user's tokens.
///
/// # Endpoint
///
/// `DELETE /api/v1/tokens/{id}`
///
/// Revocation sets the token's expiry to now; the record remains for audit.
pub async fn revoke_token_handler(
    State(state): State<AppState>,
    Extension(session): Extension<AuthSession>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    session.require(Permission::ManageTokens)?;

    state.auth_service.revoke_token(session.user.id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
