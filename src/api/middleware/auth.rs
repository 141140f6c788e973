//! Bearer token authentication middleware.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;

use crate::{error::AppError, state::AppState};

/// Authenticates requests using Bearer tokens from the Authorization header.
///
/// # Header Format
///
/// ```text
/// Authorization: Bearer <tokenId>:<secret>
/// ```
///
/// # Authentication Flow
///
/// 1. Extract the wire credential from the `Authorization` header
/// 2. Verify it (record lookup, expiry, constant-time digest comparison)
/// 3. Attach the resolved [`AuthSession`] to request extensions
/// 4. Continue to the handler, which enforces its required scope
///
/// # Errors
///
/// Returns `401 Unauthorized` (with `WWW-Authenticate: Bearer` per RFC
/// 6750) if the header is missing or the credential fails verification.
/// The response never says which check failed.
///
/// [`AuthSession`]: crate::application::services::AuthSession
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBearer(credential) = AuthBearer::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| {
            AppError::unauthorized(
                "Not authenticated",
                serde_json::json!({"reason": "Authorization header is missing or invalid"}),
            )
        })?;

    let session = st.auth_service.verify(&credential).await?;

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(session);

    Ok(next.run(req).await)
}
