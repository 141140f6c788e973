//! Login request/response DTOs.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// `POST /api/v1/login` request body.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub username: String,

    #[validate(length(min = 1))]
    pub password: String,
}

/// Successful login response.
///
/// `token` is the one-time wire credential (`tokenId:secret`); it is not
/// recoverable after this response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}
