//! Personal access token DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::{AuthToken, TokenKind, TokenScope};

/// `POST /api/v1/tokens` request body.
#[derive(Debug, Deserialize)]
pub struct CreateTokenRequest {
    pub scope: TokenScope,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

/// Token metadata exposed to clients. Never carries the secret hash.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub id: Uuid,
    pub scope: TokenScope,
    pub kind: TokenKind,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<AuthToken> for TokenResponse {
    fn from(t: AuthToken) -> Self {
        Self {
            id: t.id,
            scope: t.scope,
            kind: t.kind,
            expires_at: t.expires_at,
            created_at: t.created_at,
        }
    }
}

/// Creation response: metadata plus the one-time wire credential.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTokenResponse {
    #[serde(flatten)]
    pub token: TokenResponse,
    /// `tokenId:secret`, shown exactly once.
    pub wire_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_never_exposes_hash() {
        let token = AuthToken {
            id: Uuid::new_v4(),
            secret_hash: "super-secret-digest".to_string(),
            user_id: 1,
            scope: TokenScope::ReadAll,
            kind: TokenKind::PersonalAccess,
            expires_at: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_string(&TokenResponse::from(token)).unwrap();
        assert!(!json.contains("super-secret-digest"));
        assert!(json.contains("READ_ALL"));
    }
}
