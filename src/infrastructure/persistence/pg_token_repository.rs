//! PostgreSQL implementation of the token repository.
//!
//! Stores only secret digests; raw secrets are never persisted. Revocation
//! is expressed as `expires_at = NOW()`, so revoked and naturally expired
//! tokens fail verification identically.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{AuthToken, NewAuthToken};
use crate::domain::repositories::TokenRepository;
use crate::error::AppError;

const TOKEN_COLUMNS: &str =
    "id, secret_hash, user_id, scope, kind, expires_at, created_at, updated_at";

pub struct PgTokenRepository {
    pool: Arc<PgPool>,
}

impl PgTokenRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TokenRepository for PgTokenRepository {
    async fn insert(&self, token: NewAuthToken) -> Result<AuthToken, AppError> {
        let token = sqlx::query_as::<_, AuthToken>(&format!(
            "INSERT INTO auth_tokens (secret_hash, user_id, scope, kind, expires_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {TOKEN_COLUMNS}"
        ))
        .bind(&token.secret_hash)
        .bind(token.user_id)
        .bind(token.scope)
        .bind(token.kind)
        .bind(token.expires_at)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(token)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<AuthToken>, AppError> {
        let token = sqlx::query_as::<_, AuthToken>(&format!(
            "SELECT {TOKEN_COLUMNS} FROM auth_tokens WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(token)
    }

    async fn list_for_user(&self, user_id: i64) -> Result<Vec<AuthToken>, AppError> {
        let tokens = sqlx::query_as::<_, AuthToken>(&format!(
            "SELECT {TOKEN_COLUMNS} FROM auth_tokens
             WHERE user_id = $1
             ORDER BY created_at DESC"
        ))
        .bind(user_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(tokens)
    }

    async fn revoke(&self, id: Uuid, user_id: i64) -> Result<(), AppError> {
        let result = sqlx::query(
            "UPDATE auth_tokens
             SET expires_at = NOW(), updated_at = NOW()
             WHERE id = $1 AND user_id = $2",
        )
        .bind(id)
        .bind(user_id)
        .execute(self.pool.as_ref())
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Token not found", json!({ "id": id })));
        }
        Ok(())
    }
}
