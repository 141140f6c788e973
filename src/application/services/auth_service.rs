//! Bearer token issuance, verification, and password login.
//!
//! Wire credential format: `"<tokenId>:<secret>"`. The secret is random
//! (192 bits, base64url) and only its SHA-512 digest is persisted, so a
//! database leak does not disclose usable credentials. Verification compares
//! digests in constant time and collapses every failure mode into one
//! externally visible rejection.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Duration, Utc};
use rand::TryRngCore;
use rand::rngs::OsRng;
use serde_json::json;
use sha2::{Digest, Sha512};
use std::sync::Arc;
use subtle::ConstantTimeEq;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::entities::{AuthToken, NewAuthToken, Permission, TokenKind, TokenScope, User};
use crate::domain::repositories::{TokenRepository, UserRepository};
use crate::error::AppError;

/// Default bcrypt cost for stored passwords.
///
/// Costs configured at or below the bcrypt minimum are silently raised to
/// this value instead of weakening the hash.
pub const DEFAULT_PASSWORD_COST: u32 = 13;

/// Mirrors bcrypt's minimum cost, which the crate does not export.
const MIN_COST: u32 = 4;

const SECRET_BYTES: usize = 24;

/// Server-side authentication failure taxonomy.
///
/// These variants exist for diagnostics only; conversion to [`AppError`]
/// collapses them into uniform client-facing rejections so a caller cannot
/// distinguish unknown ids from expired tokens or secret mismatches.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("credential is not of the form tokenId:secret")]
    MalformedCredential,
    #[error("unknown, expired, or mismatched token")]
    InvalidToken,
    #[error("no user for the given login identifier")]
    PrincipalNotFound,
    #[error("password verification failed")]
    InvalidCredential,
    #[error(transparent)]
    Store(#[from] AppError),
}

impl From<AuthError> for AppError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::MalformedCredential | AuthError::InvalidToken => {
                tracing::debug!(reason = %e, "token verification failed");
                AppError::unauthorized("Not authenticated", json!({}))
            }
            AuthError::PrincipalNotFound | AuthError::InvalidCredential => {
                tracing::debug!(reason = %e, "login failed");
                AppError::unauthorized("Invalid username or password", json!({}))
            }
            AuthError::Store(inner) => inner,
        }
    }
}

/// The verified identity attached to a request.
#[derive(Clone, Debug)]
pub struct AuthSession {
    pub user: User,
    pub scope: TokenScope,
}

impl AuthSession {
    /// Checks the session's token scope against a required permission.
    ///
    /// Every protected operation must call this with the permission it
    /// needs; scope is never enforced implicitly.
    pub fn require(&self, permission: Permission) -> Result<(), AppError> {
        if self.scope.permits(permission) {
            Ok(())
        } else {
            Err(AppError::forbidden(
                "Token scope does not permit this operation",
                json!({}),
            ))
        }
    }
}

/// A freshly issued token together with its one-time plaintext secret.
///
/// The secret is intentionally inaccessible except through [`wire_token`];
/// it is dropped with this value and cannot be recovered afterwards.
///
/// [`wire_token`]: IssuedToken::wire_token
#[derive(Clone, Debug)]
pub struct IssuedToken {
    pub token: AuthToken,
    secret: String,
}

impl IssuedToken {
    /// The credential the caller must echo back on every request.
    pub fn wire_token(&self) -> String {
        format!("{}:{}", self.token.id, self.secret)
    }
}

/// Hashes a password with bcrypt at the configured cost.
///
/// A cost at or below `MIN_COST` is replaced with
/// [`DEFAULT_PASSWORD_COST`].
pub fn hash_password(password: &str, cost: u32) -> Result<String, AppError> {
    let cost = if cost <= MIN_COST {
        DEFAULT_PASSWORD_COST
    } else {
        cost
    };
    bcrypt::hash(password, cost)
        .map_err(|e| AppError::internal("Password hashing failed", json!({ "kind": e.to_string() })))
}

/// Digests a token secret for storage and comparison.
fn hash_secret(secret: &str) -> String {
    URL_SAFE_NO_PAD.encode(Sha512::digest(secret.as_bytes()))
}

/// Generates a URL-safe random secret with 192 bits of entropy.
fn generate_secret() -> Result<String, AppError> {
    let mut buf = [0u8; SECRET_BYTES];
    OsRng
        .try_fill_bytes(&mut buf)
        .map_err(|_| AppError::internal("Secret generation failed", json!({})))?;
    Ok(URL_SAFE_NO_PAD.encode(buf))
}

/// Service for issuing and verifying bearer tokens and password logins.
///
/// Stateless per call; all mutable state lives in the injected repositories.
pub struct AuthService {
    tokens: Arc<dyn TokenRepository>,
    users: Arc<dyn UserRepository>,
    login_token_ttl: Option<Duration>,
}

impl AuthService {
    /// Creates a new authentication service.
    ///
    /// # Arguments
    ///
    /// - `tokens` - token record store
    /// - `users` - principal lookup
    /// - `login_token_ttl` - expiry applied to login-kind tokens; `None`
    ///   issues non-expiring session tokens
    pub fn new(
        tokens: Arc<dyn TokenRepository>,
        users: Arc<dyn UserRepository>,
        login_token_ttl: Option<Duration>,
    ) -> Self {
        Self {
            tokens,
            users,
            login_token_ttl,
        }
    }

    /// Issues a new token bound to a user and scope.
    ///
    /// The returned [`IssuedToken`] is the only place the plaintext secret
    /// ever exists; the store receives the digest.
    pub async fn issue_token(
        &self,
        user_id: i64,
        scope: TokenScope,
        kind: TokenKind,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<IssuedToken, AppError> {
        let secret = generate_secret()?;

        let token = self
            .tokens
            .insert(NewAuthToken {
                secret_hash: hash_secret(&secret),
                user_id,
                scope,
                kind,
                expires_at,
            })
            .await?;

        tracing::info!(token_id = %token.id, user_id, ?scope, ?kind, "issued token");

        Ok(IssuedToken { token, secret })
    }

    /// Verifies a presented wire credential and resolves the caller.
    ///
    /// Lookup, expiry, and secret comparison are independent checks that all
    /// collapse to [`AuthError::InvalidToken`]; the digest comparison runs in
    /// constant time and is evaluated even for expired tokens.
    pub async fn verify(&self, presented: &str) -> Result<AuthSession, AuthError> {
        let (id_part, secret_part) = presented
            .split_once(':')
            .ok_or(AuthError::MalformedCredential)?;
        if id_part.is_empty() || secret_part.is_empty() {
            return Err(AuthError::MalformedCredential);
        }

        // A non-uuid id cannot match any record.
        let token_id = Uuid::parse_str(id_part).map_err(|_| AuthError::InvalidToken)?;

        let token = self
            .tokens
            .find_by_id(token_id)
            .await?
            .ok_or(AuthError::InvalidToken)?;

        let expired = token.is_expired(Utc::now());
        let presented_hash = hash_secret(secret_part);
        let secret_ok: bool = presented_hash
            .as_bytes()
            .ct_eq(token.secret_hash.as_bytes())
            .into();

        if expired || !secret_ok {
            return Err(AuthError::InvalidToken);
        }

        let user = self
            .users
            .find_by_id(token.user_id)
            .await?
            .ok_or_else(|| {
                tracing::warn!(token_id = %token.id, "token references missing user");
                AuthError::InvalidToken
            })?;

        Ok(AuthSession {
            user,
            scope: token.scope,
        })
    }

    /// Verifies a username/password login.
    ///
    /// bcrypt verification runs on the blocking pool; the request task is
    /// not stalled for the hash duration.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or(AuthError::PrincipalNotFound)?;

        let stored_hash = user.password_hash.clone();
        let password = password.to_string();
        let verified = tokio::task::spawn_blocking(move || bcrypt::verify(password, &stored_hash))
            .await
            .map_err(|_| {
                AuthError::Store(AppError::internal("Password verification failed", json!({})))
            })?
            .unwrap_or(false);

        if !verified {
            return Err(AuthError::InvalidCredential);
        }
        Ok(user)
    }

    /// Password login: authenticates and mints a session token with full
    /// scope and the configured TTL.
    pub async fn login(&self, email: &str, password: &str) -> Result<IssuedToken, AppError> {
        let user = self.authenticate(email, password).await.map_err(AppError::from)?;

        let expires_at = self.login_token_ttl.map(|ttl| Utc::now() + ttl);
        self.issue_token(user.id, TokenScope::All, TokenKind::Login, expires_at)
            .await
    }

    /// Lists the caller's tokens. Secret hashes stay server-side; the API
    /// layer serializes only metadata.
    pub async fn list_tokens(&self, user_id: i64) -> Result<Vec<AuthToken>, AppError> {
        self.tokens.list_for_user(user_id).await
    }

    /// Revokes one of the caller's tokens by setting its expiry to now.
    pub async fn revoke_token(&self, user_id: i64, token_id: Uuid) -> Result<(), AppError> {
        self.tokens.revoke(token_id, user_id).await?;
        tracing::info!(%token_id, user_id, "revoked token");
        Ok(())
    }
}
