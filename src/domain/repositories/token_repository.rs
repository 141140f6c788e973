//! Repository trait for bearer token records.

use crate::domain::entities::{AuthToken, NewAuthToken};
use crate::error::AppError;
use async_trait::async_trait;
use uuid::Uuid;

/// Repository interface for bearer token storage.
///
/// Token ids are server-generated uuids and are never reused. Records are
/// immutable after issuance except for revocation, which sets `expires_at`
/// to the current time; there is no in-place secret rotation.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgTokenRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Persists a newly issued token and returns the stored record with its
    /// server-assigned id and timestamps.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert(&self, token: NewAuthToken) -> Result<AuthToken, AppError>;

    /// Looks up a token record by id, expired or not.
    ///
    /// Expiry is checked by the caller so that the secret comparison and the
    /// expiry check stay independent.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<AuthToken>, AppError>;

    /// Lists all tokens owned by a user, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_for_user(&self, user_id: i64) -> Result<Vec<AuthToken>, AppError>;

    /// Revokes a token by setting its expiry to now.
    ///
    /// Only revokes tokens owned by `user_id`; revoking an unknown or
    /// foreign token returns [`AppError::NotFound`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn revoke(&self, id: Uuid, user_id: i64) -> Result<(), AppError>;
}
