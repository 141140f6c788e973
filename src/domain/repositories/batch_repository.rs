//! Repository trait for brewing batches.

use crate::domain::entities::Batch;
use crate::error::AppError;
use async_trait::async_trait;
use uuid::Uuid;

/// Repository interface for batch queries.
///
/// Supplies the generic "fetch a page of records given an offset and a
/// limit" capability consumed by cursor pagination.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BatchRepository: Send + Sync {
    /// Fetches an ordered range of the user's batches.
    ///
    /// Ordering is stable (creation order) so that offset-based resumption
    /// does not skip or repeat rows between requests.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_for_user(
        &self,
        user_id: i64,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Batch>, AppError>;

    /// Finds a single batch by uuid, scoped to its owner.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_uuid(&self, user_id: i64, uuid: Uuid) -> Result<Option<Batch>, AppError>;
}
