//! Repository trait for endorsement data access.

use crate::domain::entities::Endorsement;
use crate::error::AppError;
use async_trait::async_trait;

/// Read-only access to dietary endorsements.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EndorsementRepository: Send + Sync {
    /// Fetches the endorsements certifying the restrictions held by any of
    /// the given users.
    ///
    /// The union of the returned ids is the set a restaurant must offer to
    /// accommodate the party.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_users(&self, user_ids: &[i64]) -> Result<Vec<Endorsement>, AppError>;
}
