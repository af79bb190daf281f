//! Repository trait for table data access.

use crate::domain::entities::Table;
use crate::error::AppError;
use async_trait::async_trait;

/// Read-only access to restaurant tables.
///
/// Capacity and occupancy filtering happen in
/// [`crate::domain::allocation`]; the repository just hands over the rows.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TableRepository: Send + Sync {
    /// Fetches all tables owned by one restaurant.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_restaurant(&self, restaurant_id: i64) -> Result<Vec<Table>, AppError>;

    /// Fetches every table across all restaurants, for availability search.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_all(&self) -> Result<Vec<Table>, AppError>;
}
