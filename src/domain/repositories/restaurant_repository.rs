//! Repository trait for restaurant data access.

use crate::domain::entities::Restaurant;
use crate::error::AppError;
use async_trait::async_trait;

/// Read-only access to restaurants.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RestaurantRepository: Send + Sync {
    /// Fetches one restaurant with its endorsement ids resolved.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Restaurant>, AppError>;

    /// Lists every restaurant, each with its endorsement ids resolved.
    ///
    /// Used by availability search, which filters the full set in core
    /// logic.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Restaurant>, AppError>;

    /// Counts restaurants. Doubles as the health-check probe query.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}
