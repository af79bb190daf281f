//! Repository trait for reservation data access.

use crate::domain::entities::{NewReservation, Reservation};
use crate::domain::time_window::TimeWindow;
use crate::error::AppError;
use async_trait::async_trait;

/// Filter for window-scoped reservation queries.
///
/// `window` always applies, half-open over start times
/// (`lower <= start_time < upper`). `restaurant_id` and `user_ids` narrow
/// the result when present; a `user_ids` filter keeps reservations that
/// include at least one of the given users.
#[derive(Debug, Clone)]
pub struct ReservationFilter {
    pub restaurant_id: Option<i64>,
    pub user_ids: Option<Vec<i64>>,
    pub window: TimeWindow,
}

/// Reservation storage.
///
/// The only repository the workflow writes through.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgReservationRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Fetches reservations matching the filter, participants resolved.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find(&self, filter: ReservationFilter) -> Result<Vec<Reservation>, AppError>;

    /// Persists a new reservation together with its participant links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the store rejects an overlapping
    /// window on the same table, [`AppError::Internal`] on other database
    /// errors.
    async fn create(&self, new_reservation: NewReservation) -> Result<Reservation, AppError>;

    /// Fetches a reservation only if the given user is a participant.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_with_participant(
        &self,
        id: i64,
        user_id: i64,
    ) -> Result<Option<Reservation>, AppError>;

    /// Deletes a reservation (participant links cascade) and returns the
    /// record's prior field values, or `None` if it did not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<Option<Reservation>, AppError>;
}
