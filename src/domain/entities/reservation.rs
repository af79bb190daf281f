//! Reservation entity.

use chrono::{DateTime, Duration, Utc};

/// Fixed reservation length, in hours.
pub const RESERVATION_LENGTH_HOURS: i64 = 2;

/// The canonical reservation duration.
pub fn reservation_length() -> Duration {
    Duration::hours(RESERVATION_LENGTH_HOURS)
}

/// A confirmed reservation holding one table for a party of users.
///
/// Invariant: `end_time` is always exactly `start_time` plus
/// [`reservation_length`], and no two reservations on the same table have
/// overlapping `[start_time, end_time)` windows.
#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    pub id: i64,
    pub restaurant_id: i64,
    pub table_id: i64,
    pub user_ids: Vec<i64>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

impl Reservation {
    /// Creates a new Reservation instance.
    pub fn new(
        id: i64,
        restaurant_id: i64,
        table_id: i64,
        user_ids: Vec<i64>,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            restaurant_id,
            table_id,
            user_ids,
            start_time,
            end_time,
        }
    }

    /// Returns true if the given user is a participant.
    pub fn has_participant(&self, user_id: i64) -> bool {
        self.user_ids.contains(&user_id)
    }
}

/// Input data for persisting a new reservation.
#[derive(Debug, Clone)]
pub struct NewReservation {
    pub restaurant_id: i64,
    pub table_id: i64,
    pub user_ids: Vec<i64>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}
