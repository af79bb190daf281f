//! Time window calculation for conflict detection.

use chrono::{DateTime, Duration, Utc};

use crate::domain::entities::reservation_length;

/// A half-open time interval `[lower, upper)`.
///
/// Used to find reservations that could conflict with a candidate start
/// time, and to bound availability searches. The boundary rule is half-open
/// over reservation *start* times: a reservation starting exactly at
/// `lower` is inside the window, one starting exactly at `upper` is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub lower: DateTime<Utc>,
    pub upper: DateTime<Utc>,
}

impl TimeWindow {
    /// Builds the symmetric window `[time - offset, time + offset)` around a
    /// candidate reservation time.
    pub fn around(time: DateTime<Utc>, offset: Duration) -> Self {
        Self {
            lower: time - offset,
            upper: time + offset,
        }
    }

    /// Builds the conflict window with the default offset of one
    /// reservation length.
    pub fn around_reservation(time: DateTime<Utc>) -> Self {
        Self::around(time, reservation_length())
    }

    /// Returns true if `start` falls inside the window.
    pub fn contains(&self, start: DateTime<Utc>) -> bool {
        self.lower <= start && start < self.upper
    }
}
