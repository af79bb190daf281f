//! DTOs for the reservation create and delete endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Reservation;

/// Request to reserve a table.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateReservationRequest {
    /// The party: every participating user id. Must be non-empty.
    #[validate(length(min = 1, message = "party must include at least one user"))]
    pub user_ids: Vec<i64>,

    /// Requested start time; must be in the future.
    pub time: DateTime<Utc>,

    pub restaurant_id: i64,
}

/// Request body for `DELETE /reservation/{id}`.
///
/// The requesting user must be a participant of the reservation.
#[derive(Debug, Deserialize)]
pub struct DeleteReservationRequest {
    pub user_id: i64,
}

/// JSON representation of a reservation.
#[derive(Debug, Serialize)]
pub struct ReservationResponse {
    pub id: i64,
    pub restaurant_id: i64,
    pub table_id: i64,
    pub user_ids: Vec<i64>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

impl From<Reservation> for ReservationResponse {
    fn from(reservation: Reservation) -> Self {
        Self {
            id: reservation.id,
            restaurant_id: reservation.restaurant_id,
            table_id: reservation.table_id,
            user_ids: reservation.user_ids,
            start_time: reservation.start_time,
            end_time: reservation.end_time,
        }
    }
}

/// Informational outcome payload for a create request that was valid but
/// could not be satisfied. Served with `200 OK`: these are expected
/// business answers, not faults.
#[derive(Debug, Serialize)]
pub struct OutcomeMessage {
    pub outcome: &'static str,
    pub message: &'static str,
}

impl OutcomeMessage {
    pub fn already_booked() -> Self {
        Self {
            outcome: "already_booked",
            message: "Sorry, a member of your party already has a reservation at this restaurant around that time",
        }
    }

    pub fn no_table_available() -> Self {
        Self {
            outcome: "no_table_available",
            message: "Sorry, no table is available for your party at that time",
        }
    }
}
