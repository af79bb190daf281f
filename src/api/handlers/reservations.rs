//! Handlers for reservation creation and deletion.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use validator::Validate;

use crate::api::dto::reservation::{
    CreateReservationRequest, DeleteReservationRequest, OutcomeMessage, ReservationResponse,
};
use crate::application::services::{CreateOutcome, CreateReservation};
use crate::error::AppError;
use crate::state::AppState;

/// Reserves a table for a party.
///
/// # Endpoint
///
/// `POST /reservation`
///
/// # Request Body
///
/// ```json
/// {
///   "user_ids": [1, 2],
///   "time": "2026-08-14T18:30:00Z",
///   "restaurant_id": 3
/// }
/// ```
///
/// # Responses
///
/// - **201 Created** with the reservation when a table was assigned
/// - **200 OK** with an outcome message when the party is already booked in
///   that window or no table can seat them; both are expected business
///   answers, not errors
///
/// # Errors
///
/// Returns 400 for a past time or invalid payload, 403 when the
/// restaurant's endorsements don't cover the party's restrictions, 404 for
/// an unknown restaurant or user, and 500 if the reservation could not be
/// persisted.
pub async fn create_reservation_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateReservationRequest>,
) -> Result<Response, AppError> {
    payload.validate()?;

    let outcome = state
        .reservation_service
        .create(CreateReservation {
            restaurant_id: payload.restaurant_id,
            user_ids: payload.user_ids,
            start_time: payload.time,
        })
        .await?;

    Ok(match outcome {
        CreateOutcome::Created(reservation) => (
            StatusCode::CREATED,
            Json(ReservationResponse::from(reservation)),
        )
            .into_response(),
        CreateOutcome::AlreadyBooked => {
            (StatusCode::OK, Json(OutcomeMessage::already_booked())).into_response()
        }
        CreateOutcome::NoTableAvailable => {
            (StatusCode::OK, Json(OutcomeMessage::no_table_available())).into_response()
        }
    })
}

/// Cancels a reservation on behalf of one of its participants.
///
/// # Endpoint
///
/// `DELETE /reservation/{id}`
///
/// # Request Body
///
/// ```json
/// { "user_id": 1 }
/// ```
///
/// # Behavior
///
/// The reservation and its participant links are removed together; the
/// response carries the deleted record's prior field values.
///
/// # Errors
///
/// Returns 404 if the reservation doesn't exist or the requesting user is
/// not a participant. Nothing is deleted in either case.
pub async fn delete_reservation_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<DeleteReservationRequest>,
) -> Result<Json<ReservationResponse>, AppError> {
    let deleted = state.reservation_service.delete(id, payload.user_id).await?;

    Ok(Json(ReservationResponse::from(deleted)))
}
