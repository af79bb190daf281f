//! Business logic services for the application layer.

pub mod reservation_service;

pub use reservation_service::{
    CreateOutcome, CreateReservation, ReservationService, RestaurantAvailability,
};
