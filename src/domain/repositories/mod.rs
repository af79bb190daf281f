//! Repository trait definitions for the domain layer.
//!
//! This module defines the repository interfaces (traits) that abstract data
//! access following the Repository pattern. These traits are implemented by
//! concrete repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`UserRepository`] - Users with resolved restriction ids
//! - [`EndorsementRepository`] - Restriction/endorsement lookups
//! - [`RestaurantRepository`] - Restaurants with resolved endorsement ids
//! - [`TableRepository`] - Tables per restaurant
//! - [`ReservationRepository`] - Reservation reads and writes

pub mod endorsement_repository;
pub mod reservation_repository;
pub mod restaurant_repository;
pub mod table_repository;
pub mod user_repository;

pub use endorsement_repository::EndorsementRepository;
pub use reservation_repository::{ReservationFilter, ReservationRepository};
pub use restaurant_repository::RestaurantRepository;
pub use table_repository::TableRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use endorsement_repository::MockEndorsementRepository;
#[cfg(test)]
pub use reservation_repository::MockReservationRepository;
#[cfg(test)]
pub use restaurant_repository::MockRestaurantRepository;
#[cfg(test)]
pub use table_repository::MockTableRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
