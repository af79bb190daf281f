//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod reservations;
pub mod search;

pub use health::health_handler;
pub use reservations::{create_reservation_handler, delete_reservation_handler};
pub use search::search_handler;
