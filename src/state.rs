//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::ReservationService;
use crate::domain::repositories::RestaurantRepository;

/// State shared by all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub reservation_service: Arc<ReservationService>,
    /// Direct repository handle for the health check probe.
    pub restaurants: Arc<dyn RestaurantRepository>,
}

impl AppState {
    /// Creates the application state.
    pub fn new(
        reservation_service: Arc<ReservationService>,
        restaurants: Arc<dyn RestaurantRepository>,
    ) -> Self {
        Self {
            reservation_service,
            restaurants,
        }
    }
}
