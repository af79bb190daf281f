#![allow(dead_code)]

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use table_reservations::application::services::ReservationService;
use table_reservations::domain::entities::{
    Endorsement, NewReservation, Reservation, Restaurant, Table, User, reservation_length,
};
use table_reservations::domain::repositories::{
    EndorsementRepository, ReservationFilter, ReservationRepository, RestaurantRepository,
    TableRepository, UserRepository,
};
use table_reservations::error::AppError;
use table_reservations::state::AppState;

/// In-memory stand-in for the PostgreSQL repositories.
///
/// Implements every repository trait with the same query semantics
/// (half-open windows over start times, participant filters, exclusion of
/// overlapping windows per table) so handler tests run hermetically.
#[derive(Default)]
pub struct InMemoryStore {
    users: Mutex<Vec<User>>,
    restaurants: Mutex<Vec<Restaurant>>,
    endorsements: Mutex<Vec<Endorsement>>,
    tables: Mutex<Vec<Table>>,
    reservations: Mutex<Vec<Reservation>>,
    next_id: AtomicI64,
}

impl InMemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            next_id: AtomicI64::new(1),
            ..Self::default()
        })
    }

    fn allocate_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }

    pub fn add_endorsement(&self, endorsement_name: &str, restriction_name: &str) -> i64 {
        let id = self.allocate_id();
        self.endorsements.lock().unwrap().push(Endorsement::new(
            id,
            endorsement_name.to_string(),
            restriction_name.to_string(),
        ));
        id
    }

    pub fn add_user(&self, name: &str, restriction_ids: &[i64]) -> i64 {
        let id = self.allocate_id();
        self.users.lock().unwrap().push(User::new(
            id,
            name.to_string(),
            format!("{}@sample.com", name.replace(' ', "")),
            19.4153107,
            -99.1804722,
            restriction_ids.to_vec(),
        ));
        id
    }

    pub fn add_restaurant(&self, name: &str, endorsement_ids: &[i64]) -> i64 {
        let id = self.allocate_id();
        self.restaurants.lock().unwrap().push(Restaurant::new(
            id,
            name.to_string(),
            19.4153107,
            -99.1804722,
            endorsement_ids.to_vec(),
        ));
        id
    }

    pub fn add_table(&self, restaurant_id: i64, capacity: i32) -> i64 {
        let id = self.allocate_id();
        self.tables
            .lock()
            .unwrap()
            .push(Table::new(id, restaurant_id, capacity));
        id
    }

    pub fn add_reservation(
        &self,
        restaurant_id: i64,
        table_id: i64,
        user_ids: &[i64],
        start_time: DateTime<Utc>,
    ) -> i64 {
        let id = self.allocate_id();
        self.reservations.lock().unwrap().push(Reservation::new(
            id,
            restaurant_id,
            table_id,
            user_ids.to_vec(),
            start_time,
            start_time + reservation_length(),
        ));
        id
    }

    pub fn reservation_count(&self) -> usize {
        self.reservations.lock().unwrap().len()
    }

    pub fn reservation_exists(&self, id: i64) -> bool {
        self.reservations
            .lock()
            .unwrap()
            .iter()
            .any(|reservation| reservation.id == id)
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<User>, AppError> {
        let mut found: Vec<User> = self
            .users
            .lock()
            .unwrap()
            .iter()
            .filter(|user| ids.contains(&user.id))
            .cloned()
            .collect();
        found.sort_by_key(|user| user.id);
        Ok(found)
    }
}

#[async_trait]
impl EndorsementRepository for InMemoryStore {
    async fn find_by_users(&self, user_ids: &[i64]) -> Result<Vec<Endorsement>, AppError> {
        let users = self.users.lock().unwrap();
        let restriction_ids: Vec<i64> = users
            .iter()
            .filter(|user| user_ids.contains(&user.id))
            .flat_map(|user| user.restriction_ids.iter().copied())
            .collect();

        let mut found: Vec<Endorsement> = self
            .endorsements
            .lock()
            .unwrap()
            .iter()
            .filter(|endorsement| restriction_ids.contains(&endorsement.id))
            .cloned()
            .collect();
        found.sort_by_key(|endorsement| endorsement.id);
        found.dedup_by_key(|endorsement| endorsement.id);
        Ok(found)
    }
}

#[async_trait]
impl RestaurantRepository for InMemoryStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<Restaurant>, AppError> {
        Ok(self
            .restaurants
            .lock()
            .unwrap()
            .iter()
            .find(|restaurant| restaurant.id == id)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<Restaurant>, AppError> {
        let mut all = self.restaurants.lock().unwrap().clone();
        all.sort_by_key(|restaurant| restaurant.id);
        Ok(all)
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.restaurants.lock().unwrap().len() as i64)
    }
}

#[async_trait]
impl TableRepository for InMemoryStore {
    async fn find_by_restaurant(&self, restaurant_id: i64) -> Result<Vec<Table>, AppError> {
        let mut found: Vec<Table> = self
            .tables
            .lock()
            .unwrap()
            .iter()
            .filter(|table| table.restaurant_id == restaurant_id)
            .cloned()
            .collect();
        found.sort_by_key(|table| table.id);
        Ok(found)
    }

    async fn find_all(&self) -> Result<Vec<Table>, AppError> {
        let mut all = self.tables.lock().unwrap().clone();
        all.sort_by_key(|table| table.id);
        Ok(all)
    }
}

#[async_trait]
impl ReservationRepository for InMemoryStore {
    async fn find(&self, filter: ReservationFilter) -> Result<Vec<Reservation>, AppError> {
        let mut found: Vec<Reservation> = self
            .reservations
            .lock()
            .unwrap()
            .iter()
            .filter(|reservation| filter.window.contains(reservation.start_time))
            .filter(|reservation| {
                filter
                    .restaurant_id
                    .is_none_or(|id| reservation.restaurant_id == id)
            })
            .filter(|reservation| {
                filter.user_ids.as_ref().is_none_or(|user_ids| {
                    reservation
                        .user_ids
                        .iter()
                        .any(|id| user_ids.contains(id))
                })
            })
            .cloned()
            .collect();
        found.sort_by_key(|reservation| reservation.id);
        Ok(found)
    }

    async fn create(&self, new_reservation: NewReservation) -> Result<Reservation, AppError> {
        let mut reservations = self.reservations.lock().unwrap();

        // Mirror the store's exclusion constraint on (table, window).
        let overlaps = reservations.iter().any(|existing| {
            existing.table_id == new_reservation.table_id
                && existing.start_time < new_reservation.end_time
                && new_reservation.start_time < existing.end_time
        });
        if overlaps {
            return Err(AppError::conflict(
                "Table already reserved in an overlapping window",
                serde_json::json!({}),
            ));
        }

        let id = self.allocate_id();
        let reservation = Reservation::new(
            id,
            new_reservation.restaurant_id,
            new_reservation.table_id,
            new_reservation.user_ids,
            new_reservation.start_time,
            new_reservation.end_time,
        );
        reservations.push(reservation.clone());
        Ok(reservation)
    }

    async fn find_with_participant(
        &self,
        id: i64,
        user_id: i64,
    ) -> Result<Option<Reservation>, AppError> {
        Ok(self
            .reservations
            .lock()
            .unwrap()
            .iter()
            .find(|reservation| reservation.id == id && reservation.has_participant(user_id))
            .cloned())
    }

    async fn delete(&self, id: i64) -> Result<Option<Reservation>, AppError> {
        let mut reservations = self.reservations.lock().unwrap();
        let position = reservations
            .iter()
            .position(|reservation| reservation.id == id);
        Ok(position.map(|index| reservations.remove(index)))
    }
}

/// Builds the application state over an in-memory store.
pub fn create_test_state(store: Arc<InMemoryStore>) -> AppState {
    let reservation_service = Arc::new(ReservationService::new(
        store.clone(),
        store.clone(),
        store.clone(),
        store.clone(),
        store.clone(),
    ));

    AppState::new(reservation_service, store)
}
