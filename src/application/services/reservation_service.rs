//! Reservation workflow: create, search and delete.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::json;

use crate::application::locks::RestaurantLocks;
use crate::domain::entities::{
    NewReservation, Reservation, Restaurant, Table, reservation_length,
};
use crate::domain::repositories::{
    EndorsementRepository, ReservationFilter, ReservationRepository, RestaurantRepository,
    TableRepository, UserRepository,
};
use crate::domain::time_window::TimeWindow;
use crate::domain::{allocation, conflict, eligibility};
use crate::error::AppError;

/// Validated input for creating a reservation.
#[derive(Debug, Clone)]
pub struct CreateReservation {
    pub restaurant_id: i64,
    pub user_ids: Vec<i64>,
    pub start_time: DateTime<Utc>,
}

/// Terminal result of a create request that passed validation.
///
/// `AlreadyBooked` and `NoTableAvailable` are expected business outcomes,
/// not faults: the transport layer renders them as a successful response
/// carrying a message, never as an error status.
#[derive(Debug, Clone, PartialEq)]
pub enum CreateOutcome {
    Created(Reservation),
    AlreadyBooked,
    NoTableAvailable,
}

/// One qualifying restaurant in a search result, with only the tables that
/// could actually seat the party in the requested window.
#[derive(Debug, Clone)]
pub struct RestaurantAvailability {
    pub restaurant: Restaurant,
    pub tables: Vec<Table>,
}

/// Orchestrates the reservation rules in order: past-time rejection,
/// dietary eligibility, party conflict detection, table allocation, then
/// persistence. Short-circuits on the first failing rule; nothing is
/// written unless every rule passes.
pub struct ReservationService {
    users: Arc<dyn UserRepository>,
    endorsements: Arc<dyn EndorsementRepository>,
    restaurants: Arc<dyn RestaurantRepository>,
    tables: Arc<dyn TableRepository>,
    reservations: Arc<dyn ReservationRepository>,
    locks: RestaurantLocks,
}

impl ReservationService {
    /// Creates a new reservation service.
    pub fn new(
        users: Arc<dyn UserRepository>,
        endorsements: Arc<dyn EndorsementRepository>,
        restaurants: Arc<dyn RestaurantRepository>,
        tables: Arc<dyn TableRepository>,
        reservations: Arc<dyn ReservationRepository>,
    ) -> Self {
        Self {
            users,
            endorsements,
            restaurants,
            tables,
            reservations,
            locks: RestaurantLocks::new(),
        }
    }

    /// Attempts to reserve a table for the party at the given time.
    ///
    /// # Errors
    ///
    /// - [`AppError::PastTime`] if the time is not in the future
    /// - [`AppError::NotFound`] if the restaurant or any user is unknown
    /// - [`AppError::DietaryMismatch`] if the restaurant's endorsements do
    ///   not cover the party's restrictions
    /// - [`AppError::Internal`] if the store rejects the insert; the cause
    ///   is logged, the caller only sees a generic message
    pub async fn create(&self, request: CreateReservation) -> Result<CreateOutcome, AppError> {
        if request.start_time <= Utc::now() {
            return Err(AppError::past_time());
        }

        let party = distinct_party(&request.user_ids);
        let party_size = party.len() as i32;

        let restaurant = self
            .restaurants
            .find_by_id(request.restaurant_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(
                    "Restaurant not found",
                    json!({ "restaurant_id": request.restaurant_id }),
                )
            })?;

        let users = self.users.find_by_ids(&party).await?;
        if users.len() != party.len() {
            return Err(AppError::not_found(
                "One or more users could not be found",
                json!({ "user_ids": party }),
            ));
        }

        let offered: HashSet<i64> = restaurant.endorsement_ids.iter().copied().collect();
        let restrictions = users.iter().flat_map(|user| user.restriction_ids.iter());
        if !eligibility::covers(restrictions, &offered) {
            metrics::counter!("reservations_rejected_total", "reason" => "dietary_mismatch")
                .increment(1);
            return Err(AppError::dietary_mismatch());
        }

        let window = TimeWindow::around_reservation(request.start_time);

        // Serialize the conflict-check-and-insert sequence per restaurant;
        // the store's exclusion constraint backstops other writers.
        let _guard = self.locks.acquire(restaurant.id).await;

        let party_bookings = self
            .reservations
            .find(ReservationFilter {
                restaurant_id: Some(restaurant.id),
                user_ids: Some(party.clone()),
                window,
            })
            .await?;
        if !party_bookings.is_empty() {
            metrics::counter!("reservations_rejected_total", "reason" => "already_booked")
                .increment(1);
            return Ok(CreateOutcome::AlreadyBooked);
        }

        let in_window = self
            .reservations
            .find(ReservationFilter {
                restaurant_id: Some(restaurant.id),
                user_ids: None,
                window,
            })
            .await?;
        let occupied = conflict::occupied_tables(&in_window);

        let tables = self.tables.find_by_restaurant(restaurant.id).await?;
        let Some(table) = allocation::best_fit(&tables, party_size, &occupied) else {
            metrics::counter!("reservations_rejected_total", "reason" => "no_table").increment(1);
            return Ok(CreateOutcome::NoTableAvailable);
        };

        let created = self
            .reservations
            .create(NewReservation {
                restaurant_id: restaurant.id,
                table_id: table.id,
                user_ids: party,
                start_time: request.start_time,
                end_time: request.start_time + reservation_length(),
            })
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    restaurant_id = restaurant.id,
                    "Failed to persist reservation"
                );
                AppError::internal("Sorry, couldn't make a new reservation", json!({}))
            })?;

        metrics::counter!("reservations_created_total").increment(1);
        Ok(CreateOutcome::Created(created))
    }

    /// Finds restaurants that could seat the party at the given time.
    ///
    /// A restaurant qualifies when the party holds no reservation there in
    /// the candidate window, its endorsements cover the party's
    /// restrictions, and at least one sufficiently large table is free.
    /// Results and their table lists are deterministically ordered.
    ///
    /// # Errors
    ///
    /// - [`AppError::PastTime`] if the time is not in the future
    /// - [`AppError::NotFound`] if any user is unknown
    pub async fn search(
        &self,
        user_ids: &[i64],
        time: DateTime<Utc>,
    ) -> Result<Vec<RestaurantAvailability>, AppError> {
        if time <= Utc::now() {
            return Err(AppError::past_time());
        }

        let party = distinct_party(user_ids);
        let party_size = party.len() as i32;

        let users = self.users.find_by_ids(&party).await?;
        if users.len() != party.len() {
            return Err(AppError::not_found(
                "One or more users could not be found",
                json!({ "user_ids": party }),
            ));
        }

        let required: Vec<i64> = self
            .endorsements
            .find_by_users(&party)
            .await?
            .iter()
            .map(|endorsement| endorsement.id)
            .collect();

        let window = TimeWindow::around_reservation(time);
        let reservations = self
            .reservations
            .find(ReservationFilter {
                restaurant_id: None,
                user_ids: None,
                window,
            })
            .await?;

        let mut reservations_by_restaurant: HashMap<i64, Vec<Reservation>> = HashMap::new();
        for reservation in reservations {
            reservations_by_restaurant
                .entry(reservation.restaurant_id)
                .or_default()
                .push(reservation);
        }

        let mut tables_by_restaurant: HashMap<i64, Vec<Table>> = HashMap::new();
        for table in self.tables.find_all().await? {
            tables_by_restaurant
                .entry(table.restaurant_id)
                .or_default()
                .push(table);
        }

        let mut results = Vec::new();
        for restaurant in self.restaurants.list().await? {
            let booked = reservations_by_restaurant
                .get(&restaurant.id)
                .map(Vec::as_slice)
                .unwrap_or(&[]);

            if conflict::party_overlaps(booked, &party) {
                continue;
            }

            let offered: HashSet<i64> = restaurant.endorsement_ids.iter().copied().collect();
            if !eligibility::covers(required.iter(), &offered) {
                continue;
            }

            let occupied = conflict::occupied_tables(booked);
            let mut free: Vec<Table> = tables_by_restaurant
                .remove(&restaurant.id)
                .unwrap_or_default()
                .into_iter()
                .filter(|table| table.seats(party_size) && !occupied.contains(&table.id))
                .collect();
            if free.is_empty() {
                continue;
            }

            free.sort_by_key(|table| (table.capacity, table.id));
            results.push(RestaurantAvailability {
                restaurant,
                tables: free,
            });
        }

        results.sort_by_key(|availability| availability.restaurant.id);
        Ok(results)
    }

    /// Deletes a reservation on behalf of one of its participants and
    /// returns the record's prior field values.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the reservation does not exist or
    /// the requesting user is not a participant; nothing is mutated in
    /// either case.
    pub async fn delete(&self, reservation_id: i64, user_id: i64) -> Result<Reservation, AppError> {
        let not_found = || {
            AppError::not_found(
                "Sorry, the requested reservation couldn't be found",
                json!({ "id": reservation_id }),
            )
        };

        if self
            .reservations
            .find_with_participant(reservation_id, user_id)
            .await?
            .is_none()
        {
            return Err(not_found());
        }

        let deleted = self
            .reservations
            .delete(reservation_id)
            .await?
            .ok_or_else(not_found)?;

        metrics::counter!("reservations_deleted_total").increment(1);
        Ok(deleted)
    }
}

/// Distinct, ordered party member ids.
fn distinct_party(user_ids: &[i64]) -> Vec<i64> {
    let mut party = user_ids.to_vec();
    party.sort_unstable();
    party.dedup();
    party
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Endorsement, User};
    use crate::domain::repositories::{
        MockEndorsementRepository, MockReservationRepository, MockRestaurantRepository,
        MockTableRepository, MockUserRepository,
    };
    use chrono::Duration;

    struct Mocks {
        users: MockUserRepository,
        endorsements: MockEndorsementRepository,
        restaurants: MockRestaurantRepository,
        tables: MockTableRepository,
        reservations: MockReservationRepository,
    }

    impl Mocks {
        fn new() -> Self {
            Self {
                users: MockUserRepository::new(),
                endorsements: MockEndorsementRepository::new(),
                restaurants: MockRestaurantRepository::new(),
                tables: MockTableRepository::new(),
                reservations: MockReservationRepository::new(),
            }
        }

        fn into_service(self) -> ReservationService {
            ReservationService::new(
                Arc::new(self.users),
                Arc::new(self.endorsements),
                Arc::new(self.restaurants),
                Arc::new(self.tables),
                Arc::new(self.reservations),
            )
        }
    }

    fn test_user(id: i64, restriction_ids: Vec<i64>) -> User {
        User::new(
            id,
            format!("user-{id}"),
            format!("user-{id}@sample.com"),
            19.41,
            -99.18,
            restriction_ids,
        )
    }

    fn test_restaurant(id: i64, endorsement_ids: Vec<i64>) -> Restaurant {
        Restaurant::new(id, format!("restaurant-{id}"), 19.41, -99.18, endorsement_ids)
    }

    fn test_reservation(id: i64, restaurant_id: i64, table_id: i64, user_ids: Vec<i64>) -> Reservation {
        let start = Utc::now() + Duration::days(1);
        Reservation::new(
            id,
            restaurant_id,
            table_id,
            user_ids,
            start,
            start + reservation_length(),
        )
    }

    fn tomorrow() -> DateTime<Utc> {
        Utc::now() + Duration::days(1)
    }

    #[tokio::test]
    async fn test_create_rejects_past_time_without_store_access() {
        // No expectations: any repository call would panic the mock.
        let service = Mocks::new().into_service();

        let result = service
            .create(CreateReservation {
                restaurant_id: 1,
                user_ids: vec![1],
                start_time: Utc::now() - Duration::hours(1),
            })
            .await;

        assert!(matches!(result.unwrap_err(), AppError::PastTime { .. }));
    }

    #[tokio::test]
    async fn test_create_rejects_present_time() {
        let service = Mocks::new().into_service();

        let result = service
            .create(CreateReservation {
                restaurant_id: 1,
                user_ids: vec![1],
                start_time: Utc::now(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), AppError::PastTime { .. }));
    }

    #[tokio::test]
    async fn test_create_unknown_restaurant_is_not_found() {
        let mut mocks = Mocks::new();
        mocks
            .restaurants
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = mocks.into_service();
        let result = service
            .create(CreateReservation {
                restaurant_id: 99,
                user_ids: vec![1],
                start_time: tomorrow(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_create_dietary_mismatch_short_circuits() {
        let mut mocks = Mocks::new();
        mocks
            .restaurants
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(Some(test_restaurant(1, vec![7]))));
        // One covered restriction, one not offered by the restaurant.
        mocks.users.expect_find_by_ids().times(1).returning(|_| {
            Ok(vec![test_user(1, vec![7]), test_user(2, vec![9])])
        });

        let service = mocks.into_service();
        let result = service
            .create(CreateReservation {
                restaurant_id: 1,
                user_ids: vec![1, 2],
                start_time: tomorrow(),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            AppError::DietaryMismatch { .. }
        ));
    }

    #[tokio::test]
    async fn test_create_party_conflict_is_already_booked() {
        let mut mocks = Mocks::new();
        mocks
            .restaurants
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(Some(test_restaurant(1, vec![]))));
        mocks
            .users
            .expect_find_by_ids()
            .times(1)
            .returning(|_| Ok(vec![test_user(1, vec![])]));
        mocks
            .reservations
            .expect_find()
            .withf(|filter| filter.user_ids.is_some())
            .times(1)
            .returning(|_| Ok(vec![test_reservation(5, 1, 10, vec![1])]));

        let service = mocks.into_service();
        let outcome = service
            .create(CreateReservation {
                restaurant_id: 1,
                user_ids: vec![1],
                start_time: tomorrow(),
            })
            .await
            .unwrap();

        assert_eq!(outcome, CreateOutcome::AlreadyBooked);
    }

    #[tokio::test]
    async fn test_create_no_table_when_all_occupied_or_small() {
        let mut mocks = Mocks::new();
        mocks
            .restaurants
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(Some(test_restaurant(1, vec![]))));
        mocks
            .users
            .expect_find_by_ids()
            .times(1)
            .returning(|_| Ok(vec![test_user(1, vec![]), test_user(2, vec![])]));
        mocks
            .reservations
            .expect_find()
            .withf(|filter| filter.user_ids.is_some())
            .times(1)
            .returning(|_| Ok(vec![]));
        mocks
            .reservations
            .expect_find()
            .withf(|filter| filter.user_ids.is_none())
            .times(1)
            .returning(|_| Ok(vec![test_reservation(5, 1, 11, vec![9])]));
        // Table 10 is too small for two, table 11 is taken.
        mocks.tables.expect_find_by_restaurant().times(1).returning(|_| {
            Ok(vec![Table::new(10, 1, 1), Table::new(11, 1, 4)])
        });

        let service = mocks.into_service();
        let outcome = service
            .create(CreateReservation {
                restaurant_id: 1,
                user_ids: vec![1, 2],
                start_time: tomorrow(),
            })
            .await
            .unwrap();

        assert_eq!(outcome, CreateOutcome::NoTableAvailable);
    }

    #[tokio::test]
    async fn test_create_assigns_best_fit_table_and_two_hour_window() {
        let mut mocks = Mocks::new();
        mocks
            .restaurants
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(Some(test_restaurant(1, vec![2]))));
        mocks
            .users
            .expect_find_by_ids()
            .times(1)
            .returning(|_| Ok(vec![test_user(1, vec![2])]));
        mocks
            .reservations
            .expect_find()
            .times(2)
            .returning(|_| Ok(vec![]));
        mocks.tables.expect_find_by_restaurant().times(1).returning(|_| {
            Ok(vec![Table::new(10, 1, 6), Table::new(11, 1, 2)])
        });
        mocks
            .reservations
            .expect_create()
            .withf(|new_reservation| new_reservation.table_id == 11)
            .times(1)
            .returning(|new_reservation| {
                Ok(Reservation::new(
                    42,
                    new_reservation.restaurant_id,
                    new_reservation.table_id,
                    new_reservation.user_ids,
                    new_reservation.start_time,
                    new_reservation.end_time,
                ))
            });

        let start = tomorrow();
        let service = mocks.into_service();
        let outcome = service
            .create(CreateReservation {
                restaurant_id: 1,
                user_ids: vec![1],
                start_time: start,
            })
            .await
            .unwrap();

        let CreateOutcome::Created(reservation) = outcome else {
            panic!("expected a created reservation");
        };
        assert_eq!(reservation.table_id, 11);
        assert_eq!(reservation.end_time, start + Duration::hours(2));
        assert_eq!(reservation.user_ids, vec![1]);
    }

    #[tokio::test]
    async fn test_create_store_failure_is_generic_internal_error() {
        let mut mocks = Mocks::new();
        mocks
            .restaurants
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(Some(test_restaurant(1, vec![]))));
        mocks
            .users
            .expect_find_by_ids()
            .times(1)
            .returning(|_| Ok(vec![test_user(1, vec![])]));
        mocks
            .reservations
            .expect_find()
            .times(2)
            .returning(|_| Ok(vec![]));
        mocks
            .tables
            .expect_find_by_restaurant()
            .times(1)
            .returning(|_| Ok(vec![Table::new(10, 1, 2)]));
        mocks.reservations.expect_create().times(1).returning(|_| {
            Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": "reservations_table_id_tstzrange_excl" }),
            ))
        });

        let service = mocks.into_service();
        let err = service
            .create(CreateReservation {
                restaurant_id: 1,
                user_ids: vec![1],
                start_time: tomorrow(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Sorry, couldn't make a new reservation");
        assert!(matches!(err, AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_create_deduplicates_party_members() {
        let mut mocks = Mocks::new();
        mocks
            .restaurants
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(Some(test_restaurant(1, vec![]))));
        mocks
            .users
            .expect_find_by_ids()
            .withf(|ids| ids == [1])
            .times(1)
            .returning(|_| Ok(vec![test_user(1, vec![])]));
        mocks
            .reservations
            .expect_find()
            .times(2)
            .returning(|_| Ok(vec![]));
        // A table for one seats the deduplicated party.
        mocks
            .tables
            .expect_find_by_restaurant()
            .times(1)
            .returning(|_| Ok(vec![Table::new(10, 1, 1)]));
        mocks
            .reservations
            .expect_create()
            .withf(|new_reservation| new_reservation.user_ids == [1])
            .times(1)
            .returning(|new_reservation| {
                Ok(Reservation::new(
                    7,
                    new_reservation.restaurant_id,
                    new_reservation.table_id,
                    new_reservation.user_ids,
                    new_reservation.start_time,
                    new_reservation.end_time,
                ))
            });

        let service = mocks.into_service();
        let outcome = service
            .create(CreateReservation {
                restaurant_id: 1,
                user_ids: vec![1, 1, 1],
                start_time: tomorrow(),
            })
            .await
            .unwrap();

        assert!(matches!(outcome, CreateOutcome::Created(_)));
    }

    #[tokio::test]
    async fn test_search_rejects_past_time() {
        let service = Mocks::new().into_service();

        let result = service.search(&[1], Utc::now() - Duration::minutes(5)).await;

        assert!(matches!(result.unwrap_err(), AppError::PastTime { .. }));
    }

    #[tokio::test]
    async fn test_search_filters_booked_uncovered_and_full_restaurants() {
        let mut mocks = Mocks::new();
        mocks
            .users
            .expect_find_by_ids()
            .times(1)
            .returning(|_| Ok(vec![test_user(1, vec![2])]));
        mocks.endorsements.expect_find_by_users().times(1).returning(|_| {
            Ok(vec![Endorsement::new(
                2,
                "Vegan-Friendly".to_string(),
                "Vegan".to_string(),
            )])
        });
        // Restaurant 1: party already booked there. Restaurant 2: no vegan
        // endorsement. Restaurant 3: qualifies, but table 31 is occupied by
        // someone else's reservation. Restaurant 4: every table occupied.
        mocks.reservations.expect_find().times(1).returning(|_| {
            Ok(vec![
                test_reservation(100, 1, 10, vec![1]),
                test_reservation(101, 3, 31, vec![9]),
                test_reservation(102, 4, 40, vec![8]),
            ])
        });
        mocks.tables.expect_find_all().times(1).returning(|| {
            Ok(vec![
                Table::new(10, 1, 4),
                Table::new(20, 2, 4),
                Table::new(30, 3, 4),
                Table::new(31, 3, 2),
                Table::new(40, 4, 4),
            ])
        });
        mocks.restaurants.expect_list().times(1).returning(|| {
            Ok(vec![
                test_restaurant(1, vec![2]),
                test_restaurant(2, vec![]),
                test_restaurant(3, vec![2]),
                test_restaurant(4, vec![2]),
            ])
        });

        let service = mocks.into_service();
        let results = service.search(&[1], tomorrow()).await.unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].restaurant.id, 3);
        let table_ids: Vec<i64> = results[0].tables.iter().map(|t| t.id).collect();
        assert_eq!(table_ids, vec![30]);
    }

    #[tokio::test]
    async fn test_search_empty_party_returns_every_open_restaurant() {
        let mut mocks = Mocks::new();
        mocks
            .users
            .expect_find_by_ids()
            .times(1)
            .returning(|_| Ok(vec![]));
        mocks
            .endorsements
            .expect_find_by_users()
            .times(1)
            .returning(|_| Ok(vec![]));
        mocks
            .reservations
            .expect_find()
            .times(1)
            .returning(|_| Ok(vec![]));
        mocks
            .tables
            .expect_find_all()
            .times(1)
            .returning(|| Ok(vec![Table::new(10, 1, 2), Table::new(20, 2, 6)]));
        mocks
            .restaurants
            .expect_list()
            .times(1)
            .returning(|| Ok(vec![test_restaurant(1, vec![]), test_restaurant(2, vec![1])]));

        let service = mocks.into_service();
        let results = service.search(&[], tomorrow()).await.unwrap();

        assert_eq!(results.len(), 2);
    }

    #[tokio::test]
    async fn test_search_orders_tables_by_best_fit() {
        let mut mocks = Mocks::new();
        mocks
            .users
            .expect_find_by_ids()
            .times(1)
            .returning(|_| Ok(vec![test_user(1, vec![])]));
        mocks
            .endorsements
            .expect_find_by_users()
            .times(1)
            .returning(|_| Ok(vec![]));
        mocks
            .reservations
            .expect_find()
            .times(1)
            .returning(|_| Ok(vec![]));
        mocks.tables.expect_find_all().times(1).returning(|| {
            Ok(vec![
                Table::new(12, 1, 8),
                Table::new(11, 1, 2),
                Table::new(10, 1, 2),
            ])
        });
        mocks
            .restaurants
            .expect_list()
            .times(1)
            .returning(|| Ok(vec![test_restaurant(1, vec![])]));

        let service = mocks.into_service();
        let results = service.search(&[1], tomorrow()).await.unwrap();

        let table_ids: Vec<i64> = results[0].tables.iter().map(|t| t.id).collect();
        assert_eq!(table_ids, vec![10, 11, 12]);
    }

    #[tokio::test]
    async fn test_delete_requires_participant() {
        let mut mocks = Mocks::new();
        mocks
            .reservations
            .expect_find_with_participant()
            .withf(|id, user_id| *id == 5 && *user_id == 9)
            .times(1)
            .returning(|_, _| Ok(None));
        // expect_delete is never registered: a delete call would panic.

        let service = mocks.into_service();
        let result = service.delete(5, 9).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_returns_prior_record() {
        let mut mocks = Mocks::new();
        let existing = test_reservation(5, 1, 10, vec![1, 2]);
        let prior = existing.clone();
        mocks
            .reservations
            .expect_find_with_participant()
            .times(1)
            .returning(move |_, _| Ok(Some(existing.clone())));
        mocks
            .reservations
            .expect_delete()
            .withf(|id| *id == 5)
            .times(1)
            .returning(move |_| Ok(Some(prior.clone())));

        let service = mocks.into_service();
        let deleted = service.delete(5, 1).await.unwrap();

        assert_eq!(deleted.id, 5);
        assert_eq!(deleted.user_ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_delete_missing_reservation_is_not_found() {
        let mut mocks = Mocks::new();
        mocks
            .reservations
            .expect_find_with_participant()
            .times(1)
            .returning(|_, _| Ok(None));

        let service = mocks.into_service();
        let result = service.delete(999, 1).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }
}
