//! PostgreSQL repository implementations.
//!
//! Concrete implementations of the domain repository traits using SQLx.
//! Queries are runtime-checked `query_as` calls over `FromRow` row structs;
//! id sets (participants, endorsements) are aggregated into `int8[]`
//! columns with `array_agg`.
//!
//! # Repositories
//!
//! - [`PgUserRepository`] - Users with resolved restriction ids
//! - [`PgEndorsementRepository`] - Restriction/endorsement lookups
//! - [`PgRestaurantRepository`] - Restaurants with resolved endorsement ids
//! - [`PgTableRepository`] - Tables per restaurant
//! - [`PgReservationRepository`] - Reservation reads and writes

pub mod pg_endorsement_repository;
pub mod pg_reservation_repository;
pub mod pg_restaurant_repository;
pub mod pg_table_repository;
pub mod pg_user_repository;

pub use pg_endorsement_repository::PgEndorsementRepository;
pub use pg_reservation_repository::PgReservationRepository;
pub use pg_restaurant_repository::PgRestaurantRepository;
pub use pg_table_repository::PgTableRepository;
pub use pg_user_repository::PgUserRepository;
