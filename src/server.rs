//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, migrations, repository wiring, and the
//! Axum server lifecycle.

use crate::application::services::ReservationService;
use crate::config::Config;
use crate::infrastructure::persistence::{
    PgEndorsementRepository, PgReservationRepository, PgRestaurantRepository, PgTableRepository,
    PgUserRepository,
};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Migrations
/// - Repository and service wiring
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;

    let pool = Arc::new(pool);
    let users = Arc::new(PgUserRepository::new(pool.clone()));
    let endorsements = Arc::new(PgEndorsementRepository::new(pool.clone()));
    let restaurants: Arc<PgRestaurantRepository> =
        Arc::new(PgRestaurantRepository::new(pool.clone()));
    let tables = Arc::new(PgTableRepository::new(pool.clone()));
    let reservations = Arc::new(PgReservationRepository::new(pool.clone()));

    let reservation_service = Arc::new(ReservationService::new(
        users,
        endorsements,
        restaurants.clone(),
        tables,
        reservations,
    ));

    let state = AppState::new(reservation_service, restaurants);

    let app = app_router(state, Duration::from_secs(config.request_timeout_seconds));

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .await?;

    Ok(())
}
