//! PostgreSQL implementation of the reservation repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::{PgPool, Postgres, QueryBuilder};
use std::sync::Arc;

use crate::domain::entities::{NewReservation, Reservation};
use crate::domain::repositories::{ReservationFilter, ReservationRepository};
use crate::error::AppError;

/// Postgres error code for exclusion constraint violations, raised when two
/// windows on the same table overlap.
const EXCLUSION_VIOLATION: &str = "23P01";

#[derive(sqlx::FromRow)]
struct ReservationRow {
    id: i64,
    restaurant_id: i64,
    table_id: i64,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    user_ids: Vec<i64>,
}

impl From<ReservationRow> for Reservation {
    fn from(row: ReservationRow) -> Self {
        Reservation::new(
            row.id,
            row.restaurant_id,
            row.table_id,
            row.user_ids,
            row.start_time,
            row.end_time,
        )
    }
}

const RESERVATION_SELECT: &str = r#"
    SELECT r.id, r.restaurant_id, r.table_id, r.start_time, r.end_time,
           array_agg(ru.user_id) AS user_ids
    FROM reservations r
    JOIN reservation_users ru ON ru.reservation_id = r.id
"#;

/// PostgreSQL repository for reservations.
///
/// The only writer in the crate. Creation inserts the reservation row and
/// its participant links in one transaction; the table's exclusion
/// constraint turns a lost race into an error instead of a double booking.
pub struct PgReservationRepository {
    pool: Arc<PgPool>,
}

impl PgReservationRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    async fn fetch_by_id(&self, id: i64) -> Result<Option<Reservation>, AppError> {
        let row: Option<ReservationRow> =
            sqlx::query_as(&format!("{RESERVATION_SELECT} WHERE r.id = $1 GROUP BY r.id"))
                .bind(id)
                .fetch_optional(self.pool.as_ref())
                .await?;

        Ok(row.map(Reservation::from))
    }
}

#[async_trait]
impl ReservationRepository for PgReservationRepository {
    async fn find(&self, filter: ReservationFilter) -> Result<Vec<Reservation>, AppError> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(RESERVATION_SELECT);

        // Half-open window over start times: lower <= start_time < upper.
        builder.push(" WHERE r.start_time >= ");
        builder.push_bind(filter.window.lower);
        builder.push(" AND r.start_time < ");
        builder.push_bind(filter.window.upper);

        if let Some(restaurant_id) = filter.restaurant_id {
            builder.push(" AND r.restaurant_id = ");
            builder.push_bind(restaurant_id);
        }

        if let Some(user_ids) = filter.user_ids {
            builder.push(
                " AND EXISTS (SELECT 1 FROM reservation_users m \
                 WHERE m.reservation_id = r.id AND m.user_id = ANY(",
            );
            builder.push_bind(user_ids);
            builder.push("))");
        }

        builder.push(" GROUP BY r.id ORDER BY r.id");

        let rows: Vec<ReservationRow> = builder
            .build_query_as()
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Reservation::from).collect())
    }

    async fn create(&self, new_reservation: NewReservation) -> Result<Reservation, AppError> {
        let mut tx = self.pool.begin().await?;

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO reservations (restaurant_id, table_id, start_time, end_time)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(new_reservation.restaurant_id)
        .bind(new_reservation.table_id)
        .bind(new_reservation.start_time)
        .bind(new_reservation.end_time)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_reservation_insert_error)?;

        sqlx::query(
            r#"
            INSERT INTO reservation_users (reservation_id, user_id)
            SELECT $1, unnest($2::bigint[])
            "#,
        )
        .bind(id)
        .bind(&new_reservation.user_ids)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(Reservation::new(
            id,
            new_reservation.restaurant_id,
            new_reservation.table_id,
            new_reservation.user_ids,
            new_reservation.start_time,
            new_reservation.end_time,
        ))
    }

    async fn find_with_participant(
        &self,
        id: i64,
        user_id: i64,
    ) -> Result<Option<Reservation>, AppError> {
        let row: Option<ReservationRow> = sqlx::query_as(&format!(
            "{RESERVATION_SELECT} \
             WHERE r.id = $1 \
             GROUP BY r.id \
             HAVING bool_or(ru.user_id = $2)"
        ))
        .bind(id)
        .bind(user_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Reservation::from))
    }

    async fn delete(&self, id: i64) -> Result<Option<Reservation>, AppError> {
        let Some(prior) = self.fetch_by_id(id).await? else {
            return Ok(None);
        };

        // Participant links go with the row via ON DELETE CASCADE.
        sqlx::query("DELETE FROM reservations WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(Some(prior))
    }
}

/// Maps an insert failure, turning an exclusion constraint violation (a
/// lost availability race) into a conflict.
fn map_reservation_insert_error(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db) = &e
        && db.code().as_deref() == Some(EXCLUSION_VIOLATION)
    {
        return AppError::conflict(
            "Table already reserved in an overlapping window",
            json!({ "constraint": db.constraint() }),
        );
    }

    AppError::from(e)
}
