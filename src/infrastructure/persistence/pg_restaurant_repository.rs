//! PostgreSQL implementation of the restaurant repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::Restaurant;
use crate::domain::repositories::RestaurantRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct RestaurantRow {
    id: i64,
    name: String,
    latitude: f64,
    longitude: f64,
    endorsement_ids: Vec<i64>,
}

impl From<RestaurantRow> for Restaurant {
    fn from(row: RestaurantRow) -> Self {
        Restaurant::new(
            row.id,
            row.name,
            row.latitude,
            row.longitude,
            row.endorsement_ids,
        )
    }
}

const RESTAURANT_SELECT: &str = r#"
    SELECT r.id, r.name, r.latitude, r.longitude,
           COALESCE(
               array_agg(re.endorsement_id)
                   FILTER (WHERE re.endorsement_id IS NOT NULL),
               '{}'
           ) AS endorsement_ids
    FROM restaurants r
    LEFT JOIN restaurant_endorsements re ON re.restaurant_id = r.id
"#;

/// PostgreSQL repository for restaurants.
pub struct PgRestaurantRepository {
    pool: Arc<PgPool>,
}

impl PgRestaurantRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RestaurantRepository for PgRestaurantRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Restaurant>, AppError> {
        let row: Option<RestaurantRow> = sqlx::query_as(&format!(
            "{RESTAURANT_SELECT} WHERE r.id = $1 GROUP BY r.id"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Restaurant::from))
    }

    async fn list(&self) -> Result<Vec<Restaurant>, AppError> {
        let rows: Vec<RestaurantRow> =
            sqlx::query_as(&format!("{RESTAURANT_SELECT} GROUP BY r.id ORDER BY r.id"))
                .fetch_all(self.pool.as_ref())
                .await?;

        Ok(rows.into_iter().map(Restaurant::from).collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM restaurants")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
