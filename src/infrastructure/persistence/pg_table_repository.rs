//! PostgreSQL implementation of the table repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::Table;
use crate::domain::repositories::TableRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct TableRow {
    id: i64,
    restaurant_id: i64,
    capacity: i32,
}

impl From<TableRow> for Table {
    fn from(row: TableRow) -> Self {
        Table::new(row.id, row.restaurant_id, row.capacity)
    }
}

/// PostgreSQL repository for restaurant tables.
pub struct PgTableRepository {
    pool: Arc<PgPool>,
}

impl PgTableRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TableRepository for PgTableRepository {
    async fn find_by_restaurant(&self, restaurant_id: i64) -> Result<Vec<Table>, AppError> {
        let rows: Vec<TableRow> = sqlx::query_as(
            "SELECT id, restaurant_id, capacity FROM tables WHERE restaurant_id = $1 ORDER BY id",
        )
        .bind(restaurant_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Table::from).collect())
    }

    async fn find_all(&self) -> Result<Vec<Table>, AppError> {
        let rows: Vec<TableRow> =
            sqlx::query_as("SELECT id, restaurant_id, capacity FROM tables ORDER BY id")
                .fetch_all(self.pool.as_ref())
                .await?;

        Ok(rows.into_iter().map(Table::from).collect())
    }
}
