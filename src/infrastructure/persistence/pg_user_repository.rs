//! PostgreSQL implementation of the user repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::User;
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    name: String,
    email: String,
    latitude: f64,
    longitude: f64,
    restriction_ids: Vec<i64>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User::new(
            row.id,
            row.name,
            row.email,
            row.latitude,
            row.longitude,
            row.restriction_ids,
        )
    }
}

/// PostgreSQL repository for users.
pub struct PgUserRepository {
    pool: Arc<PgPool>,
}

impl PgUserRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<User>, AppError> {
        let rows: Vec<UserRow> = sqlx::query_as(
            r#"
            SELECT u.id, u.name, u.email, u.latitude, u.longitude,
                   COALESCE(
                       array_agg(ur.endorsement_id)
                           FILTER (WHERE ur.endorsement_id IS NOT NULL),
                       '{}'
                   ) AS restriction_ids
            FROM users u
            LEFT JOIN user_restrictions ur ON ur.user_id = u.id
            WHERE u.id = ANY($1)
            GROUP BY u.id
            ORDER BY u.id
            "#,
        )
        .bind(ids)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(User::from).collect())
    }
}
