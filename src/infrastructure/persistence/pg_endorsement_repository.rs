//! PostgreSQL implementation of the endorsement repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::Endorsement;
use crate::domain::repositories::EndorsementRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct EndorsementRow {
    id: i64,
    endorsement_name: String,
    restriction_name: String,
}

impl From<EndorsementRow> for Endorsement {
    fn from(row: EndorsementRow) -> Self {
        Endorsement::new(row.id, row.endorsement_name, row.restriction_name)
    }
}

/// PostgreSQL repository for endorsements.
pub struct PgEndorsementRepository {
    pool: Arc<PgPool>,
}

impl PgEndorsementRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EndorsementRepository for PgEndorsementRepository {
    async fn find_by_users(&self, user_ids: &[i64]) -> Result<Vec<Endorsement>, AppError> {
        let rows: Vec<EndorsementRow> = sqlx::query_as(
            r#"
            SELECT DISTINCT e.id, e.endorsement_name, e.restriction_name
            FROM endorsements e
            JOIN user_restrictions ur ON ur.endorsement_id = e.id
            WHERE ur.user_id = ANY($1)
            ORDER BY e.id
            "#,
        )
        .bind(user_ids)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Endorsement::from).collect())
    }
}
