//! SQLite implementation of the bakery repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use crate::domain::entities::{Bakery, NewBakery, UpdateBakery};
use crate::domain::repositories::BakeryRepository;
use crate::error::AppError;

#[derive(FromRow)]
struct BakeryRow {
    id: i64,
    name: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<BakeryRow> for Bakery {
    fn from(r: BakeryRow) -> Self {
        Bakery::new(r.id, r.name, r.created_at, r.updated_at)
    }
}

/// SQLite repository for bakeries.
pub struct SqliteBakeryRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteBakeryRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BakeryRepository for SqliteBakeryRepository {
    async fn create(&self, new_bakery: NewBakery) -> Result<Bakery, AppError> {
        let row = sqlx::query_as::<_, BakeryRow>(
            r#"
            INSERT INTO bakeries (name)
            VALUES ($1)
            RETURNING id, name, created_at, updated_at
            "#,
        )
        .bind(new_bakery.name)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn list(&self) -> Result<Vec<Bakery>, AppError> {
        let rows = sqlx::query_as::<_, BakeryRow>(
            r#"
            SELECT id, name, created_at, updated_at
            FROM bakeries
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Bakery::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Bakery>, AppError> {
        let row = sqlx::query_as::<_, BakeryRow>(
            r#"
            SELECT id, name, created_at, updated_at
            FROM bakeries
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Bakery::from))
    }

    async fn update(&self, id: i64, update: UpdateBakery) -> Result<Option<Bakery>, AppError> {
        let row = sqlx::query_as::<_, BakeryRow>(
            r#"
            UPDATE bakeries SET
                name       = COALESCE($2, name),
                updated_at = CURRENT_TIMESTAMP
            WHERE id = $1
            RETURNING id, name, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(update.name)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Bakery::from))
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM bakeries")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
