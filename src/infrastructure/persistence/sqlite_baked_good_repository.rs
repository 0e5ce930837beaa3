//! SQLite implementation of the baked good repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use crate::domain::entities::{BakedGood, NewBakedGood, UpdateBakedGood};
use crate::domain::repositories::{BakedGoodRepository, PriceOrder};
use crate::error::AppError;

#[derive(FromRow)]
struct BakedGoodRow {
    id: i64,
    name: String,
    price: f64,
    bakery_id: Option<i64>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<BakedGoodRow> for BakedGood {
    fn from(r: BakedGoodRow) -> Self {
        BakedGood::new(
            r.id,
            r.name,
            r.price,
            r.bakery_id,
            r.created_at,
            r.updated_at,
        )
    }
}

/// SQLite repository for baked goods.
///
/// Deletes are physical; there is no soft-delete column.
pub struct SqliteBakedGoodRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteBakedGoodRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BakedGoodRepository for SqliteBakedGoodRepository {
    async fn create(&self, new_baked_good: NewBakedGood) -> Result<BakedGood, AppError> {
        let row = sqlx::query_as::<_, BakedGoodRow>(
            r#"
            INSERT INTO baked_goods (name, price, bakery_id)
            VALUES ($1, $2, $3)
            RETURNING id, name, price, bakery_id, created_at, updated_at
            "#,
        )
        .bind(new_baked_good.name)
        .bind(new_baked_good.price)
        .bind(new_baked_good.bakery_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn list(&self) -> Result<Vec<BakedGood>, AppError> {
        let rows = sqlx::query_as::<_, BakedGoodRow>(
            r#"
            SELECT id, name, price, bakery_id, created_at, updated_at
            FROM baked_goods
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(BakedGood::from).collect())
    }

    async fn list_by_bakery(&self, bakery_id: i64) -> Result<Vec<BakedGood>, AppError> {
        let rows = sqlx::query_as::<_, BakedGoodRow>(
            r#"
            SELECT id, name, price, bakery_id, created_at, updated_at
            FROM baked_goods
            WHERE bakery_id = $1
            ORDER BY id
            "#,
        )
        .bind(bakery_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(BakedGood::from).collect())
    }

    async fn list_by_price(
        &self,
        order: PriceOrder,
        limit: Option<i64>,
    ) -> Result<Vec<BakedGood>, AppError> {
        // SQLite treats a negative LIMIT as "no limit".
        let sql = match order {
            PriceOrder::Ascending => {
                r#"
                SELECT id, name, price, bakery_id, created_at, updated_at
                FROM baked_goods
                ORDER BY price ASC, id ASC
                LIMIT $1
                "#
            }
            PriceOrder::Descending => {
                r#"
                SELECT id, name, price, bakery_id, created_at, updated_at
                FROM baked_goods
                ORDER BY price DESC, id ASC
                LIMIT $1
                "#
            }
        };

        let rows = sqlx::query_as::<_, BakedGoodRow>(sql)
            .bind(limit.unwrap_or(-1))
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(BakedGood::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<BakedGood>, AppError> {
        let row = sqlx::query_as::<_, BakedGoodRow>(
            r#"
            SELECT id, name, price, bakery_id, created_at, updated_at
            FROM baked_goods
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(BakedGood::from))
    }

    async fn update(
        &self,
        id: i64,
        update: UpdateBakedGood,
    ) -> Result<Option<BakedGood>, AppError> {
        let update_bakery = update.bakery_id.is_some();
        let new_bakery_id = update.bakery_id.flatten();

        let row = sqlx::query_as::<_, BakedGoodRow>(
            r#"
            UPDATE baked_goods SET
                name       = COALESCE($2, name),
                price      = COALESCE($3, price),
                bakery_id  = CASE WHEN $4 THEN $5 ELSE bakery_id END,
                updated_at = CURRENT_TIMESTAMP
            WHERE id = $1
            RETURNING id, name, price, bakery_id, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(update.name)
        .bind(update.price)
        .bind(update_bakery)
        .bind(new_bakery_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(BakedGood::from))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM baked_goods WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
