#![allow(dead_code)]

use bakery_api::infrastructure::persistence::MIGRATOR;
use bakery_api::routes::router;
use bakery_api::state::AppState;
use axum_test::TestServer;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;
use std::sync::Arc;

/// Fresh in-memory database with migrations applied.
///
/// A single connection is kept alive for the life of the pool because every
/// in-memory SQLite connection is its own database.
pub async fn test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .unwrap()
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .unwrap();

    MIGRATOR.run(&pool).await.unwrap();
    pool
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    AppState::new(Arc::new(pool))
}

pub fn make_server(pool: SqlitePool) -> TestServer {
    TestServer::new(router(create_test_state(pool))).unwrap()
}

pub async fn create_test_bakery(pool: &SqlitePool, name: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO bakeries (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_baked_good(
    pool: &SqlitePool,
    name: &str,
    price: f64,
    bakery_id: Option<i64>,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO baked_goods (name, price, bakery_id) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(name)
    .bind(price)
    .bind(bakery_id)
    .fetch_one(pool)
    .await
    .unwrap()
}
