//! Connection pool setup and embedded migrations.

use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};
use sqlx::SqlitePool;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::config::Config;

/// Schema migrations compiled into the binary from `./migrations`.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Opens the SQLite pool described by `config` and brings the schema up to date.
///
/// The database file is created when missing. Foreign keys are enforced on
/// every connection.
///
/// # Errors
///
/// Returns an error if the URL is malformed, the file cannot be opened, or a
/// migration fails.
pub async fn connect(config: &Config) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&config.database_url)
        .context("Invalid DATABASE_URL")?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Some(Duration::from_secs(config.db_idle_timeout)))
        .max_lifetime(Some(Duration::from_secs(config.db_max_lifetime)))
        .connect_with(options)
        .await
        .context("Failed to connect to database")?;

    MIGRATOR
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;

    Ok(pool)
}

/// Deletes every bakery and baked good and restarts id numbering.
///
/// # Errors
///
/// Returns an error if any statement fails; the transaction is rolled back.
pub async fn reset(pool: &SqlitePool) -> Result<()> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM baked_goods")
        .execute(&mut *tx)
        .await?;
    sqlx::query("DELETE FROM bakeries").execute(&mut *tx).await?;
    sqlx::query("DELETE FROM sqlite_sequence WHERE name IN ('bakeries', 'baked_goods')")
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(())
}
