//! CLI administration tool for bakery-api.
//!
//! Bakeries cannot be created over HTTP; this tool is how they get into the
//! database.
//!
//! # Usage
//!
//! ```bash
//! # Add a bakery
//! cargo run --bin admin -- bakery add --name "Delightful donuts"
//!
//! # List bakeries with their baked good counts
//! cargo run --bin admin -- bakery list
//!
//! # Replace everything with demo data
//! cargo run --bin admin -- seed
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (optional): SQLite database, default `sqlite://app.db`

use bakery_api::application::seed::seed_demo_data;
use bakery_api::config;
use bakery_api::infrastructure::persistence;
use bakery_api::state::AppState;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::SqlitePool;
use std::sync::Arc;

/// CLI tool for managing bakery-api data.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage bakeries
    Bakery {
        #[command(subcommand)]
        action: BakeryAction,
    },

    /// Wipe both tables and insert demo data
    Seed {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Bakery subcommands.
#[derive(Subcommand)]
enum BakeryAction {
    /// Add a bakery
    Add {
        /// Bakery name (prompted for when omitted)
        #[arg(short, long)]
        name: Option<String>,
    },

    /// List bakeries
    List,
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection and row counts
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Invalid configuration")?;
    let pool = persistence::connect(&config).await?;
    let state = AppState::new(Arc::new(pool.clone()));

    match cli.command {
        Commands::Bakery { action } => handle_bakery_action(action, &state).await?,
        Commands::Seed { yes } => handle_seed(yes, &state, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    pool.close().await;
    Ok(())
}

/// Dispatches bakery commands.
async fn handle_bakery_action(action: BakeryAction, state: &AppState) -> Result<()> {
    match action {
        BakeryAction::Add { name } => add_bakery(state, name).await,
        BakeryAction::List => list_bakeries(state).await,
    }
}

async fn add_bakery(state: &AppState, name: Option<String>) -> Result<()> {
    let name = match name {
        Some(n) => n,
        None => Input::new().with_prompt("Bakery name").interact_text()?,
    };

    let bakery = state
        .bakery_service
        .create_bakery(name)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create bakery: {}", e))?;

    println!(
        "{} {} (id {})",
        "Created bakery".green().bold(),
        bakery.name.cyan(),
        bakery.id.to_string().bright_white()
    );

    Ok(())
}

/// Lists bakeries in a table.
///
/// ```text
///   ID  Name                           Goods  Created
///   1   Delightful donuts              2      2025-01-15 10:30
/// ```
async fn list_bakeries(state: &AppState) -> Result<()> {
    let bakeries = state
        .bakery_service
        .list_bakeries()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list bakeries: {}", e))?;

    if bakeries.is_empty() {
        println!("{}", "  No bakeries found".yellow());
        println!();
        println!(
            "  Add one with: {} admin bakery add",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<4} {:<30} {:<6} {}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Goods".bright_white().bold(),
        "Created".bright_white().bold()
    );
    println!("  {}", "-".repeat(64).bright_black());

    for entry in &bakeries {
        println!(
            "  {:<4} {:<30} {:<6} {}",
            entry.bakery.id.to_string().bright_black(),
            entry.bakery.name.cyan(),
            entry.baked_goods.len(),
            entry
                .bakery
                .created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black()
        );
    }

    println!();
    println!(
        "  Total: {}",
        bakeries.len().to_string().bright_white().bold()
    );

    Ok(())
}

/// Replaces all data with the demo set after confirmation.
async fn handle_seed(skip_confirm: bool, state: &AppState, pool: &SqlitePool) -> Result<()> {
    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete ALL bakeries and baked goods and insert demo data?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    persistence::reset(pool).await?;

    let summary = seed_demo_data(
        state.bakery_service.as_ref(),
        state.baked_good_service.as_ref(),
    )
    .await
    .map_err(|e| anyhow::anyhow!("Failed to seed: {}", e))?;

    println!(
        "{} {} bakeries, {} baked goods",
        "Seeded".green().bold(),
        summary.bakeries.to_string().bright_white(),
        summary.baked_goods.to_string().bright_white()
    );

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &SqlitePool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            let version: String = sqlx::query_scalar("SELECT sqlite_version()")
                .fetch_one(pool)
                .await?;
            let bakeries: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM bakeries")
                .fetch_one(pool)
                .await?;
            let baked_goods: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM baked_goods")
                .fetch_one(pool)
                .await?;

            println!("{}", "Database connection OK".green().bold());
            println!("  SQLite:      {}", version.bright_white());
            println!("  Bakeries:    {}", bakeries.to_string().bright_green());
            println!("  Baked goods: {}", baked_goods.to_string().bright_green());
        }
    }

    Ok(())
}
