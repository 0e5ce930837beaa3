//! # Bakery API
//!
//! A REST API over bakeries and the baked goods they produce, built with Axum
//! and SQLite.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities and repository traits
//! - **Application Layer** ([`application`]) - Services with business rules
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite repositories and migrations
//! - **API Layer** ([`api`]) - Form DTOs, JSON responses, handlers and routes
//!
//! ## Serialization
//!
//! A bakery is rendered with its baked goods, each without a `bakery` key.
//! A baked good is rendered with a summary of its bakery, without that
//! bakery's `baked_goods`. The summary types make the cycle unrepresentable.
//!
//! ## Quick Start
//!
//! ```bash
//! # Seed demo data
//! cargo run --bin admin -- seed --yes
//!
//! # Start the service on port 5555
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{BakedGoodService, BakeryService};
    pub use crate::domain::entities::{
        BakedGood, Bakery, NewBakedGood, NewBakery, UpdateBakedGood, UpdateBakery,
    };
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
