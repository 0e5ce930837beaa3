//! Application layer services implementing business logic.
//!
//! Services consume repository traits, attach related records and enforce
//! business rules, giving HTTP handlers a small API to call.
//!
//! # Modules
//!
//! - [`services::bakery_service::BakeryService`] - Bakery listing, lookup and renaming
//! - [`services::baked_good_service::BakedGoodService`] - Baked good CRUD and price queries
//! - [`seed`] - Demo data for the `admin` binary

pub mod seed;
pub mod services;
