//! Data Transfer Objects for API requests and responses.
//!
//! Request DTOs are form-encoded (`application/x-www-form-urlencoded`) and
//! carry raw strings; they are parsed and validated into domain write models
//! before reaching the services. Response DTOs define the JSON shapes.

pub mod baked_good;
pub mod bakery;
pub mod health;
pub mod message;
pub mod parse;
