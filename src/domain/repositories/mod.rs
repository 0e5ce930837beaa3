//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! with `mockall` for service unit tests.
//!
//! # Available Repositories
//!
//! - [`BakeryRepository`] - Bakery lookup, seeding and renaming
//! - [`BakedGoodRepository`] - Baked good CRUD and price-ordered queries
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod baked_good_repository;
pub mod bakery_repository;

pub use baked_good_repository::{BakedGoodRepository, PriceOrder};
pub use bakery_repository::BakeryRepository;

#[cfg(test)]
pub use baked_good_repository::MockBakedGoodRepository;
#[cfg(test)]
pub use bakery_repository::MockBakeryRepository;
