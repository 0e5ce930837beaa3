//! Business logic services for the application layer.

pub mod baked_good_service;
pub mod bakery_service;
pub mod rules;

pub use baked_good_service::BakedGoodService;
pub use bakery_service::BakeryService;
