//! Core domain entities representing the bakery data model.
//!
//! Entities are plain data structures without persistence or HTTP concerns.
//!
//! # Entity Types
//!
//! - [`Bakery`] - A producer owning zero or more baked goods
//! - [`BakedGood`] - A priced product belonging to at most one bakery
//!
//! # Write Models
//!
//! - `NewBakery`, `NewBakedGood` - For inserting records
//! - `UpdateBakery`, `UpdateBakedGood` - Allow-listed partial updates
//!
//! # Read Aggregates
//!
//! - [`BakeryWithGoods`] - A bakery and its children
//! - [`BakedGoodWithBakery`] - A baked good and its parent

pub mod baked_good;
pub mod bakery;

pub use baked_good::{BakedGood, BakedGoodWithBakery, NewBakedGood, UpdateBakedGood};
pub use bakery::{Bakery, BakeryWithGoods, NewBakery, UpdateBakery};
