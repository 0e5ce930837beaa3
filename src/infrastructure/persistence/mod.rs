//! SQLite repository implementations.
//!
//! Concrete implementations of the domain repository traits using SQLx
//! runtime-checked queries mapped through `FromRow` row structs.
//!
//! # Repositories
//!
//! - [`SqliteBakeryRepository`] - Bakery storage and retrieval
//! - [`SqliteBakedGoodRepository`] - Baked good storage, ordering and deletion

pub mod pool;
pub mod sqlite_baked_good_repository;
pub mod sqlite_bakery_repository;

pub use pool::{MIGRATOR, connect, reset};
pub use sqlite_baked_good_repository::SqliteBakedGoodRepository;
pub use sqlite_bakery_repository::SqliteBakeryRepository;
