//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod baked_goods;
pub mod bakeries;
pub mod health;
pub mod home;

pub use baked_goods::{
    baked_good_handler, baked_good_list_handler, by_price_handler, create_baked_good_handler,
    delete_baked_good_handler, most_expensive_handler, update_baked_good_handler,
};
pub use bakeries::{bakery_handler, bakery_list_handler, update_bakery_handler};
pub use health::health_handler;
pub use home::home_handler;
