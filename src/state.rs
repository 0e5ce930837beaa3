//! Shared application state injected into every handler.

use sqlx::SqlitePool;
use std::sync::Arc;

use crate::application::services::{BakedGoodService, BakeryService};
use crate::infrastructure::persistence::{SqliteBakedGoodRepository, SqliteBakeryRepository};

pub type SqliteBakeryService = BakeryService<SqliteBakeryRepository, SqliteBakedGoodRepository>;
pub type SqliteBakedGoodService =
    BakedGoodService<SqliteBakedGoodRepository, SqliteBakeryRepository>;

/// Services shared by all handlers.
///
/// The store handle lives inside the repositories; handlers reach it only
/// through these services.
#[derive(Clone)]
pub struct AppState {
    pub bakery_service: Arc<SqliteBakeryService>,
    pub baked_good_service: Arc<SqliteBakedGoodService>,
}

impl AppState {
    /// Wires repositories and services over one connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        let bakery_repository = Arc::new(SqliteBakeryRepository::new(pool.clone()));
        let baked_good_repository = Arc::new(SqliteBakedGoodRepository::new(pool));

        Self {
            bakery_service: Arc::new(BakeryService::new(
                bakery_repository.clone(),
                baked_good_repository.clone(),
            )),
            baked_good_service: Arc::new(BakedGoodService::new(
                baked_good_repository,
                bakery_repository,
            )),
        }
    }
}
