//! Bakery service.

use std::collections::HashMap;
use std::sync::Arc;

use crate::application::services::rules::validate_name;
use crate::domain::entities::{BakedGood, Bakery, BakeryWithGoods, NewBakery, UpdateBakery};
use crate::domain::repositories::{BakedGoodRepository, BakeryRepository};
use crate::error::AppError;

/// Service for reading and renaming bakeries.
///
/// Every bakery it returns comes with its full list of baked goods.
pub struct BakeryService<B: BakeryRepository, G: BakedGoodRepository> {
    bakery_repository: Arc<B>,
    baked_good_repository: Arc<G>,
}

impl<B: BakeryRepository, G: BakedGoodRepository> BakeryService<B, G> {
    /// Creates a new bakery service.
    pub fn new(bakery_repository: Arc<B>, baked_good_repository: Arc<G>) -> Self {
        Self {
            bakery_repository,
            baked_good_repository,
        }
    }

    /// Lists all bakeries, each with its baked goods.
    ///
    /// Two queries are issued regardless of the number of bakeries.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_bakeries(&self) -> Result<Vec<BakeryWithGoods>, AppError> {
        let bakeries = self.bakery_repository.list().await?;
        let goods = self.baked_good_repository.list().await?;

        let mut by_bakery: HashMap<i64, Vec<BakedGood>> = HashMap::new();
        for good in goods {
            if let Some(bakery_id) = good.bakery_id {
                by_bakery.entry(bakery_id).or_default().push(good);
            }
        }

        Ok(bakeries
            .into_iter()
            .map(|bakery| {
                let baked_goods = by_bakery.remove(&bakery.id).unwrap_or_default();
                BakeryWithGoods {
                    bakery,
                    baked_goods,
                }
            })
            .collect())
    }

    /// Retrieves one bakery with its baked goods.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the bakery does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_bakery(&self, id: i64) -> Result<BakeryWithGoods, AppError> {
        let bakery = self
            .bakery_repository
            .find_by_id(id)
            .await?
            .ok_or_else(AppError::record_not_found)?;

        self.with_goods(bakery).await
    }

    /// Applies a partial update to a bakery.
    ///
    /// An empty update returns the bakery unchanged without touching the store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the new name is blank or too long.
    /// Returns [`AppError::NotFound`] if the bakery does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_bakery(
        &self,
        id: i64,
        update: UpdateBakery,
    ) -> Result<BakeryWithGoods, AppError> {
        if update.is_empty() {
            return self.get_bakery(id).await;
        }

        if let Some(name) = &update.name {
            validate_name(name)?;
        }

        let bakery = self
            .bakery_repository
            .update(id, update)
            .await?
            .ok_or_else(AppError::record_not_found)?;

        tracing::info!(bakery_id = bakery.id, name = %bakery.name, "Bakery updated");

        self.with_goods(bakery).await
    }

    /// Inserts a bakery. Used by seeding tools, not exposed over HTTP.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the name is blank or too long.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_bakery(&self, name: String) -> Result<Bakery, AppError> {
        validate_name(&name)?;

        let bakery = self.bakery_repository.create(NewBakery { name }).await?;
        tracing::info!(bakery_id = bakery.id, name = %bakery.name, "Bakery created");

        Ok(bakery)
    }

    /// Counts stored bakeries.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn count_bakeries(&self) -> Result<i64, AppError> {
        self.bakery_repository.count().await
    }

    async fn with_goods(&self, bakery: Bakery) -> Result<BakeryWithGoods, AppError> {
        let baked_goods = self.baked_good_repository.list_by_bakery(bakery.id).await?;

        Ok(BakeryWithGoods {
            bakery,
            baked_goods,
        })
    }
}
