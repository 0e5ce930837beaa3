//! Baked good service.

use std::collections::HashMap;
use std::sync::Arc;

use crate::application::services::rules::{validate_name, validate_price};
use crate::domain::entities::{
    BakedGood, BakedGoodWithBakery, Bakery, NewBakedGood, UpdateBakedGood,
};
use crate::domain::repositories::{BakedGoodRepository, BakeryRepository, PriceOrder};
use crate::error::AppError;

/// Service for baked good CRUD and price-ordered queries.
///
/// Every baked good it returns is paired with its owning bakery, if any.
/// References to bakeries are checked before writing so a missing bakery
/// surfaces as a validation error instead of a constraint failure.
pub struct BakedGoodService<G: BakedGoodRepository, B: BakeryRepository> {
    baked_good_repository: Arc<G>,
    bakery_repository: Arc<B>,
}

impl<G: BakedGoodRepository, B: BakeryRepository> BakedGoodService<G, B> {
    /// Creates a new baked good service.
    pub fn new(baked_good_repository: Arc<G>, bakery_repository: Arc<B>) -> Self {
        Self {
            baked_good_repository,
            bakery_repository,
        }
    }

    /// Lists all baked goods ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_baked_goods(&self) -> Result<Vec<BakedGoodWithBakery>, AppError> {
        let goods = self.baked_good_repository.list().await?;
        self.with_bakeries(goods).await
    }

    /// Lists all baked goods by ascending price, ties by ascending id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_by_price(&self) -> Result<Vec<BakedGoodWithBakery>, AppError> {
        let goods = self
            .baked_good_repository
            .list_by_price(PriceOrder::Ascending, None)
            .await?;
        self.with_bakeries(goods).await
    }

    /// Returns the baked good with the highest price.
    ///
    /// Among equally priced goods the one with the lowest id wins.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if there are no baked goods.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn most_expensive(&self) -> Result<BakedGoodWithBakery, AppError> {
        let good = self
            .baked_good_repository
            .list_by_price(PriceOrder::Descending, Some(1))
            .await?
            .into_iter()
            .next()
            .ok_or_else(AppError::record_not_found)?;

        self.with_bakery(good).await
    }

    /// Retrieves one baked good.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the baked good does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_baked_good(&self, id: i64) -> Result<BakedGoodWithBakery, AppError> {
        let good = self.find_existing(id).await?;
        self.with_bakery(good).await
    }

    /// Creates a baked good.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the name or price is invalid or the
    /// referenced bakery does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_baked_good(
        &self,
        new_baked_good: NewBakedGood,
    ) -> Result<BakedGoodWithBakery, AppError> {
        validate_name(&new_baked_good.name)?;
        validate_price(new_baked_good.price)?;
        let bakery = self.resolve_bakery(new_baked_good.bakery_id).await?;

        let good = self.baked_good_repository.create(new_baked_good).await?;
        tracing::info!(
            baked_good_id = good.id,
            name = %good.name,
            price = good.price,
            bakery_id = ?good.bakery_id,
            "Baked good created"
        );

        Ok(BakedGoodWithBakery {
            baked_good: good,
            bakery,
        })
    }

    /// Applies a partial update to a baked good.
    ///
    /// Fields left as `None` keep their stored value. An empty update returns
    /// the record unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the baked good does not exist.
    /// Returns [`AppError::Validation`] if a new value is invalid or the
    /// referenced bakery does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_baked_good(
        &self,
        id: i64,
        update: UpdateBakedGood,
    ) -> Result<BakedGoodWithBakery, AppError> {
        let existing = self.find_existing(id).await?;

        if update.is_empty() {
            return self.with_bakery(existing).await;
        }

        if let Some(name) = &update.name {
            validate_name(name)?;
        }
        if let Some(price) = update.price {
            validate_price(price)?;
        }
        if let Some(bakery_id) = update.bakery_id {
            self.resolve_bakery(bakery_id).await?;
        }

        // The row may have been deleted between the lookup and the write.
        let good = self
            .baked_good_repository
            .update(id, update)
            .await?
            .ok_or_else(AppError::record_not_found)?;

        tracing::info!(baked_good_id = good.id, "Baked good updated");

        self.with_bakery(good).await
    }

    /// Permanently deletes a baked good.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the baked good does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_baked_good(&self, id: i64) -> Result<(), AppError> {
        if !self.baked_good_repository.delete(id).await? {
            return Err(AppError::record_not_found());
        }

        tracing::info!(baked_good_id = id, "Baked good deleted");
        Ok(())
    }

    async fn find_existing(&self, id: i64) -> Result<BakedGood, AppError> {
        self.baked_good_repository
            .find_by_id(id)
            .await?
            .ok_or_else(AppError::record_not_found)
    }

    /// Loads the referenced bakery, failing validation when it is missing.
    async fn resolve_bakery(&self, bakery_id: Option<i64>) -> Result<Option<Bakery>, AppError> {
        let Some(bakery_id) = bakery_id else {
            return Ok(None);
        };

        match self.bakery_repository.find_by_id(bakery_id).await? {
            Some(bakery) => Ok(Some(bakery)),
            None => Err(AppError::invalid_field(
                "bakery_id",
                format!("bakery {bakery_id} does not exist"),
            )),
        }
    }

    async fn with_bakery(&self, good: BakedGood) -> Result<BakedGoodWithBakery, AppError> {
        let bakery = match good.bakery_id {
            Some(bakery_id) => self.bakery_repository.find_by_id(bakery_id).await?,
            None => None,
        };

        Ok(BakedGoodWithBakery {
            baked_good: good,
            bakery,
        })
    }

    async fn with_bakeries(
        &self,
        goods: Vec<BakedGood>,
    ) -> Result<Vec<BakedGoodWithBakery>, AppError> {
        if goods.iter().all(|g| g.bakery_id.is_none()) {
            return Ok(goods
                .into_iter()
                .map(|baked_good| BakedGoodWithBakery {
                    baked_good,
                    bakery: None,
                })
                .collect());
        }

        let bakeries: HashMap<i64, Bakery> = self
            .bakery_repository
            .list()
            .await?
            .into_iter()
            .map(|b| (b.id, b))
            .collect();

        Ok(goods
            .into_iter()
            .map(|baked_good| {
                let bakery = baked_good
                    .bakery_id
                    .and_then(|id| bakeries.get(&id).cloned());
                BakedGoodWithBakery { baked_good, bakery }
            })
            .collect())
    }
}
