//! Repository trait for baked goods.

use crate::domain::entities::{BakedGood, NewBakedGood, UpdateBakedGood};
use crate::error::AppError;
use async_trait::async_trait;

/// Sort direction for price-ordered queries.
///
/// Ties on price are always broken by ascending id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceOrder {
    Ascending,
    Descending,
}

/// Repository interface for baked goods.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteBakedGoodRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BakedGoodRepository: Send + Sync {
    /// Inserts a baked good.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `bakery_id` references a missing bakery.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_baked_good: NewBakedGood) -> Result<BakedGood, AppError>;

    /// Lists every baked good ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<BakedGood>, AppError>;

    /// Lists the baked goods owned by one bakery, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_by_bakery(&self, bakery_id: i64) -> Result<Vec<BakedGood>, AppError>;

    /// Lists every baked good ordered by price.
    ///
    /// `limit` caps the number of rows; `None` returns all of them.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_by_price(
        &self,
        order: PriceOrder,
        limit: Option<i64>,
    ) -> Result<Vec<BakedGood>, AppError>;

    /// Finds a baked good by its primary key.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<BakedGood>, AppError>;

    /// Applies a partial update and returns the stored row.
    ///
    /// Returns `Ok(None)` when no baked good has this id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `bakery_id` references a missing bakery.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(
        &self,
        id: i64,
        update: UpdateBakedGood,
    ) -> Result<Option<BakedGood>, AppError>;

    /// Permanently removes a baked good.
    ///
    /// Returns `false` when nothing was deleted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
