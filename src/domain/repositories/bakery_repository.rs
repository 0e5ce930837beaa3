//! Repository trait for bakeries.

use crate::domain::entities::{Bakery, NewBakery, UpdateBakery};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for bakeries.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteBakeryRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BakeryRepository: Send + Sync {
    /// Inserts a bakery. Only used for seeding; the HTTP API never creates bakeries.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_bakery: NewBakery) -> Result<Bakery, AppError>;

    /// Lists every bakery ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Bakery>, AppError>;

    /// Finds a bakery by its primary key.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Bakery>, AppError>;

    /// Applies a partial update and returns the stored row.
    ///
    /// Returns `Ok(None)` when no bakery has this id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, update: UpdateBakery) -> Result<Option<Bakery>, AppError>;

    /// Counts stored bakeries.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}
