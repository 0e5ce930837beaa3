//! DTOs for bakery endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::dto::baked_good::BakedGoodSummary;
use crate::domain::entities::{Bakery, BakeryWithGoods, UpdateBakery};
use crate::error::AppError;

/// Form body for `PATCH /bakeries/{id}`.
///
/// Only `name` may be changed. Any other key, including `id`, is ignored.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateBakeryForm {
    #[validate(length(min = 1, max = 255, message = "must be between 1 and 255 characters"))]
    pub name: Option<String>,
}

impl UpdateBakeryForm {
    /// Validates the form and converts it into a domain update.
    pub fn into_update(self) -> Result<UpdateBakery, AppError> {
        self.validate()?;
        Ok(UpdateBakery { name: self.name })
    }
}

/// A bakery without its baked goods.
///
/// Embedded in baked good responses; it never carries a `baked_goods` key,
/// which keeps the bakery/baked-good graph from recursing.
#[derive(Debug, Serialize)]
pub struct BakerySummary {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Bakery> for BakerySummary {
    fn from(b: Bakery) -> Self {
        Self {
            id: b.id,
            name: b.name,
            created_at: b.created_at,
            updated_at: b.updated_at,
        }
    }
}

/// Full bakery representation with its baked goods.
#[derive(Debug, Serialize)]
pub struct BakeryResponse {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub baked_goods: Vec<BakedGoodSummary>,
}

impl From<BakeryWithGoods> for BakeryResponse {
    fn from(value: BakeryWithGoods) -> Self {
        let BakeryWithGoods {
            bakery,
            baked_goods,
        } = value;

        Self {
            id: bakery.id,
            name: bakery.name,
            created_at: bakery.created_at,
            updated_at: bakery.updated_at,
            baked_goods: baked_goods
                .into_iter()
                .map(BakedGoodSummary::from)
                .collect(),
        }
    }
}
