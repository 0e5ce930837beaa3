//! Baked good entity and its write models.

use chrono::{DateTime, Utc};

use super::bakery::Bakery;

/// A priced product, optionally owned by one bakery.
#[derive(Debug, Clone, PartialEq)]
pub struct BakedGood {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub bakery_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BakedGood {
    pub fn new(
        id: i64,
        name: String,
        price: f64,
        bakery_id: Option<i64>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            price,
            bakery_id,
            created_at,
            updated_at,
        }
    }
}

/// Input data for inserting a baked good.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBakedGood {
    pub name: String,
    pub price: f64,
    pub bakery_id: Option<i64>,
}

/// Allow-listed fields of a baked good that clients may change.
///
/// # `bakery_id` semantics
///
/// - `None` → leave the association unchanged
/// - `Some(None)` → detach from its bakery
/// - `Some(Some(id))` → move to bakery `id`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateBakedGood {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub bakery_id: Option<Option<i64>>,
}

impl UpdateBakedGood {
    /// True when the update would not change anything.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none() && self.bakery_id.is_none()
    }
}

/// A baked good together with the bakery it belongs to, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct BakedGoodWithBakery {
    pub baked_good: BakedGood,
    pub bakery: Option<Bakery>,
}
