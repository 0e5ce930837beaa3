//! Bakery entity and its write models.

use chrono::{DateTime, Utc};

use super::baked_good::BakedGood;

/// A producer of baked goods.
///
/// Bakeries are created by seeding (see the `admin` binary) and can only be
/// renamed through the HTTP API.
#[derive(Debug, Clone, PartialEq)]
pub struct Bakery {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Bakery {
    pub fn new(
        id: i64,
        name: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            created_at,
            updated_at,
        }
    }
}

/// Input data for inserting a bakery.
#[derive(Debug, Clone)]
pub struct NewBakery {
    pub name: String,
}

/// Allow-listed fields of a bakery that clients may change.
///
/// `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateBakery {
    pub name: Option<String>,
}

impl UpdateBakery {
    /// True when the update would not change anything.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
    }
}

/// A bakery together with every baked good it owns, ordered by id.
#[derive(Debug, Clone, PartialEq)]
pub struct BakeryWithGoods {
    pub bakery: Bakery,
    pub baked_goods: Vec<BakedGood>,
}
