//! DTOs for baked good endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{NoneAsEmptyString, serde_as};
use validator::Validate;

use crate::api::dto::bakery::BakerySummary;
use crate::api::dto::parse::{parse_bakery_id, parse_price};
use crate::domain::entities::{BakedGood, BakedGoodWithBakery, NewBakedGood, UpdateBakedGood};
use crate::error::AppError;

/// Form body for `POST /baked_goods`.
///
/// ```text
/// name=Croissant&price=3.50&bakery_id=1
/// ```
///
/// `name` and `price` are required. An absent or empty `bakery_id` creates a
/// baked good that belongs to no bakery.
#[serde_as]
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateBakedGoodForm {
    #[validate(
        required(message = "is required"),
        length(min = 1, max = 255, message = "must be between 1 and 255 characters")
    )]
    #[serde(default)]
    pub name: Option<String>,

    #[validate(required(message = "is required"))]
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub price: Option<String>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub bakery_id: Option<String>,
}

impl CreateBakedGoodForm {
    /// Validates the form and parses it into a domain insert.
    pub fn into_new_baked_good(self) -> Result<NewBakedGood, AppError> {
        self.validate()?;

        let (Some(name), Some(price)) = (self.name, self.price) else {
            return Err(AppError::internal(
                "Required fields missing after validation",
            ));
        };

        Ok(NewBakedGood {
            name,
            price: parse_price(&price)?,
            bakery_id: self.bakery_id.as_deref().map(parse_bakery_id).transpose()?,
        })
    }
}

/// Form body for `PATCH /baked_goods/{id}`.
///
/// Only `name`, `price` and `bakery_id` may be changed; any other key is
/// ignored. Omitted keys keep their stored value. An empty `bakery_id`
/// detaches the baked good from its bakery.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateBakedGoodForm {
    #[validate(length(min = 1, max = 255, message = "must be between 1 and 255 characters"))]
    pub name: Option<String>,
    pub price: Option<String>,
    pub bakery_id: Option<String>,
}

impl UpdateBakedGoodForm {
    /// Validates the form and parses it into a domain update.
    pub fn into_update(self) -> Result<UpdateBakedGood, AppError> {
        self.validate()?;

        let price = self.price.as_deref().map(parse_price).transpose()?;
        let bakery_id = match self.bakery_id.as_deref().map(str::trim) {
            None => None,
            Some("") => Some(None),
            Some(raw) => Some(Some(parse_bakery_id(raw)?)),
        };

        Ok(UpdateBakedGood {
            name: self.name,
            price,
            bakery_id,
        })
    }
}

/// A baked good without its bakery.
///
/// Embedded in bakery responses; it never carries a `bakery` key.
#[derive(Debug, Serialize)]
pub struct BakedGoodSummary {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub bakery_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<BakedGood> for BakedGoodSummary {
    fn from(g: BakedGood) -> Self {
        Self {
            id: g.id,
            name: g.name,
            price: g.price,
            bakery_id: g.bakery_id,
            created_at: g.created_at,
            updated_at: g.updated_at,
        }
    }
}

/// Full baked good representation with a summary of its bakery.
#[derive(Debug, Serialize)]
pub struct BakedGoodResponse {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub bakery_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub bakery: Option<BakerySummary>,
}

impl From<BakedGoodWithBakery> for BakedGoodResponse {
    fn from(value: BakedGoodWithBakery) -> Self {
        let BakedGoodWithBakery { baked_good, bakery } = value;

        Self {
            id: baked_good.id,
            name: baked_good.name,
            price: baked_good.price,
            bakery_id: baked_good.bakery_id,
            created_at: baked_good.created_at,
            updated_at: baked_good.updated_at,
            bakery: bakery.map(BakerySummary::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Bakery;
    use serde_json::{Value, json};

    fn create_form(value: Value) -> CreateBakedGoodForm {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_create_form_parses_fields() {
        let new = create_form(json!({
            "name": "Croissant",
            "price": "3.50",
            "bakery_id": "1"
        }))
        .into_new_baked_good()
        .unwrap();

        assert_eq!(
            new,
            NewBakedGood {
                name: "Croissant".to_string(),
                price: 3.5,
                bakery_id: Some(1),
            }
        );
    }

    #[test]
    fn test_create_form_empty_bakery_id_is_none() {
        let new = create_form(json!({ "name": "Bagel", "price": "1", "bakery_id": "" }))
            .into_new_baked_good()
            .unwrap();

        assert!(new.bakery_id.is_none());
    }

    #[test]
    fn test_create_form_requires_price() {
        let err = create_form(json!({ "name": "Bagel" }))
            .into_new_baked_good()
            .unwrap_err();

        match err {
            AppError::Validation { details, .. } => assert!(details.get("price").is_some()),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_create_form_rejects_non_numeric_price() {
        let err = create_form(json!({ "name": "Bagel", "price": "cheap" }))
            .into_new_baked_good()
            .unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[test]
    fn test_update_form_partial() {
        let form: UpdateBakedGoodForm = serde_json::from_value(json!({ "price": "9.99" })).unwrap();
        let update = form.into_update().unwrap();

        assert_eq!(
            update,
            UpdateBakedGood {
                price: Some(9.99),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_update_form_ignores_unknown_keys() {
        let form: UpdateBakedGoodForm =
            serde_json::from_value(json!({ "id": "500", "created_at": "yesterday" })).unwrap();

        assert!(form.into_update().unwrap().is_empty());
    }

    #[test]
    fn test_update_form_empty_bakery_id_detaches() {
        let form: UpdateBakedGoodForm = serde_json::from_value(json!({ "bakery_id": "" })).unwrap();

        assert_eq!(form.into_update().unwrap().bakery_id, Some(None));
    }

    #[test]
    fn test_response_embeds_bakery_summary_only() {
        let now = Utc::now();
        let value = BakedGoodWithBakery {
            baked_good: BakedGood::new(4, "Croissant".to_string(), 3.5, Some(1), now, now),
            bakery: Some(Bakery::new(1, "North".to_string(), now, now)),
        };

        let body = serde_json::to_value(BakedGoodResponse::from(value)).unwrap();

        assert_eq!(body["price"], 3.5);
        assert_eq!(body["bakery"]["name"], "North");
        assert!(body["bakery"].get("baked_goods").is_none());
    }

    #[test]
    fn test_response_without_bakery_is_null() {
        let now = Utc::now();
        let value = BakedGoodWithBakery {
            baked_good: BakedGood::new(5, "Bagel".to_string(), 1.0, None, now, now),
            bakery: None,
        };

        let body = serde_json::to_value(BakedGoodResponse::from(value)).unwrap();

        assert!(body["bakery"].is_null());
        assert!(body["bakery_id"].is_null());
    }
}
