//! Demo data used by `admin seed`.

use crate::application::services::{BakedGoodService, BakeryService};
use crate::domain::entities::NewBakedGood;
use crate::domain::repositories::{BakedGoodRepository, BakeryRepository};
use crate::error::AppError;

/// Bakeries and their goods as `(bakery, [(good, price)])`.
pub const DEMO_DATA: &[(&str, &[(&str, f64)])] = &[
    (
        "Delightful donuts",
        &[("Chocolate dipped donut", 2.75), ("Apple fritter", 3.25)],
    ),
    (
        "Incredible crullers",
        &[
            ("Glazed honey cruller", 3.0),
            ("Chocolate cruller", 3.5),
            ("Sourdough loaf", 8.0),
        ],
    ),
    (
        "Parisian patisserie",
        &[("Croissant", 3.5), ("Opera cake", 24.0)],
    ),
];

/// Counts of inserted rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub bakeries: usize,
    pub baked_goods: usize,
}

/// Inserts [`DEMO_DATA`] through the services so the usual validation applies.
///
/// # Errors
///
/// Returns the first error raised by either service.
pub async fn seed_demo_data<B, G>(
    bakeries: &BakeryService<B, G>,
    baked_goods: &BakedGoodService<G, B>,
) -> Result<SeedSummary, AppError>
where
    B: BakeryRepository,
    G: BakedGoodRepository,
{
    let mut summary = SeedSummary::default();

    for (bakery_name, goods) in DEMO_DATA {
        let bakery = bakeries.create_bakery(bakery_name.to_string()).await?;
        summary.bakeries += 1;

        for (name, price) in goods.iter() {
            baked_goods
                .create_baked_good(NewBakedGood {
                    name: name.to_string(),
                    price: *price,
                    bakery_id: Some(bakery.id),
                })
                .await?;
            summary.baked_goods += 1;
        }
    }

    tracing::info!(
        bakeries = summary.bakeries,
        baked_goods = summary.baked_goods,
        "Demo data seeded"
    );

    Ok(summary)
}
