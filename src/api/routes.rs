//! API route configuration.

use crate::api::handlers::{
    baked_good_handler, baked_good_list_handler, bakery_handler, bakery_list_handler,
    by_price_handler, create_baked_good_handler, delete_baked_good_handler, health_handler,
    home_handler, most_expensive_handler, update_baked_good_handler, update_bakery_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All API routes.
///
/// # Endpoints
///
/// - `GET    /`                            - Greeting page
/// - `GET    /health`                      - Database health check
/// - `GET    /bakeries`                    - List bakeries with their baked goods
/// - `GET    /bakeries/{id}`               - One bakery with its baked goods
/// - `PATCH  /bakeries/{id}`               - Rename a bakery (form body)
/// - `GET    /baked_goods`                 - List baked goods
/// - `POST   /baked_goods`                 - Create a baked good (form body)
/// - `GET    /baked_goods/by_price`        - Baked goods, cheapest first
/// - `GET    /baked_goods/most_expensive`  - The most expensive baked good
/// - `GET    /baked_goods/{id}`            - One baked good
/// - `PATCH  /baked_goods/{id}`            - Partially update a baked good (form body)
/// - `DELETE /baked_goods/{id}`            - Delete a baked good
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home_handler))
        .route("/health", get(health_handler))
        .route("/bakeries", get(bakery_list_handler))
        .route(
            "/bakeries/{id}",
            get(bakery_handler).patch(update_bakery_handler),
        )
        .route(
            "/baked_goods",
            get(baked_good_list_handler).post(create_baked_good_handler),
        )
        .route("/baked_goods/by_price", get(by_price_handler))
        .route("/baked_goods/most_expensive", get(most_expensive_handler))
        .route(
            "/baked_goods/{id}",
            get(baked_good_handler)
                .patch(update_baked_good_handler)
                .delete(delete_baked_good_handler),
        )
}
