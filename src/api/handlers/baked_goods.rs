//! Handlers for baked good endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::baked_good::{BakedGoodResponse, CreateBakedGoodForm, UpdateBakedGoodForm};
use crate::api::dto::message::DeleteResponse;
use crate::api::extract::FormBody;
use crate::api::response::PrettyJson;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all baked goods ordered by id.
///
/// # Endpoint
///
/// `GET /baked_goods`
pub async fn baked_good_list_handler(
    State(state): State<AppState>,
) -> Result<PrettyJson<Vec<BakedGoodResponse>>, AppError> {
    let goods = state.baked_good_service.list_baked_goods().await?;

    Ok(PrettyJson(goods.into_iter().map(BakedGoodResponse::from).collect()))
}

/// Creates a baked good from a form body.
///
/// # Endpoint
///
/// `POST /baked_goods`
///
/// ```text
/// name=Croissant&price=3.50&bakery_id=1
/// ```
///
/// # Errors
///
/// Returns 400 if `name` or `price` is missing or malformed, or if
/// `bakery_id` does not reference an existing bakery.
pub async fn create_baked_good_handler(
    State(state): State<AppState>,
    FormBody(form): FormBody<CreateBakedGoodForm>,
) -> Result<(StatusCode, PrettyJson<BakedGoodResponse>), AppError> {
    let new_baked_good = form.into_new_baked_good()?;
    let good = state
        .baked_good_service
        .create_baked_good(new_baked_good)
        .await?;

    Ok((StatusCode::CREATED, PrettyJson(good.into())))
}

/// Returns one baked good.
///
/// # Endpoint
///
/// `GET /baked_goods/{id}`
///
/// # Errors
///
/// Returns 404 if the baked good does not exist.
pub async fn baked_good_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<PrettyJson<BakedGoodResponse>, AppError> {
    let good = state.baked_good_service.get_baked_good(id).await?;

    Ok(PrettyJson(good.into()))
}

/// Partially updates a baked good from a form body.
///
/// # Endpoint
///
/// `PATCH /baked_goods/{id}`
///
/// Only the keys present in the form change; `name`, `price` and `bakery_id`
/// are recognized, everything else is ignored.
///
/// # Errors
///
/// Returns 400 if a value is malformed or references a missing bakery.
/// Returns 404 if the baked good does not exist.
pub async fn update_baked_good_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    FormBody(form): FormBody<UpdateBakedGoodForm>,
) -> Result<PrettyJson<BakedGoodResponse>, AppError> {
    let update = form.into_update()?;
    let good = state
        .baked_good_service
        .update_baked_good(id, update)
        .await?;

    Ok(PrettyJson(good.into()))
}

/// Permanently deletes a baked good.
///
/// # Endpoint
///
/// `DELETE /baked_goods/{id}`
///
/// # Response
///
/// ```json
/// { "delete_successful": true, "message": "Baked good deleted." }
/// ```
///
/// # Errors
///
/// Returns 404 if the baked good does not exist.
pub async fn delete_baked_good_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<PrettyJson<DeleteResponse>, AppError> {
    state.baked_good_service.delete_baked_good(id).await?;

    Ok(PrettyJson(DeleteResponse::baked_good()))
}

/// Lists all baked goods from cheapest to most expensive.
///
/// # Endpoint
///
/// `GET /baked_goods/by_price`
pub async fn by_price_handler(
    State(state): State<AppState>,
) -> Result<PrettyJson<Vec<BakedGoodResponse>>, AppError> {
    let goods = state.baked_good_service.list_by_price().await?;

    Ok(PrettyJson(goods.into_iter().map(BakedGoodResponse::from).collect()))
}

/// Returns the single most expensive baked good.
///
/// # Endpoint
///
/// `GET /baked_goods/most_expensive`
///
/// # Errors
///
/// Returns 404 if there are no baked goods.
pub async fn most_expensive_handler(
    State(state): State<AppState>,
) -> Result<PrettyJson<BakedGoodResponse>, AppError> {
    let good = state.baked_good_service.most_expensive().await?;

    Ok(PrettyJson(good.into()))
}
