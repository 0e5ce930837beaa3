//! Handlers for bakery endpoints.

use axum::extract::{Path, State};

use crate::api::dto::bakery::{BakeryResponse, UpdateBakeryForm};
use crate::api::extract::FormBody;
use crate::api::response::PrettyJson;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all bakeries with their baked goods.
///
/// # Endpoint
///
/// `GET /bakeries`
pub async fn bakery_list_handler(
    State(state): State<AppState>,
) -> Result<PrettyJson<Vec<BakeryResponse>>, AppError> {
    let bakeries = state.bakery_service.list_bakeries().await?;

    Ok(PrettyJson(bakeries.into_iter().map(BakeryResponse::from).collect()))
}

/// Returns one bakery with its baked goods.
///
/// # Endpoint
///
/// `GET /bakeries/{id}`
///
/// # Errors
///
/// Returns 404 if the bakery does not exist.
pub async fn bakery_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<PrettyJson<BakeryResponse>, AppError> {
    let bakery = state.bakery_service.get_bakery(id).await?;

    Ok(PrettyJson(bakery.into()))
}

/// Partially updates a bakery from a form body.
///
/// # Endpoint
///
/// `PATCH /bakeries/{id}`
///
/// ```text
/// name=Renamed+Bakery
/// ```
///
/// # Errors
///
/// Returns 400 if `name` is empty or longer than 255 characters.
/// Returns 404 if the bakery does not exist.
pub async fn update_bakery_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    FormBody(form): FormBody<UpdateBakeryForm>,
) -> Result<PrettyJson<BakeryResponse>, AppError> {
    let update = form.into_update()?;
    let bakery = state.bakery_service.update_bakery(id, update).await?;

    Ok(PrettyJson(bakery.into()))
}
