//! Restaurant handlers: list, read with offerings, delete.

use crate::error::AppError;
use crate::response::{RestaurantDetail, RestaurantSummary};
use crate::service::CatalogService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

/// Non-numeric ids cannot name a restaurant, so they read as "not found".
fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str.parse().map_err(|_| AppError::restaurant_not_found())
}

pub async fn list_restaurants(
    State(state): State<AppState>,
) -> Result<Json<Vec<RestaurantSummary>>, AppError> {
    let rows = CatalogService::list_restaurants(&state.pool).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

pub async fn read_restaurant(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Json<RestaurantDetail>, AppError> {
    let id = parse_id(&id_str)?;
    let restaurant = CatalogService::find_restaurant(&state.pool, id)
        .await?
        .ok_or_else(AppError::restaurant_not_found)?;
    let offerings = CatalogService::find_restaurant_pizzas_by_restaurant(&state.pool, id).await?;
    Ok(Json(RestaurantDetail::new(restaurant, offerings)))
}

pub async fn delete_restaurant(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&id_str)?;
    if !CatalogService::delete_restaurant(&state.pool, id).await? {
        return Err(AppError::restaurant_not_found());
    }
    tracing::info!(id, "restaurant deleted");
    Ok(StatusCode::NO_CONTENT)
}
