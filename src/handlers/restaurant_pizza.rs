//! Restaurant-pizza offering handlers: list and create.

use crate::error::AppError;
use crate::response::RestaurantPizzaDetail;
use crate::service::{CatalogService, CreateRestaurantPizza, RequestValidator};
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};

pub async fn list_restaurant_pizzas(
    State(state): State<AppState>,
) -> Result<Json<Vec<RestaurantPizzaDetail>>, AppError> {
    let rows = CatalogService::list_restaurant_pizzas(&state.pool).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

pub async fn create_restaurant_pizza(
    State(state): State<AppState>,
    body: Result<Json<CreateRestaurantPizza>, JsonRejection>,
) -> Result<(StatusCode, Json<RestaurantPizzaDetail>), AppError> {
    let Json(body) = body.map_err(|e| {
        tracing::debug!(error = %e, "rejected request body");
        AppError::from(e)
    })?;
    let new = RequestValidator::validate(&state.pool, &body).await?;
    let row = CatalogService::create_restaurant_pizza(&state.pool, &new).await?;
    tracing::info!(id = row.id, restaurant_id = row.restaurant_id, pizza_id = row.pizza_id, "restaurant pizza created");
    Ok((StatusCode::CREATED, Json(row.into())))
}
