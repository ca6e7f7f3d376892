//! Pizza handlers: list.

use crate::error::AppError;
use crate::response::PizzaSummary;
use crate::service::CatalogService;
use crate::state::AppState;
use axum::{extract::State, Json};

pub async fn list_pizzas(State(state): State<AppState>) -> Result<Json<Vec<PizzaSummary>>, AppError> {
    let rows = CatalogService::list_pizzas(&state.pool).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}
