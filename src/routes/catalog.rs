//! Catalog routes: restaurants, pizzas, restaurant_pizzas.

use crate::handlers::{
    create_restaurant_pizza, delete_restaurant, list_pizzas, list_restaurant_pizzas,
    list_restaurants, read_restaurant,
};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn catalog_routes(state: AppState) -> Router {
    Router::new()
        .route("/restaurants", get(list_restaurants))
        .route("/restaurants/:id", get(read_restaurant).delete(delete_restaurant))
        .route("/pizzas", get(list_pizzas))
        .route(
            "/restaurant_pizzas",
            get(list_restaurant_pizzas).post(create_restaurant_pizza),
        )
        .with_state(state)
}
