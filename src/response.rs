//! JSON response shapes, one struct per endpoint payload.

use crate::models::{Pizza, Restaurant, RestaurantPizzaRow};
use serde::Serialize;

/// `{id, name, address}`
#[derive(Debug, Serialize)]
pub struct RestaurantSummary {
    pub id: i64,
    pub name: String,
    pub address: String,
}

/// `{id, name, ingredients}`
#[derive(Debug, Serialize)]
pub struct PizzaSummary {
    pub id: i64,
    pub name: String,
    pub ingredients: String,
}

/// Pizza as nested under a restaurant's offerings: no id.
#[derive(Debug, Serialize)]
pub struct PizzaBrief {
    pub name: String,
    pub ingredients: String,
}

#[derive(Debug, Serialize)]
pub struct RestaurantPizzaEntry {
    pub pizza_id: i64,
    pub price: i64,
    pub restaurant_id: i64,
    pub pizza: PizzaBrief,
}

/// Body of `GET /restaurants/{id}`.
#[derive(Debug, Serialize)]
pub struct RestaurantDetail {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub restaurant_pizzas: Vec<RestaurantPizzaEntry>,
}

/// An offering with both ends expanded. Used by `GET /restaurant_pizzas` and
/// the `POST /restaurant_pizzas` response.
#[derive(Debug, Serialize)]
pub struct RestaurantPizzaDetail {
    pub id: i64,
    pub price: i64,
    pub pizza_id: i64,
    pub restaurant_id: i64,
    pub pizza: PizzaSummary,
    pub restaurant: RestaurantSummary,
}

impl From<Restaurant> for RestaurantSummary {
    fn from(r: Restaurant) -> Self {
        Self {
            id: r.id,
            name: r.name,
            address: r.address,
        }
    }
}

impl From<Pizza> for PizzaSummary {
    fn from(p: Pizza) -> Self {
        Self {
            id: p.id,
            name: p.name,
            ingredients: p.ingredients,
        }
    }
}

impl From<RestaurantPizzaRow> for RestaurantPizzaEntry {
    fn from(row: RestaurantPizzaRow) -> Self {
        Self {
            pizza_id: row.pizza_id,
            price: row.price,
            restaurant_id: row.restaurant_id,
            pizza: PizzaBrief {
                name: row.pizza_name,
                ingredients: row.pizza_ingredients,
            },
        }
    }
}

impl From<RestaurantPizzaRow> for RestaurantPizzaDetail {
    fn from(row: RestaurantPizzaRow) -> Self {
        Self {
            pizza: row.pizza().into(),
            restaurant: row.restaurant().into(),
            id: row.id,
            price: row.price,
            pizza_id: row.pizza_id,
            restaurant_id: row.restaurant_id,
        }
    }
}

impl RestaurantDetail {
    pub fn new(restaurant: Restaurant, offerings: Vec<RestaurantPizzaRow>) -> Self {
        Self {
            id: restaurant.id,
            name: restaurant.name,
            address: restaurant.address,
            restaurant_pizzas: offerings.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row() -> RestaurantPizzaRow {
        RestaurantPizzaRow {
            id: 7,
            price: 15,
            pizza_id: 2,
            restaurant_id: 3,
            pizza_name: "Geri".into(),
            pizza_ingredients: "Dough, Cheese".into(),
            restaurant_name: "Kiki's Pizza".into(),
            restaurant_address: "address3".into(),
        }
    }

    #[test]
    fn detail_nests_both_ends() {
        let v = serde_json::to_value(RestaurantPizzaDetail::from(row())).unwrap();
        assert_eq!(
            v,
            json!({
                "id": 7,
                "price": 15,
                "pizza_id": 2,
                "restaurant_id": 3,
                "pizza": {"id": 2, "name": "Geri", "ingredients": "Dough, Cheese"},
                "restaurant": {"id": 3, "name": "Kiki's Pizza", "address": "address3"}
            })
        );
    }

    #[test]
    fn restaurant_detail_entries_omit_ids_on_pizza() {
        let restaurant = Restaurant {
            id: 3,
            name: "Kiki's Pizza".into(),
            address: "address3".into(),
        };
        let v = serde_json::to_value(RestaurantDetail::new(restaurant, vec![row()])).unwrap();
        assert_eq!(
            v["restaurant_pizzas"],
            json!([{
                "pizza_id": 2,
                "price": 15,
                "restaurant_id": 3,
                "pizza": {"name": "Geri", "ingredients": "Dough, Cheese"}
            }])
        );
    }
}
