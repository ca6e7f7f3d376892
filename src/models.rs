//! Row records for the three catalog tables.

use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Pizza {
    pub id: i64,
    pub name: String,
    pub ingredients: String,
}

/// A restaurant_pizzas row joined with the pizza and restaurant it links.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct RestaurantPizzaRow {
    pub id: i64,
    pub price: i64,
    pub pizza_id: i64,
    pub restaurant_id: i64,
    pub pizza_name: String,
    pub pizza_ingredients: String,
    pub restaurant_name: String,
    pub restaurant_address: String,
}

impl RestaurantPizzaRow {
    pub fn pizza(&self) -> Pizza {
        Pizza {
            id: self.pizza_id,
            name: self.pizza_name.clone(),
            ingredients: self.pizza_ingredients.clone(),
        }
    }

    pub fn restaurant(&self) -> Restaurant {
        Restaurant {
            id: self.restaurant_id,
            name: self.restaurant_name.clone(),
            address: self.restaurant_address.clone(),
        }
    }
}

/// Validated input for a new offering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewRestaurantPizza {
    pub price: i64,
    pub pizza_id: i64,
    pub restaurant_id: i64,
}
