//! HTTP handlers for restaurants, pizzas and restaurant-pizza offerings.

pub mod pizza;
pub mod restaurant;
pub mod restaurant_pizza;
pub use pizza::*;
pub use restaurant::*;
pub use restaurant_pizza::*;
