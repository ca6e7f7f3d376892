//! Catalog queries and request validation.

mod catalog;
mod validation;
pub use catalog::CatalogService;
pub use validation::{CreateRestaurantPizza, RequestValidator, PRICE_RANGE};
