//! Pizza catalog: REST backend for restaurants, pizzas and the prices restaurants charge for them.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::ServerConfig;
pub use error::{AppError, ConfigError};
pub use routes::{app, catalog_routes, common_routes, common_routes_with_ready};
pub use service::{CatalogService, RequestValidator};
pub use state::AppState;
pub use store::{connect, ensure_schema, seed_demo_data};
