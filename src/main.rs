//! Server binary: reads config from env (and `.env`), prepares the store, serves the catalog.

use pizza_catalog::{app, connect, ensure_schema, seed_demo_data, AppState, ServerConfig};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("pizza_catalog=info,tower_http=info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let pool = connect(&config.database_url, config.max_connections).await?;
    ensure_schema(&pool).await?;
    if config.seed_demo_data {
        seed_demo_data(&pool).await?;
    }

    let app = app(AppState::new(pool), config.body_limit);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
