mod config;
mod error;
mod handlers;
mod models;
mod router;
mod state;

use book_reader::MemoryStore;
use config::GatewayConfig;
use router::create_router;
use state::AppState;
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = GatewayConfig::from_env()?;
    tracing::info!(symbol = %config.symbol, "Starting front gateway service");

    // The production store is owned by the matching engine; until one is
    // wired in, an in-process store serves the same schema.
    let store = Arc::new(MemoryStore::new());
    let state = AppState::new(store, config.clone());

    let app = create_router(state);

    let listener = TcpListener::bind(config.listen_addr).await?;
    tracing::info!("Listening on {}", config.listen_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
