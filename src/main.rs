use interaction_collector::config::{Config, StoreBackend};
use interaction_collector::server::build_router;
use interaction_collector::storage::memory::MemoryStore;
use interaction_collector::storage::mongo::MongoStore;
use interaction_collector::storage::store::DocumentStore;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut config = Config::from_env()?;
    let args: Vec<String> = std::env::args().collect();
    config.apply_args(&args)?;

    // 1. Document store:
    let store: Arc<dyn DocumentStore> = match config.store {
        StoreBackend::Mongo => Arc::new(
            MongoStore::connect(&config.mongodb_uri, &config.database, &config.collection).await?,
        ),
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store, records are lost on shutdown");
            Arc::new(MemoryStore::new())
        }
    };

    // 2. HTTP Router:
    let app = build_router(store, &config)?;
    tracing::info!("CORS allowed origins: {:?}", config.allowed_origins);

    // 3. Start HTTP server:
    tracing::info!("HTTP server listening on {}", config.bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down gracefully");
}
