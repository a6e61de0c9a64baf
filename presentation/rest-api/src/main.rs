use std::sync::Arc;

use dotenvy::dotenv;

mod api;
mod config;
mod setup;

use cache::RedisCache;
use config::{app_config::AppConfig, cache_config, database_config};
use setup::{dependency_injection::DependencyContainer, server::Server};

/// REST API Entry Point
///
/// Initializes the application, wires dependencies, and starts the HTTP server.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env();

    // 4. Initialize database
    let pool = database_config::init_database().await?;

    // 5. Initialize cache backend
    let redis_cache = RedisCache::new(&cache_config::from_env()).await?;

    // 6. Wire dependencies
    let container = DependencyContainer::new(pool, Arc::new(redis_cache));

    // 7. Run server
    Server::run(config, container).await?;

    Ok(())
}
