use std::env;
use std::time::Duration;

use cache::RedisCacheConfig;

/// Load Redis cache configuration from environment variables
///
/// Environment variables:
/// - REDIS_URL: connection string (default: "redis://127.0.0.1:6379")
/// - REDIS_POOL_SIZE: connection pool size (default: 4)
/// - REDIS_CONNECTION_TIMEOUT: pool acquire timeout in seconds (default: 5)
pub fn from_env() -> RedisCacheConfig {
    let url = env::var("REDIS_URL").unwrap_or_else(|_| "redis://127.0.0.1:6379".to_string());
    let pool_size = env::var("REDIS_POOL_SIZE")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(4);
    let connection_timeout = env::var("REDIS_CONNECTION_TIMEOUT")
        .ok()
        .and_then(|v| v.parse().ok())
        .map(Duration::from_secs)
        .unwrap_or_else(|| Duration::from_secs(5));

    RedisCacheConfig {
        url,
        pool_size,
        connection_timeout,
    }
}
