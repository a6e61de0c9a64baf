use std::time::Duration;

use async_trait::async_trait;
use bb8::{Pool, PooledConnection};
use redis::aio::MultiplexedConnection;
use redis::{AsyncCommands, Client, RedisError};

use business::domain::cache::Cache;
use business::domain::errors::CacheError;

type RedisPool = Pool<Client>;

/// Configuration for the Redis cache backend.
pub struct RedisCacheConfig {
    pub url: String,
    pub pool_size: u32,
    pub connection_timeout: Duration,
}

/// Redis-backed implementation of the domain cache port, pooled with bb8.
pub struct RedisCache {
    pool: RedisPool,
}

impl RedisCache {
    pub async fn new(config: &RedisCacheConfig) -> Result<Self, CacheError> {
        let client = Client::open(config.url.as_str()).map_err(|_| CacheError::Connection)?;

        let pool = Pool::builder()
            .max_size(config.pool_size)
            .connection_timeout(config.connection_timeout)
            .build(client)
            .await
            .map_err(|_| CacheError::Connection)?;

        Ok(Self { pool })
    }

    async fn get_conn(&self) -> Result<PooledConnection<'_, Client>, CacheError> {
        self.pool.get().await.map_err(|_| CacheError::Connection)
    }
}

#[async_trait]
impl Cache for RedisCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        let mut conn = self.get_conn().await?;

        let conn_ref: &mut MultiplexedConnection = &mut conn;
        let value: Option<Vec<u8>> = conn_ref
            .get(key)
            .await
            .map_err(|_: RedisError| CacheError::Operation)?;

        // An empty payload reads the same as an absent key: a miss.
        Ok(value.filter(|bytes| !bytes.is_empty()))
    }

    async fn set(&self, key: &str, value: Vec<u8>, ttl: Duration) -> Result<(), CacheError> {
        let mut conn = self.get_conn().await?;

        let conn_ref: &mut MultiplexedConnection = &mut conn;
        conn_ref
            .set_ex::<_, _, ()>(key, value, ttl.as_secs())
            .await
            .map_err(|_| CacheError::Operation)
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        let mut conn = self.get_conn().await?;

        // DEL on a missing key is a no-op as far as callers are concerned.
        let conn_ref: &mut MultiplexedConnection = &mut conn;
        conn_ref
            .del::<_, ()>(key)
            .await
            .map_err(|_| CacheError::Operation)
    }
}
