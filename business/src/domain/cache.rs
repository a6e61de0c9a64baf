use std::time::Duration;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::CacheError;

/// TTL applied to every cache entry written by the product use cases.
pub const CACHE_TTL: Duration = Duration::from_secs(600);

/// Key holding the serialized full product listing.
pub const PRODUCTS_KEY: &str = "products";

/// Key holding a single serialized product snapshot.
pub fn product_key(id: Uuid) -> String {
    format!("product:{}", id)
}

/// Key/value cache port with per-key TTL.
///
/// `get` returns `None` on a miss; backends must report an absent key and an
/// empty stored payload the same way, so callers never have to tell them
/// apart. Deleting a missing key is a no-op, not an error. No atomicity is
/// guaranteed across keys.
#[async_trait]
pub trait Cache: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError>;
    async fn set(&self, key: &str, value: Vec<u8>, ttl: Duration) -> Result<(), CacheError>;
    async fn delete(&self, key: &str) -> Result<(), CacheError>;
}
