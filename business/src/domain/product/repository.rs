use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::Product;

/// Durable store port. Owns persistence only; no caching logic lives behind
/// this trait. `get_by_id`, `update` and `delete` answer `NotFound` for
/// absent ids, which callers must keep distinct from infrastructure failures.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
    async fn create(&self, product: &Product) -> Result<Product, RepositoryError>;
    async fn update(&self, id: Uuid, product: &Product) -> Result<Product, RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
