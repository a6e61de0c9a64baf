use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cache::{self, Cache};
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::snapshot;
use crate::domain::product::use_cases::get_all::GetAllProductsUseCase;

pub struct GetAllProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub cache: Arc<dyn Cache>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllProductsUseCase for GetAllProductsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Product>, ProductError> {
        self.logger.info("Fetching all products");

        if let Some(bytes) = self.cache.get(cache::PRODUCTS_KEY).await? {
            self.logger.debug("Cache hit for product listing");
            return Ok(snapshot::decode_products(&bytes)?);
        }

        self.logger.debug("Cache miss for product listing");
        let products = self.repository.get_all().await?;

        self.cache
            .set(
                cache::PRODUCTS_KEY,
                snapshot::encode_products(&products)?,
                cache::CACHE_TTL,
            )
            .await?;

        self.logger
            .info(&format!("Found {} products", products.len()));
        Ok(products)
    }
}
