use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cache::{self, Cache};
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::clear_cache::ClearCacheUseCase;

pub struct ClearCacheUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub cache: Arc<dyn Cache>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ClearCacheUseCase for ClearCacheUseCaseImpl {
    async fn execute(&self) -> Result<(), ProductError> {
        self.logger.info("Clearing product cache");

        self.cache.delete(cache::PRODUCTS_KEY).await?;

        // Enumerating the store is required to find every single-product
        // key; if the store is unreachable the whole clear fails rather
        // than clearing partially.
        let products = self.repository.get_all().await?;
        for product in &products {
            self.cache.delete(&cache::product_key(product.id)).await?;
        }

        self.logger.info(&format!(
            "Cleared listing key and {} product entries",
            products.len()
        ));
        Ok(())
    }
}
