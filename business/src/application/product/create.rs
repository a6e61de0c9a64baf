use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cache::{self, Cache};
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::snapshot;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub cache: Arc<dyn Cache>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Creating product: {}", params.name));

        let product = Product::new(NewProductProps {
            name: params.name,
            description: params.description,
            category: params.category,
            price: params.price,
            quantity: params.quantity,
            created_date: params.created_date,
            expiry_date: params.expiry_date,
        })?;

        let persisted = self.repository.create(&product).await?;

        // Prime the single-product key first, then drop the listing key so
        // the next listing read picks the new product up from the store.
        let key = cache::product_key(persisted.id);
        self.cache
            .set(&key, snapshot::encode_product(&persisted)?, cache::CACHE_TTL)
            .await?;
        self.cache.delete(cache::PRODUCTS_KEY).await?;

        self.logger
            .info(&format!("Product created with id: {}", persisted.id));
        Ok(persisted)
    }
}
