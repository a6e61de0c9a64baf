use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cache::{self, Cache};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::snapshot;
use crate::domain::product::use_cases::get_by_id::{GetProductByIdParams, GetProductByIdUseCase};

pub struct GetProductByIdUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub cache: Arc<dyn Cache>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductByIdUseCase for GetProductByIdUseCaseImpl {
    async fn execute(&self, params: GetProductByIdParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Fetching product by id: {}", params.id));

        let key = cache::product_key(params.id);
        if let Some(bytes) = self.cache.get(&key).await? {
            self.logger.debug(&format!("Cache hit for {}", key));
            return Ok(snapshot::decode_product(&bytes)?);
        }

        self.logger.debug(&format!("Cache miss for {}", key));
        let product = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound(params.id),
                other => ProductError::Repository(other),
            })?;

        self.cache
            .set(&key, snapshot::encode_product(&product)?, cache::CACHE_TTL)
            .await?;

        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::CacheError;
    use chrono::{Duration, Utc};
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
            async fn create(&self, product: &Product) -> Result<Product, RepositoryError>;
            async fn update(&self, id: Uuid, product: &Product) -> Result<Product, RepositoryError>;
            async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub KeyValueCache {}

        #[async_trait]
        impl Cache for KeyValueCache {
            async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError>;
            async fn set(&self, key: &str, value: Vec<u8>, ttl: std::time::Duration) -> Result<(), CacheError>;
            async fn delete(&self, key: &str) -> Result<(), CacheError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn make_product(id: Uuid) -> Product {
        Product::from_repository(
            id,
            "Fresh Salmon".to_string(),
            "Norwegian farmed salmon fillet".to_string(),
            "Seafood".to_string(),
            15.99,
            8,
            Utc::now() - Duration::days(1),
            Utc::now() + Duration::days(4),
        )
    }

    #[tokio::test]
    async fn should_serve_from_cache_without_touching_store() {
        let product_id = Uuid::new_v4();
        let cached = snapshot::encode_product(&make_product(product_id)).unwrap();

        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get_by_id().never();

        let mut mock_cache = MockKeyValueCache::new();
        let expected_key = cache::product_key(product_id);
        mock_cache
            .expect_get()
            .withf(move |key| key == expected_key)
            .returning(move |_| Ok(Some(cached.clone())));
        mock_cache.expect_set().never();

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            cache: Arc::new(mock_cache),
            logger: mock_logger(),
        };

        // Repeated reads keep bypassing the store while the entry is live.
        for _ in 0..3 {
            let result = use_case
                .execute(GetProductByIdParams { id: product_id })
                .await;
            assert_eq!(result.unwrap().id, product_id);
        }
    }

    #[tokio::test]
    async fn should_populate_cache_on_miss() {
        let product_id = Uuid::new_v4();
        let product = make_product(product_id);

        let mut mock_repo = MockProductRepo::new();
        let repo_product = product.clone();
        mock_repo
            .expect_get_by_id()
            .withf(move |id| *id == product_id)
            .times(1)
            .returning(move |_| Ok(repo_product.clone()));

        let mut mock_cache = MockKeyValueCache::new();
        mock_cache.expect_get().returning(|_| Ok(None));
        let expected_key = cache::product_key(product_id);
        let expected_bytes = snapshot::encode_product(&product).unwrap();
        mock_cache
            .expect_set()
            .withf(move |key, value, ttl| {
                key == expected_key && *value == expected_bytes && *ttl == cache::CACHE_TTL
            })
            .times(1)
            .returning(|_, _, _| Ok(()));

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            cache: Arc::new(mock_cache),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductByIdParams { id: product_id })
            .await;

        assert_eq!(result.unwrap(), product);
    }

    #[tokio::test]
    async fn should_return_not_found_without_caching_anything() {
        let product_id = Uuid::new_v4();

        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .times(1)
            .returning(|_| Err(RepositoryError::NotFound));

        let mut mock_cache = MockKeyValueCache::new();
        mock_cache.expect_get().returning(|_| Ok(None));
        mock_cache.expect_set().never();

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            cache: Arc::new(mock_cache),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductByIdParams { id: product_id })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::NotFound(id) if id == product_id
        ));
    }

    #[tokio::test]
    async fn should_propagate_cache_failure() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get_by_id().never();

        let mut mock_cache = MockKeyValueCache::new();
        mock_cache
            .expect_get()
            .returning(|_| Err(CacheError::Connection));

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            cache: Arc::new(mock_cache),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductByIdParams { id: Uuid::new_v4() })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::Cache(CacheError::Connection)
        ));
    }
}
