use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cache::{self, Cache};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::snapshot;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub cache: Arc<dyn Cache>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        Product::validate_mutable_fields(
            &params.name,
            &params.description,
            &params.category,
            params.price,
            params.quantity,
        )?;

        // Always read the store here, not the cache: the update must land on
        // real current state.
        let existing = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound(params.id),
                other => ProductError::Repository(other),
            })?;

        let updated = Product::from_repository(
            existing.id,
            params.name,
            params.description,
            params.category,
            params.price,
            params.quantity,
            existing.created_date,
            existing.expiry_date,
        );

        let persisted = self
            .repository
            .update(params.id, &updated)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound(params.id),
                other => ProductError::Repository(other),
            })?;

        // Overwrite the single-product entry with a fresh TTL. The listing
        // key is deliberately left alone and stays stale until it expires.
        let key = cache::product_key(persisted.id);
        self.cache
            .set(&key, snapshot::encode_product(&persisted)?, cache::CACHE_TTL)
            .await?;

        self.logger
            .info(&format!("Product updated: {}", persisted.id));
        Ok(persisted)
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

    fn valid_params(id: Uuid) -> UpdateProductParams {
        UpdateProductParams {
            id,
            name: "Updated Olive Oil".to_string(),
            description: "Now in the one litre bottle".to_string(),
            category: "Pantry".to_string(),
            price: 11.25,
            quantity: 6,
        }
    }

    fn existing_product(id: Uuid) -> Product {
        Product::from_repository(
            id,
            "Olive Oil".to_string(),
            "Cold pressed extra virgin".to_string(),
            "Groceries".to_string(),
            8.75,
            12,
            Utc::now() - Duration::days(10),
            Utc::now() + Duration::days(80),
        )
    }

    #[tokio::test]
    async fn should_carry_over_created_and_expiry_dates_unchanged() {
        let product_id = Uuid::new_v4();
        let existing = existing_product(product_id);
        let original_created = existing.created_date;
        let original_expiry = existing.expiry_date;

        let mut mock_repo = MockProductRepo::new();
        let repo_existing = existing.clone();
        mock_repo
            .expect_get_by_id()
            .times(1)
            .returning(move |_| Ok(repo_existing.clone()));
        mock_repo
            .expect_update()
            .withf(move |id, product| {
                *id == product_id
                    && product.id == product_id
                    && product.name == "Updated Olive Oil"
                    && product.created_date == original_created
                    && product.expiry_date == original_expiry
            })
            .times(1)
            .returning(|_, product| Ok(product.clone()));

        let mut mock_cache = MockKeyValueCache::new();
        let expected_key = cache::product_key(product_id);
        mock_cache
            .expect_set()
            .withf(move |key, _, ttl| key == expected_key && *ttl == cache::CACHE_TTL)
            .times(1)
            .returning(|_, _, _| Ok(()));
        // The listing key must not be invalidated by updates.
        mock_cache.expect_delete().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            cache: Arc::new(mock_cache),
            logger: mock_logger(),
        };

        let updated = use_case.execute(valid_params(product_id)).await.unwrap();
        assert_eq!(updated.created_date, original_created);
        assert_eq!(updated.expiry_date, original_expiry);
        assert_eq!(updated.price, 11.25);
        assert_eq!(updated.quantity, 6);
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_nonexistent_product() {
        let product_id = Uuid::new_v4();

        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));
        mock_repo.expect_update().never();

        let mut mock_cache = MockKeyValueCache::new();
        mock_cache.expect_set().never();
        mock_cache.expect_delete().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            cache: Arc::new(mock_cache),
            logger: mock_logger(),
        };

        let result = use_case.execute(valid_params(product_id)).await;
        assert!(matches!(
            result.unwrap_err(),
            ProductError::NotFound(id) if id == product_id
        ));
    }

    #[tokio::test]
    async fn should_reject_invalid_fields_before_any_port_interaction() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get_by_id().never();
        mock_repo.expect_update().never();

        let mut mock_cache = MockKeyValueCache::new();
        mock_cache.expect_set().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            cache: Arc::new(mock_cache),
            logger: mock_logger(),
        };

        let mut params = valid_params(Uuid::new_v4());
        params.price = -3.0;

        let result = use_case.execute(params).await;
        assert!(matches!(result.unwrap_err(), ProductError::PriceOutOfRange));
    }

    #[tokio::test]
    async fn should_propagate_cache_write_failure_after_store_update() {
        let product_id = Uuid::new_v4();
        let existing = existing_product(product_id);

        let mut mock_repo = MockProductRepo::new();
        let repo_existing = existing.clone();
        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(repo_existing.clone()));
        mock_repo
            .expect_update()
            .returning(|_, product| Ok(product.clone()));

        let mut mock_cache = MockKeyValueCache::new();
        mock_cache
            .expect_set()
            .returning(|_, _, _| Err(CacheError::Operation));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            cache: Arc::new(mock_cache),
            logger: mock_logger(),
        };

        let result = use_case.execute(valid_params(product_id)).await;
        assert!(matches!(
            result.unwrap_err(),
            ProductError::Cache(CacheError::Operation)
        ));
    }
}
