use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.name_length")]
    NameLength,
    #[error("product.description_length")]
    DescriptionLength,
    #[error("product.category_length")]
    CategoryLength,
    #[error("product.price_out_of_range")]
    PriceOutOfRange,
    #[error("product.quantity_out_of_range")]
    QuantityOutOfRange,
    #[error("product.created_date_in_future")]
    CreatedDateInFuture,
    #[error("product.expiry_date_in_past")]
    ExpiryDateInPast,
    #[error("product.not_found")]
    NotFound(Uuid),
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
    #[error("cache.operation")]
    Cache(#[from] crate::domain::errors::CacheError),
}
