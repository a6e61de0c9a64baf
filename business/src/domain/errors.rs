/// Repository errors for the domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Persistence,
    #[error("repository.database_error")]
    DatabaseError,
}

/// Cache errors for the domain layer. Connectivity and payload problems are
/// kept apart so adapters can map their own failure kinds onto them.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("cache.connection")]
    Connection,
    #[error("cache.operation")]
    Operation,
    #[error("cache.serialization")]
    Serialization,
}
