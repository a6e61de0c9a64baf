use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::errors::CacheError;

use super::model::Product;

/// Wire shape of a cached product. Kept separate from the domain entity so
/// the cache payload schema stays fixed even if the entity grows.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProductSnapshot {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: f64,
    pub quantity: u32,
    pub created_date: DateTime<Utc>,
    pub expiry_date: DateTime<Utc>,
}

impl ProductSnapshot {
    pub fn from_domain(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            description: product.description.clone(),
            category: product.category.clone(),
            price: product.price,
            quantity: product.quantity,
            created_date: product.created_date,
            expiry_date: product.expiry_date,
        }
    }

    pub fn into_domain(self) -> Product {
        Product::from_repository(
            self.id,
            self.name,
            self.description,
            self.category,
            self.price,
            self.quantity,
            self.created_date,
            self.expiry_date,
        )
    }
}

pub fn encode_product(product: &Product) -> Result<Vec<u8>, CacheError> {
    serde_json::to_vec(&ProductSnapshot::from_domain(product))
        .map_err(|_| CacheError::Serialization)
}

pub fn decode_product(bytes: &[u8]) -> Result<Product, CacheError> {
    let snapshot: ProductSnapshot =
        serde_json::from_slice(bytes).map_err(|_| CacheError::Serialization)?;
    Ok(snapshot.into_domain())
}

pub fn encode_products(products: &[Product]) -> Result<Vec<u8>, CacheError> {
    let snapshots: Vec<ProductSnapshot> =
        products.iter().map(ProductSnapshot::from_domain).collect();
    serde_json::to_vec(&snapshots).map_err(|_| CacheError::Serialization)
}

pub fn decode_products(bytes: &[u8]) -> Result<Vec<Product>, CacheError> {
    let snapshots: Vec<ProductSnapshot> =
        serde_json::from_slice(bytes).map_err(|_| CacheError::Serialization)?;
    Ok(snapshots.into_iter().map(|s| s.into_domain()).collect())
}
