use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::product::model::Product;

#[derive(Debug, Clone, Object)]
pub struct CreateProductRequest {
    /// Product name (3-25 characters)
    pub name: String,
    /// Product description (3-100 characters)
    pub description: String,
    /// Product category (3-30 characters)
    pub category: String,
    /// Unit price, must be positive
    pub price: f64,
    /// Stock quantity, must be at least 1
    pub quantity: u32,
    /// Creation timestamp, must not lie in the future
    pub created_date: DateTime<Utc>,
    /// Expiry timestamp, must not lie in the past
    pub expiry_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateProductRequest {
    /// Product name (3-25 characters)
    pub name: String,
    /// Product description (3-100 characters)
    pub description: String,
    /// Product category (3-30 characters)
    pub category: String,
    /// Unit price, must be positive
    pub price: f64,
    /// Stock quantity, must be at least 1
    pub quantity: u32,
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: String,
    /// Product name
    pub name: String,
    /// Product description
    pub description: String,
    /// Product category
    pub category: String,
    /// Unit price
    pub price: f64,
    /// Stock quantity
    pub quantity: u32,
    /// Creation timestamp
    pub created_date: DateTime<Utc>,
    /// Expiry timestamp
    pub expiry_date: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name,
            description: product.description,
            category: product.category,
            price: product.price,
            quantity: product.quantity,
            created_date: product.created_date,
            expiry_date: product.expiry_date,
        }
    }
}
