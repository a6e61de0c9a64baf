use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::product::model::Product;

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: f64,
    pub quantity: i32,
    pub created_date: DateTime<Utc>,
    pub expiry_date: DateTime<Utc>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(
            self.id,
            self.name,
            self.description,
            self.category,
            self.price,
            u32::try_from(self.quantity).unwrap_or(0),
            self.created_date,
            self.expiry_date,
        )
    }
}
