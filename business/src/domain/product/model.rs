use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::ProductError;

pub const NAME_LEN: std::ops::RangeInclusive<usize> = 3..=25;
pub const DESCRIPTION_LEN: std::ops::RangeInclusive<usize> = 3..=100;
pub const CATEGORY_LEN: std::ops::RangeInclusive<usize> = 3..=30;
pub const PRICE_RANGE: std::ops::RangeInclusive<f64> = 0.01..=1_000_000.0;
pub const QUANTITY_RANGE: std::ops::RangeInclusive<u32> = 1..=1_000_000;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: f64,
    pub quantity: u32,
    pub created_date: DateTime<Utc>,
    pub expiry_date: DateTime<Utc>,
}

pub struct NewProductProps {
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: f64,
    pub quantity: u32,
    pub created_date: DateTime<Utc>,
    pub expiry_date: DateTime<Utc>,
}

impl Product {
    /// Validates all fields and assigns a fresh id. The dates are only
    /// checked here: once a product exists they are carried over unchanged
    /// by every later operation.
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        Self::validate_mutable_fields(
            &props.name,
            &props.description,
            &props.category,
            props.price,
            props.quantity,
        )?;

        let now = Utc::now();
        if props.created_date > now {
            return Err(ProductError::CreatedDateInFuture);
        }
        if props.expiry_date < now {
            return Err(ProductError::ExpiryDateInPast);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name: props.name,
            description: props.description,
            category: props.category,
            price: props.price,
            quantity: props.quantity,
            created_date: props.created_date,
            expiry_date: props.expiry_date,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        name: String,
        description: String,
        category: String,
        price: f64,
        quantity: u32,
        created_date: DateTime<Utc>,
        expiry_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            category,
            price,
            quantity,
            created_date,
            expiry_date,
        }
    }

    /// Checks the fields an update is allowed to touch. Shared between
    /// creation and the update use case.
    pub fn validate_mutable_fields(
        name: &str,
        description: &str,
        category: &str,
        price: f64,
        quantity: u32,
    ) -> Result<(), ProductError> {
        if !NAME_LEN.contains(&name.trim().chars().count()) {
            return Err(ProductError::NameLength);
        }
        if !DESCRIPTION_LEN.contains(&description.trim().chars().count()) {
            return Err(ProductError::DescriptionLength);
        }
        if !CATEGORY_LEN.contains(&category.trim().chars().count()) {
            return Err(ProductError::CategoryLength);
        }
        if !PRICE_RANGE.contains(&price) {
            return Err(ProductError::PriceOutOfRange);
        }
        if !QUANTITY_RANGE.contains(&quantity) {
            return Err(ProductError::QuantityOutOfRange);
        }
        Ok(())
    }
}
