//! Product and category domain types.

use rust_decimal::Decimal;

use foodcart_core::{CategoryId, ProductId};

/// A product category (domain type).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCategory {
    /// Unique category ID.
    pub id: CategoryId,
    /// Category display name.
    pub name: String,
}

/// A product from the catalog (domain type).
#[derive(Debug, Clone)]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// Product display name.
    pub name: String,
    /// Category, if the product is assigned to one.
    pub category: Option<ProductCategory>,
    /// Current price. Never negative.
    pub price: Decimal,
    /// Stored image path, relative to the media base URL.
    pub image: String,
    /// Whether the product is a special offer.
    pub special_status: bool,
    /// Marketing description.
    pub description: String,
}
