//! Product repository.

use std::collections::HashMap;

use rust_decimal::Decimal;
use sqlx::PgPool;

use foodcart_core::{CategoryId, ProductId};

use super::RepositoryError;
use crate::models::{Product, ProductCategory};

/// Row shape for the available-products listing.
#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    id: ProductId,
    name: String,
    price: Decimal,
    image: String,
    special_status: bool,
    description: String,
    category_id: Option<CategoryId>,
    category_name: Option<String>,
}

/// Row shape for price lookups.
#[derive(Debug, sqlx::FromRow)]
struct PriceRow {
    id: ProductId,
    price: Decimal,
}

/// Repository for product database operations.
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List products that are currently sold by at least one restaurant.
    ///
    /// A product is available if it has a `menu_item` row with
    /// `availability = true`. The category is resolved in the same query.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_available(&self) -> Result<Vec<Product>, RepositoryError> {
        let rows = sqlx::query_as::<_, ProductRow>(
            r"
            SELECT p.id, p.name, p.price, p.image, p.special_status, p.description,
                   c.id AS category_id, c.name AS category_name
            FROM product p
            LEFT JOIN product_category c ON c.id = p.category_id
            WHERE p.id IN (
                SELECT product_id FROM menu_item WHERE availability
            )
            ORDER BY p.id
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(ProductRow::into_product).collect())
    }

    /// Fetch current prices for a set of product IDs.
    ///
    /// IDs absent from the result do not exist; intake validation relies on
    /// this to reject unknown products in a single round-trip.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn prices_for(
        &self,
        ids: &[ProductId],
    ) -> Result<HashMap<ProductId, Decimal>, RepositoryError> {
        let raw_ids: Vec<i32> = ids.iter().map(|id| id.as_i32()).collect();

        let rows = sqlx::query_as::<_, PriceRow>(
            r"
            SELECT id, price
            FROM product
            WHERE id = ANY($1)
            ",
        )
        .bind(&raw_ids)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(|row| (row.id, row.price)).collect())
    }
}

impl ProductRow {
    fn into_product(self) -> Product {
        let category = match (self.category_id, self.category_name) {
            (Some(id), Some(name)) => Some(ProductCategory { id, name }),
            _ => None,
        };

        Product {
            id: self.id,
            name: self.name,
            category,
            price: self.price,
            image: self.image,
            special_status: self.special_status,
            description: self.description,
        }
    }
}
