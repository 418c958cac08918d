//! Restaurant repository.

use std::collections::BTreeMap;

use sqlx::PgPool;

use foodcart_core::{ProductId, RestaurantId};

use super::RepositoryError;
use crate::models::{Restaurant, RestaurantMenu};

/// Row shape for the restaurant-with-menu listing: one row per available
/// menu item, restaurant fields repeated.
#[derive(Debug, sqlx::FromRow)]
struct MenuItemRow {
    restaurant_id: RestaurantId,
    name: String,
    address: String,
    contact_phone: String,
    product_id: ProductId,
}

/// Repository for restaurant database operations.
pub struct RestaurantRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> RestaurantRepository<'a> {
    /// Create a new restaurant repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List restaurants that have at least one available menu item, each
    /// paired with its set of available product IDs.
    ///
    /// Restaurants whose menu is entirely unavailable are excluded; they
    /// can never be a performer candidate.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_with_available_items(
        &self,
    ) -> Result<Vec<RestaurantMenu>, RepositoryError> {
        let rows = sqlx::query_as::<_, MenuItemRow>(
            r"
            SELECT r.id AS restaurant_id, r.name, r.address, r.contact_phone,
                   m.product_id
            FROM restaurant r
            JOIN menu_item m ON m.restaurant_id = r.id
            WHERE m.availability
            ORDER BY r.id, m.product_id
            ",
        )
        .fetch_all(self.pool)
        .await?;

        // Group the flat join rows by restaurant, keeping the row order.
        let mut grouped: BTreeMap<RestaurantId, RestaurantMenu> = BTreeMap::new();
        for row in rows {
            grouped
                .entry(row.restaurant_id)
                .or_insert_with(|| RestaurantMenu {
                    restaurant: Restaurant {
                        id: row.restaurant_id,
                        name: row.name.clone(),
                        address: row.address.clone(),
                        contact_phone: row.contact_phone.clone(),
                    },
                    product_ids: std::collections::BTreeSet::new(),
                })
                .product_ids
                .insert(row.product_id);
        }

        Ok(grouped.into_values().collect())
    }
}
