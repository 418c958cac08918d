//! Restaurant domain types.

use std::collections::BTreeSet;

use foodcart_core::{ProductId, RestaurantId};

/// A restaurant (domain type).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Restaurant {
    /// Unique restaurant ID.
    pub id: RestaurantId,
    /// Restaurant display name.
    pub name: String,
    /// Postal address, used for delivery-distance estimation.
    pub address: String,
    /// Contact phone, free-form.
    pub contact_phone: String,
}

/// A restaurant together with the set of products it currently sells.
///
/// Only menu items with `availability = true` contribute to the set. This is
/// the unit the matcher works on: an order can be fulfilled by a restaurant
/// iff the order's product set is a subset of `product_ids`.
#[derive(Debug, Clone)]
pub struct RestaurantMenu {
    /// The restaurant.
    pub restaurant: Restaurant,
    /// Distinct IDs of products available at this restaurant.
    pub product_ids: BTreeSet<ProductId>,
}
