//! Order domain types.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use foodcart_core::{OrderId, OrderStatus, PayMethod, PhoneNumber, ProductId, RestaurantId};

/// A persisted customer order (domain type).
#[derive(Debug, Clone)]
pub struct Order {
    /// Unique order ID.
    pub id: OrderId,
    /// Restaurant assigned to fulfill the order, if any.
    pub performer: Option<RestaurantId>,
    /// Payment method.
    pub pay_method: PayMethod,
    /// Staff comment, free-form.
    pub comment: String,
    /// Lifecycle status.
    pub status: OrderStatus,
    /// Customer first name.
    pub first_name: String,
    /// Customer last name.
    pub last_name: String,
    /// Customer phone number.
    pub phone_number: PhoneNumber,
    /// Delivery address.
    pub address: String,
    /// When the order was registered.
    pub registered_at: DateTime<Utc>,
    /// When the customer was called back, if they were.
    pub called_at: Option<DateTime<Utc>>,
    /// When the order was delivered, if it was.
    pub delivered_at: Option<DateTime<Utc>>,
    /// Line items.
    pub lines: Vec<OrderLine>,
}

/// A single product line in an order.
///
/// `price` is a snapshot of the product's price at order time. It is set
/// once on creation and never updated, so later product price changes do
/// not retroactively alter historical orders.
#[derive(Debug, Clone)]
pub struct OrderLine {
    /// The ordered product.
    pub product_id: ProductId,
    /// Ordered quantity. Always >= 1.
    pub quantity: i32,
    /// Price snapshot at order time. Nullable in storage for rows predating
    /// the snapshot column.
    pub price: Option<Decimal>,
}

/// Parameters for creating a new order.
#[derive(Debug, Clone)]
pub struct NewOrder {
    /// Customer first name.
    pub first_name: String,
    /// Customer last name.
    pub last_name: String,
    /// Customer phone number.
    pub phone_number: PhoneNumber,
    /// Delivery address.
    pub address: String,
    /// Line items with snapshotted prices.
    pub lines: Vec<NewOrderLine>,
}

/// A line item for a new order.
#[derive(Debug, Clone)]
pub struct NewOrderLine {
    /// The ordered product.
    pub product_id: ProductId,
    /// Ordered quantity. Validated >= 1 before this type is constructed.
    pub quantity: i32,
    /// Price snapshot taken from the product at intake time.
    pub price: Decimal,
}

/// An unfinished order as the manager listing sees it.
///
/// Carries the distinct product-id set for the matcher and the SQL-computed
/// total (sum of quantity x snapshot price over the lines).
#[derive(Debug, Clone)]
pub struct OrderSummary {
    /// Unique order ID.
    pub id: OrderId,
    /// Restaurant assigned to fulfill the order, if any.
    pub performer: Option<RestaurantId>,
    /// Payment method.
    pub pay_method: PayMethod,
    /// Staff comment.
    pub comment: String,
    /// Lifecycle status. Never [`OrderStatus::Finished`] here.
    pub status: OrderStatus,
    /// Customer first name.
    pub first_name: String,
    /// Customer last name.
    pub last_name: String,
    /// Customer phone number.
    pub phone_number: PhoneNumber,
    /// Delivery address.
    pub address: String,
    /// Order total over the snapshotted line prices.
    pub total: Decimal,
    /// Distinct product IDs across the order's lines.
    pub product_ids: BTreeSet<ProductId>,
}
