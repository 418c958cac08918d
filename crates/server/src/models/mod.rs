//! Domain model types.
//!
//! These types represent validated domain objects separate from database
//! row types. Repositories in [`crate::db`] map rows into them.

pub mod order;
pub mod product;
pub mod restaurant;

pub use order::{NewOrder, NewOrderLine, Order, OrderLine, OrderSummary};
pub use product::{Product, ProductCategory};
pub use restaurant::{Restaurant, RestaurantMenu};
