//! Database operations for the FoodCart `PostgreSQL` store.
//!
//! # Tables
//!
//! - `restaurant` - Restaurants and their contact details
//! - `product_category` / `product` - The catalog
//! - `menu_item` - Which restaurant sells which product, with availability
//! - `customer_order` / `order_line` - Orders and their snapshot-priced lines
//! - `spot` - Address-to-coordinates memo table for the geocoder
//!
//! # Migrations
//!
//! Migrations are stored in `crates/server/migrations/` and run via:
//! ```bash
//! cargo run -p foodcart-cli -- migrate
//! ```
//!
//! Queries use the runtime `sqlx::query_as` form with `FromRow` row structs,
//! mapped into the domain types in [`crate::models`].

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub mod orders;
pub mod products;
pub mod restaurants;
pub mod spots;

pub use orders::OrderRepository;
pub use products::ProductRepository;
pub use restaurants::RestaurantRepository;
pub use spots::SpotRepository;

/// Errors from repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., duplicate spot address).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
