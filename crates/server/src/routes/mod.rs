//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health              - Liveness check
//! GET  /health/ready        - Readiness check (verifies database)
//!
//! # Public API (consumed by the frontend)
//! GET  /api/products        - Available products
//! GET  /api/banners         - Promotional banners
//! POST /api/order           - Register a customer order
//!
//! # Manager API
//! GET  /api/manager/orders  - Unfinished orders with performer candidates
//!                             and estimated delivery distances
//! ```

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

pub mod banners;
pub mod manager;
pub mod orders;
pub mod products;

/// Build the API router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/products", get(products::list_products))
        .route("/api/banners", get(banners::list_banners))
        .route("/api/order", post(orders::register_order))
        .route("/api/manager/orders", get(manager::list_orders))
}
