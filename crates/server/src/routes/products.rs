//! Product listing route handlers.

use axum::{Json, extract::State};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::instrument;

use foodcart_core::{CategoryId, ProductId};

use crate::db::ProductRepository;
use crate::error::Result;
use crate::models::Product;
use crate::state::AppState;

/// A product as the frontend sees it.
#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub special_status: bool,
    pub description: String,
    pub category: Option<CategoryResponse>,
    /// Full image URL (media base URL + stored path).
    pub image: String,
}

/// A product category as the frontend sees it.
#[derive(Debug, Serialize)]
pub struct CategoryResponse {
    pub id: CategoryId,
    pub name: String,
}

/// List available products.
///
/// A product is listed when at least one restaurant currently sells it.
#[instrument(skip(state))]
pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<ProductResponse>>> {
    let products = ProductRepository::new(state.pool()).list_available().await?;

    let response = products
        .into_iter()
        .map(|product| to_response(product, &state))
        .collect();

    Ok(Json(response))
}

fn to_response(product: Product, state: &AppState) -> ProductResponse {
    ProductResponse {
        id: product.id,
        name: product.name,
        price: product.price,
        special_status: product.special_status,
        description: product.description,
        category: product.category.map(|category| CategoryResponse {
            id: category.id,
            name: category.name,
        }),
        image: state.config().media_url(&product.image),
    }
}
