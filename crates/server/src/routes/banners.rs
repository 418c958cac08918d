//! Promotional banner route handlers.
//!
//! Pure static data; the frontend carousel reads it from here so the
//! images can live on the same media host as product pictures.

use axum::{Json, extract::State};
use serde::Serialize;

use crate::state::AppState;

/// A promotional banner descriptor.
#[derive(Debug, Serialize)]
pub struct BannerResponse {
    pub title: &'static str,
    pub src: String,
    pub text: &'static str,
}

const BANNERS: &[(&str, &str, &str)] = &[
    ("Burger", "burger.jpg", "Tasty Burger at your door step"),
    ("Spices", "food.jpg", "All Cuisines"),
    (
        "New York",
        "tasty.jpg",
        "Food is incomplete without a tasty dessert",
    ),
];

/// List promotional banners.
pub async fn list_banners(State(state): State<AppState>) -> Json<Vec<BannerResponse>> {
    let banners = BANNERS
        .iter()
        .map(|&(title, image, text)| BannerResponse {
            title,
            src: state.config().media_url(image),
            text,
        })
        .collect();

    Json(banners)
}
