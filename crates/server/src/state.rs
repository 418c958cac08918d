//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::FoodcartConfig;
use crate::geo::YandexGeocoder;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to shared
/// resources like the database pool, configuration, and the geocoder client.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: FoodcartConfig,
    pool: PgPool,
    geocoder: YandexGeocoder,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: FoodcartConfig, pool: PgPool) -> Self {
        let geocoder = YandexGeocoder::new(&config.geocoder);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                geocoder,
            }),
        }
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &FoodcartConfig {
        &self.inner.config
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    /// Get a reference to the geocoder client.
    #[must_use]
    pub fn geocoder(&self) -> &YandexGeocoder {
        &self.inner.geocoder
    }
}
