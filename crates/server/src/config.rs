//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `FOODCART_DATABASE_URL` - `PostgreSQL` connection string
//! - `GEOCODER_API_KEY` - API key for the Yandex geocoding service
//!
//! ## Optional
//! - `FOODCART_HOST` - Bind address (default: 127.0.0.1)
//! - `FOODCART_PORT` - Listen port (default: 8000)
//! - `FOODCART_MEDIA_URL` - Base URL prepended to image paths (default: /media/)
//! - `GEOCODER_BASE_URL` - Geocoder endpoint (default: <https://geocode-maps.yandex.ru/1.x>)
//! - `SENTRY_DSN` - Sentry error tracking DSN

use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// FoodCart application configuration.
#[derive(Debug, Clone)]
pub struct FoodcartConfig {
    /// `PostgreSQL` database connection URL (contains password)
    pub database_url: SecretString,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Base URL prepended to product and banner image paths
    pub media_base_url: String,
    /// Geocoding service configuration
    pub geocoder: GeocoderConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
}

/// Geocoding service configuration.
///
/// Implements `Debug` manually to redact the API key.
#[derive(Clone)]
pub struct GeocoderConfig {
    /// Geocoder endpoint URL
    pub base_url: String,
    /// API key for the geocoding service
    pub api_key: SecretString,
}

impl std::fmt::Debug for GeocoderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeocoderConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl FoodcartConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let database_url = get_database_url("FOODCART_DATABASE_URL")?;
        let host = get_env_or_default("FOODCART_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("FOODCART_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("FOODCART_PORT", "8000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("FOODCART_PORT".to_string(), e.to_string()))?;
        let media_base_url = get_env_or_default("FOODCART_MEDIA_URL", "/media/");

        let geocoder = GeocoderConfig::from_env()?;
        let sentry_dsn = get_optional_env("SENTRY_DSN");

        Ok(Self {
            database_url,
            host,
            port,
            media_base_url,
            geocoder,
            sentry_dsn,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Join a stored image path onto the media base URL.
    #[must_use]
    pub fn media_url(&self, path: &str) -> String {
        let base = self.media_base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}

impl GeocoderConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: get_env_or_default("GEOCODER_BASE_URL", "https://geocode-maps.yandex.ru/1.x"),
            api_key: get_required_secret("GEOCODER_API_KEY")?,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get a required environment variable as a secret.
fn get_required_secret(key: &str) -> Result<SecretString, ConfigError> {
    let value = get_required_env(key)?;
    Ok(SecretString::from(value))
}

/// Get database URL with fallback to generic `DATABASE_URL`.
fn get_database_url(primary_key: &str) -> Result<SecretString, ConfigError> {
    if let Ok(value) = std::env::var(primary_key) {
        return Ok(SecretString::from(value));
    }
    if let Ok(value) = std::env::var("DATABASE_URL") {
        return Ok(SecretString::from(value));
    }
    Err(ConfigError::MissingEnvVar(primary_key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn test_config() -> FoodcartConfig {
        FoodcartConfig {
            database_url: SecretString::from("postgres://localhost/test"),
            host: "127.0.0.1".parse().unwrap(),
            port: 8000,
            media_base_url: "/media/".to_string(),
            geocoder: GeocoderConfig {
                base_url: "https://geocode-maps.yandex.ru/1.x".to_string(),
                api_key: SecretString::from("key"),
            },
            sentry_dsn: None,
        }
    }

    #[test]
    fn test_socket_addr() {
        let config = test_config();
        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 8000);
    }

    #[test]
    fn test_media_url_joins_slashes() {
        let config = test_config();
        assert_eq!(config.media_url("burger.jpg"), "/media/burger.jpg");
        assert_eq!(config.media_url("/burger.jpg"), "/media/burger.jpg");

        let mut config = test_config();
        config.media_base_url = "https://cdn.example.com/media".to_string();
        assert_eq!(
            config.media_url("food.jpg"),
            "https://cdn.example.com/media/food.jpg"
        );
    }

    #[test]
    fn test_geocoder_config_debug_redacts_api_key() {
        let config = GeocoderConfig {
            base_url: "https://geocode-maps.yandex.ru/1.x".to_string(),
            api_key: SecretString::from("super_secret_api_key"),
        };

        let debug_output = format!("{config:?}");
        assert!(debug_output.contains("geocode-maps.yandex.ru"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("super_secret_api_key"));
    }

    #[test]
    fn test_missing_env_var_names_variable() {
        let err = ConfigError::MissingEnvVar("GEOCODER_API_KEY".to_string());
        assert_eq!(
            err.to_string(),
            "Missing environment variable: GEOCODER_API_KEY"
        );
    }
}
