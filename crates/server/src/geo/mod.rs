//! Geocoding, the spot cache, and delivery-distance estimation.
//!
//! # Architecture
//!
//! - [`Geocoder`] - resolves a free-text address to coordinates via an
//!   external service ([`YandexGeocoder`] in production)
//! - [`SpotStore`] - persistent address-to-coordinates memo table
//!   ([`crate::db::SpotRepository`] in production)
//! - [`resolve_coordinates`] - the cache-aside composition of the two
//! - [`distance_km`] - great-circle distance with an unknown-location
//!   sentinel
//!
//! The traits exist so the composition is testable with in-memory fakes;
//! no test here touches the network or a database.

pub mod distance;
pub mod yandex;

pub use distance::{DISTANCE_UNKNOWN, distance_km};
pub use yandex::YandexGeocoder;

use foodcart_core::Coordinates;

use crate::db::RepositoryError;

/// Errors from the geocoding layer.
#[derive(Debug, thiserror::Error)]
pub enum GeoError {
    /// HTTP request to the geocoding service failed (including non-2xx).
    /// Propagated, never retried.
    #[error("geocoder HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service responded 2xx but the body did not have the expected
    /// shape.
    #[error("malformed geocoder response: {0}")]
    MalformedResponse(String),

    /// The spot store failed.
    #[error("spot store error: {0}")]
    Store(#[from] RepositoryError),
}

/// Resolves an address to coordinates via an external service.
///
/// `Ok(None)` means the service found no matching place - an absence, not a
/// failure. Failures (network, non-2xx, malformed body) are `Err`.
pub trait Geocoder {
    /// Geocode a free-text address.
    fn geocode(
        &self,
        address: &str,
    ) -> impl Future<Output = Result<Option<Coordinates>, GeoError>> + Send;
}

/// Persistent address-to-coordinates cache.
///
/// Addresses are exact-match string keys. Entries are insert-only: a cached
/// address is treated as a stable fact and never re-geocoded.
pub trait SpotStore {
    /// Look up cached coordinates for an address.
    fn find(
        &self,
        address: &str,
    ) -> impl Future<Output = Result<Option<Coordinates>, RepositoryError>> + Send;

    /// Cache coordinates for an address. Concurrent duplicate saves for the
    /// same address must collapse to one entry (first writer wins).
    fn save(
        &self,
        address: &str,
        coordinates: Coordinates,
    ) -> impl Future<Output = Result<(), RepositoryError>> + Send;
}

/// Cache-aside address resolution.
///
/// On a cache hit the geocoder is not invoked. On a miss the geocoder is
/// asked once; a found place is cached and returned, an absence is returned
/// without caching anything (so an address the service cannot resolve today
/// will be retried on the next lookup).
///
/// # Errors
///
/// Propagates geocoder failures and store failures unchanged.
pub async fn resolve_coordinates<S, G>(
    store: &S,
    geocoder: &G,
    address: &str,
) -> Result<Option<Coordinates>, GeoError>
where
    S: SpotStore,
    G: Geocoder,
{
    if let Some(cached) = store.find(address).await? {
        return Ok(Some(cached));
    }

    let Some(coordinates) = geocoder.geocode(address).await? else {
        return Ok(None);
    };

    store.save(address, coordinates).await?;
    Ok(Some(coordinates))
}
