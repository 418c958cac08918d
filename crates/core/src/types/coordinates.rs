//! Geographic coordinates.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A geographic point as returned by the geocoder.
///
/// Longitude comes first throughout: the geocoder's position string is
/// `"lon lat"` space-delimited, and the ordering is easy to invert by
/// mistake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Longitude in decimal degrees.
    pub lon: Decimal,
    /// Latitude in decimal degrees.
    pub lat: Decimal,
}

impl Coordinates {
    /// Create coordinates from a (longitude, latitude) pair.
    #[must_use]
    pub const fn new(lon: Decimal, lat: Decimal) -> Self {
        Self { lon, lat }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_order() {
        // lon = 37.62, lat = 55.75 (Moscow); the two must not be swapped
        let point = Coordinates::new(Decimal::new(3762, 2), Decimal::new(5575, 2));
        assert_eq!(point.lon, Decimal::new(3762, 2));
        assert_eq!(point.lat, Decimal::new(5575, 2));
    }
}
