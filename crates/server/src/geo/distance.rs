//! Great-circle distance estimation.

use foodcart_core::Coordinates;
use rust_decimal::prelude::ToPrimitive;

/// Sentinel returned when either location is unknown. Distances are never
/// negative, so callers can always tell this apart from a real result.
pub const DISTANCE_UNKNOWN: f64 = -1.0;

/// Mean Earth radius in kilometers (IUGG).
const EARTH_RADIUS_KM: f64 = 6371.0088;

/// Haversine distance between two optional points, in kilometers rounded to
/// 2 decimal places.
///
/// Returns [`DISTANCE_UNKNOWN`] if either point is absent (the geocoder
/// could not place an address).
#[must_use]
pub fn distance_km(a: Option<Coordinates>, b: Option<Coordinates>) -> f64 {
    let (Some(a), Some(b)) = (a, b) else {
        return DISTANCE_UNKNOWN;
    };

    let lat_a = as_radians(a.lat.to_f64());
    let lat_b = as_radians(b.lat.to_f64());
    let d_lat = lat_b - lat_a;
    let d_lon = as_radians(b.lon.to_f64()) - as_radians(a.lon.to_f64());

    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);
    let km = 2.0 * EARTH_RADIUS_KM * h.sqrt().asin();

    round2(km)
}

/// Degrees to radians. A stored coordinate always fits in an f64.
fn as_radians(degrees: Option<f64>) -> f64 {
    degrees.unwrap_or_default().to_radians()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn moscow() -> Coordinates {
        // 37.617700, 55.755800
        Coordinates::new(Decimal::new(37_617_700, 6), Decimal::new(55_755_800, 6))
    }

    fn saint_petersburg() -> Coordinates {
        // 30.315900, 59.939000
        Coordinates::new(Decimal::new(30_315_900, 6), Decimal::new(59_939_000, 6))
    }

    #[test]
    fn test_sentinel_when_either_side_unknown() {
        assert!((distance_km(None, Some(moscow())) - DISTANCE_UNKNOWN).abs() < f64::EPSILON);
        assert!((distance_km(Some(moscow()), None) - DISTANCE_UNKNOWN).abs() < f64::EPSILON);
        assert!((distance_km(None, None) - DISTANCE_UNKNOWN).abs() < f64::EPSILON);
    }

    #[test]
    fn test_identical_points_are_zero() {
        assert!((distance_km(Some(moscow()), Some(moscow())) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_known_distance() {
        // Moscow to Saint Petersburg is roughly 634 km great-circle
        let km = distance_km(Some(moscow()), Some(saint_petersburg()));
        assert!((630.0..640.0).contains(&km), "got {km}");
    }

    #[test]
    fn test_rounded_to_two_decimals() {
        let km = distance_km(Some(moscow()), Some(saint_petersburg()));
        assert!(((km * 100.0).round() / 100.0 - km).abs() < f64::EPSILON);
    }

    #[test]
    fn test_symmetry() {
        let ab = distance_km(Some(moscow()), Some(saint_petersburg()));
        let ba = distance_km(Some(saint_petersburg()), Some(moscow()));
        assert!((ab - ba).abs() < f64::EPSILON);
    }
}
