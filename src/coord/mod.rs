//! Geographic coordinate types.

use serde::Serialize;

/// A geographic position in decimal degrees.
///
/// Survey data is trusted as-is, so no range validation is applied.
/// Equality is exact component equality; the catalog never compares
/// points with a tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lng: f64,
}

impl Point {
    /// Create a point from latitude and longitude in degrees.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_is_exact() {
        let a = Point::new(50.25, 30.5);
        let b = Point::new(50.25, 30.5);
        assert_eq!(a, b);

        let c = Point::new(50.25 + 1e-12, 30.5);
        assert_ne!(a, c);
    }

    #[test]
    fn test_point_is_copy() {
        let a = Point::new(1.0, 2.0);
        let b = a;
        assert_eq!(a, b);
    }
}
