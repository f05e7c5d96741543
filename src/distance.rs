//! Great-circle distance on a spherical Earth.

use crate::coord::Point;

/// Mean Earth radius in meters.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Distance computation between geographic points.
///
/// Seam for substituting the distance model in tests; the catalog ships
/// a single concrete implementation, [`Haversine`].
pub trait DistanceCalculator: Send + Sync {
    /// Great-circle distance between two points, in meters.
    ///
    /// Inputs are accepted at face value. Out-of-range coordinates
    /// produce a well-defined but geometrically meaningless result.
    fn distance_meters(&self, a: Point, b: Point) -> f64;
}

/// Haversine distance on a sphere of mean Earth radius.
///
/// Identical points yield exactly zero, and the result is symmetric in
/// its arguments.
#[derive(Debug, Clone, Copy, Default)]
pub struct Haversine;

impl DistanceCalculator for Haversine {
    fn distance_meters(&self, a: Point, b: Point) -> f64 {
        let lat1 = a.lat.to_radians();
        let lat2 = b.lat.to_radians();
        let delta_lat = (b.lat - a.lat).to_radians();
        let delta_lng = (b.lng - a.lng).to_radians();

        let h = (delta_lat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (delta_lng / 2.0).sin().powi(2);
        let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

        EARTH_RADIUS_M * c
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_zero_for_identical_points() {
        let p = Point::new(45.0, -122.0);
        assert_eq!(Haversine.distance_meters(p, p), 0.0);
    }

    #[test]
    fn test_distance_symmetry() {
        let a = Point::new(45.0, -122.0);
        let b = Point::new(46.0, -121.0);

        let ab = Haversine.distance_meters(a, b);
        let ba = Haversine.distance_meters(b, a);
        assert!((ab - ba).abs() < 1e-9, "distance should be symmetric");
    }

    #[test]
    fn test_one_degree_of_latitude_at_equator() {
        // 1 degree of latitude is approximately 111,195 m on the mean sphere
        let dist = Haversine.distance_meters(Point::new(0.0, 0.0), Point::new(1.0, 0.0));
        assert!(
            (dist - 111_195.0).abs() < 100.0,
            "expected ~111,195 m, got {}",
            dist
        );
    }

    #[test]
    fn test_one_degree_of_longitude_at_equator() {
        let dist = Haversine.distance_meters(Point::new(0.0, 0.0), Point::new(0.0, 1.0));
        assert!(
            (dist - 111_195.0).abs() < 100.0,
            "expected ~111,195 m, got {}",
            dist
        );
    }

    #[test]
    fn test_distance_monotonic_with_separation() {
        let origin = Point::new(0.0, 0.0);
        let near = Haversine.distance_meters(origin, Point::new(0.0, 1.0));
        let far = Haversine.distance_meters(origin, Point::new(0.0, 2.0));
        assert!(far > near, "distance should grow with angular separation");
    }

    #[test]
    fn test_distance_toulouse_to_paris() {
        // LFBO (Toulouse) to LFPG (Paris) is approximately 600 km
        let toulouse = Point::new(43.6, 1.4);
        let paris = Point::new(49.0, 2.5);
        let dist = Haversine.distance_meters(toulouse, paris);

        assert!(
            (dist - 605_000.0).abs() < 20_000.0,
            "expected ~605 km, got {} m",
            dist
        );
    }
}
