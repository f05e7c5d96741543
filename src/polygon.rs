//! Planar polygon construction and containment.
//!
//! Coordinates are treated as planar `(lng, lat)` pairs for the
//! containment test; only distance queries use spherical math. The
//! planar approximation is adequate for small field boundaries.

use crate::catalog::{FieldRecord, FieldRef};
use crate::coord::Point;

/// Error type for polygon construction.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    /// A polygon cannot be built from zero points. The loader filters
    /// out empty boundaries, so hitting this indicates a caller bug.
    #[error("cannot build a polygon from an empty point sequence")]
    EmptyGeometry,
}

/// A closed planar ring.
///
/// The boundary always ends on a copy of its first point, whether or
/// not the source sequence was already closed.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    ring: Vec<Point>,
}

impl Polygon {
    /// Build a polygon from a boundary point sequence.
    ///
    /// The caller's slice is left untouched; the ring is closed by
    /// appending a copy of the first point when needed.
    pub fn new(points: &[Point]) -> Result<Self, GeometryError> {
        if points.is_empty() {
            return Err(GeometryError::EmptyGeometry);
        }

        let mut ring = points.to_vec();
        if ring.first() != ring.last() {
            ring.push(ring[0]);
        }

        Ok(Self { ring })
    }

    /// The closed boundary ring (first point equals last).
    pub fn ring(&self) -> &[Point] {
        &self.ring
    }

    /// Boundary-inclusive containment test.
    ///
    /// True iff the point lies strictly inside the ring or exactly on
    /// an edge or vertex. Field-edge points must match their own field,
    /// so on-boundary points count as covered.
    pub fn covers(&self, point: Point) -> bool {
        if self.on_boundary(point) {
            return true;
        }

        // Even-odd ray cast along the +lng axis
        let mut inside = false;
        for segment in self.ring.windows(2) {
            let (a, b) = (segment[0], segment[1]);
            if (a.lat > point.lat) != (b.lat > point.lat) {
                let crossing = a.lng + (point.lat - a.lat) * (b.lng - a.lng) / (b.lat - a.lat);
                if point.lng < crossing {
                    inside = !inside;
                }
            }
        }
        inside
    }

    fn on_boundary(&self, point: Point) -> bool {
        // A degenerate one-point ring has no segments
        if self.ring.len() == 1 {
            return self.ring[0] == point;
        }
        self.ring
            .windows(2)
            .any(|segment| on_segment(segment[0], segment[1], point))
    }
}

/// Whether `point` lies exactly on the segment from `a` to `b`.
///
/// Exact arithmetic, consistent with the catalog's bit-exact point
/// equality; there is no tolerance anywhere in the core.
fn on_segment(a: Point, b: Point, point: Point) -> bool {
    let cross = (b.lng - a.lng) * (point.lat - a.lat) - (b.lat - a.lat) * (point.lng - a.lng);
    if cross != 0.0 {
        return false;
    }

    point.lng >= a.lng.min(b.lng)
        && point.lng <= a.lng.max(b.lng)
        && point.lat >= a.lat.min(b.lat)
        && point.lat <= a.lat.max(b.lat)
}

/// Containment queries over field boundaries.
///
/// Capability seam with a single concrete implementation,
/// [`PlanarMatcher`]; substitutable in tests.
pub trait PolygonMatcher: Send + Sync {
    /// Build a closed-ring polygon from a boundary point sequence.
    fn create_polygon(&self, points: &[Point]) -> Result<Polygon, GeometryError>;

    /// Boundary-inclusive point-in-polygon test.
    fn covers(&self, polygon: &Polygon, point: Point) -> bool;

    /// All fields whose boundary covers `point`, in dataset order.
    ///
    /// A point may fall in zero, one, or several fields when boundaries
    /// overlap; there is no first-match short-circuit.
    fn match_fields(&self, fields: &[FieldRecord], point: Point) -> Vec<FieldRef>;
}

/// Planar even-odd matcher over closed rings.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanarMatcher;

impl PolygonMatcher for PlanarMatcher {
    fn create_polygon(&self, points: &[Point]) -> Result<Polygon, GeometryError> {
        Polygon::new(points)
    }

    fn covers(&self, polygon: &Polygon, point: Point) -> bool {
        polygon.covers(point)
    }

    fn match_fields(&self, fields: &[FieldRecord], point: Point) -> Vec<FieldRef> {
        let mut matches = Vec::new();
        for field in fields {
            let polygon = match Polygon::new(&field.boundary) {
                Ok(polygon) => polygon,
                Err(e) => {
                    // The loader drops empty boundaries, so this only
                    // fires on a hand-built record
                    tracing::warn!(id = field.id, error = %e, "Skipping unbuildable field boundary");
                    continue;
                }
            };
            if polygon.covers(point) {
                matches.push(FieldRef {
                    id: field.id,
                    name: field.name.clone(),
                });
            }
        }
        matches
    }
}
