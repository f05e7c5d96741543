//! High-level facade over the catalog and geometry components.
//!
//! Wires the store, polygon matcher and distance calculator together
//! and exposes the four operations consumed by the routing layer. The
//! facade never surfaces lookup misses as errors; unknown ids become
//! `None` and non-matching points become an empty collection, leaving
//! the boundary layer to choose its own sentinel.

use std::sync::Arc;

use serde::Serialize;

use crate::catalog::{FieldRef, GeoStore};
use crate::coord::Point;
use crate::distance::{DistanceCalculator, Haversine};
use crate::polygon::{PlanarMatcher, PolygonMatcher};

/// A field joined with its reference center, as served to the
/// boundary layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HarvestField {
    pub id: i64,
    pub name: String,
    /// Field area in source units.
    pub size: f64,
    /// Designated reference point from the centroid dataset.
    pub center: Point,
    /// Boundary ring points in source order.
    pub boundary: Vec<Point>,
}

/// Facade owning the catalog store and the geometry capabilities.
pub struct AgroService {
    store: Arc<dyn GeoStore>,
    matcher: Box<dyn PolygonMatcher>,
    distance: Box<dyn DistanceCalculator>,
}

impl AgroService {
    /// Create a service with the default planar matcher and haversine
    /// distance calculator.
    pub fn new(store: Arc<dyn GeoStore>) -> Self {
        Self::with_components(store, Box::new(PlanarMatcher), Box::new(Haversine))
    }

    /// Create a service with explicit component implementations.
    pub fn with_components(
        store: Arc<dyn GeoStore>,
        matcher: Box<dyn PolygonMatcher>,
        distance: Box<dyn DistanceCalculator>,
    ) -> Self {
        Self {
            store,
            matcher,
            distance,
        }
    }

    /// All fields that have a matching centroid, joined by id in field
    /// load order.
    ///
    /// Fields without a centroid for their id are silently excluded
    /// from the joined view.
    pub fn harvest_fields(&self) -> Vec<HarvestField> {
        self.store
            .load_fields()
            .iter()
            .filter_map(|field| {
                let centroid = self.store.centroid(field.id)?;
                Some(HarvestField {
                    id: field.id,
                    name: field.name.clone(),
                    size: field.size,
                    center: centroid.center,
                    boundary: field.boundary.clone(),
                })
            })
            .collect()
    }

    /// A field's area in source units, or `None` for an unknown id.
    pub fn field_size(&self, id: i64) -> Option<f64> {
        self.store.field(id).map(|field| field.size)
    }

    /// Great-circle distance in meters from `point` to a field's
    /// reference center, or `None` when no centroid is known for `id`.
    pub fn distance_to_center(&self, point: Point, id: i64) -> Option<f64> {
        let centroid = self.store.centroid(id)?;
        Some(self.distance.distance_meters(point, centroid.center))
    }

    /// All fields whose boundary covers `point`, possibly empty.
    pub fn fields_at(&self, point: Point) -> Vec<FieldRef> {
        self.matcher.match_fields(self.store.load_fields(), point)
    }
}
