//! Field and centroid catalog.
//!
//! Typed records parsed from the KML sources, plus the process-lifetime
//! cache ([`GeoDataStore`]) that serves them.
//!
//! Record-level parsing is deliberately forgiving: a malformed record is
//! skipped with a warning and its siblings still load, while a malformed
//! optional field (`size`) defaults to zero. Only a whole-file failure
//! degrades the dataset to an empty collection.

mod store;

use serde::Serialize;

use crate::coord::Point;
use crate::kml::Placemark;

pub use store::{GeoDataStore, GeoStore};

/// A field boundary record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldRecord {
    /// Catalog id, unique within a well-formed source file.
    pub id: i64,
    /// Display name; defaults to `"Field {id}"` when the source omits it.
    pub name: String,
    /// Field area in source units; defaults to zero.
    pub size: f64,
    /// Boundary ring points in source order. Non-empty after parsing;
    /// ring closure is applied by [`crate::polygon::Polygon::new`].
    pub boundary: Vec<Point>,
}

/// A field's designated reference point.
///
/// Not necessarily the geometric centroid of the field's polygon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CentroidRecord {
    /// Catalog id, intended to correspond 1:1 with a [`FieldRecord`] id.
    /// The correspondence is not validated at load time.
    pub id: i64,
    /// Reference center position.
    pub center: Point,
}

/// Lightweight field identity, returned by containment queries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldRef {
    pub id: i64,
    pub name: String,
}

/// Interpret a placemark as a field record.
///
/// Returns `None` (with a warning) when the required `id` entry is
/// missing or invalid, or when the coordinate blob yields no valid
/// points. An invalid `size` defaults to zero and the record survives.
pub(crate) fn field_from_placemark(placemark: &Placemark) -> Option<FieldRecord> {
    let id = parse_id(placemark)?;

    let size = match placemark.data_value("size") {
        None => 0.0,
        Some(raw) => match raw.parse::<f64>() {
            Ok(size) => size,
            Err(_) => {
                tracing::warn!(id, size = raw, "Invalid size value, defaulting to 0");
                0.0
            }
        },
    };

    let boundary = placemark
        .coordinates
        .as_deref()
        .map(parse_coordinate_blob)
        .unwrap_or_default();
    if boundary.is_empty() {
        tracing::warn!(id, "No valid boundary coordinates, skipping placemark");
        return None;
    }

    let name = placemark
        .name
        .clone()
        .unwrap_or_else(|| format!("Field {id}"));

    Some(FieldRecord {
        id,
        name,
        size,
        boundary,
    })
}

/// Interpret a placemark as a centroid record.
///
/// The center is carried in the `center` extended-data entry as a single
/// `lng,lat` pair rather than in the geometry blob.
pub(crate) fn centroid_from_placemark(placemark: &Placemark) -> Option<CentroidRecord> {
    let id = parse_id(placemark)?;

    let Some(raw) = placemark.data_value("center") else {
        tracing::warn!(id, "Missing required center entry, skipping placemark");
        return None;
    };
    match parse_lng_lat(raw.trim()) {
        Some(center) => Some(CentroidRecord { id, center }),
        None => {
            tracing::warn!(id, center = raw, "Invalid center value, skipping placemark");
            None
        }
    }
}

fn parse_id(placemark: &Placemark) -> Option<i64> {
    let Some(raw) = placemark.data_value("id") else {
        tracing::warn!("Missing required id entry, skipping placemark");
        return None;
    };
    match raw.parse() {
        Ok(id) => Some(id),
        Err(_) => {
            tracing::warn!(id = raw, "Invalid id value, skipping placemark");
            None
        }
    }
}

/// Tokenize a coordinate blob into points.
///
/// Tokens are whitespace-separated; each token is a comma-separated
/// `lng,lat[,alt]` tuple, longitude first. Malformed tokens are dropped
/// individually without discarding the rest of the blob.
fn parse_coordinate_blob(blob: &str) -> Vec<Point> {
    blob.split_whitespace().filter_map(parse_lng_lat).collect()
}

fn parse_lng_lat(token: &str) -> Option<Point> {
    let mut parts = token.split(',');
    let lng: f64 = parts.next()?.trim().parse().ok()?;
    let lat: f64 = parts.next()?.trim().parse().ok()?;
    Some(Point { lat, lng })
}
