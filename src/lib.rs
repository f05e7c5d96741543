//! Agrofield - geospatial queries over a static agricultural field catalog
//!
//! This library answers point-in-field, field-size and distance-to-center
//! queries against a fixed catalog of field boundaries and reference
//! centers sourced from two KML files.
//!
//! # High-Level API
//!
//! For most use cases, the [`service`] module provides a simplified facade:
//!
//! ```ignore
//! use std::sync::Arc;
//! use agrofield::catalog::GeoDataStore;
//! use agrofield::coord::Point;
//! use agrofield::service::AgroService;
//!
//! let store = Arc::new(GeoDataStore::new("Data/fields.kml", "Data/centroids.kml"));
//! let service = AgroService::new(store);
//!
//! for field in service.fields_at(Point::new(50.25, 30.5)) {
//!     println!("point is inside field {} ({})", field.id, field.name);
//! }
//! ```

pub mod catalog;
pub mod coord;
pub mod distance;
pub mod kml;
pub mod polygon;
pub mod service;

/// Version of the agrofield library.
///
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
