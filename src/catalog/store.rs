//! Process-lifetime cache for the field and centroid datasets.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

use super::{centroid_from_placemark, field_from_placemark, CentroidRecord, FieldRecord};
use crate::kml;

/// Read access to the cached field and centroid datasets.
///
/// Capability seam for the service facade; tests substitute a
/// fixture-backed implementation.
pub trait GeoStore: Send + Sync {
    /// All field records in source load order, loading on first call.
    fn load_fields(&self) -> &[FieldRecord];

    /// All centroid records in source load order, loading on first call.
    fn load_centroids(&self) -> &[CentroidRecord];

    /// Field record by id. Absent ids are `None`, never an error.
    fn field(&self, id: i64) -> Option<&FieldRecord>;

    /// Centroid record by id.
    fn centroid(&self, id: i64) -> Option<&CentroidRecord>;
}

/// One immutable dataset keyed by record id.
struct Table<T> {
    /// Records in source load order.
    records: Vec<T>,
    /// Id to index into `records`. A duplicate id overwrites the earlier
    /// entry, so lookup returns the most recently loaded record.
    by_id: HashMap<i64, usize>,
}

impl<T> Table<T> {
    fn build(records: Vec<T>, id_of: impl Fn(&T) -> i64) -> Self {
        let mut by_id = HashMap::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            by_id.insert(id_of(record), index);
        }
        Self { records, by_id }
    }

    fn get(&self, id: i64) -> Option<&T> {
        self.by_id.get(&id).map(|&index| &self.records[index])
    }
}

/// Parses the two KML sources into typed records and caches them for
/// the process lifetime.
///
/// Each source is parsed at most once, on first access. Concurrent
/// first callers block on the same one-time build and then observe the
/// identical collection; later reads are lock-free. A failed load
/// caches the empty collection and is never retried, so a transient
/// file error yields "no data" until the process restarts.
pub struct GeoDataStore {
    fields_path: PathBuf,
    centroids_path: PathBuf,
    fields: OnceLock<Table<FieldRecord>>,
    centroids: OnceLock<Table<CentroidRecord>>,
    field_loads: AtomicUsize,
    centroid_loads: AtomicUsize,
}

impl GeoDataStore {
    /// Create a store over the two source files.
    ///
    /// The files are not touched until the first lookup.
    pub fn new(fields_path: impl Into<PathBuf>, centroids_path: impl Into<PathBuf>) -> Self {
        Self {
            fields_path: fields_path.into(),
            centroids_path: centroids_path.into(),
            fields: OnceLock::new(),
            centroids: OnceLock::new(),
            field_loads: AtomicUsize::new(0),
            centroid_loads: AtomicUsize::new(0),
        }
    }

    fn field_table(&self) -> &Table<FieldRecord> {
        self.fields.get_or_init(|| {
            self.field_loads.fetch_add(1, Ordering::Relaxed);
            let records = load_records(&self.fields_path, field_from_placemark);
            tracing::info!(
                count = records.len(),
                path = %self.fields_path.display(),
                "Built field table"
            );
            Table::build(records, |record| record.id)
        })
    }

    fn centroid_table(&self) -> &Table<CentroidRecord> {
        self.centroids.get_or_init(|| {
            self.centroid_loads.fetch_add(1, Ordering::Relaxed);
            let records = load_records(&self.centroids_path, centroid_from_placemark);
            tracing::info!(
                count = records.len(),
                path = %self.centroids_path.display(),
                "Built centroid table"
            );
            Table::build(records, |record| record.id)
        })
    }

    /// Number of times the field source has actually been parsed.
    ///
    /// Zero before first access, one ever after.
    pub fn field_load_count(&self) -> usize {
        self.field_loads.load(Ordering::Relaxed)
    }

    /// Number of times the centroid source has actually been parsed.
    pub fn centroid_load_count(&self) -> usize {
        self.centroid_loads.load(Ordering::Relaxed)
    }
}

impl GeoStore for GeoDataStore {
    fn load_fields(&self) -> &[FieldRecord] {
        &self.field_table().records
    }

    fn load_centroids(&self) -> &[CentroidRecord] {
        &self.centroid_table().records
    }

    fn field(&self, id: i64) -> Option<&FieldRecord> {
        self.field_table().get(id)
    }

    fn centroid(&self, id: i64) -> Option<&CentroidRecord> {
        self.centroid_table().get(id)
    }
}

/// Read one KML source into records, degrading to an empty collection
/// when the file itself cannot be read or parsed.
fn load_records<T>(path: &Path, record_of: impl Fn(&kml::Placemark) -> Option<T>) -> Vec<T> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "Failed to read source file");
            return Vec::new();
        }
    };

    let placemarks = match kml::parse_placemarks(&text) {
        Ok(placemarks) => placemarks,
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "Failed to parse source file");
            return Vec::new();
        }
    };

    placemarks.iter().filter_map(record_of).collect()
}
