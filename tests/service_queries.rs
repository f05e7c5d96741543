//! End-to-end query behavior over KML-sourced data.
//!
//! Exercises the full path: KML files on disk, the cached store, and
//! the service facade answering the four boundary-layer operations.

use std::io::Write;
use std::sync::Arc;

use agrofield::catalog::GeoDataStore;
use agrofield::coord::Point;
use agrofield::service::AgroService;
use tempfile::NamedTempFile;

// Field 7 deliberately has no centroid record
const FIELDS_KML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<kml xmlns="http://www.opengis.net/kml/2.2">
  <Document>
    <Placemark>
      <name>Unit square</name>
      <ExtendedData>
        <Data name="id"><value>1</value></Data>
        <Data name="size"><value>100</value></Data>
      </ExtendedData>
      <Polygon><outerBoundaryIs><LinearRing><coordinates>
        0.0,0.0 0.0,10.0 10.0,10.0 10.0,0.0
      </coordinates></LinearRing></outerBoundaryIs></Polygon>
    </Placemark>
    <Placemark>
      <name>Orphan</name>
      <ExtendedData>
        <Data name="id"><value>7</value></Data>
        <Data name="size"><value>55.5</value></Data>
      </ExtendedData>
      <Polygon><outerBoundaryIs><LinearRing><coordinates>
        40.0,40.0 40.0,41.0 41.0,41.0 41.0,40.0
      </coordinates></LinearRing></outerBoundaryIs></Polygon>
    </Placemark>
  </Document>
</kml>"#;

const CENTROIDS_KML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<kml xmlns="http://www.opengis.net/kml/2.2">
  <Document>
    <Placemark>
      <ExtendedData>
        <Data name="id"><value>1</value></Data>
        <Data name="center"><value>5.0,5.0</value></Data>
      </ExtendedData>
    </Placemark>
  </Document>
</kml>"#;

struct Fixture {
    service: AgroService,
    // Keep the temp files alive for the duration of the test
    _fields: NamedTempFile,
    _centroids: NamedTempFile,
}

fn fixture() -> Fixture {
    let mut fields = NamedTempFile::new().unwrap();
    fields.write_all(FIELDS_KML.as_bytes()).unwrap();
    let mut centroids = NamedTempFile::new().unwrap();
    centroids.write_all(CENTROIDS_KML.as_bytes()).unwrap();

    let store = Arc::new(GeoDataStore::new(fields.path(), centroids.path()));
    Fixture {
        service: AgroService::new(store),
        _fields: fields,
        _centroids: centroids,
    }
}

#[test]
fn joined_view_omits_fields_without_a_centroid() {
    let fx = fixture();
    let joined = fx.service.harvest_fields();

    assert_eq!(joined.len(), 1);
    assert_eq!(joined[0].id, 1);
    assert_eq!(joined[0].name, "Unit square");
    assert_eq!(joined[0].size, 100.0);
    assert_eq!(joined[0].center, Point::new(5.0, 5.0));
    assert_eq!(joined[0].boundary.len(), 4);
}

#[test]
fn field_size_by_id() {
    let fx = fixture();
    assert_eq!(fx.service.field_size(1), Some(100.0));
    assert_eq!(fx.service.field_size(7), Some(55.5));
    assert_eq!(fx.service.field_size(42), None);
}

#[test]
fn distance_to_center_reports_not_found_for_missing_centroid() {
    let fx = fixture();

    // Field 7 exists, its centroid does not
    assert_eq!(fx.service.distance_to_center(Point::new(40.5, 40.5), 7), None);

    let dist = fx
        .service
        .distance_to_center(Point::new(5.0, 5.0), 1)
        .unwrap();
    assert_eq!(dist, 0.0);
}

#[test]
fn fields_containing_a_point() {
    let fx = fixture();

    let inside = fx.service.fields_at(Point::new(5.0, 5.0));
    assert_eq!(inside.len(), 1);
    assert_eq!(inside[0].id, 1);

    let vertex = fx.service.fields_at(Point::new(0.0, 0.0));
    assert_eq!(vertex.len(), 1, "vertex point must match its own field");

    assert!(fx.service.fields_at(Point::new(20.0, 20.0)).is_empty());
}
