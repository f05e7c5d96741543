//! Placemark-level parsing of the KML source markup.
//!
//! The catalog's two source files (field boundaries and field reference
//! centers) are KML documents. Each `<Placemark>` carries an optional
//! `<name>`, a set of `<ExtendedData>` entries of the form
//! `<Data name="..."><value>...</value></Data>`, and optionally a
//! geometry `<coordinates>` blob of whitespace-separated
//! `lng,lat[,alt]` tuples (longitude before latitude).
//!
//! This module only lifts placemarks out of the markup; interpreting
//! them as field or centroid records is the job of [`crate::catalog`].

mod parser;

use std::collections::HashMap;

pub use parser::parse_placemarks;

/// Error type for whole-document KML parsing.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The document is not well-formed XML.
    #[error("malformed KML document: {0}")]
    Malformed(#[from] roxmltree::Error),
}

/// One placemark record extracted from a KML document.
#[derive(Debug, Clone, Default)]
pub struct Placemark {
    /// Text of the placemark's `<name>` element, if present.
    pub name: Option<String>,
    /// Extended-data entries, keyed by their `name` attribute.
    pub data: HashMap<String, String>,
    /// Raw text of the geometry `<coordinates>` blob, if present.
    pub coordinates: Option<String>,
}

impl Placemark {
    /// Extended-data value by entry name.
    pub fn data_value(&self, name: &str) -> Option<&str> {
        self.data.get(name).map(String::as_str)
    }
}
