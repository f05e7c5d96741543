//! DOM extraction of placemarks from KML text.

use roxmltree::{Document, Node};

use super::{ParseError, Placemark};

/// Parse every `<Placemark>` out of a KML document.
///
/// Tag names are matched on their local part, so documents with or
/// without the KML 2.2 namespace parse identically. Placemarks are
/// returned in document order.
pub fn parse_placemarks(text: &str) -> Result<Vec<Placemark>, ParseError> {
    let doc = Document::parse(text)?;
    Ok(doc
        .descendants()
        .filter(|node| node.tag_name().name() == "Placemark")
        .map(parse_placemark)
        .collect())
}

fn parse_placemark(node: Node) -> Placemark {
    let mut placemark = Placemark::default();

    for child in node.descendants() {
        match child.tag_name().name() {
            // The placemark's own display name; the first <name> element
            // wins so nested geometry metadata cannot overwrite it.
            "name" if placemark.name.is_none() => {
                placemark.name = child.text().map(|text| text.trim().to_string());
            }
            "Data" => {
                let Some(key) = child.attribute("name") else {
                    continue;
                };
                let value = child
                    .children()
                    .find(|c| c.tag_name().name() == "value")
                    .and_then(|c| c.text());
                if let Some(value) = value {
                    placemark
                        .data
                        .insert(key.to_string(), value.trim().to_string());
                }
            }
            "coordinates" => {
                placemark.coordinates = child.text().map(str::to_string);
            }
            _ => {}
        }
    }

    placemark
}
