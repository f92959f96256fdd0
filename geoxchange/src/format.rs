use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::adapter::GeometryAdapter;
use crate::error::GeoFormatError;
use crate::georss::GeoRss;
use crate::kml::Kml;
use crate::xml;

/// Geometry formats supported by the crate.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Keyhole Markup Language.
    Kml,
    /// Simple GeoRSS.
    GeoRss,
}

impl Format {
    /// All supported formats.
    pub const ALL: [Format; 2] = [Format::Kml, Format::GeoRss];

    /// Short lowercase name of the format, as accepted by [`Format::from_str`].
    pub fn name(&self) -> &'static str {
        match self {
            Format::Kml => "kml",
            Format::GeoRss => "georss",
        }
    }

    /// Creates an adapter for the format with default options.
    pub fn adapter(&self) -> Box<dyn GeometryAdapter> {
        match self {
            Format::Kml => Box::new(Kml::new()),
            Format::GeoRss => Box::new(GeoRss::new()),
        }
    }
}

impl Display for Format {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Kml => f.write_str("KML"),
            Format::GeoRss => f.write_str("GeoRSS"),
        }
    }
}

impl FromStr for Format {
    type Err = GeoFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        Format::ALL
            .into_iter()
            .find(|format| format.name() == name)
            .ok_or_else(|| GeoFormatError::UnknownFormat(s.to_string()))
    }
}

const GEORSS_ELEMENTS: [&str; 5] = ["point", "line", "polygon", "box", "circle"];

/// Guesses the format of the document by its root element and well known descendants.
///
/// Returns `None` if the text is not well-formed XML or if no supported format is recognized.
///
/// ```
/// use geoxchange::{detect_format, Format};
///
/// assert_eq!(detect_format("<Point><coordinates>1,2</coordinates></Point>"), Some(Format::Kml));
/// assert_eq!(detect_format("<georss:point>2 1</georss:point>"), Some(Format::GeoRss));
/// assert_eq!(detect_format("<html></html>"), None);
/// ```
pub fn detect_format(text: &str) -> Option<Format> {
    let prepared = xml::prepare(text);
    let document = xml::parse(&prepared).ok()?;
    let root = document.root_element();

    match root.tag_name().name() {
        "kml" | "document" | "folder" | "placemark" | "multigeometry" | "linestring"
        | "linearring" => return Some(Format::Kml),
        "where" | "line" | "box" | "circle" => return Some(Format::GeoRss),
        "point" | "polygon" => {
            let mut child_elements = root.children().filter(|n| n.is_element()).peekable();
            if child_elements.peek().is_none() {
                return Some(Format::GeoRss);
            }

            let has_kml_children = child_elements.any(|n| {
                matches!(n.tag_name().name(), "coordinates" | "outerboundaryis")
            });
            return has_kml_children.then_some(Format::Kml);
        }
        _ => {}
    }

    let is_kml = document
        .descendants()
        .any(|n| n.is_element() && n.tag_name().name() == "placemark");
    if is_kml {
        return Some(Format::Kml);
    }

    document
        .descendants()
        .any(|n| n.is_element() && GEORSS_ELEMENTS.contains(&n.tag_name().name()))
        .then_some(Format::GeoRss)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn format_names() {
        assert_eq!("kml".parse::<Format>(), Ok(Format::Kml));
        assert_eq!(" GeoRSS ".parse::<Format>(), Ok(Format::GeoRss));
        assert_matches!(
            "wkt".parse::<Format>(),
            Err(GeoFormatError::UnknownFormat(name)) if name == "wkt"
        );
        assert_eq!(Format::GeoRss.to_string(), "GeoRSS");
    }

    #[test]
    fn adapter_matches_format() {
        for format in Format::ALL {
            assert_eq!(format.adapter().format(), format);
        }
    }

    #[test]
    fn detect_kml_documents() {
        assert_eq!(
            detect_format(r#"<kml xmlns="http://www.opengis.net/kml/2.2"><Document/></kml>"#),
            Some(Format::Kml)
        );
        assert_eq!(
            detect_format("<Polygon><outerBoundaryIs/></Polygon>"),
            Some(Format::Kml)
        );
        assert_eq!(
            detect_format("<root><Placemark><name>A</name></Placemark></root>"),
            Some(Format::Kml)
        );
    }

    #[test]
    fn detect_georss_documents() {
        assert_eq!(detect_format("<point>2 1</point>"), Some(Format::GeoRss));
        assert_eq!(
            detect_format("<feed><entry><georss:line>1 2 3 4</georss:line></entry></feed>"),
            Some(Format::GeoRss)
        );
    }

    #[test]
    fn detect_unknown() {
        assert_eq!(detect_format("not xml"), None);
        assert_eq!(detect_format("<point><pos/></point>"), None);
        assert_eq!(detect_format("<feed><entry/></feed>"), None);
    }
}
