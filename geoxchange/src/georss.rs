//! GeoRSS reader and writer.
//!
//! Supports the "simple" GeoRSS encoding: `point`, `line`, `polygon`, `box` and `circle` elements containing
//! whitespace separated `lat lon` pairs. Note that the axis order is the opposite of the one used by the geometry
//! model (and by KML): the adapter swaps the ordinates on both input and output.
//!
//! The format is lossy:
//! * polygon holes are not representable, only the exterior ring of a polygon is written;
//! * `box` is read as a rectangular polygon;
//! * `circle` is read as its center point, the radius is discarded;
//! * empty points inside a line or a ring have no ordinates to write and are skipped;
//! * all geometries of a document are read in fixed category order (points, lines, polygons, boxes, circles),
//!   regardless of their order in the document.

use geoxchange_types::{reduce, Geometry, LineString, Point, Polygon};
use roxmltree::{Document, Node};

use crate::adapter::{AdapterOptions, GeometryAdapter};
use crate::error::GeoFormatError;
use crate::xml::{self, XmlWriter};
use crate::Format;

/// GeoRSS adapter.
///
/// ```
/// use geoxchange::{GeometryAdapter, GeoRss};
/// use geoxchange::geoxchange_types::{Geometry, Point};
///
/// let geometry = GeoRss::new().read("<point>20 10</point>").unwrap();
/// assert_eq!(geometry, Geometry::Point(Point::new(10.0, 20.0)));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeoRss {
    options: AdapterOptions,
}

impl GeoRss {
    /// Creates a new adapter with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the adapter options.
    pub fn with_options(mut self, options: AdapterOptions) -> Self {
        self.options = options;
        self
    }

    /// Sets the maximum nesting level of collections. See [`AdapterOptions::max_depth`].
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.options = self.options.with_max_depth(max_depth);
        self
    }

    /// Options of the adapter.
    pub fn options(&self) -> &AdapterOptions {
        &self.options
    }

    fn encode(
        &self,
        writer: &mut XmlWriter,
        geometry: &Geometry,
        depth: usize,
    ) -> Result<(), GeoFormatError> {
        self.options.check_depth(depth)?;

        match geometry {
            Geometry::Point(point) => write_point(writer, point),
            Geometry::LineString(line) => {
                writer.text_element("line", &lat_lon_text(line.points()))
            }
            Geometry::Polygon(polygon) => {
                writer.text_element("polygon", &lat_lon_text(polygon.exterior_ring().points()))
            }
            Geometry::MultiPoint(_)
            | Geometry::MultiLineString(_)
            | Geometry::MultiPolygon(_)
            | Geometry::GeometryCollection(_) => {
                writer.start("where")?;
                for member in geometry.components() {
                    self.encode(writer, &member, depth + 1)?;
                }
                writer.end("where")
            }
        }
    }
}

impl GeometryAdapter for GeoRss {
    fn format(&self) -> Format {
        Format::GeoRss
    }

    /// Decodes all GeoRSS geometries found anywhere in the document and folds them into one with [`reduce`].
    ///
    /// Fails with [`GeoFormatError::EmptyInput`] if the document contains no GeoRSS geometries.
    fn read(&self, text: &str) -> Result<Geometry, GeoFormatError> {
        let prepared = xml::prepare(text);
        let document = xml::parse(&prepared)
            .map_err(|err| GeoFormatError::format(Format::GeoRss, err.to_string(), text))?;

        let decoder = GeoRssDecoder { input: text };
        let geometries = decoder.decode_document(&document)?;

        if geometries.is_empty() {
            return Err(GeoFormatError::EmptyInput {
                format: Format::GeoRss,
                input: text.to_string(),
            });
        }

        Ok(reduce(geometries)?)
    }

    fn write(
        &self,
        geometry: &Geometry,
        namespace: Option<&str>,
    ) -> Result<String, GeoFormatError> {
        let mut writer = XmlWriter::new(namespace)?;
        self.encode(&mut writer, geometry, 1)?;
        writer.finish()
    }
}

struct GeoRssDecoder<'a> {
    input: &'a str,
}

impl GeoRssDecoder<'_> {
    fn invalid(&self, reason: impl Into<String>) -> GeoFormatError {
        GeoFormatError::format(Format::GeoRss, reason, self.input)
    }

    fn decode_document(&self, document: &Document) -> Result<Vec<Geometry>, GeoFormatError> {
        let mut geometries = vec![];

        for node in xml::descendant_elements(document, "point") {
            geometries.push(self.parse_point(node)?.into());
        }
        for node in xml::descendant_elements(document, "line") {
            geometries.push(self.parse_line(node)?.into());
        }
        for node in xml::descendant_elements(document, "polygon") {
            geometries.push(self.parse_polygon(node)?.into());
        }
        for node in xml::descendant_elements(document, "box") {
            geometries.push(self.parse_box(node)?.into());
        }
        for node in xml::descendant_elements(document, "circle") {
            geometries.push(self.parse_circle(node)?.into());
        }

        Ok(geometries)
    }

    fn parse_point(&self, node: Node<'_, '_>) -> Result<Point, GeoFormatError> {
        Ok(self
            .parse_points(node)?
            .into_iter()
            .next()
            .unwrap_or_default())
    }

    fn parse_line(&self, node: Node<'_, '_>) -> Result<LineString, GeoFormatError> {
        Ok(LineString::new(self.parse_points(node)?))
    }

    fn parse_polygon(&self, node: Node<'_, '_>) -> Result<Polygon, GeoFormatError> {
        let points = self.parse_points(node)?;
        if points.is_empty() {
            return Ok(Polygon::empty());
        }

        Ok(Polygon::from(LineString::new(points)))
    }

    /// Box is `lower-lat lower-lon upper-lat upper-lon`, it is read as a closed rectangular ring starting from the
    /// upper left corner.
    fn parse_box(&self, node: Node<'_, '_>) -> Result<Polygon, GeoFormatError> {
        let ordinates = self.parse_ordinates(node)?;
        let &[lower_lat, lower_lon, upper_lat, upper_lon] = ordinates.as_slice() else {
            return Err(self.invalid(format!(
                "box must have 4 ordinates, found {}",
                ordinates.len()
            )));
        };

        let top_left = Point::latlon(upper_lat, lower_lon);
        let top_right = Point::latlon(upper_lat, upper_lon);
        let bottom_right = Point::latlon(lower_lat, upper_lon);
        let bottom_left = Point::latlon(lower_lat, lower_lon);

        Ok(Polygon::from(LineString::new(vec![
            top_left,
            top_right,
            bottom_right,
            bottom_left,
            top_left,
        ])))
    }

    /// Circle is `center-lat center-lon radius`. Only the center is kept.
    fn parse_circle(&self, node: Node<'_, '_>) -> Result<Point, GeoFormatError> {
        let ordinates = self.parse_ordinates(node)?;
        let [lat, lon, rest @ ..] = ordinates.as_slice() else {
            return Err(self.invalid(format!(
                "circle must have a center, found {} ordinates",
                ordinates.len()
            )));
        };

        if !rest.is_empty() {
            log::debug!("Discarding GeoRSS circle radius {rest:?}");
        }

        Ok(Point::latlon(*lat, *lon))
    }

    fn parse_points(&self, node: Node<'_, '_>) -> Result<Vec<Point>, GeoFormatError> {
        let ordinates = self.parse_ordinates(node)?;
        let pairs = ordinates.chunks_exact(2);
        if !pairs.remainder().is_empty() {
            log::debug!(
                "Ignoring unpaired GeoRSS ordinate {:?}",
                pairs.remainder()
            );
        }

        Ok(pairs.map(|pair| Point::latlon(pair[0], pair[1])).collect())
    }

    fn parse_ordinates(&self, node: Node<'_, '_>) -> Result<Vec<f64>, GeoFormatError> {
        xml::text_content(node)
            .split_whitespace()
            .map(|value| {
                value
                    .parse()
                    .map_err(|_| self.invalid(format!("invalid coordinate value: '{value}'")))
            })
            .collect()
    }
}

fn lat_lon_text(points: &[Point]) -> String {
    points
        .iter()
        .filter_map(Point::coord)
        .map(|c| format!("{} {}", c.y, c.x))
        .collect::<Vec<_>>()
        .join(" ")
}

fn write_point(writer: &mut XmlWriter, point: &Point) -> Result<(), GeoFormatError> {
    writer.start("point")?;
    if let Some(c) = point.coord() {
        writer.text(&format!("{} {}", c.y, c.x))?;
    }
    writer.end("point")
}
