//! KML reader and writer.
//!
//! Only the geometry part of KML is supported: `Point`, `LineString`, `LinearRing`, `Polygon` and `MultiGeometry`
//! elements. Everything else in the document (styles, names, extended data etc.) is ignored.
//!
//! KML coordinates are `lon,lat[,alt]` tuples separated by whitespace. Altitude is ignored on input and never
//! emitted. A coordinate list cannot hold an empty point, so empty points inside line strings and rings are skipped
//! on output.

use geoxchange_types::{
    reduce, Coord, Geometry, GeometryCollection, GeometryType, LineString, MultiLineString,
    MultiPoint, MultiPolygon, Point, Polygon,
};
use lazy_static::lazy_static;
use regex::Regex;
use roxmltree::{Document, Node};

use crate::adapter::{AdapterOptions, GeometryAdapter};
use crate::error::GeoFormatError;
use crate::xml::{self, XmlWriter};
use crate::Format;

lazy_static! {
    static ref COMMA_SPACING: Regex = Regex::new(r"\s*,\s*").expect("invalid regex");
}

/// KML adapter.
///
/// ```
/// use geoxchange::{GeometryAdapter, Kml};
/// use geoxchange::geoxchange_types::{Geometry, Point};
///
/// let geometry = Kml::new().read("<Point><coordinates>10,20</coordinates></Point>").unwrap();
/// assert_eq!(geometry, Geometry::Point(Point::new(10.0, 20.0)));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Kml {
    options: AdapterOptions,
}

impl Kml {
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
            Geometry::LineString(line) => write_line_string(writer, line, "LineString"),
            Geometry::Polygon(polygon) => write_polygon(writer, polygon),
            Geometry::MultiPoint(multi_point) => {
                self.options.check_depth(depth + 1)?;
                writer.start("MultiGeometry")?;
                for point in multi_point.points() {
                    write_point(writer, point)?;
                }
                writer.end("MultiGeometry")
            }
            Geometry::MultiLineString(multi_line) => {
                self.options.check_depth(depth + 1)?;
                writer.start("MultiGeometry")?;
                for line in multi_line.line_strings() {
                    write_line_string(writer, line, "LineString")?;
                }
                writer.end("MultiGeometry")
            }
            Geometry::MultiPolygon(multi_polygon) => {
                self.options.check_depth(depth + 1)?;
                writer.start("MultiGeometry")?;
                for polygon in multi_polygon.polygons() {
                    write_polygon(writer, polygon)?;
                }
                writer.end("MultiGeometry")
            }
            Geometry::GeometryCollection(collection) => {
                writer.start("MultiGeometry")?;
                for member in collection.geometries() {
                    self.encode(writer, member, depth + 1)?;
                }
                writer.end("MultiGeometry")
            }
        }
    }
}

impl GeometryAdapter for Kml {
    fn format(&self) -> Format {
        Format::Kml
    }

    /// Decodes a KML document or fragment.
    ///
    /// If the document contains `Placemark` elements, the first geometry element of every placemark is decoded.
    /// Otherwise the root element itself is decoded as a geometry. The decoded geometries are then folded into one
    /// with [`reduce`].
    ///
    /// A well-formed document without any geometry produces an empty [`GeometryCollection`].
    fn read(&self, text: &str) -> Result<Geometry, GeoFormatError> {
        let prepared = xml::prepare(text);
        let document = xml::parse(&prepared)
            .map_err(|err| GeoFormatError::format(Format::Kml, err.to_string(), text))?;

        let decoder = KmlDecoder {
            input: text,
            options: &self.options,
        };
        let geometries = decoder.decode_document(&document)?;

        if geometries.is_empty() {
            log::debug!("KML document does not contain any geometries");
            return Ok(GeometryCollection::default().into());
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

/// Resolves a lowercased KML element name into a geometry kind.
fn kml_geometry_type(node: Node<'_, '_>) -> Option<GeometryType> {
    if !node.is_element() {
        return None;
    }

    match node.tag_name().name() {
        "multigeometry" => Some(GeometryType::GeometryCollection),
        "linearring" => Some(GeometryType::LineString),
        name => GeometryType::from_node_name(name),
    }
}

struct KmlDecoder<'a> {
    input: &'a str,
    options: &'a AdapterOptions,
}

impl KmlDecoder<'_> {
    fn invalid(&self, reason: impl Into<String>) -> GeoFormatError {
        GeoFormatError::format(Format::Kml, reason, self.input)
    }

    fn decode_document(&self, document: &Document) -> Result<Vec<Geometry>, GeoFormatError> {
        let placemarks: Vec<_> = xml::descendant_elements(document, "placemark").collect();

        if placemarks.is_empty() {
            let root = document.root_element();
            return match kml_geometry_type(root) {
                Some(geometry_type) => Ok(vec![self.parse_geometry(geometry_type, root, 1)?]),
                None => {
                    log::debug!(
                        "KML root element <{}> is not a geometry",
                        root.tag_name().name()
                    );
                    Ok(vec![])
                }
            };
        }

        let mut geometries = Vec::with_capacity(placemarks.len());
        for placemark in placemarks {
            let geometry_node = placemark.children().find_map(|child| {
                kml_geometry_type(child).map(|geometry_type| (geometry_type, child))
            });

            match geometry_node {
                Some((geometry_type, node)) => {
                    geometries.push(self.parse_geometry(geometry_type, node, 1)?)
                }
                None => log::debug!("Skipping KML placemark without geometry"),
            }
        }

        Ok(geometries)
    }

    fn parse_geometry(
        &self,
        geometry_type: GeometryType,
        node: Node<'_, '_>,
        depth: usize,
    ) -> Result<Geometry, GeoFormatError> {
        self.options.check_depth(depth)?;

        Ok(match geometry_type {
            GeometryType::Point => self.parse_point(node)?.into(),
            GeometryType::LineString => self.parse_line_string(node)?.into(),
            GeometryType::Polygon => self.parse_polygon(node)?.into(),
            GeometryType::MultiPoint
            | GeometryType::MultiLineString
            | GeometryType::MultiPolygon
            | GeometryType::GeometryCollection => {
                self.parse_collection(geometry_type, node, depth)?
            }
        })
    }

    fn parse_point(&self, node: Node<'_, '_>) -> Result<Point, GeoFormatError> {
        Ok(self
            .parse_coordinates(node)?
            .into_iter()
            .next()
            .map_or_else(Point::empty, Point::from))
    }

    fn parse_line_string(&self, node: Node<'_, '_>) -> Result<LineString, GeoFormatError> {
        Ok(self
            .parse_coordinates(node)?
            .into_iter()
            .map(Point::from)
            .collect())
    }

    fn parse_polygon(&self, node: Node<'_, '_>) -> Result<Polygon, GeoFormatError> {
        let Some(outer_boundary) = xml::child_elements(node, "outerboundaryis").next() else {
            return Ok(Polygon::empty());
        };

        let outer_rings: Vec<_> = xml::child_elements(outer_boundary, "linearring").collect();
        let [outer_ring] = outer_rings.as_slice() else {
            return Err(self.invalid(format!(
                "polygon outer boundary must contain exactly one linear ring, found {}",
                outer_rings.len()
            )));
        };

        let mut rings = vec![self.parse_line_string(*outer_ring)?];
        for inner_boundary in xml::child_elements(node, "innerboundaryis") {
            for inner_ring in xml::child_elements(inner_boundary, "linearring") {
                rings.push(self.parse_line_string(inner_ring)?);
            }
        }

        Ok(Polygon::new(rings))
    }

    fn parse_collection(
        &self,
        geometry_type: GeometryType,
        node: Node<'_, '_>,
        depth: usize,
    ) -> Result<Geometry, GeoFormatError> {
        let mut members = vec![];
        for child in node.children().filter(|child| child.is_element()) {
            match kml_geometry_type(child) {
                Some(member_type) => {
                    members.push(self.parse_geometry(member_type, child, depth + 1)?)
                }
                None => log::debug!(
                    "Skipping unknown KML element <{}>",
                    child.tag_name().name()
                ),
            }
        }

        Ok(if node.tag_name().name() == "multigeometry" {
            multi_geometry(members)
        } else {
            typed_collection(geometry_type, members)
        })
    }

    fn parse_coordinates(&self, node: Node<'_, '_>) -> Result<Vec<Coord>, GeoFormatError> {
        let Some(coordinates) = xml::child_elements(node, "coordinates").next() else {
            return Ok(vec![]);
        };

        let text = xml::text_content(coordinates);
        let text = COMMA_SPACING.replace_all(&text, ",");

        let mut coords = vec![];
        for tuple in text.split_whitespace() {
            let mut ordinates = tuple.split(',');
            let (Some(x), Some(y)) = (ordinates.next(), ordinates.next()) else {
                log::debug!("Skipping KML coordinate tuple with less than 2 ordinates: {tuple}");
                continue;
            };

            coords.push(Coord::new(self.parse_ordinate(x)?, self.parse_ordinate(y)?));
        }

        Ok(coords)
    }

    fn parse_ordinate(&self, value: &str) -> Result<f64, GeoFormatError> {
        value
            .parse()
            .map_err(|_| self.invalid(format!("invalid coordinate value: '{value}'")))
    }
}

/// A `MultiGeometry` whose members all share one simple kind becomes the matching multi-geometry, so that
/// multi-geometries survive the round trip through KML. Anything else becomes a collection.
fn multi_geometry(members: Vec<Geometry>) -> Geometry {
    let Some(first_type) = members.first().map(Geometry::geometry_type) else {
        return GeometryCollection::default().into();
    };

    match first_type.multi() {
        Some(multi_type) if members.iter().all(|m| m.geometry_type() == first_type) => {
            typed_collection(multi_type, members)
        }
        _ => GeometryCollection::new(members).into(),
    }
}

/// Builds a collection of the given kind, skipping members of other kinds.
fn typed_collection(geometry_type: GeometryType, members: Vec<Geometry>) -> Geometry {
    match geometry_type {
        GeometryType::MultiPoint => MultiPoint::new(points(members)).into(),
        GeometryType::MultiLineString => MultiLineString::new(line_strings(members)).into(),
        GeometryType::MultiPolygon => MultiPolygon::new(polygons(members)).into(),
        _ => GeometryCollection::new(members).into(),
    }
}

fn points(members: Vec<Geometry>) -> Vec<Point> {
    members
        .into_iter()
        .filter_map(|member| match member {
            Geometry::Point(point) => Some(point),
            other => {
                log::debug!("Skipping {} member of a multipoint", other.geom_type());
                None
            }
        })
        .collect()
}

fn line_strings(members: Vec<Geometry>) -> Vec<LineString> {
    members
        .into_iter()
        .filter_map(|member| match member {
            Geometry::LineString(line) => Some(line),
            other => {
                log::debug!("Skipping {} member of a multilinestring", other.geom_type());
                None
            }
        })
        .collect()
}

fn polygons(members: Vec<Geometry>) -> Vec<Polygon> {
    members
        .into_iter()
        .filter_map(|member| match member {
            Geometry::Polygon(polygon) => Some(polygon),
            other => {
                log::debug!("Skipping {} member of a multipolygon", other.geom_type());
                None
            }
        })
        .collect()
}

fn coordinates_text(points: &[Point]) -> String {
    points
        .iter()
        .filter_map(Point::coord)
        .map(|c| format!("{},{}", c.x, c.y))
        .collect::<Vec<_>>()
        .join(" ")
}

fn write_point(writer: &mut XmlWriter, point: &Point) -> Result<(), GeoFormatError> {
    writer.start("Point")?;
    if let Some(c) = point.coord() {
        writer.text_element("coordinates", &format!("{},{}", c.x, c.y))?;
    }
    writer.end("Point")
}

fn write_line_string(
    writer: &mut XmlWriter,
    line: &LineString,
    element: &str,
) -> Result<(), GeoFormatError> {
    writer.start(element)?;
    if !line.is_empty() {
        writer.text_element("coordinates", &coordinates_text(line.points()))?;
    }
    writer.end(element)
}

fn write_polygon(writer: &mut XmlWriter, polygon: &Polygon) -> Result<(), GeoFormatError> {
    writer.start("Polygon")?;
    if !polygon.is_empty() {
        writer.start("outerBoundaryIs")?;
        write_line_string(writer, polygon.exterior_ring(), "LinearRing")?;
        writer.end("outerBoundaryIs")?;

        for ring in polygon.interior_rings() {
            writer.start("innerBoundaryIs")?;
            write_line_string(writer, ring, "LinearRing")?;
            writer.end("innerBoundaryIs")?;
        }
    }
    writer.end("Polygon")
}
