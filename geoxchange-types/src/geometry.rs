use serde::{Deserialize, Serialize};

use crate::geometry_type::GeometryType;
use crate::{
    GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon,
};

/// Canonical geometry: one of the seven geometry kinds every format adapter converges on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Geometry {
    /// Point geometry.
    Point(Point),
    /// Line string geometry.
    LineString(LineString),
    /// Polygon geometry.
    Polygon(Polygon),
    /// Set of points.
    MultiPoint(MultiPoint),
    /// Set of line strings.
    MultiLineString(MultiLineString),
    /// Set of polygons.
    MultiPolygon(MultiPolygon),
    /// Heterogeneous set of geometries.
    GeometryCollection(GeometryCollection),
}

impl Geometry {
    /// Kind of the geometry.
    pub fn geometry_type(&self) -> GeometryType {
        match self {
            Geometry::Point(_) => GeometryType::Point,
            Geometry::LineString(_) => GeometryType::LineString,
            Geometry::Polygon(_) => GeometryType::Polygon,
            Geometry::MultiPoint(_) => GeometryType::MultiPoint,
            Geometry::MultiLineString(_) => GeometryType::MultiLineString,
            Geometry::MultiPolygon(_) => GeometryType::MultiPolygon,
            Geometry::GeometryCollection(_) => GeometryType::GeometryCollection,
        }
    }

    /// Canonical name of the geometry kind, e.g. `MultiPolygon`.
    pub fn geom_type(&self) -> &'static str {
        self.geometry_type().name()
    }

    /// Whether the geometry is empty.
    ///
    /// Points are empty when they have no ordinates, polygons when they have no rings, all other kinds when none of
    /// their components is non-empty.
    pub fn is_empty(&self) -> bool {
        match self {
            Geometry::Point(v) => v.is_empty(),
            Geometry::LineString(v) => v.is_empty(),
            Geometry::Polygon(v) => v.is_empty(),
            Geometry::MultiPoint(v) => v.is_empty(),
            Geometry::MultiLineString(v) => v.is_empty(),
            Geometry::MultiPolygon(v) => v.is_empty(),
            Geometry::GeometryCollection(v) => v.is_empty(),
        }
    }

    /// Number of direct components, see [`Geometry::components`].
    pub fn num_geometries(&self) -> usize {
        match self {
            Geometry::Point(_) => 0,
            Geometry::LineString(v) => v.num_points(),
            Geometry::Polygon(v) => v.rings().len(),
            Geometry::MultiPoint(v) => v.points().len(),
            Geometry::MultiLineString(v) => v.line_strings().len(),
            Geometry::MultiPolygon(v) => v.polygons().len(),
            Geometry::GeometryCollection(v) => v.geometries().len(),
        }
    }

    /// Direct components of the geometry as separate geometries:
    /// * nothing for a point,
    /// * points of a line string,
    /// * rings of a polygon (as line strings),
    /// * members of multi-geometries and collections.
    ///
    /// The components are cloned. To iterate over the components without copying, match on the variant and use
    /// its accessors.
    pub fn components(&self) -> Vec<Geometry> {
        match self {
            Geometry::Point(_) => vec![],
            Geometry::LineString(v) => v.points().iter().copied().map(Geometry::from).collect(),
            Geometry::Polygon(v) => v.rings().iter().cloned().map(Geometry::from).collect(),
            Geometry::MultiPoint(v) => v.points().iter().copied().map(Geometry::from).collect(),
            Geometry::MultiLineString(v) => {
                v.line_strings().iter().cloned().map(Geometry::from).collect()
            }
            Geometry::MultiPolygon(v) => v.polygons().iter().cloned().map(Geometry::from).collect(),
            Geometry::GeometryCollection(v) => v.geometries().to_vec(),
        }
    }

    /// Component at index `n` (0-based), see [`Geometry::components`].
    pub fn geometry_n(&self, n: usize) -> Option<Geometry> {
        match self {
            Geometry::Point(_) => None,
            Geometry::LineString(v) => v.point_n(n).copied().map(Geometry::from),
            Geometry::Polygon(v) => v.rings().get(n).cloned().map(Geometry::from),
            Geometry::MultiPoint(v) => v.points().get(n).copied().map(Geometry::from),
            Geometry::MultiLineString(v) => v.line_strings().get(n).cloned().map(Geometry::from),
            Geometry::MultiPolygon(v) => v.polygons().get(n).cloned().map(Geometry::from),
            Geometry::GeometryCollection(v) => v.geometries().get(n).cloned(),
        }
    }

    /// Returns the point if the geometry is one.
    pub fn as_point(&self) -> Option<&Point> {
        match self {
            Geometry::Point(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the line string if the geometry is one.
    pub fn as_line_string(&self) -> Option<&LineString> {
        match self {
            Geometry::LineString(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the polygon if the geometry is one.
    pub fn as_polygon(&self) -> Option<&Polygon> {
        match self {
            Geometry::Polygon(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the collection if the geometry is one.
    pub fn as_collection(&self) -> Option<&GeometryCollection> {
        match self {
            Geometry::GeometryCollection(v) => Some(v),
            _ => None,
        }
    }
}

impl From<Point> for Geometry {
    fn from(value: Point) -> Self {
        Self::Point(value)
    }
}

impl From<LineString> for Geometry {
    fn from(value: LineString) -> Self {
        Self::LineString(value)
    }
}

impl From<Polygon> for Geometry {
    fn from(value: Polygon) -> Self {
        Self::Polygon(value)
    }
}

impl From<MultiPoint> for Geometry {
    fn from(value: MultiPoint) -> Self {
        Self::MultiPoint(value)
    }
}

impl From<MultiLineString> for Geometry {
    fn from(value: MultiLineString) -> Self {
        Self::MultiLineString(value)
    }
}

impl From<MultiPolygon> for Geometry {
    fn from(value: MultiPolygon) -> Self {
        Self::MultiPolygon(value)
    }
}

impl From<GeometryCollection> for Geometry {
    fn from(value: GeometryCollection) -> Self {
        Self::GeometryCollection(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line() -> LineString {
        LineString::new(vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)])
    }

    #[test]
    fn type_names() {
        assert_eq!(Geometry::from(Point::empty()).geom_type(), "Point");
        assert_eq!(Geometry::from(line()).geom_type(), "LineString");
        assert_eq!(
            Geometry::from(GeometryCollection::default()).geometry_type(),
            GeometryType::GeometryCollection
        );
    }

    #[test]
    fn point_has_no_components() {
        let point = Geometry::from(Point::new(1.0, 2.0));
        assert_eq!(point.num_geometries(), 0);
        assert!(point.components().is_empty());
        assert_eq!(point.geometry_n(0), None);
    }

    #[test]
    fn line_string_components_are_points() {
        let geometry = Geometry::from(line());
        assert_eq!(geometry.num_geometries(), 2);
        assert_eq!(
            geometry.components(),
            vec![
                Geometry::Point(Point::new(1.0, 2.0)),
                Geometry::Point(Point::new(3.0, 4.0))
            ]
        );
        assert_eq!(
            geometry.geometry_n(1),
            Some(Geometry::Point(Point::new(3.0, 4.0)))
        );
    }

    #[test]
    fn polygon_components_are_rings() {
        let geometry = Geometry::from(Polygon::with_holes(line(), [line()]));
        assert_eq!(geometry.num_geometries(), 2);
        assert_eq!(geometry.geometry_n(0), Some(Geometry::LineString(line())));
    }

    #[test]
    fn collection_emptiness() {
        assert!(Geometry::from(GeometryCollection::default()).is_empty());

        let only_empty = GeometryCollection::new(vec![
            Point::empty().into(),
            Polygon::empty().into(),
        ]);
        assert!(Geometry::from(only_empty).is_empty());

        let with_point =
            GeometryCollection::new(vec![Point::empty().into(), Point::new(0.0, 0.0).into()]);
        assert!(!Geometry::from(with_point).is_empty());
    }

    #[test]
    fn nested_collections_are_kept() {
        let nested = GeometryCollection::new(vec![Point::new(1.0, 1.0).into()]);
        let geometry = Geometry::from(GeometryCollection::new(vec![
            nested.clone().into(),
            line().into(),
        ]));

        assert_eq!(geometry.num_geometries(), 2);
        assert_eq!(
            geometry.geometry_n(0),
            Some(Geometry::GeometryCollection(nested))
        );
    }
}
