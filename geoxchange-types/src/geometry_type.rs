//! See documentation for [`GeometryType`] enum.
use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::error::GeoTypesError;

/// Kind of a [`Geometry`](crate::Geometry).
///
/// Every variant of the geometry model has exactly one kind. The kind has two names:
/// * canonical name ([`GeometryType::name`]), e.g. `LineString`, used for display purposes and by the formats that
///   emit mixed-case element names;
/// * node name ([`GeometryType::node_name`]), e.g. `linestring`, used by XML based adapters to dispatch lowercased
///   element names to the parse routine of the kind. See [`geometry_list`].
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Eq, Ord, Hash, Deserialize, Serialize)]
pub enum GeometryType {
    /// Single point.
    Point,
    /// Sequence of points.
    LineString,
    /// Polygon with an exterior ring and zero or more holes.
    Polygon,
    /// Set of points.
    MultiPoint,
    /// Set of line strings.
    MultiLineString,
    /// Set of polygons.
    MultiPolygon,
    /// Heterogeneous set of geometries.
    GeometryCollection,
}

lazy_static! {
    static ref GEOMETRY_LIST: HashMap<&'static str, GeometryType> = GeometryType::ALL
        .iter()
        .map(|geometry_type| (geometry_type.node_name(), *geometry_type))
        .collect();
}

/// Returns the process wide mapping from lowercase node names to geometry kinds.
///
/// The table is built once and never modified afterwards, so it can be read from any number of threads.
/// Format specific aliases (like KML `multigeometry`) are not part of this table: adapters resolve them before
/// looking a name up here.
pub fn geometry_list() -> &'static HashMap<&'static str, GeometryType> {
    &GEOMETRY_LIST
}

impl GeometryType {
    /// All geometry kinds, simple kinds first.
    pub const ALL: [GeometryType; 7] = [
        GeometryType::Point,
        GeometryType::LineString,
        GeometryType::Polygon,
        GeometryType::MultiPoint,
        GeometryType::MultiLineString,
        GeometryType::MultiPolygon,
        GeometryType::GeometryCollection,
    ];

    /// Canonical mixed-case name of the kind.
    pub fn name(&self) -> &'static str {
        match self {
            GeometryType::Point => "Point",
            GeometryType::LineString => "LineString",
            GeometryType::Polygon => "Polygon",
            GeometryType::MultiPoint => "MultiPoint",
            GeometryType::MultiLineString => "MultiLineString",
            GeometryType::MultiPolygon => "MultiPolygon",
            GeometryType::GeometryCollection => "GeometryCollection",
        }
    }

    /// Lowercase name used for node name dispatch.
    pub fn node_name(&self) -> &'static str {
        match self {
            GeometryType::Point => "point",
            GeometryType::LineString => "linestring",
            GeometryType::Polygon => "polygon",
            GeometryType::MultiPoint => "multipoint",
            GeometryType::MultiLineString => "multilinestring",
            GeometryType::MultiPolygon => "multipolygon",
            GeometryType::GeometryCollection => "geometrycollection",
        }
    }

    /// Looks up a lowercase node name in the [`geometry_list`].
    pub fn from_node_name(node_name: &str) -> Option<Self> {
        geometry_list().get(node_name).copied()
    }

    /// Returns true for the kinds that contain other geometries.
    pub fn is_multi(&self) -> bool {
        !matches!(
            self,
            GeometryType::Point | GeometryType::LineString | GeometryType::Polygon
        )
    }

    /// Returns the homogeneous multi-kind for a simple kind, e.g. `MultiPoint` for `Point`.
    ///
    /// Returns `None` for kinds that are already multi-kinds.
    pub fn multi(&self) -> Option<Self> {
        match self {
            GeometryType::Point => Some(GeometryType::MultiPoint),
            GeometryType::LineString => Some(GeometryType::MultiLineString),
            GeometryType::Polygon => Some(GeometryType::MultiPolygon),
            _ => None,
        }
    }
}

impl Display for GeometryType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GeometryType {
    type Err = GeoTypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_node_name(&s.to_lowercase())
            .ok_or_else(|| GeoTypesError::Conversion(format!("unknown geometry type: {s}")))
    }
}
