//! Canonical geometry model shared by all `geoxchange` format adapters.
//!
//! Every adapter decodes into, and encodes from, the closed [`Geometry`] enum. The model has no
//! algorithms, only structure and structural accessors. Coordinates are always
//! stored as `x` = east-west ordinate (longitude), `y` = north-south ordinate (latitude), whatever the
//! axis order of a particular wire format.
//!
//! Besides the model the crate owns the [`geometry_type`] registry used for name based dispatch and
//! the [`reduce`] algorithm that folds a list of decoded geometries into a single canonical value.

pub mod error;
pub mod geometry_type;

mod collection;
mod geometry;
mod line_string;
mod multi_line_string;
mod multi_point;
mod multi_polygon;
mod point;
mod polygon;
mod reduce;

#[cfg(feature = "geo-types")]
mod geo_types;

pub use collection::GeometryCollection;
pub use geometry::Geometry;
pub use geometry_type::{geometry_list, GeometryType};
pub use line_string::LineString;
pub use multi_line_string::MultiLineString;
pub use multi_point::MultiPoint;
pub use multi_polygon::MultiPolygon;
pub use point::{Coord, Point};
pub use polygon::Polygon;
pub use reduce::reduce;
