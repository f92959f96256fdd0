//! Readers and writers of geospatial text formats for the [`geoxchange_types`] geometry model.
//!
//! Every format is implemented as an adapter, a type implementing the [`GeometryAdapter`] trait:
//!
//! * [`Kml`] reads and writes KML geometry elements,
//! * [`GeoRss`] reads and writes simple GeoRSS.
//!
//! Reading a document decodes all the geometries it contains and folds them into a single
//! [`Geometry`](geoxchange_types::Geometry) using [`reduce`](geoxchange_types::reduce): several points become a
//! `MultiPoint`, a point and a line string become a `GeometryCollection` and so on.
//!
//! ```
//! use geoxchange::{Format, GeometryAdapter, GeoRss, Kml};
//!
//! let geometry = Kml::new()
//!     .read("<Placemark><LineString><coordinates>10,20 11,21</coordinates></LineString></Placemark>")
//!     .unwrap();
//!
//! let georss = GeoRss::new().write(&geometry, Some("georss")).unwrap();
//! assert_eq!(georss, "<georss:line>20 10 21 11</georss:line>");
//!
//! assert_eq!(geoxchange::read(Format::GeoRss, &georss).unwrap(), geometry);
//! ```
//!
//! Adapters keep no state between calls and can be freely shared between threads.

pub mod adapter;
pub mod error;
pub mod georss;
pub mod kml;

mod format;
mod xml;

pub use adapter::{AdapterOptions, GeometryAdapter, DEFAULT_MAX_DEPTH};
pub use format::{detect_format, Format};
pub use georss::GeoRss;
pub use geoxchange_types;
pub use kml::Kml;

use error::GeoFormatError;
use geoxchange_types::Geometry;

/// Reads a geometry from the text in the given format using the default adapter options.
pub fn read(format: Format, text: &str) -> Result<Geometry, GeoFormatError> {
    format.adapter().read(text)
}

/// Reads a geometry from the text, detecting its format with [`detect_format`].
pub fn read_any(text: &str) -> Result<Geometry, GeoFormatError> {
    let format = detect_format(text)
        .ok_or_else(|| GeoFormatError::UnknownFormat("cannot detect format of the input".into()))?;
    read(format, text)
}

/// Writes a geometry in the given format using the default adapter options.
pub fn write(
    format: Format,
    geometry: &Geometry,
    namespace: Option<&str>,
) -> Result<String, GeoFormatError> {
    format.adapter().write(geometry, namespace)
}
