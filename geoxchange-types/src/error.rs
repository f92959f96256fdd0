//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeoTypesError {
    /// An operation that needs at least one geometry received none.
    #[error("empty list of geometries")]
    EmptyInput,
    /// Geometry conversion error.
    #[error("invalid input geometry: {0}")]
    Conversion(String),
}
