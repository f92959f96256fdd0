//! Contract shared by all format adapters.

use geoxchange_types::Geometry;
use serde::{Deserialize, Serialize};

use crate::error::GeoFormatError;
use crate::Format;

/// Default value of [`AdapterOptions::max_depth`].
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Reader and writer of one geometry format.
///
/// Adapters keep no state between calls: both methods are pure functions of their arguments and the adapter
/// options, so one adapter can be shared between threads.
pub trait GeometryAdapter: Send + Sync {
    /// Format this adapter reads and writes.
    fn format(&self) -> Format;

    /// Decodes a geometry from the text.
    ///
    /// Unknown elements are skipped. Fails with [`GeoFormatError::Format`] if the text is not a well-formed document
    /// of the format.
    fn read(&self, text: &str) -> Result<Geometry, GeoFormatError>;

    /// Encodes the geometry.
    ///
    /// If `namespace` is given, every emitted element name, including the names of the nested elements, is prefixed
    /// with `"<namespace>:"`. The namespace declaration itself is not emitted, it is the job of the caller to declare
    /// it in the enclosing document. A prefix that is not a valid XML name (without colons) fails with
    /// [`GeoFormatError::Write`].
    fn write(&self, geometry: &Geometry, namespace: Option<&str>)
        -> Result<String, GeoFormatError>;
}

/// Configuration of an adapter.
///
/// ```
/// use geoxchange::AdapterOptions;
///
/// let options = AdapterOptions::default().with_max_depth(8);
/// assert_eq!(options.max_depth(), 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdapterOptions {
    max_depth: usize,
}

impl Default for AdapterOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl AdapterOptions {
    /// Maximum nesting level of collections the adapter reads or writes before failing with
    /// [`GeoFormatError::RecursionLimit`].
    ///
    /// A simple geometry has level 1, a multi-geometry or a collection of simple geometries level 2 and so on.
    ///
    /// Defaults to [`DEFAULT_MAX_DEPTH`].
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Sets the maximum nesting level.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub(crate) fn check_depth(&self, depth: usize) -> Result<(), GeoFormatError> {
        if depth > self.max_depth {
            Err(GeoFormatError::RecursionLimit {
                limit: self.max_depth,
            })
        } else {
            Ok(())
        }
    }
}
