use serde::{Deserialize, Serialize};

use crate::Geometry;

/// Heterogeneous set of geometries.
///
/// Members are kept in their original order. Nested collections are allowed and are never flattened.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeometryCollection(Vec<Geometry>);

impl GeometryCollection {
    /// Creates a new collection.
    pub fn new(geometries: Vec<Geometry>) -> Self {
        Self(geometries)
    }

    /// Member geometries.
    pub fn geometries(&self) -> &[Geometry] {
        &self.0
    }

    /// Whether the collection has no non-empty members.
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(Geometry::is_empty)
    }

    /// Consumes the collection returning its members.
    pub fn into_geometries(self) -> Vec<Geometry> {
        self.0
    }
}

impl From<Vec<Geometry>> for GeometryCollection {
    fn from(value: Vec<Geometry>) -> Self {
        Self(value)
    }
}

impl FromIterator<Geometry> for GeometryCollection {
    fn from_iter<T: IntoIterator<Item = Geometry>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
