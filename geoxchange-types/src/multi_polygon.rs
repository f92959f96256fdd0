use serde::{Deserialize, Serialize};

use crate::Polygon;

/// A set of polygons.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MultiPolygon(Vec<Polygon>);

impl MultiPolygon {
    /// Creates a new multipolygon.
    pub fn new(polygons: Vec<Polygon>) -> Self {
        Self(polygons)
    }

    /// Member polygons.
    pub fn polygons(&self) -> &[Polygon] {
        &self.0
    }

    /// Whether the set has no non-empty polygons.
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(Polygon::is_empty)
    }

    /// Consumes the multipolygon returning its members.
    pub fn into_polygons(self) -> Vec<Polygon> {
        self.0
    }
}

impl From<Vec<Polygon>> for MultiPolygon {
    fn from(value: Vec<Polygon>) -> Self {
        Self(value)
    }
}

impl FromIterator<Polygon> for MultiPolygon {
    fn from_iter<T: IntoIterator<Item = Polygon>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
