use serde::{Deserialize, Serialize};

use crate::Point;

/// A set of points.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MultiPoint(Vec<Point>);

impl MultiPoint {
    /// Creates a new multipoint.
    pub fn new(points: Vec<Point>) -> Self {
        Self(points)
    }

    /// Member points.
    pub fn points(&self) -> &[Point] {
        &self.0
    }

    /// Whether the set has no non-empty points.
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(Point::is_empty)
    }

    /// Consumes the multipoint returning its members.
    pub fn into_points(self) -> Vec<Point> {
        self.0
    }
}

impl From<Vec<Point>> for MultiPoint {
    fn from(value: Vec<Point>) -> Self {
        Self(value)
    }
}

impl FromIterator<Point> for MultiPoint {
    fn from_iter<T: IntoIterator<Item = Point>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
