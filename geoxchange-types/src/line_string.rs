use serde::{Deserialize, Serialize};

use crate::Point;

/// Ordered sequence of points.
///
/// A line string used as a boundary of a [`Polygon`](crate::Polygon) is called a ring. Rings are expected (but not
/// required) to repeat the first point at the end.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineString {
    points: Vec<Point>,
}

impl std::ops::Deref for LineString {
    type Target = [Point];

    fn deref(&self) -> &Self::Target {
        &self.points
    }
}

impl LineString {
    /// Creates a new line string.
    pub const fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Points of the line string in their original order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of points.
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    /// Point at index `n` (0-based).
    pub fn point_n(&self, n: usize) -> Option<&Point> {
        self.points.get(n)
    }

    /// First point of the line string.
    pub fn start_point(&self) -> Option<&Point> {
        self.points.first()
    }

    /// Last point of the line string.
    pub fn end_point(&self) -> Option<&Point> {
        self.points.last()
    }

    /// Whether the line string is non-empty and its first and last points are the same.
    pub fn is_closed(&self) -> bool {
        match (self.start_point(), self.end_point()) {
            (Some(start), Some(end)) => !start.is_empty() && start == end,
            _ => false,
        }
    }

    /// Whether the line string has no non-empty points.
    pub fn is_empty(&self) -> bool {
        self.points.iter().all(Point::is_empty)
    }

    /// Consumes the line string returning its points.
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

impl From<Vec<Point>> for LineString {
    fn from(value: Vec<Point>) -> Self {
        Self::new(value)
    }
}

impl FromIterator<Point> for LineString {
    fn from_iter<T: IntoIterator<Item = Point>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
