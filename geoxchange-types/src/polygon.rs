use serde::{Deserialize, Serialize};

use crate::LineString;

static EMPTY_RING: LineString = LineString::new(Vec::new());

/// Polygon geometry.
///
/// A polygon is a list of rings: the ring at index 0 is the exterior ring, the rest are interior rings (holes).
/// A polygon without rings is an empty polygon.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    rings: Vec<LineString>,
}

impl Polygon {
    /// Creates a new polygon from the list of rings, the first of which is the exterior one.
    pub fn new(rings: Vec<LineString>) -> Self {
        Self { rings }
    }

    /// Creates an empty polygon.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a new polygon from the exterior ring and a set of holes.
    pub fn with_holes(exterior: LineString, holes: impl IntoIterator<Item = LineString>) -> Self {
        let mut rings = vec![exterior];
        rings.extend(holes);
        Self { rings }
    }

    /// All rings, exterior first.
    pub fn rings(&self) -> &[LineString] {
        &self.rings
    }

    /// Exterior ring. An empty polygon returns an empty line string.
    pub fn exterior_ring(&self) -> &LineString {
        self.rings.first().unwrap_or(&EMPTY_RING)
    }

    /// Interior rings (holes).
    pub fn interior_rings(&self) -> &[LineString] {
        self.rings.get(1..).unwrap_or_default()
    }

    /// Number of holes.
    pub fn num_interior_rings(&self) -> usize {
        self.interior_rings().len()
    }

    /// Hole at index `n` (0-based).
    pub fn interior_ring_n(&self, n: usize) -> Option<&LineString> {
        self.interior_rings().get(n)
    }

    /// Whether the polygon has no rings.
    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }

    /// Consumes the polygon returning its rings.
    pub fn into_rings(self) -> Vec<LineString> {
        self.rings
    }
}

impl From<LineString> for Polygon {
    fn from(value: LineString) -> Self {
        Self { rings: vec![value] }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Point;

    fn square(size: f64) -> LineString {
        LineString::new(vec![
            Point::new(0.0, 0.0),
            Point::new(size, 0.0),
            Point::new(size, size),
            Point::new(0.0, size),
            Point::new(0.0, 0.0),
        ])
    }

    #[test]
    fn rings() {
        let polygon = Polygon::with_holes(square(10.0), [square(1.0), square(2.0)]);
        assert_eq!(polygon.exterior_ring(), &square(10.0));
        assert_eq!(polygon.num_interior_rings(), 2);
        assert_eq!(polygon.interior_ring_n(1), Some(&square(2.0)));
        assert_eq!(polygon.interior_ring_n(2), None);
        assert_eq!(polygon.rings().len(), 3);
    }

    #[test]
    fn empty_polygon() {
        let polygon = Polygon::empty();
        assert!(polygon.is_empty());
        assert!(polygon.exterior_ring().is_empty());
        assert_eq!(polygon.exterior_ring().num_points(), 0);
        assert_eq!(polygon.num_interior_rings(), 0);
    }

    #[test]
    fn polygon_without_holes() {
        let polygon = Polygon::from(square(1.0));
        assert!(!polygon.is_empty());
        assert!(polygon.interior_rings().is_empty());
    }
}
