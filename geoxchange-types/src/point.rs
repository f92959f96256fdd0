use serde::{Deserialize, Serialize};

/// A pair of ordinates in the model's fixed axis order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Coord {
    /// East-west ordinate (longitude).
    pub x: f64,
    /// North-south ordinate (latitude).
    pub y: f64,
}

impl Coord {
    /// Creates a new coordinate.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A point, possibly empty.
///
/// An empty point has no ordinates at all. It is a valid geometry and is not the same as the point `(0, 0)`:
///
/// ```
/// use geoxchange_types::Point;
///
/// assert!(Point::empty().is_empty());
/// assert_ne!(Point::empty(), Point::new(0.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    coord: Option<Coord>,
}

impl Point {
    /// Creates a point with the given ordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self {
            coord: Some(Coord::new(x, y)),
        }
    }

    /// Creates an empty point.
    pub const fn empty() -> Self {
        Self { coord: None }
    }

    /// Creates a point from latitude and longitude, i.e. with the ordinates in north-south, east-west order.
    pub const fn latlon(lat: f64, lon: f64) -> Self {
        Self::new(lon, lat)
    }

    /// East-west ordinate, `None` for an empty point.
    pub fn x(&self) -> Option<f64> {
        self.coord.map(|c| c.x)
    }

    /// North-south ordinate, `None` for an empty point.
    pub fn y(&self) -> Option<f64> {
        self.coord.map(|c| c.y)
    }

    /// Both ordinates, `None` for an empty point.
    pub fn coord(&self) -> Option<Coord> {
        self.coord
    }

    /// Whether the point has no ordinates.
    pub fn is_empty(&self) -> bool {
        self.coord.is_none()
    }
}

impl From<Coord> for Point {
    fn from(value: Coord) -> Self {
        Self { coord: Some(value) }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinates() {
        let point = Point::new(10.0, 20.0);
        assert_eq!(point.x(), Some(10.0));
        assert_eq!(point.y(), Some(20.0));
        assert!(!point.is_empty());

        assert_eq!(Point::latlon(20.0, 10.0), point);
    }

    #[test]
    fn empty_point_has_no_ordinates() {
        let point = Point::empty();
        assert_eq!(point.x(), None);
        assert_eq!(point.y(), None);
        assert_eq!(point.coord(), None);
        assert_eq!(Point::default(), point);
    }
}
