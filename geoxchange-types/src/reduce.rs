use crate::error::GeoTypesError;
use crate::geometry_type::GeometryType;
use crate::{Geometry, GeometryCollection, MultiLineString, MultiPoint, MultiPolygon};

/// Folds a list of geometries into the most specific single geometry.
///
/// * A single geometry is returned as is.
/// * Several geometries of the same simple kind (point, line string or polygon) are wrapped into the matching
///   multi-geometry.
/// * Anything else is wrapped into a [`GeometryCollection`]. Member order is preserved, and nested
///   multi-geometries and collections are kept as members rather than flattened.
///
/// Returns [`GeoTypesError::EmptyInput`] if the list is empty.
///
/// ```
/// use geoxchange_types::{reduce, Geometry, MultiPoint, Point};
///
/// let reduced = reduce(vec![Point::new(1.0, 2.0).into(), Point::new(3.0, 4.0).into()]).unwrap();
/// assert_eq!(
///     reduced,
///     Geometry::MultiPoint(MultiPoint::new(vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)]))
/// );
/// ```
pub fn reduce(mut geometries: Vec<Geometry>) -> Result<Geometry, GeoTypesError> {
    if geometries.len() <= 1 {
        return geometries.pop().ok_or(GeoTypesError::EmptyInput);
    }

    let first_type = geometries[0].geometry_type();
    let is_homogeneous = geometries
        .iter()
        .all(|geometry| geometry.geometry_type() == first_type);

    let multi_type = match first_type.multi() {
        Some(multi_type) if is_homogeneous => multi_type,
        _ => return Ok(GeometryCollection::new(geometries).into()),
    };

    Ok(match multi_type {
        GeometryType::MultiPoint => geometries
            .into_iter()
            .filter_map(|geometry| match geometry {
                Geometry::Point(v) => Some(v),
                _ => None,
            })
            .collect::<MultiPoint>()
            .into(),
        GeometryType::MultiLineString => geometries
            .into_iter()
            .filter_map(|geometry| match geometry {
                Geometry::LineString(v) => Some(v),
                _ => None,
            })
            .collect::<MultiLineString>()
            .into(),
        GeometryType::MultiPolygon => geometries
            .into_iter()
            .filter_map(|geometry| match geometry {
                Geometry::Polygon(v) => Some(v),
                _ => None,
            })
            .collect::<MultiPolygon>()
            .into(),
        _ => GeometryCollection::new(geometries).into(),
    })
}
