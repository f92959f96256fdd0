//! Conversions between the geometry model and [`geo_types`] geometries.

use crate::error::GeoTypesError;
use crate::{
    Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, Point,
    Polygon,
};

impl From<geo_types::Coord<f64>> for Point {
    fn from(value: geo_types::Coord<f64>) -> Self {
        Point::new(value.x, value.y)
    }
}

impl From<geo_types::LineString<f64>> for LineString {
    fn from(value: geo_types::LineString<f64>) -> Self {
        value.0.into_iter().map(Point::from).collect()
    }
}

impl From<geo_types::Polygon<f64>> for Polygon {
    fn from(value: geo_types::Polygon<f64>) -> Self {
        let (exterior, interiors) = value.into_inner();
        if exterior.0.is_empty() && interiors.is_empty() {
            return Polygon::empty();
        }

        Polygon::with_holes(
            exterior.into(),
            interiors.into_iter().map(LineString::from),
        )
    }
}

impl From<geo_types::Geometry<f64>> for Geometry {
    fn from(value: geo_types::Geometry<f64>) -> Self {
        match value {
            geo_types::Geometry::Point(p) => Point::from(p.0).into(),
            geo_types::Geometry::Line(line) => {
                LineString::new(vec![line.start.into(), line.end.into()]).into()
            }
            geo_types::Geometry::LineString(line) => LineString::from(line).into(),
            geo_types::Geometry::Polygon(polygon) => Polygon::from(polygon).into(),
            geo_types::Geometry::MultiPoint(mp) => mp
                .0
                .into_iter()
                .map(|p| Point::from(p.0))
                .collect::<MultiPoint>()
                .into(),
            geo_types::Geometry::MultiLineString(mls) => mls
                .0
                .into_iter()
                .map(LineString::from)
                .collect::<MultiLineString>()
                .into(),
            geo_types::Geometry::MultiPolygon(mp) => mp
                .0
                .into_iter()
                .map(Polygon::from)
                .collect::<MultiPolygon>()
                .into(),
            geo_types::Geometry::GeometryCollection(collection) => collection
                .0
                .into_iter()
                .map(Geometry::from)
                .collect::<GeometryCollection>()
                .into(),
            geo_types::Geometry::Rect(rect) => Polygon::from(rect.to_polygon()).into(),
            geo_types::Geometry::Triangle(triangle) => Polygon::from(triangle.to_polygon()).into(),
        }
    }
}

fn convert_coord(point: &Point) -> Result<geo_types::Coord<f64>, GeoTypesError> {
    point
        .coord()
        .map(|c| geo_types::coord! { x: c.x, y: c.y })
        .ok_or_else(|| GeoTypesError::Conversion("empty point cannot be converted".into()))
}

fn convert_line_string(line: &LineString) -> Result<geo_types::LineString<f64>, GeoTypesError> {
    Ok(geo_types::LineString::new(
        line.points()
            .iter()
            .map(convert_coord)
            .collect::<Result<Vec<_>, _>>()?,
    ))
}

fn convert_polygon(polygon: &Polygon) -> Result<geo_types::Polygon<f64>, GeoTypesError> {
    Ok(geo_types::Polygon::new(
        convert_line_string(polygon.exterior_ring())?,
        polygon
            .interior_rings()
            .iter()
            .map(convert_line_string)
            .collect::<Result<Vec<_>, _>>()?,
    ))
}

impl TryFrom<&Geometry> for geo_types::Geometry<f64> {
    type Error = GeoTypesError;

    fn try_from(value: &Geometry) -> Result<Self, Self::Error> {
        Ok(match value {
            Geometry::Point(p) => geo_types::Point(convert_coord(p)?).into(),
            Geometry::LineString(line) => convert_line_string(line)?.into(),
            Geometry::Polygon(polygon) => convert_polygon(polygon)?.into(),
            Geometry::MultiPoint(mp) => geo_types::MultiPoint(
                mp.points()
                    .iter()
                    .map(|p| convert_coord(p).map(geo_types::Point))
                    .collect::<Result<Vec<_>, _>>()?,
            )
            .into(),
            Geometry::MultiLineString(mls) => geo_types::MultiLineString(
                mls.line_strings()
                    .iter()
                    .map(convert_line_string)
                    .collect::<Result<Vec<_>, _>>()?,
            )
            .into(),
            Geometry::MultiPolygon(mp) => geo_types::MultiPolygon(
                mp.polygons()
                    .iter()
                    .map(convert_polygon)
                    .collect::<Result<Vec<_>, _>>()?,
            )
            .into(),
            Geometry::GeometryCollection(collection) => {
                geo_types::Geometry::GeometryCollection(geo_types::GeometryCollection(
                    collection
                        .geometries()
                        .iter()
                        .map(geo_types::Geometry::try_from)
                        .collect::<Result<Vec<_>, _>>()?,
                ))
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn point_from_geo_types() {
        let geometry = Geometry::from(geo_types::Geometry::Point(geo_types::point!(x: 1.0, y: 2.0)));
        assert_eq!(geometry, Geometry::Point(Point::new(1.0, 2.0)));
    }

    #[test]
    fn rect_becomes_polygon() {
        let rect = geo_types::Rect::new(
            geo_types::coord! { x: 0.0, y: 0.0 },
            geo_types::coord! { x: 1.0, y: 1.0 },
        );
        let geometry = Geometry::from(geo_types::Geometry::Rect(rect));
        let Geometry::Polygon(polygon) = geometry else {
            panic!("invalid geometry type");
        };
        assert_eq!(polygon.exterior_ring().num_points(), 5);
        assert!(polygon.exterior_ring().is_closed());
    }

    #[test]
    fn empty_point_cannot_be_converted() {
        assert_matches!(
            geo_types::Geometry::try_from(&Geometry::Point(Point::empty())),
            Err(GeoTypesError::Conversion(_))
        );
    }

    #[test]
    fn collection_to_geo_types() {
        let geometry = Geometry::from(GeometryCollection::new(vec![
            Point::new(1.0, 2.0).into(),
            LineString::new(vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)]).into(),
        ]));

        let converted = geo_types::Geometry::try_from(&geometry).expect("conversion failed");
        let geo_types::Geometry::GeometryCollection(collection) = &converted else {
            panic!("invalid geometry type");
        };
        assert_eq!(collection.0.len(), 2);
        assert_eq!(Geometry::from(converted), geometry);
    }

    #[test]
    fn nested_collection_to_geo_types() {
        let geometry = Geometry::from(GeometryCollection::new(vec![GeometryCollection::new(
            vec![Point::new(1.0, 2.0).into()],
        )
        .into()]));

        let converted = geo_types::Geometry::try_from(&geometry).expect("conversion failed");
        assert_matches!(
            &converted,
            geo_types::Geometry::GeometryCollection(outer)
                if matches!(outer.0.as_slice(), [geo_types::Geometry::GeometryCollection(_)])
        );
        assert_eq!(Geometry::from(converted), geometry);
    }
}
