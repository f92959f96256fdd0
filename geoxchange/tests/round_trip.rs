use assert_matches::assert_matches;
use geoxchange::error::GeoFormatError;
use geoxchange::geoxchange_types::{
    Geometry, GeometryCollection, GeometryType, LineString, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon,
};
use geoxchange::{detect_format, read_any, Format, GeoRss, GeometryAdapter, Kml};

const PLACEMARKS: &str = include_str!("../test-data/placemarks.kml");
const FEED: &str = include_str!("../test-data/feed.atom");

fn ring(coords: &[(f64, f64)]) -> LineString {
    coords.iter().copied().map(Point::from).collect()
}

fn square(x: f64, y: f64, size: f64) -> LineString {
    ring(&[
        (x, y),
        (x + size, y),
        (x + size, y + size),
        (x, y + size),
        (x, y),
    ])
}

fn kml_round_trip(geometry: &Geometry) -> Geometry {
    let kml = Kml::new();
    let text = kml.write(geometry, None).expect("failed to write KML");
    kml.read(&text).expect("failed to read KML")
}

fn georss_round_trip(geometry: &Geometry) -> Geometry {
    let georss = GeoRss::new();
    let text = georss.write(geometry, None).expect("failed to write GeoRSS");
    georss.read(&text).expect("failed to read GeoRSS")
}

#[test]
fn kml_document() {
    assert_eq!(detect_format(PLACEMARKS), Some(Format::Kml));

    let Geometry::GeometryCollection(collection) = Kml::new().read(PLACEMARKS).expect("read failed")
    else {
        panic!("invalid geometry type");
    };

    // The track placemark has no supported geometry and is skipped.
    assert_eq!(collection.geometries().len(), 3);

    let point = collection.geometries()[0].as_point().expect("not a point");
    assert_eq!(*point, Point::new(-122.0822035425683, 37.42228990140251));

    let line = collection.geometries()[1]
        .as_line_string()
        .expect("not a line string");
    assert_eq!(line.num_points(), 3);
    assert_eq!(line.start_point(), Some(&Point::new(-122.0845, 37.4220)));
    assert_eq!(line.end_point(), Some(&Point::new(-122.0861, 37.4230)));

    let polygon = collection.geometries()[2]
        .as_polygon()
        .expect("not a polygon");
    assert_eq!(polygon.exterior_ring().num_points(), 5);
    assert!(polygon.exterior_ring().is_closed());
    assert_eq!(polygon.num_interior_rings(), 1);
    assert_eq!(polygon.interior_rings()[0].num_points(), 4);
}

#[test]
fn georss_feed() {
    assert_eq!(detect_format(FEED), Some(Format::GeoRss));

    let Geometry::GeometryCollection(collection) = GeoRss::new().read(FEED).expect("read failed")
    else {
        panic!("invalid geometry type");
    };

    // The point inside the CDATA summary is not a geometry.
    let types: Vec<_> = collection
        .geometries()
        .iter()
        .map(Geometry::geometry_type)
        .collect();
    assert_eq!(
        types,
        [
            GeometryType::Point,
            GeometryType::LineString,
            GeometryType::Polygon,
            GeometryType::Point,
        ]
    );

    assert_eq!(
        collection.geometries()[0],
        Geometry::Point(Point::latlon(45.256, -71.92))
    );
    assert_eq!(
        collection.geometries()[3],
        Geometry::Point(Point::latlon(42.943, -71.032))
    );
}

#[test]
fn read_any_detects_format() {
    assert_eq!(
        read_any(PLACEMARKS).expect("read failed"),
        Kml::new().read(PLACEMARKS).expect("read failed")
    );
    assert_eq!(
        read_any(FEED).expect("read failed"),
        GeoRss::new().read(FEED).expect("read failed")
    );
    assert_matches!(
        read_any("<html><body/></html>"),
        Err(GeoFormatError::UnknownFormat(_))
    );
}

#[test]
fn kml_round_trip_preserves_geometries() {
    let polygon = Polygon::with_holes(square(0.0, 0.0, 10.0), [square(1.0, 1.0, 2.0)]);
    let geometries: Vec<Geometry> = vec![
        Point::new(1.5, -2.25).into(),
        Point::empty().into(),
        ring(&[(1.0, 2.0), (3.0, 4.0), (5.0, 6.0)]).into(),
        polygon.clone().into(),
        Polygon::empty().into(),
        MultiPoint::new(vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)]).into(),
        MultiLineString::new(vec![ring(&[(1.0, 2.0), (3.0, 4.0)])]).into(),
        MultiPolygon::new(vec![polygon.clone(), Polygon::from(square(20.0, 20.0, 1.0))]).into(),
        GeometryCollection::new(vec![
            Point::new(1.0, 2.0).into(),
            polygon.into(),
            GeometryCollection::new(vec![Point::new(3.0, 4.0).into()]).into(),
        ])
        .into(),
    ];

    for geometry in &geometries {
        let restored = kml_round_trip(geometry);
        // A nested single-kind collection narrows to a multi-geometry on the way back.
        if let Geometry::GeometryCollection(collection) = geometry {
            let Geometry::GeometryCollection(restored) = &restored else {
                panic!("invalid geometry type");
            };
            assert_eq!(restored.geometries()[..2], collection.geometries()[..2]);
            assert_eq!(
                restored.geometries()[2],
                Geometry::MultiPoint(MultiPoint::new(vec![Point::new(3.0, 4.0)]))
            );
        } else {
            assert_eq!(&restored, geometry);
        }
    }
}

#[test]
fn georss_round_trip_of_simple_geometries() {
    let geometries: Vec<Geometry> = vec![
        Point::new(1.5, -2.25).into(),
        ring(&[(1.0, 2.0), (3.0, 4.0), (5.0, 6.0)]).into(),
        Polygon::from(square(0.0, 0.0, 10.0)).into(),
        MultiPoint::new(vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)]).into(),
        MultiPolygon::new(vec![
            Polygon::from(square(0.0, 0.0, 1.0)),
            Polygon::from(square(5.0, 5.0, 1.0)),
        ])
        .into(),
    ];

    for geometry in &geometries {
        assert_eq!(&georss_round_trip(geometry), geometry);
    }
}

#[test]
fn georss_polygon_loses_holes() {
    let exterior = square(0.0, 0.0, 10.0);
    let polygon = Polygon::with_holes(exterior.clone(), [square(1.0, 1.0, 2.0)]);

    assert_eq!(
        georss_round_trip(&polygon.into()),
        Geometry::Polygon(Polygon::from(exterior))
    );
}

#[test]
fn coordinate_order_differs_between_formats() {
    let point = Geometry::Point(Point::new(10.0, 20.0));

    assert_eq!(
        Kml::new().write(&point, None).expect("write failed"),
        "<Point><coordinates>10,20</coordinates></Point>"
    );
    assert_eq!(
        GeoRss::new().write(&point, None).expect("write failed"),
        "<point>20 10</point>"
    );
}

#[test]
fn conversion_between_formats() {
    let kml = Kml::new().read(PLACEMARKS).expect("read failed");
    let georss = GeoRss::new()
        .write(&kml, Some("georss"))
        .expect("write failed");

    assert!(georss.starts_with("<georss:where><georss:point>37.42"));

    let Geometry::GeometryCollection(converted) =
        GeoRss::new().read(&georss).expect("read failed")
    else {
        panic!("invalid geometry type");
    };
    let Geometry::GeometryCollection(original) = kml else {
        panic!("invalid geometry type");
    };

    assert_eq!(converted.geometries()[..2], original.geometries()[..2]);
    assert_eq!(
        converted.geometries()[2]
            .as_polygon()
            .expect("not a polygon")
            .exterior_ring(),
        original.geometries()[2]
            .as_polygon()
            .expect("not a polygon")
            .exterior_ring()
    );
}

#[test]
fn namespaced_output_is_readable() {
    let geometry = Geometry::from(MultiPolygon::new(vec![
        Polygon::from(square(0.0, 0.0, 1.0)),
        Polygon::from(square(2.0, 2.0, 1.0)),
    ]));

    for format in Format::ALL {
        let text = geoxchange::write(format, &geometry, Some("ns")).expect("write failed");
        assert!(!text.contains("<Polygon") && !text.contains("<polygon"));
        assert_eq!(geoxchange::read(format, &text).expect("read failed"), geometry);
    }
}

#[test]
fn malformed_input_is_reported_with_the_input() {
    let text = "<kml><Placemark><Point><coordinates>1,2</coordinates></Point></kml>";

    for format in Format::ALL {
        let error = geoxchange::read(format, text).expect_err("malformed input accepted");
        assert_matches!(&error, GeoFormatError::Format { format: f, .. } if *f == format);
        assert_eq!(error.input(), Some(text));
    }
}

#[test]
fn empty_documents() {
    assert_eq!(
        Kml::new().read("<kml><Document/></kml>").expect("read failed"),
        Geometry::GeometryCollection(GeometryCollection::default())
    );
    assert_matches!(
        GeoRss::new().read("<feed><entry/></feed>"),
        Err(GeoFormatError::EmptyInput { .. })
    );
}
