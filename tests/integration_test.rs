// Copyright (c) 2026 Ken Barker

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

// extern crate we're testing, same as any other code would do.
extern crate datum_geodesy;

use angle_sc::is_within_tolerance;
use datum_geodesy::spherical::{distance_to, MEAN_EARTH_RADIUS};
use datum_geodesy::{
    geodetic, Datum, Degrees, Error, LatLong, Latitude, Longitude, Metres, Point, Validate,
    Vector3d,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_greenwich_observatory() {
    init_logger();

    // The Airy transit circle at the Royal Observatory, Greenwich
    let wgs84 = Point::new(
        Latitude::new(Degrees(51.4778)),
        Longitude::new(Degrees(-0.0016)),
        Datum::WGS84,
    );
    assert!(wgs84.is_valid());

    let osgb36 = wgs84.convert_to_datum(Datum::OSGB36).unwrap();
    assert_eq!("51.4773°N, 000.0000°E (OSGB36)", osgb36.to_string());

    // Convert via the other datums and back to OSGB 36
    let mut point = osgb36;
    for datum in Datum::ALL {
        point = point.convert_to_datum(datum).unwrap();
        assert_eq!(datum, point.datum());
    }
    let result = point.convert_to_datum(Datum::OSGB36).unwrap();
    assert!(is_within_tolerance(
        osgb36.lat().degrees().0,
        result.lat().degrees().0,
        1.0e-6
    ));
    assert!(is_within_tolerance(
        osgb36.lon().degrees().0,
        result.lon().degrees().0,
        1.0e-6
    ));
    assert!(is_within_tolerance(
        osgb36.height().0,
        result.height().0,
        5.0e-2
    ));
}

#[test]
fn test_datum_names_from_user_input() {
    let datum: Datum = "nad27".parse().unwrap();
    assert_eq!(Datum::NAD27, datum);

    assert_eq!(Err(Error::UnsupportedDatum), "ETRS89".parse::<Datum>());
}

#[test]
fn test_cartesian_interface() {
    init_logger();

    let point = Point::with_height(
        Latitude::from(-27.4698),
        Longitude::from(153.0251),
        Metres(30.0),
        Datum::NAD83,
    );
    let v = point.to_cartesian();
    let result = geodetic::to_point(&v, Datum::NAD83).unwrap();
    assert!(is_within_tolerance(
        -27.4698,
        result.lat().degrees().0,
        1.0e-9
    ));
    assert!(is_within_tolerance(
        153.0251,
        result.lon().degrees().0,
        1.0e-9
    ));
    assert!(is_within_tolerance(30.0, result.height().0, 1.0e-3));

    // The same vector interpreted on a different ellipsoid is a different position
    let clarke = geodetic::to_point(&v, Datum::NAD27).unwrap();
    assert!(1.0 < libm::fabs(clarke.height().0 - 30.0));

    assert_eq!(
        Err(Error::DegenerateVector),
        geodetic::to_point(&Vector3d::ZERO, Datum::WGS84)
    );
}

#[test]
fn test_spherical_distance_between_datums() {
    let nad27 = Point::from_degrees(40.0, -100.0, Datum::NAD27);
    let wgs84 = nad27.convert_to_datum(Datum::WGS84).unwrap();

    // The NAD 27 to WGS 84 shift in Kansas is about 35 metres
    let shift = distance_to(
        &LatLong::from(&nad27),
        &LatLong::from(&wgs84),
        MEAN_EARTH_RADIUS,
    );
    assert!(30.0 < shift.0 && shift.0 < 40.0);
}
