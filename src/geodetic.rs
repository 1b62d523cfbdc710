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

//! The geodetic module contains `Point`, a geodetic position on the ellipsoid
//! of a `Datum`, and the functions to convert between geodetic and geocentric
//! Cartesian coordinates.
//!
//! Geocentric Cartesian coordinates have their origin at the centre of the
//! ellipsoid: the x axis through latitude 0°, longitude 0°; the y axis
//! through latitude 0°, longitude 90°E and the z axis through the North pole.
//!
//! Cartesian to geodetic conversion uses Bowring's iterative formula, see:
//! B. R. Bowring (1985), The accuracy of geodetic latitude and height equations,
//! Survey Review 28, 202–206.

#![allow(clippy::suboptimal_flops)]

use crate::coordinate::{to_degrees, Latitude, Longitude};
use crate::datum::Datum;
use crate::error::{Error, Result};
use crate::vector::Vector3d;
use crate::{Angle, Degrees, Ellipsoid, Metres, Radians, Validate};
use core::fmt;
use log::{debug, trace, warn};

/// The maximum number of iterations of the Cartesian to geodetic conversion.
pub const MAX_ITERATIONS: u32 = 16;

/// The latitude change at which the Cartesian to geodetic iteration has converged.
pub const CONVERGENCE_TOLERANCE: Radians = Radians(1.0e-12);

/// The minimum distance from the centre of the ellipsoid of a geocentric
/// vector that can be converted to geodetic coordinates.
pub const MIN_NORM: Metres = Metres(1.0e-3);

/// Calculate the geocentric Cartesian coordinates of a geodetic position.
/// * `lat` - the geodetic latitude.
/// * `lon` - the longitude.
/// * `height` - the height above the ellipsoid.
/// * `ellipsoid` - the `Ellipsoid`.
///
/// returns the geocentric vector in metres.
#[must_use]
pub fn calculate_cartesian(
    lat: Angle,
    lon: Angle,
    height: Metres,
    ellipsoid: &Ellipsoid,
) -> Vector3d {
    let sin_lat = lat.sin().0;
    let cos_lat = lat.cos().0;
    let nu = ellipsoid.prime_vertical_radius(sin_lat).0;
    let h = height.0;

    Vector3d::new(
        (nu + h) * cos_lat * lon.cos().0,
        (nu + h) * cos_lat * lon.sin().0,
        ((1.0 - ellipsoid.e_2()) * nu + h) * sin_lat,
    )
}

/// Calculate the geodetic latitude, longitude and height of a geocentric
/// Cartesian vector.
/// * `v` - the geocentric vector in metres.
/// * `ellipsoid` - the `Ellipsoid`.
///
/// returns the latitude, longitude and height above the ellipsoid.
///
/// # Errors
///
/// `Error::DegenerateVector` if `v` is not finite or it is within `MIN_NORM`
/// of the centre of the ellipsoid.
///
/// `Error::NotConverged` if the latitude has not converged after
/// `MAX_ITERATIONS`.
pub fn calculate_geodetic(
    v: &Vector3d,
    ellipsoid: &Ellipsoid,
) -> Result<(Degrees, Degrees, Metres)> {
    if !v.is_finite() || v.norm() < MIN_NORM.0 {
        warn!("calculate_geodetic: degenerate vector {v:?}");
        return Err(Error::DegenerateVector);
    }

    let e_2 = ellipsoid.e_2();
    let p = v.xy_norm();

    let mut lat = libm::atan2(v.z, p * (1.0 - e_2));
    for iteration in 1..=MAX_ITERATIONS {
        let sin_lat = libm::sin(lat);
        let nu = ellipsoid.prime_vertical_radius(sin_lat).0;
        let next = libm::atan2(v.z + e_2 * nu * sin_lat, p);
        let delta = libm::fabs(next - lat);
        lat = next;

        if delta < CONVERGENCE_TOLERANCE.0 {
            trace!("calculate_geodetic: converged after {iteration} iterations");

            // Bowring's height formula, well conditioned at the poles
            let sin_lat = libm::sin(lat);
            let cos_lat = libm::cos(lat);
            let nu = ellipsoid.prime_vertical_radius(sin_lat).0;
            let a = ellipsoid.a().0;
            let height = p * cos_lat + v.z * sin_lat - a * a / nu;

            let lon = libm::atan2(v.y, v.x);
            return Ok((
                Degrees(to_degrees(lat)),
                Degrees(to_degrees(lon)),
                Metres(height),
            ));
        }
    }

    warn!("calculate_geodetic: not converged after {MAX_ITERATIONS} iterations: {v:?}");
    Err(Error::NotConverged {
        iterations: MAX_ITERATIONS,
    })
}

/// A geodetic position on the ellipsoid of a `Datum`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    /// The geodetic latitude.
    lat: Latitude,
    /// The longitude.
    lon: Longitude,
    /// The height above the ellipsoid.
    height: Metres,
    /// The datum of the position.
    datum: Datum,
}

impl Validate for Point {
    /// Test whether a `Point` is valid.
    /// Whether the latitude, longitude and height are all finite.
    fn is_valid(&self) -> bool {
        self.lat.is_valid() && self.lon.is_valid() && self.height.0.is_finite()
    }
}

impl Point {
    /// Construct a `Point` on the surface of the ellipsoid.
    /// * `lat` - the geodetic latitude.
    /// * `lon` - the longitude.
    /// * `datum` - the datum of the position.
    #[must_use]
    pub const fn new(lat: Latitude, lon: Longitude, datum: Datum) -> Self {
        Self::with_height(lat, lon, Metres(0.0), datum)
    }

    /// Construct a `Point` at a height above the ellipsoid.
    /// * `lat` - the geodetic latitude.
    /// * `lon` - the longitude.
    /// * `height` - the height above the ellipsoid.
    /// * `datum` - the datum of the position.
    #[must_use]
    pub const fn with_height(lat: Latitude, lon: Longitude, height: Metres, datum: Datum) -> Self {
        Self {
            lat,
            lon,
            height,
            datum,
        }
    }

    /// Construct a `Point` on the surface of the ellipsoid from decimal degrees.
    /// * `lat` - the geodetic latitude in degrees, clamped to [-90°, 90°].
    /// * `lon` - the longitude in degrees, wrapped into (-180°, 180°].
    /// * `datum` - the datum of the position.
    #[must_use]
    pub fn from_degrees(lat: f64, lon: f64, datum: Datum) -> Self {
        Self::new(Latitude::from(lat), Longitude::from(lon), datum)
    }

    /// The geodetic latitude.
    #[must_use]
    pub const fn lat(&self) -> Latitude {
        self.lat
    }

    /// The longitude.
    #[must_use]
    pub const fn lon(&self) -> Longitude {
        self.lon
    }

    /// The height above the ellipsoid.
    #[must_use]
    pub const fn height(&self) -> Metres {
        self.height
    }

    /// The datum of the position.
    #[must_use]
    pub const fn datum(&self) -> Datum {
        self.datum
    }

    /// Convert the position to geocentric Cartesian coordinates on the
    /// ellipsoid of its datum.
    ///
    /// returns the geocentric vector in metres.
    /// # Examples
    /// ```
    /// use datum_geodesy::{Datum, Point};
    ///
    /// let greenwich = Point::from_degrees(51.4778, -0.0016, Datum::WGS84);
    /// let v = greenwich.to_cartesian();
    /// assert!((v.x - 3_980_581.210).abs() < 1.0e-3);
    /// assert!((v.y - -111.159).abs() < 1.0e-3);
    /// assert!((v.z - 4_966_824.522).abs() < 1.0e-3);
    /// ```
    #[must_use]
    pub fn to_cartesian(&self) -> Vector3d {
        calculate_cartesian(
            self.lat.angle(),
            self.lon.angle(),
            self.height,
            self.datum.ellipsoid(),
        )
    }

    /// Convert the position to another datum.
    ///
    /// The position is transformed to WGS 84 and then from WGS 84 to the
    /// destination datum.
    /// * `datum` - the destination datum.
    ///
    /// returns a new `Point` in the destination datum.
    ///
    /// # Errors
    ///
    /// If the transformed geocentric vector cannot be converted back to
    /// geodetic coordinates, see `calculate_geodetic`.
    ///
    /// # Examples
    /// ```
    /// use datum_geodesy::{Datum, Point};
    ///
    /// let greenwich = Point::from_degrees(51.4778, -0.0016, Datum::WGS84);
    /// let osgb36 = greenwich.convert_to_datum(Datum::OSGB36).unwrap();
    /// assert_eq!(Datum::OSGB36, osgb36.datum());
    /// assert!((osgb36.lat().degrees().0 - 51.4773).abs() < 0.001);
    /// assert!(osgb36.lon().degrees().0.abs() < 0.001);
    /// ```
    pub fn convert_to_datum(&self, datum: Datum) -> Result<Self> {
        if self.datum == datum {
            return Ok(*self);
        }

        debug!("convert_to_datum: {} to {}", self.datum, datum);
        let mut v = self.datum.transform().transform(&self.to_cartesian());
        if datum != Datum::WGS84 {
            v = datum.transform().inverse_transform(&v);
        }
        to_point(&v, datum)
    }
}

/// Convert a geocentric Cartesian vector to a `Point` on the ellipsoid of a
/// datum.
///
/// The vector must already be in the frame of the datum: no Helmert
/// transform is applied.
/// * `v` - the geocentric vector in metres.
/// * `datum` - the datum of the position.
///
/// # Errors
///
/// See `calculate_geodetic`.
pub fn to_point(v: &Vector3d, datum: Datum) -> Result<Point> {
    let (lat, lon, height) = calculate_geodetic(v, datum.ellipsoid())?;
    Ok(Point::with_height(
        Latitude::new(lat),
        Longitude::new(lon),
        height,
        datum,
    ))
}

impl fmt::Display for Point {
    /// Format the position as degrees with hemisphere letters, e.g.
    /// `51.4773°N, 000.0000°E (OSGB36)`.
    /// The precision defaults to 4 decimal places.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(4);
        let fraction = if precision == 0 { 0 } else { precision + 1 };

        let lat = self.lat.degrees().0;
        let lon = self.lon.degrees().0;
        let north_south = if lat < 0.0 { 'S' } else { 'N' };
        let east_west = if lon < 0.0 { 'W' } else { 'E' };
        write!(
            f,
            "{:0lat_width$.precision$}°{north_south}, {:0lon_width$.precision$}°{east_west} ({})",
            libm::fabs(lat),
            libm::fabs(lon),
            self.datum,
            lat_width = fraction + 2,
            lon_width = fraction + 3,
        )
    }
}
