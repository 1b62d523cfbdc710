// Copyright (c) 2024-2026 Ken Barker

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

//! datum-geodesy
//!
//! A library for converting geodetic positions between the ellipsoids and
//! datums used in navigation and surveying, and for simple spherical
//! distance and bearing calculations.
//!
//! ## Datums
//!
//! A [geodetic datum](https://en.wikipedia.org/wiki/Geodetic_datum) is a
//! reference frame, an origin and an ellipsoid, for expressing geodetic
//! coordinates. Different datums assign different latitudes and longitudes
//! to the same physical point: the Royal Observatory at Greenwich is at
//! 51.4778°N, 0.0016°W on WGS 84 but 51.4773°N, 0.0000°E on OSGB 36.
//!
//! This library contains a fixed table of datums, see [`Datum`], each with:
//!
//! - its reference [`Ellipsoid`], defined by its Semimajor axis and flattening;
//! - the 7-parameter [Helmert transform](https://en.wikipedia.org/wiki/Helmert_transformation)
//!   that converts geocentric Cartesian coordinates from the datum to WGS 84.
//!
//! ## Design
//!
//! A [`geodetic::Point`] is a latitude, longitude and height tagged with its
//! datum. A point is converted between datums by:
//!
//! - converting it to geocentric Cartesian coordinates on its own ellipsoid;
//! - transforming the Cartesian vector to WGS 84, then from WGS 84 to the
//!   destination datum with the inverse of the destination's transform;
//! - converting the vector back to geodetic coordinates on the destination
//!   ellipsoid using Bowring's iterative formula.
//!
//! WGS 84 is the hub, so only the transform from each datum to WGS 84 is
//! tabulated.
//!
//! The [`spherical`] module calculates great circle distances and bearings
//! on a spherical Earth.
//!
//! The library depends upon the following crates:
//!
//! - [angle-sc](https://crates.io/crates/angle-sc) - to define `Angle`,
//!   `Degrees` and `Radians` and perform trigonometric calculations;
//! - [unit-sphere](https://crates.io/crates/unit-sphere) - to define `LatLong`
//!   and perform great-circle calculations.
//! - [icao_units](https://crates.io/crates/icao-units) - to define `Metres`.
//!
//! The library is declared [no_std](https://docs.rust-embedded.org/book/intro/no-std.html)
//! so it can be used in embedded applications.

#![cfg_attr(not(test), no_std)]

extern crate angle_sc;
extern crate icao_units;
extern crate unit_sphere;

pub mod coordinate;
pub mod datum;
pub mod ellipsoid;
pub mod error;
pub mod geodetic;
pub mod spherical;
pub mod vector;

pub use angle_sc::{Angle, Degrees, Radians, Validate};
pub use coordinate::{Latitude, Longitude};
pub use datum::{Datum, Helmert};
pub use error::{Error, Result};
pub use geodetic::Point;
pub use icao_units::si::Metres;
pub use unit_sphere::LatLong;
pub use vector::Vector3d;

/// The parameters of an `Ellipsoid`.
#[derive(Clone, Debug, PartialEq)]
pub struct Ellipsoid {
    /// The Semimajor axis of the ellipsoid.
    a: Metres,
    /// The flattening of the ellipsoid, a ratio.
    f: f64,

    /// The Semiminor axis of the ellipsoid.
    b: Metres,
    /// The square of the Eccentricity of the ellipsoid.
    e_2: f64,
}

impl Ellipsoid {
    /// Constructor.
    /// * `a` - the Semimajor axis of the `Ellipsoid`.
    /// * `f` - the flattening of the `Ellipsoid`, a ratio.
    #[must_use]
    pub fn new(a: Metres, f: f64) -> Self {
        Self {
            a,
            f,
            b: ellipsoid::calculate_minor_axis(a, f),
            e_2: ellipsoid::calculate_sq_eccentricity(f),
        }
    }

    /// Construct an `Ellipsoid` with the WGS-84 parameters.
    #[must_use]
    pub fn wgs84() -> Self {
        Self::new(ellipsoid::wgs84::A, ellipsoid::wgs84::F)
    }

    /// The Semimajor axis of the ellipsoid.
    #[must_use]
    pub const fn a(&self) -> Metres {
        self.a
    }

    /// The flattening of the ellipsoid, a ratio.
    #[must_use]
    pub const fn f(&self) -> f64 {
        self.f
    }

    /// The Semiminor axis of the ellipsoid.
    #[must_use]
    pub const fn b(&self) -> Metres {
        self.b
    }

    /// The square of the Eccentricity of the ellipsoid.
    #[must_use]
    pub const fn e_2(&self) -> f64 {
        self.e_2
    }

    /// The radius of curvature in the prime vertical at a geodetic latitude.
    /// * `sin_lat` - the sine of the geodetic latitude.
    #[must_use]
    pub fn prime_vertical_radius(&self, sin_lat: f64) -> Metres {
        ellipsoid::calculate_prime_vertical_radius(self.a, self.e_2, sin_lat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ellipsoid_wgs84() {
        let wgs84 = Ellipsoid::wgs84();

        assert_eq!(ellipsoid::wgs84::A, wgs84.a());
        assert_eq!(ellipsoid::wgs84::F, wgs84.f());
        assert_eq!(Metres(6_356_752.314_245_179), wgs84.b());
        assert_eq!(0.0066943799901413165, wgs84.e_2());
        assert_eq!(ellipsoid::wgs84::A, wgs84.prime_vertical_radius(0.0));

        assert_eq!(&wgs84, Datum::WGS84.ellipsoid());
    }

    #[test]
    fn test_ellipsoid_traits() {
        let wgs84 = Ellipsoid::wgs84();
        let wgs84_clone = wgs84.clone();
        assert_eq!(wgs84, wgs84_clone);
        assert_ne!(wgs84, *Datum::OSGB36.ellipsoid());

        print!("Ellipsoid: {wgs84:?}");
    }
}
