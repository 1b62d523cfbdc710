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

//! The coordinate module contains the `Latitude` and `Longitude` types.
//!
//! Both types store their value in decimal degrees and normalise it on
//! construction:
//! - a `Latitude` is clamped to the range [-90°, 90°];
//! - a `Longitude` is wrapped into the range (-180°, 180°].
//!
//! A non-finite value is stored unchanged and reported by `is_valid`.

use angle_sc::{Angle, Degrees, Radians, Validate};

/// The maximum magnitude of a `Latitude` in degrees.
pub const MAX_LATITUDE: f64 = 90.0;

/// The maximum value of a `Longitude` in degrees.
pub const MAX_LONGITUDE: f64 = 180.0;

/// The mathematical constant π.
#[must_use]
pub const fn pi() -> f64 {
    core::f64::consts::PI
}

/// Convert an angle in radians to decimal degrees.
/// * `radians` - the angle in radians.
#[must_use]
pub fn to_degrees(radians: f64) -> f64 {
    radians.to_degrees()
}

/// Convert an angle in decimal degrees to radians.
/// * `degrees` - the angle in decimal degrees.
#[must_use]
pub fn to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Clamp a latitude to [-90°, 90°].
#[must_use]
fn clamp_latitude(degrees: f64) -> f64 {
    degrees.clamp(-MAX_LATITUDE, MAX_LATITUDE)
}

/// Wrap a longitude into (-180°, 180°].
///
/// `remainder` is exact, so values already in range are returned unchanged.
#[must_use]
fn wrap_longitude(degrees: f64) -> f64 {
    let value = libm::remainder(degrees, 2.0 * MAX_LONGITUDE);
    if value <= -MAX_LONGITUDE {
        value + 2.0 * MAX_LONGITUDE
    } else {
        value
    }
}

/// A geodetic latitude in decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Latitude(Degrees);

impl Latitude {
    /// Construct a `Latitude`, clamping it to [-90°, 90°].
    /// * `degrees` - the latitude in decimal degrees.
    /// # Examples
    /// ```
    /// use datum_geodesy::{Degrees, Latitude};
    ///
    /// assert_eq!(Degrees(51.4778), Latitude::new(Degrees(51.4778)).degrees());
    /// assert_eq!(Degrees(90.0), Latitude::new(Degrees(91.0)).degrees());
    /// ```
    #[must_use]
    pub fn new(degrees: Degrees) -> Self {
        Self(Degrees(clamp_latitude(degrees.0)))
    }

    /// The latitude in decimal degrees.
    #[must_use]
    pub const fn degrees(&self) -> Degrees {
        self.0
    }

    /// The latitude in radians.
    #[must_use]
    pub fn radians(&self) -> Radians {
        Radians(to_radians(self.0 .0))
    }

    /// The latitude as an `Angle`.
    #[must_use]
    pub fn angle(&self) -> Angle {
        Angle::from(self.0)
    }
}

impl From<f64> for Latitude {
    fn from(degrees: f64) -> Self {
        Self::new(Degrees(degrees))
    }
}

impl Validate for Latitude {
    /// Test whether a `Latitude` is finite.
    fn is_valid(&self) -> bool {
        self.0 .0.is_finite()
    }
}

/// A geodetic longitude in decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Longitude(Degrees);

impl Longitude {
    /// Construct a `Longitude`, wrapping it into (-180°, 180°].
    /// * `degrees` - the longitude in decimal degrees.
    /// # Examples
    /// ```
    /// use datum_geodesy::{Degrees, Longitude};
    ///
    /// assert_eq!(Degrees(-0.0016), Longitude::new(Degrees(-0.0016)).degrees());
    /// assert_eq!(Degrees(180.0), Longitude::new(Degrees(-180.0)).degrees());
    /// assert_eq!(Degrees(-170.0), Longitude::new(Degrees(190.0)).degrees());
    /// ```
    #[must_use]
    pub fn new(degrees: Degrees) -> Self {
        Self(Degrees(wrap_longitude(degrees.0)))
    }

    /// The longitude in decimal degrees.
    #[must_use]
    pub const fn degrees(&self) -> Degrees {
        self.0
    }

    /// The longitude in radians.
    #[must_use]
    pub fn radians(&self) -> Radians {
        Radians(to_radians(self.0 .0))
    }

    /// The longitude as an `Angle`.
    #[must_use]
    pub fn angle(&self) -> Angle {
        Angle::from(self.0)
    }
}

impl From<f64> for Longitude {
    fn from(degrees: f64) -> Self {
        Self::new(Degrees(degrees))
    }
}

impl Validate for Longitude {
    /// Test whether a `Longitude` is finite.
    fn is_valid(&self) -> bool {
        self.0 .0.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use angle_sc::is_within_tolerance;

    #[test]
    fn test_unit_conversions() {
        assert_eq!(core::f64::consts::PI, pi());
        assert_eq!(180.0, to_degrees(pi()));
        assert_eq!(pi(), to_radians(180.0));
        assert!(is_within_tolerance(
            51.4778,
            to_degrees(to_radians(51.4778)),
            1.0e-12
        ));
    }

    #[test]
    fn test_latitude_clamp() {
        assert_eq!(Degrees(0.0), Latitude::from(0.0).degrees());
        assert_eq!(Degrees(90.0), Latitude::from(90.0).degrees());
        assert_eq!(Degrees(-90.0), Latitude::from(-90.0).degrees());
        assert_eq!(Degrees(90.0), Latitude::from(90.000_001).degrees());
        assert_eq!(Degrees(-90.0), Latitude::from(-90.000_001).degrees());
        assert_eq!(Degrees(90.0), Latitude::from(f64::INFINITY).degrees());
        assert_eq!(Degrees(89.999_999), Latitude::from(89.999_999).degrees());

        let lat = Latitude::from(90.0);
        assert_eq!(Radians(core::f64::consts::FRAC_PI_2), lat.radians());
        assert!(lat.angle().cos().0.abs() < f64::EPSILON);
        assert!(is_within_tolerance(1.0, lat.angle().sin().0, f64::EPSILON));
    }

    #[test]
    fn test_longitude_wrap() {
        assert_eq!(Degrees(0.0), Longitude::from(0.0).degrees());
        assert_eq!(Degrees(180.0), Longitude::from(180.0).degrees());
        assert_eq!(Degrees(180.0), Longitude::from(-180.0).degrees());
        assert_eq!(Degrees(-179.5), Longitude::from(180.5).degrees());
        assert_eq!(Degrees(179.5), Longitude::from(-180.5).degrees());
        assert_eq!(Degrees(180.0), Longitude::from(540.0).degrees());
        assert_eq!(Degrees(10.0), Longitude::from(370.0).degrees());
        assert_eq!(Degrees(-10.0), Longitude::from(-370.0).degrees());
        assert_eq!(Degrees(-0.0016), Longitude::from(-0.0016).degrees());
    }

    #[test]
    fn test_is_valid() {
        assert!(Latitude::from(45.0).is_valid());
        assert!(!Latitude::from(f64::NAN).is_valid());
        assert!(Longitude::from(-45.0).is_valid());
        assert!(!Longitude::from(f64::NAN).is_valid());
        assert!(!Longitude::from(f64::INFINITY).is_valid());
    }
}
