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

//! The spherical module contains functions for calculating great circle
//! distances and bearings between positions on a spherical Earth.
//!
//! These are fast approximations: on the WGS 84 ellipsoid the error in
//! distance can be up to 0.5%.

use crate::geodetic::Point;
use crate::{Angle, Degrees, LatLong, Metres};
use unit_sphere::great_circle;

/// The mean radius of the Earth, as used by spherical navigation formulae.
pub const MEAN_EARTH_RADIUS: Metres = Metres(6_371_000.0);

/// Normalise a bearing in degrees to the range [0°, 360°).
#[must_use]
fn normalise_bearing(degrees: f64) -> Degrees {
    let bearing = libm::fmod(degrees + 360.0, 360.0);
    Degrees(if bearing < 0.0 { bearing + 360.0 } else { bearing })
}

/// Calculate the great circle distance between a pair of positions.
/// * `a`, `b` - the start and finish positions.
/// * `radius` - the radius of the sphere.
///
/// returns the distance on the sphere.
/// # Examples
/// ```
/// use datum_geodesy::{Degrees, LatLong};
/// use datum_geodesy::spherical::{distance_to, MEAN_EARTH_RADIUS};
///
/// let cambridge = LatLong::new(Degrees(52.205), Degrees(0.119));
/// let paris = LatLong::new(Degrees(48.857), Degrees(2.351));
/// let distance = distance_to(&cambridge, &paris, MEAN_EARTH_RADIUS);
/// assert!((distance.0 - 404_279.164).abs() < 1.0);
/// ```
#[must_use]
pub fn distance_to(a: &LatLong, b: &LatLong, radius: Metres) -> Metres {
    let delta_long = Angle::from(b.lon() - a.lon());
    let distance =
        great_circle::calculate_gc_distance(Angle::from(a.lat()), Angle::from(b.lat()), delta_long);
    Metres(radius.0 * distance.0)
}

/// Calculate the initial bearing of the great circle from `a` to `b`.
/// * `a`, `b` - the start and finish positions.
///
/// returns the bearing in degrees clockwise from North, in [0°, 360°).
#[must_use]
pub fn bearing_to(a: &LatLong, b: &LatLong) -> Degrees {
    let delta_long = Angle::from(b.lon() - a.lon());
    let azimuth =
        great_circle::calculate_gc_azimuth(Angle::from(a.lat()), Angle::from(b.lat()), delta_long);
    normalise_bearing(Degrees::from(azimuth).0)
}

/// Calculate the final bearing of the great circle from `a` to `b`,
/// i.e. the bearing on arrival at `b`.
/// * `a`, `b` - the start and finish positions.
///
/// returns the bearing in degrees clockwise from North, in [0°, 360°).
#[must_use]
pub fn final_bearing_to(a: &LatLong, b: &LatLong) -> Degrees {
    normalise_bearing(bearing_to(b, a).0 + 180.0)
}

impl From<&Point> for LatLong {
    /// The latitude and longitude of a geodetic `Point`, ignoring its datum
    /// and height.
    fn from(point: &Point) -> Self {
        Self::new(point.lat().degrees(), point.lon().degrees())
    }
}
