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

//! The ellipsoid module contains types and functions for defining an ellipsoid
//! given its Semimajor axis (the equivalent of its radius) and flattening ratio.
//!
//! It also contains the `ReferenceEllipsoid` table: the ellipsoids used by the
//! datums in the `datum` module.

#![allow(clippy::suboptimal_flops)]

pub mod wgs84;

use crate::{Ellipsoid, Metres};
use lazy_static::lazy_static;

/// Calculate the flattening ratio of an ellipsoid from its inverse.
/// * `inverse_f` - the inverse flattening, e.g. 298.257223563 for WGS 84.
#[must_use]
pub fn calculate_flattening(inverse_f: f64) -> f64 {
    1.0 / inverse_f
}

/// Calculate the Semiminor axis of an ellipsoid.
/// * `a` - the Semimajor axis of an ellipsoid.
/// * `f` - the flattening ratio.
/// # Examples
/// ```
/// use datum_geodesy::Metres;
/// use datum_geodesy::ellipsoid::{calculate_minor_axis, wgs84};
///
/// // The WGS 84 Semiminor axis measured in metres.
/// let b : Metres = Metres(6_356_752.314_245_179);
/// assert_eq!(b, calculate_minor_axis(wgs84::A, wgs84::F));
/// ```
#[must_use]
pub fn calculate_minor_axis(a: Metres, f: f64) -> Metres {
    Metres(a.0 * (1.0 - f))
}

/// Calculate the square of the Eccentricity of an ellipsoid.
/// * `f` - the flattening ratio.
/// # Examples
/// ```
/// use datum_geodesy::ellipsoid::{calculate_sq_eccentricity, wgs84};
///
/// // The WGS 84 sq_eccentricity.
/// assert_eq!(0.0066943799901413165, calculate_sq_eccentricity(wgs84::F));
/// ```
#[must_use]
pub fn calculate_sq_eccentricity(f: f64) -> f64 {
    f * (2.0 - f)
}

/// Calculate the radius of curvature in the prime vertical, `nu`.
/// * `a` - the Semimajor axis of the ellipsoid.
/// * `e_2` - the square of the Eccentricity of the ellipsoid.
/// * `sin_lat` - the sine of the geodetic latitude.
#[must_use]
pub fn calculate_prime_vertical_radius(a: Metres, e_2: f64, sin_lat: f64) -> Metres {
    Metres(a.0 / libm::sqrt(1.0 - e_2 * sin_lat * sin_lat))
}

/// The reference ellipsoids of the supported datums.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReferenceEllipsoid {
    Airy1830,
    AiryModified,
    Bessel1841,
    Clarke1866,
    Clarke1880Ign,
    Grs80,
    Intl1924,
    Wgs72,
    Wgs84,
}

impl ReferenceEllipsoid {
    /// All of the reference ellipsoids, in declaration order.
    pub const ALL: [Self; 9] = [
        Self::Airy1830,
        Self::AiryModified,
        Self::Bessel1841,
        Self::Clarke1866,
        Self::Clarke1880Ign,
        Self::Grs80,
        Self::Intl1924,
        Self::Wgs72,
        Self::Wgs84,
    ];

    /// The Semimajor axis of the ellipsoid.
    #[must_use]
    pub const fn a(self) -> Metres {
        match self {
            Self::Airy1830 => Metres(6_377_563.396),
            Self::AiryModified => Metres(6_377_340.189),
            Self::Bessel1841 => Metres(6_377_397.155),
            Self::Clarke1866 => Metres(6_378_206.4),
            Self::Clarke1880Ign => Metres(6_378_249.2),
            Self::Grs80 => Metres(6_378_137.0),
            Self::Intl1924 => Metres(6_378_388.0),
            Self::Wgs72 => Metres(6_378_135.0),
            Self::Wgs84 => wgs84::A,
        }
    }

    /// The inverse flattening of the ellipsoid.
    #[must_use]
    pub const fn inverse_f(self) -> f64 {
        match self {
            Self::Airy1830 | Self::AiryModified => 299.324_964_6,
            Self::Bessel1841 => 299.152_812_8,
            Self::Clarke1866 => 294.978_698_214,
            Self::Clarke1880Ign => 293.466_021_294,
            Self::Grs80 => 298.257_222_101,
            Self::Intl1924 => 297.0,
            Self::Wgs72 => 298.26,
            Self::Wgs84 => wgs84::INVERSE_F,
        }
    }

    /// The flattening of the ellipsoid, a ratio.
    #[must_use]
    pub fn f(self) -> f64 {
        calculate_flattening(self.inverse_f())
    }

    /// The `Ellipsoid` with these parameters.
    #[must_use]
    pub fn ellipsoid(self) -> &'static Ellipsoid {
        &REFERENCE_ELLIPSOIDS[self as usize]
    }
}

lazy_static! {
    /// The `Ellipsoid`s of the `ReferenceEllipsoid`s, in declaration order.
    static ref REFERENCE_ELLIPSOIDS: [Ellipsoid; 9] =
        ReferenceEllipsoid::ALL.map(|r| Ellipsoid::new(r.a(), r.f()));
}
