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

//! The datum module contains the supported geodetic datums and the 7-parameter
//! Helmert transforms that convert geocentric Cartesian coordinates from each
//! datum to WGS 84.
//!
//! The parameters are the published values from the Ordnance Survey
//! *A guide to coordinate systems in Great Britain* and the NGA datum
//! tables.
//!
//! Note: WGS 84 itself is not defined to better than ±1 metre and no
//! transform should be assumed to be more accurate than a metre; for many
//! datums somewhat less.

#![allow(clippy::suboptimal_flops)]

use crate::coordinate::to_radians;
use crate::ellipsoid::ReferenceEllipsoid;
use crate::error::Error;
use crate::vector::Vector3d;
use crate::Ellipsoid;
use core::fmt;
use core::str::FromStr;

/// The number of arc seconds in a degree.
const ARC_SECONDS_PER_DEGREE: f64 = 3600.0;

/// Convert a small angle in arc seconds to radians.
#[must_use]
fn arc_seconds_to_radians(arc_seconds: f64) -> f64 {
    to_radians(arc_seconds / ARC_SECONDS_PER_DEGREE)
}

/// A 7-parameter Helmert (similarity) transform between geocentric Cartesian
/// frames.
///
/// The rotations are small angles, so the rotation matrix is approximated by
/// `I + R`, where `R` is the skew-symmetric matrix of the rotations, i.e.
/// `R·v` is the cross product of the rotation vector and `v`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Helmert {
    /// The x translation in metres.
    pub tx: f64,
    /// The y translation in metres.
    pub ty: f64,
    /// The z translation in metres.
    pub tz: f64,
    /// The scale change in parts per million.
    pub s: f64,
    /// The rotation about the x axis in arc seconds.
    pub rx: f64,
    /// The rotation about the y axis in arc seconds.
    pub ry: f64,
    /// The rotation about the z axis in arc seconds.
    pub rz: f64,
}

impl Helmert {
    /// The identity transform.
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0);

    /// Constructor.
    /// * `tx`, `ty`, `tz` - the translations in metres.
    /// * `s` - the scale change in parts per million.
    /// * `rx`, `ry`, `rz` - the rotations in arc seconds.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub const fn new(tx: f64, ty: f64, tz: f64, s: f64, rx: f64, ry: f64, rz: f64) -> Self {
        Self {
            tx,
            ty,
            tz,
            s,
            rx,
            ry,
            rz,
        }
    }

    /// The translation vector in metres.
    #[must_use]
    pub const fn translation(&self) -> Vector3d {
        Vector3d::new(self.tx, self.ty, self.tz)
    }

    /// The rotation vector in radians.
    #[must_use]
    pub fn rotation(&self) -> Vector3d {
        Vector3d::new(
            arc_seconds_to_radians(self.rx),
            arc_seconds_to_radians(self.ry),
            arc_seconds_to_radians(self.rz),
        )
    }

    /// The scale factor: `1 + s·1e-6`.
    #[must_use]
    pub fn scale_factor(&self) -> f64 {
        1.0 + self.s * 1.0e-6
    }

    /// Whether this is the identity transform.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// The approximate inverse of this transform: all parameters negated.
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self::new(
            -self.tx, -self.ty, -self.tz, -self.s, -self.rx, -self.ry, -self.rz,
        )
    }

    /// Apply the transform to a geocentric vector: `v' = s·(I + R)·v + t`.
    /// * `v` - the geocentric vector in metres.
    /// # Examples
    /// ```
    /// use datum_geodesy::{Helmert, Vector3d};
    ///
    /// let shift = Helmert::new(-8.0, 160.0, 176.0, 0.0, 0.0, 0.0, 0.0);
    /// let v = Vector3d::new(1.0, 2.0, 3.0);
    /// assert_eq!(Vector3d::new(-7.0, 162.0, 179.0), shift.transform(&v));
    /// ```
    #[must_use]
    pub fn transform(&self, v: &Vector3d) -> Vector3d {
        (*v + self.rotation().cross(v)) * self.scale_factor() + self.translation()
    }

    /// Apply the inverse of the transform to a geocentric vector:
    /// `v = (1/s)·(I − R)·(v' − t)`.
    ///
    /// This is the first order inverse of `transform`, valid for the small
    /// rotations used by datum transforms.
    /// * `v` - the geocentric vector in metres.
    #[must_use]
    pub fn inverse_transform(&self, v: &Vector3d) -> Vector3d {
        let u = *v - self.translation();
        (u - self.rotation().cross(&u)) * (1.0 / self.scale_factor())
    }
}

impl Default for Helmert {
    fn default() -> Self {
        Self::IDENTITY
    }
}

const ED50_TO_WGS84: Helmert = Helmert::new(-89.5, -93.8, -123.1, 1.2, 0.0, 0.0, -0.156);
const IRL1975_TO_WGS84: Helmert =
    Helmert::new(482.530, -130.596, 564.557, 8.150, 1.042, 0.214, 0.631);
const NAD27_TO_WGS84: Helmert = Helmert::new(-8.0, 160.0, 176.0, 0.0, 0.0, 0.0, 0.0);
const NAD83_TO_WGS84: Helmert =
    Helmert::new(-1.004, 1.910, 0.515, 0.0015, -0.0267, -0.000_34, -0.011);
const NTF_TO_WGS84: Helmert = Helmert::new(-168.0, -60.0, 320.0, 0.0, 0.0, 0.0, 0.0);
const OSGB36_TO_WGS84: Helmert =
    Helmert::new(446.448, -125.157, 542.060, -20.4894, 0.1502, 0.2470, 0.8421);
const POTSDAM_TO_WGS84: Helmert = Helmert::new(582.0, 105.0, 414.0, 8.3, -1.04, -0.35, 3.08);
const TOKYO_JAPAN_TO_WGS84: Helmert = Helmert::new(-148.0, 507.0, 685.0, 0.0, 0.0, 0.0, 0.0);
const WGS72_TO_WGS84: Helmert = Helmert::new(0.0, 0.0, 4.5, 0.22, 0.0, 0.0, -0.554);

/// The supported geodetic datums.
#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Datum {
    /// European Datum 1950.
    ED50,
    /// Ireland 1975.
    Irl1975,
    /// North American Datum 1927.
    NAD27,
    /// North American Datum 1983.
    NAD83,
    /// Nouvelle Triangulation Française.
    NTF,
    /// Ordnance Survey Great Britain 1936.
    OSGB36,
    /// Potsdam Rauenberg, Germany.
    Potsdam,
    /// Tokyo, Japan.
    TokyoJapan,
    /// World Geodetic System 1972.
    WGS72,
    /// World Geodetic System 1984.
    #[default]
    WGS84,
}

impl Datum {
    /// All of the supported datums.
    pub const ALL: [Self; 10] = [
        Self::ED50,
        Self::Irl1975,
        Self::NAD27,
        Self::NAD83,
        Self::NTF,
        Self::OSGB36,
        Self::Potsdam,
        Self::TokyoJapan,
        Self::WGS72,
        Self::WGS84,
    ];

    /// The canonical name of the datum.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ED50 => "ED50",
            Self::Irl1975 => "Irl1975",
            Self::NAD27 => "NAD27",
            Self::NAD83 => "NAD83",
            Self::NTF => "NTF",
            Self::OSGB36 => "OSGB36",
            Self::Potsdam => "Potsdam",
            Self::TokyoJapan => "TokyoJapan",
            Self::WGS72 => "WGS72",
            Self::WGS84 => "WGS84",
        }
    }

    /// The reference ellipsoid of the datum.
    #[must_use]
    pub const fn reference_ellipsoid(self) -> ReferenceEllipsoid {
        match self {
            Self::ED50 => ReferenceEllipsoid::Intl1924,
            Self::Irl1975 => ReferenceEllipsoid::AiryModified,
            Self::NAD27 => ReferenceEllipsoid::Clarke1866,
            Self::NAD83 => ReferenceEllipsoid::Grs80,
            Self::NTF => ReferenceEllipsoid::Clarke1880Ign,
            Self::OSGB36 => ReferenceEllipsoid::Airy1830,
            Self::Potsdam | Self::TokyoJapan => ReferenceEllipsoid::Bessel1841,
            Self::WGS72 => ReferenceEllipsoid::Wgs72,
            Self::WGS84 => ReferenceEllipsoid::Wgs84,
        }
    }

    /// The `Ellipsoid` of the datum.
    #[must_use]
    pub fn ellipsoid(self) -> &'static Ellipsoid {
        self.reference_ellipsoid().ellipsoid()
    }

    /// The Helmert transform from this datum to WGS 84.
    #[must_use]
    pub const fn transform(self) -> &'static Helmert {
        match self {
            Self::ED50 => &ED50_TO_WGS84,
            Self::Irl1975 => &IRL1975_TO_WGS84,
            Self::NAD27 => &NAD27_TO_WGS84,
            Self::NAD83 => &NAD83_TO_WGS84,
            Self::NTF => &NTF_TO_WGS84,
            Self::OSGB36 => &OSGB36_TO_WGS84,
            Self::Potsdam => &POTSDAM_TO_WGS84,
            Self::TokyoJapan => &TOKYO_JAPAN_TO_WGS84,
            Self::WGS72 => &WGS72_TO_WGS84,
            Self::WGS84 => &Helmert::IDENTITY,
        }
    }
}

impl fmt::Display for Datum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Datum {
    type Err = Error;

    /// Parse a datum name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|datum| datum.name().eq_ignore_ascii_case(name))
            .ok_or(Error::UnsupportedDatum)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use angle_sc::is_within_tolerance;

    #[test]
    fn test_helmert_identity() {
        let v = Vector3d::new(3_980_581.210, -111.159, 4_966_824.522);
        assert!(Helmert::IDENTITY.is_identity());
        assert!(Helmert::default().is_identity());
        assert_eq!(v, Helmert::IDENTITY.transform(&v));
        assert_eq!(v, Helmert::IDENTITY.inverse_transform(&v));
        assert!(!OSGB36_TO_WGS84.is_identity());
    }

    #[test]
    fn test_helmert_parameters() {
        let helmert = OSGB36_TO_WGS84;
        assert_eq!(Vector3d::new(446.448, -125.157, 542.060), helmert.translation());
        assert!(is_within_tolerance(
            1.0 - 20.4894e-6,
            helmert.scale_factor(),
            2.0 * f64::EPSILON
        ));

        // 1 arc second is π / 648 000 radians
        let one_second = Helmert::new(0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        assert!(is_within_tolerance(
            core::f64::consts::PI / 648_000.0,
            one_second.rotation().x,
            f64::EPSILON
        ));
    }

    #[test]
    fn test_helmert_rotation() {
        // A rotation about the z axis moves a point on the x axis towards y
        let rz = Helmert::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0);
        let v = Vector3d::new(6_378_137.0, 0.0, 0.0);
        let result = rz.transform(&v);
        assert_eq!(6_378_137.0, result.x);
        assert!(is_within_tolerance(30.922_080_775, result.y, 1.0e-6));
        assert_eq!(0.0, result.z);
    }

    #[test]
    fn test_helmert_inverse_transform() {
        let v = Vector3d::new(3_980_581.210, -111.159, 4_966_824.522);
        for datum in Datum::ALL {
            let helmert = datum.transform();
            let result = helmert.inverse_transform(&helmert.transform(&v));
            assert!((result - v).norm() < 2.0e-3, "datum: {datum}");

            // The negated parameters are a close approximation to the inverse
            let approx = helmert.inverse().transform(&helmert.transform(&v));
            assert!((approx - v).norm() < 2.0e-2, "datum: {datum}");
        }
    }

    #[test]
    fn test_datum_table() {
        assert_eq!(Datum::WGS84, Datum::default());
        assert!(Datum::WGS84.transform().is_identity());
        for datum in Datum::ALL {
            assert_eq!(datum == Datum::WGS84, datum.transform().is_identity());
        }

        assert_eq!(
            ReferenceEllipsoid::Airy1830,
            Datum::OSGB36.reference_ellipsoid()
        );
        assert_eq!(
            Datum::Potsdam.ellipsoid(),
            Datum::TokyoJapan.ellipsoid()
        );
        assert_eq!(6_378_137.0, Datum::NAD83.ellipsoid().a().0);
        assert_eq!(6_378_388.0, Datum::ED50.ellipsoid().a().0);
    }

    #[test]
    fn test_datum_names() {
        for datum in Datum::ALL {
            assert_eq!(datum.name(), datum.to_string());
            assert_eq!(Ok(datum), datum.name().parse::<Datum>());
        }
        assert_eq!(Ok(Datum::OSGB36), "osgb36".parse::<Datum>());
        assert_eq!(Ok(Datum::TokyoJapan), " TOKYOJAPAN ".parse::<Datum>());
        assert_eq!(Err(Error::UnsupportedDatum), "GDA94".parse::<Datum>());
        assert_eq!(Err(Error::UnsupportedDatum), "".parse::<Datum>());
    }
}
