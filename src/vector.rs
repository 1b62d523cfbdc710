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

//! The vector module contains `Vector3d`, a 3D vector used to hold
//! geocentric Cartesian (x, y, z) coordinates in metres.

#![allow(clippy::suboptimal_flops)]

use core::ops::{Add, Mul, Neg, Sub};

/// A 3D vector of `f64` components.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector3d {
    /// The x component.
    pub x: f64,
    /// The y component.
    pub y: f64,
    /// The z component.
    pub z: f64,
}

impl Vector3d {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Constructor.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The dot product of this vector and `other`.
    /// # Examples
    /// ```
    /// use datum_geodesy::Vector3d;
    ///
    /// let a = Vector3d::new(1.0, 2.0, 3.0);
    /// let b = Vector3d::new(4.0, -5.0, 6.0);
    /// assert_eq!(12.0, a.dot(&b));
    /// ```
    #[must_use]
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// The cross product of this vector and `other`.
    #[must_use]
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// The square of the Euclidean norm of the vector.
    #[must_use]
    pub fn sq_norm(&self) -> f64 {
        self.dot(self)
    }

    /// The Euclidean norm (length) of the vector.
    #[must_use]
    pub fn norm(&self) -> f64 {
        libm::sqrt(self.sq_norm())
    }

    /// The distance from the z axis: the norm of the x and y components.
    #[must_use]
    pub fn xy_norm(&self) -> f64 {
        libm::hypot(self.x, self.y)
    }

    /// Whether all the components are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Multiply the vector by a scalar.
    #[must_use]
    pub fn scale(&self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor, self.z * factor)
    }
}

impl Add for Vector3d {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for Vector3d {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Neg for Vector3d {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f64> for Vector3d {
    type Output = Self;

    fn mul(self, factor: f64) -> Self {
        self.scale(factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_arithmetic() {
        let a = Vector3d::new(1.0, 2.0, 3.0);
        let b = Vector3d::new(4.0, -5.0, 6.0);

        assert_eq!(Vector3d::new(5.0, -3.0, 9.0), a + b);
        assert_eq!(Vector3d::new(-3.0, 7.0, -3.0), a - b);
        assert_eq!(Vector3d::new(-1.0, -2.0, -3.0), -a);
        assert_eq!(Vector3d::new(2.0, 4.0, 6.0), a * 2.0);
        assert_eq!(a * 0.5, a.scale(0.5));
        assert_eq!(a, a + Vector3d::ZERO);
    }

    #[test]
    fn test_vector_products() {
        let i = Vector3d::new(1.0, 0.0, 0.0);
        let j = Vector3d::new(0.0, 1.0, 0.0);
        let k = Vector3d::new(0.0, 0.0, 1.0);

        assert_eq!(0.0, i.dot(&j));
        assert_eq!(k, i.cross(&j));
        assert_eq!(i, j.cross(&k));
        assert_eq!(j, k.cross(&i));
        assert_eq!(-k, j.cross(&i));

        let a = Vector3d::new(1.0, 2.0, 3.0);
        let b = Vector3d::new(4.0, -5.0, 6.0);
        let c = a.cross(&b);
        assert_eq!(0.0, c.dot(&a));
        assert_eq!(0.0, c.dot(&b));
    }

    #[test]
    fn test_vector_norms() {
        let a = Vector3d::new(3.0, 4.0, 12.0);
        assert_eq!(169.0, a.sq_norm());
        assert_eq!(13.0, a.norm());
        assert_eq!(5.0, a.xy_norm());
        assert_eq!(0.0, Vector3d::ZERO.norm());

        assert!(a.is_finite());
        assert!(!Vector3d::new(f64::NAN, 0.0, 0.0).is_finite());
        assert!(!Vector3d::new(0.0, 0.0, f64::INFINITY).is_finite());
    }
}
