/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use std::ops::*;

///
/// A point in 2D space
///
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point2D(pub f64, pub f64);

impl Point2D {
    ///
    /// The point at (0, 0)
    ///
    #[inline]
    pub fn origin() -> Point2D {
        Point2D(0.0, 0.0)
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.0
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.1
    }

    ///
    /// Dot product of this point and another, treating both as vectors
    ///
    #[inline]
    pub fn dot(&self, other: &Point2D) -> f64 {
        self.0 * other.0 + self.1 * other.1
    }

    ///
    /// The z component of the cross product of this point and another, treating both as vectors
    ///
    /// This is positive when `other` is counter-clockwise from `self` in a y-up coordinate system (which is
    /// clockwise on a y-down screen)
    ///
    #[inline]
    pub fn cross(&self, other: &Point2D) -> f64 {
        self.0 * other.1 - self.1 * other.0
    }

    ///
    /// Length of this point when treated as a vector
    ///
    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.dot(self).sqrt()
    }

    #[inline]
    pub fn distance_to(&self, target: &Point2D) -> f64 {
        (*self - *target).magnitude()
    }

    ///
    /// Linear interpolation between this point and another (`t` is not clamped)
    ///
    #[inline]
    pub fn lerp(&self, target: &Point2D, t: f64) -> Point2D {
        *self * (1.0 - t) + *target * t
    }

    ///
    /// True if this point is within `max_distance` of another point
    ///
    #[inline]
    pub fn is_near_to(&self, target: &Point2D, max_distance: f64) -> bool {
        self.distance_to(target) <= max_distance
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.0.is_finite() && self.1.is_finite()
    }
}

impl From<(f64, f64)> for Point2D {
    #[inline]
    fn from((x, y): (f64, f64)) -> Point2D {
        Point2D(x, y)
    }
}

impl From<Point2D> for (f64, f64) {
    #[inline]
    fn from(point: Point2D) -> (f64, f64) {
        (point.0, point.1)
    }
}

impl Add<Point2D> for Point2D {
    type Output = Point2D;

    #[inline]
    fn add(self, rhs: Point2D) -> Point2D {
        Point2D(self.0 + rhs.0, self.1 + rhs.1)
    }
}

impl Sub<Point2D> for Point2D {
    type Output = Point2D;

    #[inline]
    fn sub(self, rhs: Point2D) -> Point2D {
        Point2D(self.0 - rhs.0, self.1 - rhs.1)
    }
}

impl Mul<f64> for Point2D {
    type Output = Point2D;

    #[inline]
    fn mul(self, rhs: f64) -> Point2D {
        Point2D(self.0 * rhs, self.1 * rhs)
    }
}

impl Mul<Point2D> for f64 {
    type Output = Point2D;

    #[inline]
    fn mul(self, rhs: Point2D) -> Point2D {
        Point2D(self * rhs.0, self * rhs.1)
    }
}

impl Div<f64> for Point2D {
    type Output = Point2D;

    #[inline]
    fn div(self, rhs: f64) -> Point2D {
        Point2D(self.0 / rhs, self.1 / rhs)
    }
}

impl Neg for Point2D {
    type Output = Point2D;

    #[inline]
    fn neg(self) -> Point2D {
        Point2D(-self.0, -self.1)
    }
}
