/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Segments of a path
//!
//! A `Segment` joins two `ControlPoint`s. Its degree is worked out from the handles that face into the
//! segment (the trailing handle of the first point and the leading handle of the second point):
//!
//! * no active handles: a line
//! * one active handle: a quadratic curve, with that handle as its single control point
//! * two active handles: a cubic curve
//!
//! The operations are grouped by what they do: evaluation and subdivision, bounding boxes, flatness, length,
//! convex hulls, roots and intersections.
//!

mod bounds;
mod convex_hull;
mod error;
mod evaluate;
mod find_roots;
mod flatness;
mod intersection;
mod length;
mod nearest_point;
mod subdivide;

pub use self::error::*;
pub use self::intersection::*;
pub use self::nearest_point::*;

use crate::control_point::*;
use crate::geo::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use smallvec::{smallvec, SmallVec};

///
/// The points making up the control polygon of a segment (between 2 and 4 points)
///
pub type ControlPolygon = SmallVec<[Point2D; 4]>;

///
/// The degree of the polynomial described by a segment
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Degree {
    Linear,
    Quadratic,
    Cubic,
}

impl Degree {
    ///
    /// The order of the polynomial (1, 2 or 3)
    ///
    #[inline]
    pub fn order(self) -> usize {
        match self {
            Degree::Linear => 1,
            Degree::Quadratic => 2,
            Degree::Cubic => 3,
        }
    }
}

///
/// A segment of a path, joining two control points
///
/// A segment that is missing either of its points is 'invalid': queries on an invalid segment return
/// empty results instead of failing.
///
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Segment {
    pub first: Option<ControlPoint>,
    pub second: Option<ControlPoint>,
}

impl Segment {
    ///
    /// Creates a segment joining two control points
    ///
    #[inline]
    pub fn new(first: ControlPoint, second: ControlPoint) -> Segment {
        Segment {
            first: Some(first),
            second: Some(second),
        }
    }

    ///
    /// Creates a segment with no points
    ///
    #[inline]
    pub fn invalid() -> Segment {
        Segment {
            first: None,
            second: None,
        }
    }

    ///
    /// Creates a straight line segment
    ///
    pub fn line(p0: Point2D, p1: Point2D) -> Segment {
        Segment::new(ControlPoint::new(p0), ControlPoint::new(p1))
    }

    ///
    /// Creates a quadratic segment (the control point becomes the trailing handle of the first point)
    ///
    pub fn quadratic(p0: Point2D, cp: Point2D, p1: Point2D) -> Segment {
        Segment::new(ControlPoint::new(p0).with_handle2(cp), ControlPoint::new(p1))
    }

    ///
    /// Creates a cubic segment
    ///
    pub fn cubic(p0: Point2D, cp1: Point2D, cp2: Point2D, p1: Point2D) -> Segment {
        Segment::new(
            ControlPoint::new(p0).with_handle2(cp1),
            ControlPoint::new(p1).with_handle1(cp2),
        )
    }

    ///
    /// Creates a segment from its control polygon (2, 3 or 4 points: any other number of points produces an
    /// invalid segment)
    ///
    pub fn from_control_points(points: &[Point2D]) -> Segment {
        match points {
            [p0, p1] => Segment::line(*p0, *p1),
            [p0, cp, p1] => Segment::quadratic(*p0, *cp, *p1),
            [p0, cp1, cp2, p1] => Segment::cubic(*p0, *cp1, *cp2, *p1),
            _ => Segment::invalid(),
        }
    }

    ///
    /// Creates the quadratic segment that starts at `p0`, ends at `p2` and passes through `p1` at the
    /// parameter `t`
    ///
    /// The result is invalid if `t` is not strictly between 0 and 1.
    ///
    pub fn interpolate(p0: Point2D, p1: Point2D, p2: Point2D, t: f64) -> Segment {
        if !(t > 0.0 && t < 1.0) {
            return Segment::invalid();
        }

        // B(t) = (1-t)^2*p0 + 2t(1-t)*cp + t^2*p2, solved for cp
        let one_minus_t = 1.0 - t;
        let cp = (p1 - p0 * (one_minus_t * one_minus_t) - p2 * (t * t)) / (2.0 * t * one_minus_t);

        Segment::quadratic(p0, cp, p2)
    }

    #[inline]
    pub fn first(&self) -> Option<&ControlPoint> {
        self.first.as_ref()
    }

    #[inline]
    pub fn second(&self) -> Option<&ControlPoint> {
        self.second.as_ref()
    }

    #[inline]
    pub fn set_first(&mut self, first: Option<ControlPoint>) {
        self.first = first;
    }

    #[inline]
    pub fn set_second(&mut self, second: Option<ControlPoint>) {
        self.second = second;
    }

    ///
    /// Returns both of the points of this segment, or the reason this segment is invalid
    ///
    pub fn endpoints(&self) -> Result<(&ControlPoint, &ControlPoint), SegmentError> {
        let first = self.first.as_ref().ok_or(SegmentError::MissingFirst)?;
        let second = self.second.as_ref().ok_or(SegmentError::MissingSecond)?;

        Ok((first, second))
    }

    ///
    /// True if this segment has both of its points
    ///
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.endpoints().is_ok()
    }

    ///
    /// The degree of this segment, or None if it is invalid
    ///
    pub fn degree(&self) -> Option<Degree> {
        let (first, second) = self.endpoints().ok()?;

        match (first.active_handle2(), second.active_handle1()) {
            (None, None) => Some(Degree::Linear),
            (Some(_), Some(_)) => Some(Degree::Cubic),
            _ => Some(Degree::Quadratic),
        }
    }

    ///
    /// True if this segment is a quadratic or cubic curve
    ///
    #[inline]
    pub fn is_curve(&self) -> bool {
        matches!(self.degree(), Some(Degree::Quadratic) | Some(Degree::Cubic))
    }

    ///
    /// The control polygon of this segment, in order from the start point to the end point
    ///
    /// This is empty for an invalid segment.
    ///
    pub fn control_points(&self) -> ControlPolygon {
        let mut points = smallvec![];

        if let Ok((first, second)) = self.endpoints() {
            points.push(first.point);

            match (first.active_handle2(), second.active_handle1()) {
                (Some(cp1), Some(cp2)) => {
                    points.push(cp1);
                    points.push(cp2);
                }

                (Some(cp), None) | (None, Some(cp)) => points.push(cp),
                (None, None) => {}
            }

            points.push(second.point);
        }

        points
    }

    ///
    /// The distance between the start and end point of this segment
    ///
    pub fn chord_length(&self) -> f64 {
        match self.endpoints() {
            Ok((first, second)) => first.point.distance_to(&second.point),
            Err(_) => 0.0,
        }
    }

    ///
    /// The signed distance of a point from the chord of this segment
    ///
    /// Points on the clockwise side of the chord (in a y-up coordinate system) have a positive distance. If
    /// the chord has no length, this is the distance to the start point.
    ///
    pub fn distance_from_chord(&self, point: Point2D) -> Option<f64> {
        let (first, second) = self.endpoints().ok()?;

        Some(signed_distance_from_chord(first.point, second.point, point))
    }

    ///
    /// Converts this segment to a cubic curve describing the same shape
    ///
    /// Lines get handles one third and two thirds along their length, so the parameterisation of the curve
    /// is the same as that of the line. Invalid segments stay invalid.
    ///
    pub fn to_cubic(&self) -> Segment {
        let points = self.control_points();

        match points.as_slice() {
            [p0, p1] => {
                let offset = (*p1 - *p0) / 3.0;
                Segment::cubic(*p0, *p0 + offset, *p1 - offset, *p1)
            }

            [p0, cp, p1] => {
                let cp1 = *p0 + (*cp - *p0) * (2.0 / 3.0);
                let cp2 = *cp + (*p1 - *cp) * (1.0 / 3.0);
                Segment::cubic(*p0, cp1, cp2, *p1)
            }

            _ => *self,
        }
    }

    ///
    /// Applies a transformation to every point of this segment
    ///
    pub fn mapped(&self, transform: &Transform2D) -> Segment {
        Segment {
            first: self.first.map(|point| point.transformed(transform)),
            second: self.second.map(|point| point.transformed(transform)),
        }
    }
}

///
/// Signed distance of a point from the line through `start` and `end`
///
#[inline]
pub(crate) fn signed_distance_from_chord(start: Point2D, end: Point2D, point: Point2D) -> f64 {
    let chord = end - start;
    let relative = point - start;
    let chord_length = chord.magnitude();

    if chord_length == 0.0 {
        relative.magnitude()
    } else {
        -chord.cross(&relative) / chord_length
    }
}
