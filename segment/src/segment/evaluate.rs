/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::*;
use crate::geo::*;

impl Segment {
    ///
    /// Finds the point at the parameter `t` along this segment
    ///
    /// `t` is not clamped: values outside of the range 0..1 extrapolate along the same polynomial.
    ///
    pub fn point_at(&self, t: f64) -> Option<Point2D> {
        let points = self.control_points();

        match points.len() {
            0 => None,
            2 => Some(points[0].lerp(&points[1], t)),
            _ => Some(de_casteljau(&points, t)),
        }
    }
}

///
/// Evaluates the bezier curve with the specified control polygon at `t` using De Casteljau's algorithm
///
/// An empty polygon evaluates to the origin.
///
pub(crate) fn de_casteljau(points: &[Point2D], t: f64) -> Point2D {
    let mut working = ControlPolygon::from_slice(points);
    let degree = working.len().saturating_sub(1);

    for level in 1..=degree {
        for idx in 0..=(degree - level) {
            working[idx] = working[idx].lerp(&working[idx + 1], t);
        }
    }

    working.first().copied().unwrap_or_else(Point2D::origin)
}

///
/// Subdivides the bezier curve with the specified control polygon at `t`
///
/// This runs a single pass of De Casteljau's algorithm: the first point of each level of the triangle makes up
/// the control polygon of the curve before `t`, and the last point of each level (read backwards) makes up the
/// control polygon of the curve after `t`.
///
pub(crate) fn de_casteljau_split(points: &[Point2D], t: f64) -> (ControlPolygon, ControlPolygon) {
    let mut working = ControlPolygon::from_slice(points);
    let mut before = ControlPolygon::new();
    let mut after = ControlPolygon::new();

    if working.is_empty() {
        return (before, after);
    }

    let degree = working.len() - 1;

    before.push(working[0]);
    after.push(working[degree]);

    for level in 1..=degree {
        for idx in 0..=(degree - level) {
            working[idx] = working[idx].lerp(&working[idx + 1], t);
        }

        before.push(working[0]);
        after.push(working[degree - level]);
    }

    after.reverse();

    test_assert!(before.len() == points.len() && after.len() == points.len());

    (before, after)
}

///
/// The control polygon of the derivative of the bezier curve with the specified control polygon
///
/// The derivative of a curve of degree `n` is a curve of degree `n-1` whose control points are the differences
/// between successive control points, scaled by `n`.
///
pub(crate) fn hodograph(points: &[Point2D]) -> ControlPolygon {
    let degree = points.len().saturating_sub(1) as f64;

    points
        .windows(2)
        .map(|pair| (pair[1] - pair[0]) * degree)
        .collect()
}
