/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::evaluate::*;
use super::*;
use crate::geo::*;

use ::roots::{find_roots_quadratic, Roots};
use itertools::*;
use smallvec::SmallVec;

impl Segment {
    ///
    /// The bounding box of the control polygon of this segment
    ///
    /// This is cheap to calculate but can be much larger than the curve itself. Horizontal and vertical boxes are
    /// given a small extent so they always have an area.
    ///
    pub fn control_point_rect(&self) -> Option<Rect> {
        Rect::from_points(self.control_points()).map(Rect::inflate_degenerate)
    }

    ///
    /// The tight bounding box of this segment
    ///
    /// This starts from the box around the end points and grows it to include the points where the curve has
    /// a minimum or maximum in either direction. Horizontal and vertical boxes are given a small extent so they
    /// always have an area.
    ///
    pub fn bounding_rect(&self) -> Option<Rect> {
        let points = self.control_points();
        let start = *points.first()?;
        let end = *points.last()?;

        let rect = self
            .extrema()
            .into_iter()
            .filter(|t| *t >= 0.0 && *t <= 1.0)
            .map(|t| de_casteljau(&points, t))
            .fold(Rect::from_corners(start, end), |rect, point| rect.union_point(point));

        Some(rect.inflate_degenerate())
    }

    ///
    /// The parameters where this segment might have a minimum or maximum in the x or y direction
    ///
    /// The derivative of the curve is found by taking the differences between successive control points, and
    /// these values are where it crosses zero for each axis. Values outside of the range 0..1 are not removed,
    /// and lines have no extrema.
    ///
    pub fn extrema(&self) -> SmallVec<[f64; 4]> {
        let points = self.control_points();
        let differences = points
            .iter()
            .tuple_windows()
            .map(|(p1, p2)| *p2 - *p1)
            .collect::<SmallVec<[Point2D; 3]>>();
        let mut params = SmallVec::new();

        match differences.as_slice() {
            [d0, d1] => {
                // Quadratic: the derivative is the line d0 + (d1-d0)*t
                let a = *d1 - *d0;

                if a.x() != 0.0 {
                    params.push(-d0.x() / a.x());
                }
                if a.y() != 0.0 {
                    params.push(-d0.y() / a.y());
                }
            }

            [d0, d1, d2] => {
                // Cubic: the derivative is the quadratic a*t^2 + b*t + c
                let a = *d2 - *d1 * 2.0 + *d0;
                let b = (*d1 - *d0) * 2.0;
                let c = *d0;

                derivative_zeros(a.x(), b.x(), c.x(), &mut params);
                derivative_zeros(a.y(), b.y(), c.y(), &mut params);
            }

            _ => {}
        }

        params.retain(|t| t.is_finite());
        params
    }
}

///
/// Adds the parameters where a*t^2 + b*t + c is zero to a list of parameters
///
/// A negative discriminant is treated as zero, which places a candidate at the turning point of the derivative.
///
fn derivative_zeros(a: f64, b: f64, c: f64, params: &mut SmallVec<[f64; 4]>) {
    match find_roots_quadratic(a, b, c) {
        Roots::No(_) if a != 0.0 => params.push(-b / (2.0 * a)),
        roots => params.extend(roots.as_ref().iter().copied()),
    }
}
