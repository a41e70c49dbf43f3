/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::geo::*;

///
/// Finds where the line from `a` to `b` crosses the line from `c` to `d`
///
/// The lines are `a + r*(b-a)` and `c + s*(d-c)`: setting these equal gives a pair of linear equations in `r` and
/// `s`, and the point is only returned if both are in the range 0..1. Parallel and collinear lines do not
/// intersect (overlapping collinear lines are not reported).
///
pub fn line_intersection(a: Point2D, b: Point2D, c: Point2D, d: Point2D) -> Option<Point2D> {
    let ab = b - a;
    let cd = d - c;
    let ca = a - c;

    let denominator = ab.x() * cd.y() - ab.y() * cd.x();
    if denominator == 0.0 {
        return None;
    }

    let r = (ca.y() * cd.x() - ca.x() * cd.y()) / denominator;
    let s = (ca.y() * ab.x() - ca.x() * ab.y()) / denominator;

    if !(0.0..=1.0).contains(&r) || !(0.0..=1.0).contains(&s) {
        return None;
    }

    Some(a + ab * r)
}
