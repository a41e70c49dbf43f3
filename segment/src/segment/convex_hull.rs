/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::*;
use crate::geo::*;

use smallvec::{smallvec, SmallVec};

///
/// True if `point` is outside the edge running from `from` to `to` of a hull produced by `convex_hull()`
///
#[inline]
fn is_outside_edge(from: Point2D, to: Point2D, point: Point2D) -> bool {
    (to - from).cross(&(point - from)) > 0.0
}

impl Segment {
    ///
    /// Returns the convex hull of the control polygon of this segment
    ///
    /// The hull is ordered counter-clockwise when the y axis points down the screen (clockwise in a y-up
    /// coordinate system). Lines return both of their end points. Invalid segments have an empty hull.
    ///
    pub fn convex_hull(&self) -> SmallVec<[Point2D; 4]> {
        let points = self.control_points();

        match points.as_slice() {
            [p0, p1] => smallvec![*p0, *p1],

            [p0, cp, p1] => {
                if is_outside_edge(*p0, *p1, *cp) {
                    smallvec![*p0, *cp, *p1]
                } else {
                    smallvec![*p0, *p1, *cp]
                }
            }

            [p0, cp1, cp2, p1] => {
                // Start with a triangle made from the end points and the first control point
                let mut hull: SmallVec<[Point2D; 4]> = if is_outside_edge(*p0, *p1, *cp1) {
                    smallvec![*p0, *cp1, *p1]
                } else {
                    smallvec![*p0, *p1, *cp1]
                };

                // The second control point can be inside the triangle, outside one edge (it becomes a new vertex
                // on that edge) or outside two edges (it replaces the vertex between them)
                let outside = [
                    is_outside_edge(hull[0], hull[1], *cp2),
                    is_outside_edge(hull[1], hull[2], *cp2),
                    is_outside_edge(hull[2], hull[0], *cp2),
                ];

                for edge in 0..3 {
                    let prev = (edge + 2) % 3;
                    let next = (edge + 1) % 3;

                    if outside[edge] && !outside[prev] && !outside[next] {
                        hull.insert(edge + 1, *cp2);
                        break;
                    }

                    if outside[edge] && outside[next] {
                        hull[next] = *cp2;
                        break;
                    }

                    if outside[edge] && outside[prev] {
                        hull[edge] = *cp2;
                        break;
                    }
                }

                hull
            }

            _ => smallvec![],
        }
    }
}
