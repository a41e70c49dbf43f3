/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::super::*;
use crate::consts::*;
use crate::geo::*;

use itertools::*;
use smallvec::SmallVec;

///
/// A 'fat line': the strip around the chord of a segment that is guaranteed to contain the whole segment
///
/// The strip is described by the minimum and maximum signed distance from the chord. See "Curve intersection
/// using Bezier clipping", Sederberg and Nishita, for how the distances are chosen.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct FatLine {
    start: Point2D,
    end: Point2D,
    min_distance: f64,
    max_distance: f64,
}

impl FatLine {
    ///
    /// Creates the fat line that encloses a segment (or None if the segment is invalid)
    ///
    pub fn from_segment(segment: &Segment) -> Option<FatLine> {
        let points = segment.control_points();
        let start = *points.first()?;
        let end = *points.last()?;
        let distance = |point: &Point2D| signed_distance_from_chord(start, end, *point);

        let (min_distance, max_distance) = match points.as_slice() {
            [_, cp, _] => {
                let d = FAT_LINE_QUADRATIC * distance(cp);
                (d.min(0.0), d.max(0.0))
            }

            [_, cp1, cp2, _] => {
                let (d1, d2) = (distance(cp1), distance(cp2));
                let scale = if d1 * d2 > 0.0 {
                    FAT_LINE_CUBIC_SAME_SIDE
                } else {
                    FAT_LINE_CUBIC_OPPOSITE_SIDES
                };

                (scale * d1.min(d2).min(0.0), scale * d1.max(d2).max(0.0))
            }

            _ => (0.0, 0.0),
        };

        Some(FatLine {
            start,
            end,
            min_distance,
            max_distance,
        })
    }

    #[inline]
    pub fn distance(&self, point: Point2D) -> f64 {
        signed_distance_from_chord(self.start, self.end, point)
    }

    ///
    /// Finds the range of `t` values of another segment that might lie within this fat line
    ///
    /// The distance of the other segment from the chord is itself a bezier curve of the same degree, with control
    /// points at `(i/n, distance of control point i)`. The convex hull of those points encloses the distance curve,
    /// so the range where the hull is between the minimum and maximum distance encloses the range where the other
    /// segment is inside this fat line. Returns None if the other segment is entirely outside.
    ///
    pub fn clip(&self, other: &Segment) -> Option<(f64, f64)> {
        let points = other.control_points();
        if points.len() < 2 {
            return None;
        }

        let degree = (points.len() - 1) as f64;
        let distance_curve = points
            .iter()
            .enumerate()
            .map(|(idx, point)| Point2D((idx as f64) / degree, self.distance(*point)))
            .collect::<SmallVec<[Point2D; 4]>>();
        let hull = Segment::from_control_points(&distance_curve).convex_hull();

        let mut range: Option<(f64, f64)> = None;
        let mut include = |t: f64| {
            range = Some(match range {
                Some((min_t, max_t)) => (min_t.min(t), max_t.max(t)),
                None => (t, t),
            });
        };

        // Hull vertices inside the strip
        for vertex in hull.iter() {
            if vertex.y() >= self.min_distance && vertex.y() <= self.max_distance {
                include(vertex.x());
            }
        }

        // Places where the hull edges cross the edges of the strip
        for (from, to) in hull.iter().circular_tuple_windows() {
            for level in [self.min_distance, self.max_distance].iter() {
                let offset = Point2D(0.0, *level);
                let edge = Segment::line(*from - offset, *to - offset);

                for t in edge.roots() {
                    include(t);
                }
            }
        }

        range.map(|(min_t, max_t)| (min_t.max(0.0).min(1.0), max_t.max(0.0).min(1.0)))
    }
}
