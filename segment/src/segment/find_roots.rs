/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

// See "A bezier curve-based root-finder", Philip J Schneider, Graphics Gems

use super::evaluate::*;
use super::*;
use crate::consts::*;
use crate::geo::*;

use itertools::*;

///
/// Counts how many times a control polygon crosses the x axis
///
/// Points on the axis count as being above it. This is an upper bound on the number of times the curve itself
/// crosses the axis.
///
pub(crate) fn control_polygon_zeros(points: &[Point2D]) -> usize {
    points
        .iter()
        .map(|point| point.y() < 0.0)
        .tuple_windows()
        .filter(|(was_below, is_below)| was_below != is_below)
        .count()
}

///
/// Where the chord of a control polygon crosses the x axis
///
fn chord_root(points: &[Point2D]) -> f64 {
    let start = points[0];
    let end = points[points.len() - 1];
    let chord = end - start;

    if chord.y() != 0.0 {
        start.x() - start.y() * chord.x() / chord.y()
    } else {
        (start.x() + end.x()) * 0.5
    }
}

///
/// True if every control point is within `tolerance` of the chord, measured vertically
///
fn is_polygon_flat(points: &[Point2D], tolerance: f64) -> bool {
    let start = points[0];
    let chord = points[points.len() - 1] - start;

    if chord.x() == 0.0 {
        return true;
    }

    points.iter().all(|point| {
        let chord_y = start.y() + chord.y() * (point.x() - start.x()) / chord.x();
        (point.y() - chord_y).abs() <= tolerance
    })
}

///
/// Finds the x coordinates where an explicit bezier curve of any degree crosses the x axis
///
/// `Segment::roots()` works in the same way, but is limited to the degrees a segment can have and measures
/// flatness using the curve itself rather than its control polygon.
///
pub(crate) fn polygon_roots(points: &[Point2D], tolerance: f64) -> Vec<f64> {
    let mut roots = vec![];
    polygon_roots_with_depth(points, tolerance, 0, &mut roots);

    roots
}

fn polygon_roots_with_depth(points: &[Point2D], tolerance: f64, depth: usize, roots: &mut Vec<f64>) {
    let crossings = control_polygon_zeros(points);

    if crossings == 0 {
        return;
    }

    let solve_directly = crossings == 1 && is_polygon_flat(points, tolerance);

    if solve_directly || depth >= MAX_SUBDIVISION_DEPTH {
        if !solve_directly {
            depth_limit_warning!("polygon_roots", depth);
        }

        roots.push(chord_root(points));
    } else {
        let (before, after) = de_casteljau_split(points, 0.5);

        polygon_roots_with_depth(&before, tolerance, depth + 1, roots);
        polygon_roots_with_depth(&after, tolerance, depth + 1, roots);
    }
}

impl Segment {
    ///
    /// Finds the x coordinates where this segment crosses the x axis
    ///
    /// This is intended for explicit curves, where the x coordinates of the control points are spaced evenly
    /// between 0 and 1 (or along a sub-range of 0..1 after a split): for these the values returned are the
    /// parameters of the roots of the polynomial described by the y coordinates.
    ///
    /// Segments that cross the axis once and are flat are solved directly using their chord, and others are
    /// divided in two and solved recursively.
    ///
    pub fn roots(&self) -> Vec<f64> {
        let mut roots = vec![];
        self.roots_with_depth(0, &mut roots);

        roots
    }

    fn roots_with_depth(&self, depth: usize, roots: &mut Vec<f64>) {
        let points = self.control_points();
        let crossings = control_polygon_zeros(&points);

        if crossings == 0 {
            return;
        }

        let solve_directly = crossings == 1 && self.is_flat(ROOT_FLATNESS_TOLERANCE);

        if solve_directly || depth >= MAX_SUBDIVISION_DEPTH {
            if !solve_directly {
                depth_limit_warning!("roots", depth);
            }

            roots.push(chord_root(&points));
        } else {
            let (first_half, second_half) = self.split_at(0.5);

            first_half.roots_with_depth(depth + 1, roots);
            second_half.roots_with_depth(depth + 1, roots);
        }
    }
}
