/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

mod fat_line;
mod line_line;

pub use self::line_line::*;

use self::fat_line::*;
use super::*;
use crate::consts::*;
use crate::geo::*;

impl Segment {
    ///
    /// Finds the points where this segment crosses another segment
    ///
    /// Two lines are solved directly. Curves are found using bezier clipping: the other segment is clipped to the
    /// range where it can lie within the 'fat line' around this segment, then the roles of the two segments are
    /// swapped and the process repeats until the range is small enough to identify a single point. Collinear
    /// lines that overlap are not reported as intersecting.
    ///
    pub fn intersections(&self, other: &Segment) -> Vec<Point2D> {
        let mut found = vec![];
        let mut remaining_steps = MAX_INTERSECTION_STEPS;

        clip_intersections(self, other, 0, &mut remaining_steps, &mut found);

        // Subdividing exactly on an intersection finds it in both halves
        let mut merged: Vec<Point2D> = Vec::with_capacity(found.len());
        for point in found {
            if !merged.iter().any(|existing| existing.is_near_to(&point, CLOSE_DISTANCE)) {
                merged.push(point);
            }
        }

        merged
    }
}

///
/// Adds the intersections between `this` and `other` to the `found` list
///
/// `this` provides the fat line and `other` is the segment that gets clipped.
///
fn clip_intersections(
    this: &Segment,
    other: &Segment,
    depth: usize,
    remaining_steps: &mut usize,
    found: &mut Vec<Point2D>,
) {
    let (this_degree, other_degree) = match (this.degree(), other.degree()) {
        (Some(this_degree), Some(other_degree)) => (this_degree, other_degree),
        _ => return,
    };

    match (this.bounding_rect(), other.bounding_rect()) {
        (Some(this_bounds), Some(other_bounds)) if this_bounds.overlaps(&other_bounds) => {}
        _ => return,
    }

    if this_degree == Degree::Linear && other_degree == Degree::Linear {
        let (this_points, other_points) = (this.control_points(), other.control_points());

        found.extend(line_intersection(
            this_points[0],
            this_points[1],
            other_points[0],
            other_points[1],
        ));
        return;
    }

    if depth >= MAX_SUBDIVISION_DEPTH || *remaining_steps == 0 {
        depth_limit_warning!("intersections", depth);
        found.extend(other.point_at(0.5));
        return;
    }
    *remaining_steps -= 1;

    if this.chord_length() < CLIP_MIN_CHORD_LENGTH {
        // There's no chord to build a fat line from
        if is_point_like(this) {
            found.extend(direct_hit(this, other));
        } else {
            let (first_half, second_half) = other.split_at(0.5);

            clip_intersections(&first_half, this, depth + 1, remaining_steps, found);
            clip_intersections(&second_half, this, depth + 1, remaining_steps, found);
        }

        return;
    }

    let (min_t, max_t) = match FatLine::from_segment(this).and_then(|fat_line| fat_line.clip(other)) {
        Some(range) => range,
        None => return,
    };

    test_assert!(min_t <= max_t);
    segment_trace!("flo_segment: clipped to {}..{} at depth {}", min_t, max_t, depth);

    if max_t - min_t < CLIP_PARAMETER_WIDTH {
        // The fat line extends past the ends of this segment, so check the point is really on it
        let max_speed = (other_degree.order() as f64) * other.control_polygon_length();
        let tolerance = SMALL_DISTANCE.max(max_speed * CLIP_PARAMETER_WIDTH);

        found.extend(other.point_at(min_t).filter(|point| is_on_segment(*point, this, tolerance)));
    } else if max_t - min_t > 1.0 - CLIP_MIN_SHRINK {
        // Clipping isn't converging quickly enough: bisect the other segment instead
        let (first_half, second_half) = other.split_at(0.5);

        clip_intersections(&first_half, this, depth + 1, remaining_steps, found);
        clip_intersections(&second_half, this, depth + 1, remaining_steps, found);
    } else {
        let clipped = other.section(min_t, max_t);

        clip_intersections(&clipped, this, depth + 1, remaining_steps, found);
    }
}

///
/// True if every control point of a segment is within the minimum chord length of every other
///
fn is_point_like(segment: &Segment) -> bool {
    match Rect::from_points(segment.control_points()) {
        Some(extent) => extent.width() < CLIP_MIN_CHORD_LENGTH && extent.height() < CLIP_MIN_CHORD_LENGTH,
        None => false,
    }
}

///
/// Returns the position of a point-like segment if it lies on another segment
///
fn direct_hit(point_like: &Segment, other: &Segment) -> Option<Point2D> {
    point_like
        .point_at(0.5)
        .filter(|point| is_on_segment(*point, other, SMALL_DISTANCE))
}

///
/// True if the closest point on a segment to `point` is within `tolerance` of it
///
fn is_on_segment(point: Point2D, segment: &Segment, tolerance: f64) -> bool {
    segment
        .nearest_point(point)
        .and_then(|t| segment.point_at(t))
        .map(|nearest| nearest.is_near_to(&point, tolerance))
        .unwrap_or(false)
}
