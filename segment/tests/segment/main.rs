/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

#![allow(clippy::all)] // Tests are lower priority to fix

mod evaluate;
mod intersection;
mod length;

use flo_segment::*;

///
/// The cubic used by a lot of the tests: an arch from (0,0) to (100,0), reaching y=75 at t=0.5
///
pub fn arch() -> Segment {
    Segment::cubic(
        Point2D(0.0, 0.0),
        Point2D(0.0, 100.0),
        Point2D(100.0, 100.0),
        Point2D(100.0, 0.0),
    )
}

///
/// Measures a segment by summing the lengths of a large number of straight pieces
///
pub fn sampled_length(segment: &Segment, num_samples: usize) -> f64 {
    let mut length = 0.0;
    let mut last = segment.point_at(0.0).unwrap();

    for sample in 1..=num_samples {
        let next = segment.point_at((sample as f64) / (num_samples as f64)).unwrap();
        length += last.distance_to(&next);
        last = next;
    }

    length
}

///
/// The distance from a point to the closest point on a segment
///
pub fn distance_to_segment(segment: &Segment, point: Point2D) -> f64 {
    let t = segment.nearest_point(point).unwrap();

    segment.point_at(t).unwrap().distance_to(&point)
}
