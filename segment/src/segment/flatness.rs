/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::*;
use crate::geo::*;

impl Segment {
    ///
    /// True if this segment deviates from its chord by no more than `tolerance`
    ///
    /// The segment is rotated so that its chord lies along the x axis, and is then measured at its extrema: the
    /// difference between the highest and lowest points is the height of the curve. Lines (and invalid segments)
    /// are always flat.
    ///
    pub fn is_flat(&self, tolerance: f64) -> bool {
        match self.degree() {
            None | Some(Degree::Linear) => return true,
            _ => {}
        }

        let points = self.control_points();
        let start = points[0];
        let end = points[points.len() - 1];
        let chord = end - start;

        if chord.magnitude() == 0.0 {
            // A closed loop has no direction to measure against, so measure how far the control points stray
            return points.iter().all(|point| point.is_near_to(&start, tolerance));
        }

        let to_chord_space =
            Transform2D::rotate_radians(-chord.y().atan2(chord.x())) * Transform2D::translate(-start.x(), -start.y());
        let rotated = self.mapped(&to_chord_space);

        let (min_height, max_height) = rotated
            .extrema()
            .into_iter()
            .filter(|t| *t >= 0.0 && *t <= 1.0)
            .filter_map(|t| rotated.point_at(t))
            .fold((0.0f64, 0.0f64), |(min_height, max_height), point| {
                (min_height.min(point.y()), max_height.max(point.y()))
            });

        max_height - min_height <= tolerance
    }
}
