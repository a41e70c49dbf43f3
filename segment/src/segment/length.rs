/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::*;
use crate::consts::*;

use itertools::*;

/// Smallest error that `length()` will try to achieve (smaller values subdivide until rounding errors dominate)
const MIN_LENGTH_ERROR: f64 = 1e-9;

impl Segment {
    ///
    /// Estimates the arc length of this segment
    ///
    /// The estimate blends the length of the chord (L0) with the length of the control polygon (L1). L1-L0 is a
    /// measure of the error, so while it's larger than `error` the segment is divided in two and the halves are
    /// measured separately. The error shrinks rapidly with each subdivision. Lines return their exact length.
    ///
    pub fn length(&self, error: f64) -> f64 {
        self.length_with_depth(error.max(MIN_LENGTH_ERROR), 0)
    }

    fn length_with_depth(&self, error: f64, depth: usize) -> f64 {
        let degree = match self.degree() {
            Some(degree) => degree,
            None => return 0.0,
        };

        let chord_length = self.chord_length();
        if degree == Degree::Linear {
            return chord_length;
        }

        let polygon_length = self.control_polygon_length();

        if polygon_length - chord_length > error {
            if depth < MAX_SUBDIVISION_DEPTH {
                let (first_half, second_half) = self.split_at(0.5);

                return first_half.length_with_depth(error, depth + 1)
                    + second_half.length_with_depth(error, depth + 1);
            }

            depth_limit_warning!("length", depth);
        }

        match degree {
            Degree::Cubic => 0.5 * chord_length + 0.5 * polygon_length,
            _ => (2.0 * chord_length + polygon_length) / 3.0,
        }
    }

    ///
    /// The total length of the lines making up the control polygon of this segment
    ///
    pub fn control_polygon_length(&self) -> f64 {
        self.control_points()
            .iter()
            .tuple_windows()
            .map(|(p1, p2)| p1.distance_to(p2))
            .sum()
    }

    ///
    /// Estimates the length of the part of this segment between the start and the parameter `t`
    ///
    pub fn length_at(&self, t: f64, error: f64) -> f64 {
        if t <= 0.0 {
            0.0
        } else if t >= 1.0 {
            self.length(error)
        } else {
            self.split_at(t).0.length(error)
        }
    }

    ///
    /// Finds the parameter at which the length of the segment up to that point is `length`
    ///
    /// This is a binary search, which stops when the length at the parameter it has found is within `tolerance`
    /// (as a proportion of `length`) of the target. Lengths of 0 or less return 0, and lengths greater than or
    /// equal to the length of the segment return 1.
    ///
    pub fn param_at_length(&self, length: f64, tolerance: f64) -> f64 {
        let degree = match self.degree() {
            Some(degree) => degree,
            None => return 0.0,
        };

        if length <= 0.0 {
            return 0.0;
        }

        if degree == Degree::Linear {
            return (length / self.chord_length()).min(1.0);
        }

        if length >= self.length(DEFAULT_LENGTH_ERROR) {
            return 1.0;
        }

        let mut start_t = 0.0;
        let mut end_t = 1.0;
        let mut mid_t = 0.5;
        let mut mid_length = self.length_at(mid_t, DEFAULT_LENGTH_ERROR);
        let mut iterations = 0;

        while ((mid_length - length) / length).abs() > tolerance {
            if iterations >= MAX_SUBDIVISION_DEPTH {
                depth_limit_warning!("param_at_length", iterations);
                break;
            }

            if mid_length < length {
                start_t = mid_t;
            } else {
                end_t = mid_t;
            }

            mid_t = 0.5 * (start_t + end_t);
            mid_length = self.length_at(mid_t, DEFAULT_LENGTH_ERROR);
            iterations += 1;
        }

        mid_t
    }
}
