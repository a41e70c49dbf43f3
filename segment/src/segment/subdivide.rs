/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::evaluate::*;
use super::*;
use crate::control_point::*;

impl Segment {
    ///
    /// Splits this segment at `t`, returning the segments covering the parameter ranges `0..t` and `t..1`
    ///
    /// Splitting an invalid segment produces two invalid segments.
    ///
    pub fn split_at(&self, t: f64) -> (Segment, Segment) {
        let second = match self.endpoints() {
            Ok((_, second)) => second,
            Err(_) => return (Segment::invalid(), Segment::invalid()),
        };

        let points = self.control_points();
        let (before, after) = de_casteljau_split(&points, t);

        match self.degree() {
            Some(Degree::Quadratic) if second.active_handle1().is_some() => {
                // The control point belongs to the end point, so it stays as the leading handle in both halves
                let first_half = Segment::new(
                    ControlPoint::new(before[0]),
                    ControlPoint::new(before[2]).with_handle1(before[1]),
                );
                let second_half = Segment::new(
                    ControlPoint::new(after[0]),
                    ControlPoint::new(after[2]).with_handle1(after[1]),
                );

                (first_half, second_half)
            }

            _ => (
                Segment::from_control_points(&before),
                Segment::from_control_points(&after),
            ),
        }
    }

    ///
    /// Returns the part of this segment between the parameters `t1` and `t2` (with `t1 < t2`)
    ///
    pub fn section(&self, t1: f64, t2: f64) -> Segment {
        if t1 <= 0.0 {
            return self.split_at(t2).0;
        }

        let (_, tail) = self.split_at(t1);

        if t2 >= 1.0 {
            tail
        } else {
            tail.split_at((t2 - t1) / (1.0 - t1)).0
        }
    }
}
