/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::evaluate::*;
use super::find_roots::*;
use super::*;
use crate::consts::*;
use crate::geo::*;

#[inline]
fn binomial(n: usize, k: usize) -> f64 {
    (0..k).fold(1.0, |result, i| result * ((n - i) as f64) / ((i + 1) as f64))
}

///
/// Finds the parameter of the point closest to `target` on the bezier curve with the specified control polygon
///
/// The closest point is either one of the end points or a place where the vector to the target is perpendicular
/// to the tangent of the curve. `(B(t) - target) . B'(t)` is a polynomial of degree `2n-1`, which is written as
/// an explicit bezier curve so its zeros can be found by the control polygon root finder.
///
pub fn nearest_point_on_curve(points: &[Point2D], target: Point2D) -> Option<f64> {
    if points.is_empty() {
        return None;
    }

    let degree = points.len() - 1;
    if degree == 0 {
        return Some(0.0);
    }

    let offsets = points.iter().map(|point| *point - target).collect::<ControlPolygon>();
    let tangents = hodograph(points);

    // Multiplying two bernstein polynomials of degree n and n-1 gives one of degree 2n-1
    let product_degree = 2 * degree - 1;
    let mut weights = vec![0.0; product_degree + 1];

    for (i, offset) in offsets.iter().enumerate() {
        for (j, tangent) in tangents.iter().enumerate() {
            weights[i + j] += binomial(degree, i) * binomial(degree - 1, j) / binomial(product_degree, i + j)
                * offset.dot(tangent);
        }
    }

    let scale = weights.iter().fold(0.0f64, |scale, weight| scale.max(weight.abs()));
    let explicit_curve = weights
        .iter()
        .enumerate()
        .map(|(idx, weight)| Point2D((idx as f64) / (product_degree as f64), *weight))
        .collect::<Vec<_>>();

    let distance_sq = |t: f64| {
        let offset = de_casteljau(points, t) - target;
        offset.dot(&offset)
    };

    let candidates = polygon_roots(&explicit_curve, NEAREST_POINT_ROOT_TOLERANCE * scale)
        .into_iter()
        .map(|t| t.max(0.0).min(1.0))
        .filter(|t| t.is_finite());

    let (nearest_t, _) = candidates.fold((0.0, distance_sq(0.0)), |(best_t, best_distance), t| {
        let distance = distance_sq(t);

        if distance < best_distance {
            (t, distance)
        } else {
            (best_t, best_distance)
        }
    });

    if distance_sq(1.0) < distance_sq(nearest_t) {
        Some(1.0)
    } else {
        Some(nearest_t)
    }
}

impl Segment {
    ///
    /// Finds the parameter of the point on this segment that is closest to `point`
    ///
    pub fn nearest_point(&self, point: Point2D) -> Option<f64> {
        nearest_point_on_curve(&self.control_points(), point)
    }
}
