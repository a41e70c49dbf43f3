/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::arch;
use flo_segment::*;

#[test]
fn line_point_at_midpoint() {
    let line = Segment::line(Point2D(0.0, 0.0), Point2D(10.0, 20.0));

    assert!(line.point_at(0.5) == Some(Point2D(5.0, 10.0)));
}

#[test]
fn curve_starts_and_ends_at_end_points() {
    let curve = arch();

    assert!(curve.point_at(0.0) == Some(Point2D(0.0, 0.0)));
    assert!(curve.point_at(1.0) == Some(Point2D(100.0, 0.0)));
}

#[test]
fn cubic_point_at_midpoint() {
    let mid_point = arch().point_at(0.5).unwrap();

    assert!(mid_point.is_near_to(&Point2D(50.0, 75.0), 1e-9), "{:?}", mid_point);
}

#[test]
fn cubic_matches_bernstein_polynomial() {
    let curve = Segment::cubic(
        Point2D(10.0, 20.0),
        Point2D(-30.0, 50.0),
        Point2D(80.0, 90.0),
        Point2D(40.0, -10.0),
    );
    let points = curve.control_points();

    for step in 0..=20 {
        let t = (step as f64) / 20.0;
        let s = 1.0 - t;
        let expected = points[0] * (s * s * s)
            + points[1] * (3.0 * s * s * t)
            + points[2] * (3.0 * s * t * t)
            + points[3] * (t * t * t);

        assert!(curve.point_at(t).unwrap().is_near_to(&expected, 1e-9));
    }
}

#[test]
fn quadratic_point_at_midpoint() {
    let curve = Segment::quadratic(Point2D(0.0, 0.0), Point2D(50.0, 100.0), Point2D(100.0, 0.0));

    assert!(curve.point_at(0.5).unwrap().is_near_to(&Point2D(50.0, 50.0), 1e-9));
}

#[test]
fn point_at_extrapolates() {
    let line = Segment::line(Point2D(0.0, 0.0), Point2D(10.0, 0.0));

    assert!(line.point_at(2.0).unwrap().is_near_to(&Point2D(20.0, 0.0), 1e-9));
    assert!(line.point_at(-1.0).unwrap().is_near_to(&Point2D(-10.0, 0.0), 1e-9));
}
