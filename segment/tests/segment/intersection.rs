/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::{arch, distance_to_segment};
use flo_segment::*;

///
/// True if the intersections match the expected points (in any order)
///
fn matches(found: &[Point2D], expected: &[Point2D]) -> bool {
    found.len() == expected.len()
        && expected
            .iter()
            .all(|expected| found.iter().any(|point| point.is_near_to(expected, 0.01)))
}

fn upside_down_arch() -> Segment {
    Segment::cubic(
        Point2D(0.0, 75.0),
        Point2D(0.0, -25.0),
        Point2D(100.0, -25.0),
        Point2D(100.0, 75.0),
    )
}

#[test]
fn crossing_lines() {
    let line1 = Segment::line(Point2D(0.0, 0.0), Point2D(10.0, 10.0));
    let line2 = Segment::line(Point2D(0.0, 10.0), Point2D(10.0, 0.0));

    let found = line1.intersections(&line2);

    assert!(found.len() == 1);
    assert!(found[0].is_near_to(&Point2D(5.0, 5.0), 1e-9), "{:?}", found);
}

#[test]
fn lines_meeting_at_an_end_point() {
    let line1 = Segment::line(Point2D(0.0, 0.0), Point2D(10.0, 0.0));
    let line2 = Segment::line(Point2D(5.0, 0.0), Point2D(5.0, 10.0));

    let found = line1.intersections(&line2);

    assert!(matches(&found, &[Point2D(5.0, 0.0)]), "{:?}", found);
}

#[test]
fn lines_that_would_cross_if_extended() {
    let line1 = Segment::line(Point2D(0.0, 0.0), Point2D(1.0, 1.0));
    let line2 = Segment::line(Point2D(0.0, 10.0), Point2D(10.0, 0.0));

    assert!(line1.intersections(&line2).is_empty());
}

#[test]
fn parallel_lines() {
    let line1 = Segment::line(Point2D(0.0, 0.0), Point2D(10.0, 10.0));
    let line2 = Segment::line(Point2D(0.0, 1.0), Point2D(10.0, 11.0));

    assert!(line1.intersections(&line2).is_empty());
}

#[test]
fn overlapping_collinear_lines_do_not_intersect() {
    let line1 = Segment::line(Point2D(0.0, 0.0), Point2D(10.0, 0.0));
    let line2 = Segment::line(Point2D(5.0, 0.0), Point2D(15.0, 0.0));

    assert!(line1.intersections(&line2).is_empty());
    assert!(line_intersection(Point2D(0.0, 0.0), Point2D(10.0, 0.0), Point2D(5.0, 0.0), Point2D(15.0, 0.0)).is_none());
}

#[test]
fn arch_crossed_by_line() {
    let line = Segment::line(Point2D(0.0, 50.0), Point2D(100.0, 50.0));
    let found = arch().intersections(&line);

    assert!(matches(&found, &[Point2D(11.51, 50.0), Point2D(88.49, 50.0)]), "{:?}", found);
}

#[test]
fn line_crossing_arch() {
    let line = Segment::line(Point2D(0.0, 50.0), Point2D(100.0, 50.0));
    let found = line.intersections(&arch());

    assert!(matches(&found, &[Point2D(11.51, 50.0), Point2D(88.49, 50.0)]), "{:?}", found);
}

#[test]
fn short_line_that_misses_the_arch() {
    // The line is inside the arch's bounding box but never reaches the curve
    let line = Segment::line(Point2D(40.0, 10.0), Point2D(60.0, 10.0));

    assert!(arch().intersections(&line).is_empty());
    assert!(line.intersections(&arch()).is_empty());
}

#[test]
fn short_line_that_ends_before_the_crossing() {
    // The line through this segment crosses the arch, but the segment itself stops short
    let line = Segment::line(Point2D(20.0, 50.0), Point2D(80.0, 50.0));

    assert!(arch().intersections(&line).is_empty());
    assert!(line.intersections(&arch()).is_empty());
}

#[test]
fn quadratic_crossed_by_line() {
    let curve = Segment::quadratic(Point2D(0.0, 0.0), Point2D(50.0, 100.0), Point2D(100.0, 0.0));
    let line = Segment::line(Point2D(0.0, 25.0), Point2D(100.0, 25.0));

    let found = curve.intersections(&line);

    assert!(matches(&found, &[Point2D(14.6447, 25.0), Point2D(85.3553, 25.0)]), "{:?}", found);
}

#[test]
fn two_arches() {
    let found = arch().intersections(&upside_down_arch());

    assert!(matches(&found, &[Point2D(5.8058, 37.5), Point2D(94.1942, 37.5)]), "{:?}", found);
}

#[test]
fn intersections_are_symmetric() {
    let forward = arch().intersections(&upside_down_arch());
    let backward = upside_down_arch().intersections(&arch());

    assert!(matches(&forward, &backward), "{:?} != {:?}", forward, backward);
}

#[test]
fn separate_curves_do_not_intersect() {
    let moved = arch().mapped(&Transform2D::translate(0.0, 200.0));

    assert!(arch().intersections(&moved).is_empty());
}

#[test]
fn invalid_segments_do_not_intersect() {
    let line = Segment::line(Point2D(0.0, 50.0), Point2D(100.0, 50.0));

    assert!(Segment::invalid().intersections(&line).is_empty());
    assert!(line.intersections(&Segment::invalid()).is_empty());
    assert!(arch().intersections(&Segment::invalid()).is_empty());
}

#[test]
fn identical_curves_finish() {
    // Every point is an intersection, so the search has to stop once it runs out of steps
    let curve = arch();
    let found = curve.intersections(&curve);

    assert!(!found.is_empty());
    for point in found {
        assert!(distance_to_segment(&curve, point) < 0.01, "{:?}", point);
    }
}

#[test]
fn found_points_are_on_both_curves() {
    let curve1 = Segment::cubic(
        Point2D(10.0, 20.0),
        Point2D(-30.0, 50.0),
        Point2D(80.0, 90.0),
        Point2D(40.0, -10.0),
    );
    let curve2 = Segment::cubic(
        Point2D(0.0, 40.0),
        Point2D(30.0, -20.0),
        Point2D(50.0, 120.0),
        Point2D(90.0, 30.0),
    );

    let found = curve1.intersections(&curve2);

    assert!(!found.is_empty());
    for point in found {
        assert!(distance_to_segment(&curve1, point) < 0.01, "{:?}", point);
        assert!(distance_to_segment(&curve2, point) < 0.01, "{:?}", point);
    }
}
