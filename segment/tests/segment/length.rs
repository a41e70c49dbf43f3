/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::{arch, sampled_length};
use flo_segment::*;

fn s_curve() -> Segment {
    Segment::cubic(
        Point2D(0.0, 0.0),
        Point2D(30.0, 100.0),
        Point2D(70.0, -100.0),
        Point2D(100.0, 0.0),
    )
}

#[test]
fn length_of_line() {
    let line = Segment::line(Point2D(0.0, 0.0), Point2D(10.0, 0.0));

    assert!(line.length(DEFAULT_LENGTH_ERROR) == 10.0);
}

#[test]
fn length_of_diagonal_line() {
    let line = Segment::line(Point2D(1.0, 1.0), Point2D(4.0, 5.0));

    assert!(line.length(DEFAULT_LENGTH_ERROR) == 5.0);
}

#[test]
fn length_of_straight_cubic() {
    let curve = Segment::line(Point2D(0.0, 0.0), Point2D(100.0, 0.0)).to_cubic();

    assert!((curve.length(DEFAULT_LENGTH_ERROR) - 100.0).abs() < 1e-9);
}

#[test]
fn length_of_arch() {
    let curve = arch();
    let length = curve.length(DEFAULT_LENGTH_ERROR);
    let expected = sampled_length(&curve, 10000);

    assert!((length - expected).abs() < 0.01, "{} != {}", length, expected);
}

#[test]
fn length_of_s_curve() {
    let curve = s_curve();
    let length = curve.length(DEFAULT_LENGTH_ERROR);
    let expected = sampled_length(&curve, 10000);

    assert!((length - expected).abs() < 0.01, "{} != {}", length, expected);
}

#[test]
fn length_of_quadratic() {
    let curve = Segment::quadratic(Point2D(0.0, 0.0), Point2D(50.0, 100.0), Point2D(100.0, 0.0));
    let length = curve.length(DEFAULT_LENGTH_ERROR);
    let expected = sampled_length(&curve, 10000);

    assert!((length - expected).abs() < 0.01, "{} != {}", length, expected);
}

#[test]
fn length_is_between_chord_and_control_polygon() {
    let curve = arch();
    let length = curve.length(DEFAULT_LENGTH_ERROR);

    assert!(curve.control_polygon_length() == 300.0);
    assert!(length > curve.chord_length());
    assert!(length < curve.control_polygon_length());
}

#[test]
fn halves_add_up_to_whole() {
    let curve = arch();
    let (first_half, second_half) = curve.split_at(0.5);

    let whole = curve.length(DEFAULT_LENGTH_ERROR);
    let halves = first_half.length(DEFAULT_LENGTH_ERROR) + second_half.length(DEFAULT_LENGTH_ERROR);

    assert!((whole - halves).abs() < 0.005);
}

#[test]
fn uneven_split_adds_up_to_whole() {
    let curve = s_curve();
    let (first_part, second_part) = curve.split_at(0.3);

    let whole = curve.length(DEFAULT_LENGTH_ERROR);
    let parts = first_part.length(DEFAULT_LENGTH_ERROR) + second_part.length(DEFAULT_LENGTH_ERROR);

    assert!((whole - parts).abs() < 0.01, "{} != {}", whole, parts);
}

#[test]
fn length_at_ends() {
    let curve = arch();

    assert!(curve.length_at(0.0, DEFAULT_LENGTH_ERROR) == 0.0);
    assert!(curve.length_at(-1.0, DEFAULT_LENGTH_ERROR) == 0.0);
    assert!(curve.length_at(1.0, DEFAULT_LENGTH_ERROR) == curve.length(DEFAULT_LENGTH_ERROR));
}

#[test]
fn length_at_midpoint_of_symmetric_curve() {
    let curve = arch();
    let half = curve.length_at(0.5, DEFAULT_LENGTH_ERROR);

    assert!((half * 2.0 - curve.length(DEFAULT_LENGTH_ERROR)).abs() < 1e-6);
}

#[test]
fn param_at_length_of_line() {
    let line = Segment::line(Point2D(0.0, 0.0), Point2D(10.0, 0.0));

    assert!((line.param_at_length(5.0, DEFAULT_LENGTH_TOLERANCE) - 0.5).abs() < 1e-12);
    assert!(line.param_at_length(20.0, DEFAULT_LENGTH_TOLERANCE) == 1.0);
}

#[test]
fn param_at_length_out_of_range() {
    let curve = arch();
    let length = curve.length(DEFAULT_LENGTH_ERROR);

    assert!(curve.param_at_length(0.0, DEFAULT_LENGTH_TOLERANCE) == 0.0);
    assert!(curve.param_at_length(-5.0, DEFAULT_LENGTH_TOLERANCE) == 0.0);
    assert!(curve.param_at_length(length, DEFAULT_LENGTH_TOLERANCE) == 1.0);
    assert!(curve.param_at_length(length * 2.0, DEFAULT_LENGTH_TOLERANCE) == 1.0);
}

#[test]
fn param_at_half_length_of_symmetric_curve() {
    let curve = arch();
    let half_length = curve.length(DEFAULT_LENGTH_ERROR) * 0.5;
    let t = curve.param_at_length(half_length, DEFAULT_LENGTH_TOLERANCE);

    assert!((t - 0.5).abs() < 0.01, "{}", t);
}

#[test]
fn param_at_length_is_inverse_of_length_at() {
    let curve = s_curve();
    let length = curve.length(DEFAULT_LENGTH_ERROR);

    for &proportion in &[0.1, 0.25, 0.6, 0.9] {
        let target = length * proportion;
        let t = curve.param_at_length(target, DEFAULT_LENGTH_TOLERANCE);
        let actual = curve.length_at(t, DEFAULT_LENGTH_ERROR);

        assert!(
            (actual - target).abs() <= target * DEFAULT_LENGTH_TOLERANCE,
            "{} != {} (t = {})",
            actual,
            target,
            t
        );
    }
}
