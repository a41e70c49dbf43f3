/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// Length we consider a small distance (points closer than this far apart are considered to be the same)
pub const SMALL_DISTANCE: f64 = 0.001;

/// Length we consider a 'close' distance (intersections closer than this are reported once)
pub const CLOSE_DISTANCE: f64 = 0.01;

/// Width or height given to a bounding box that would otherwise have no area (horizontal or vertical lines)
pub const DEGENERATE_RECT_EXTENT: f64 = 0.1;

/// Default maximum difference between the control polygon length and the chord length when measuring a curve
pub const DEFAULT_LENGTH_ERROR: f64 = 0.005;

/// Default relative tolerance used when searching for the parameter at a given length
pub const DEFAULT_LENGTH_TOLERANCE: f64 = 0.001;

/// Default tolerance for `is_flat()`
pub const DEFAULT_FLATNESS_TOLERANCE: f64 = 0.01;

/// Maximum number of times the recursive algorithms will subdivide a segment before settling for an estimate
pub const MAX_SUBDIVISION_DEPTH: usize = 32;

/// Maximum number of clipping steps a single intersection query will take
pub const MAX_INTERSECTION_STEPS: usize = 4096;

/// Flatness a segment must reach before its chord is used to find the single root it contains
pub const ROOT_FLATNESS_TOLERANCE: f64 = 1e-7;

/// Fat line coefficient for the control point distance of a quadratic curve
pub const FAT_LINE_QUADRATIC: f64 = 0.5;

/// Fat line coefficient for a cubic curve where both control points are on the same side of the chord
pub const FAT_LINE_CUBIC_SAME_SIDE: f64 = 0.75;

/// Fat line coefficient for a cubic curve where the control points are on opposite sides of the chord
pub const FAT_LINE_CUBIC_OPPOSITE_SIDES: f64 = 4.0 / 9.0;

/// Width of a clipped parameter range that is considered to identify a single intersection point
pub const CLIP_PARAMETER_WIDTH: f64 = 1e-5;

/// Chord length below which a segment is treated as a single point when clipping
pub const CLIP_MIN_CHORD_LENGTH: f64 = 1e-5;

/// Fraction of the parameter range a clip must remove, otherwise the clipped curve is bisected instead
pub const CLIP_MIN_SHRINK: f64 = 0.2;

/// Flatness at which the nearest point search stops subdividing, as a proportion of the largest control point
pub const NEAREST_POINT_ROOT_TOLERANCE: f64 = 1e-10;
