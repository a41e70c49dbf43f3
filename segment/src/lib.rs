/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # flo_segment
//!
//! `flo_segment` is a geometry kernel for the individual segments of a vector path. A segment joins two
//! control points: each control point is an anchor with up to two tangent handles, and the handles that
//! face into the segment decide whether it is a line, a quadratic or a cubic bezier curve.
//!
//! ```
//! # use flo_segment::*;
//! #
//! let curve           = Segment::cubic(Point2D(0.0, 0.0), Point2D(0.0, 100.0), Point2D(100.0, 100.0), Point2D(100.0, 0.0));
//! let line            = Segment::line(Point2D(0.0, 50.0), Point2D(100.0, 50.0));
//!
//! let mid_point       = curve.point_at(0.5);
//! let (left, right)   = curve.split_at(0.5);
//! let length          = curve.length(DEFAULT_LENGTH_ERROR);
//! let bounds          = curve.bounding_rect();
//! let crossings       = curve.intersections(&line);
//!
//! assert!(crossings.len() == 2);
//! ```
//!
//! All of the operations are pure functions of the segment value: a `Segment` is created for a query
//! and thrown away afterwards. A segment that is missing one of its endpoints is 'invalid' (this happens,
//! for example, at the end of an open path) and every query on it returns an empty or neutral result
//! rather than failing.
//!

#![allow(clippy::needless_range_loop)] // De Casteljau is easier to follow with explicit indexes

#[macro_use]
mod test_assert;
#[macro_use]
mod log_macros;

pub mod consts;
pub mod control_point;
pub mod geo;
pub mod segment;

pub use self::consts::*;
pub use self::control_point::*;
pub use self::geo::*;
pub use self::segment::*;
