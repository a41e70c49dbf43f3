/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Basic geometric definitions
//!
//! `Point2D` is the coordinate type used throughout the crate, `Rect` describes the axis-aligned boxes returned
//! by the bounding operations and `Transform2D` describes affine transformations that can be applied to a
//! segment with `Segment::mapped()`.
//!

mod point;
mod rect;
mod transform;

pub use self::point::*;
pub use self::rect::*;
pub use self::transform::*;
