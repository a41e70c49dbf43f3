/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::point::*;
use crate::consts::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

///
/// An axis-aligned rectangle
///
/// Rectangles are described in path coordinates, so 'top' is the edge with the smallest y coordinate.
///
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    ///
    /// Creates a rectangle from its edges
    ///
    #[inline]
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Rect {
        Rect { left, top, right, bottom }
    }

    ///
    /// Creates the rectangle with two points as opposite corners
    ///
    pub fn from_corners(p1: Point2D, p2: Point2D) -> Rect {
        Rect {
            left: p1.x().min(p2.x()),
            top: p1.y().min(p2.y()),
            right: p1.x().max(p2.x()),
            bottom: p1.y().max(p2.y()),
        }
    }

    ///
    /// Creates the smallest rectangle enclosing a set of points (or None if there are no points)
    ///
    pub fn from_points<Points: IntoIterator<Item = Point2D>>(points: Points) -> Option<Rect> {
        let mut points = points.into_iter();
        let first = points.next()?;

        Some(points.fold(Rect::from_corners(first, first), |rect, point| {
            rect.union_point(point)
        }))
    }

    ///
    /// Returns this rectangle grown to include a point
    ///
    #[inline]
    pub fn union_point(self, point: Point2D) -> Rect {
        Rect {
            left: self.left.min(point.x()),
            top: self.top.min(point.y()),
            right: self.right.max(point.x()),
            bottom: self.bottom.max(point.y()),
        }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    #[inline]
    pub fn top_left(&self) -> Point2D {
        Point2D(self.left, self.top)
    }

    #[inline]
    pub fn bottom_right(&self) -> Point2D {
        Point2D(self.right, self.bottom)
    }

    #[inline]
    pub fn center(&self) -> Point2D {
        Point2D((self.left + self.right) * 0.5, (self.top + self.bottom) * 0.5)
    }

    ///
    /// True if this rectangle has no area
    ///
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    ///
    /// Gives a rectangle with zero width or height a small extent so that it still has an area
    ///
    /// The rectangle grows to the right and downwards, so the top-left corner stays where it is.
    ///
    pub fn inflate_degenerate(self) -> Rect {
        let mut rect = self;

        if rect.width() == 0.0 {
            rect.right = rect.left + DEGENERATE_RECT_EXTENT;
        }
        if rect.height() == 0.0 {
            rect.bottom = rect.top + DEGENERATE_RECT_EXTENT;
        }

        rect
    }

    ///
    /// True if this rectangle overlaps another (rectangles that touch at an edge are considered to overlap)
    ///
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left <= other.right
            && self.right >= other.left
            && self.top <= other.bottom
            && self.bottom >= other.top
    }

    ///
    /// True if a point is inside this rectangle or on its edge
    ///
    #[inline]
    pub fn contains_point(&self, point: &Point2D) -> bool {
        point.x() >= self.left
            && point.x() <= self.right
            && point.y() >= self.top
            && point.y() <= self.bottom
    }

    ///
    /// True if the other rectangle is entirely inside this one
    ///
    #[inline]
    pub fn contains_rect(&self, other: &Rect) -> bool {
        self.contains_point(&other.top_left()) && self.contains_point(&other.bottom_right())
    }
}
