/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::geo::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

///
/// A tangent handle attached to a control point
///
/// Inactive handles keep their position (so they can be switched back on by an editor) but don't affect the
/// shape of the segments they are attached to.
///
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Handle {
    pub position: Point2D,
    pub active: bool,
}

impl Handle {
    ///
    /// Creates an active handle at the specified position
    ///
    #[inline]
    pub fn active(position: Point2D) -> Handle {
        Handle { position, active: true }
    }

    ///
    /// Creates an inactive handle at the specified position
    ///
    #[inline]
    pub fn inactive(position: Point2D) -> Handle {
        Handle { position, active: false }
    }
}

///
/// An anchor point on a path, along with the handles describing the tangents of the segments on either side
///
/// `handle1` is the leading handle (it shapes the segment that ends at this point) and `handle2` is the
/// trailing handle (it shapes the segment that starts at this point).
///
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ControlPoint {
    pub point: Point2D,
    pub handle1: Option<Handle>,
    pub handle2: Option<Handle>,
}

impl ControlPoint {
    ///
    /// Creates a control point with no handles
    ///
    #[inline]
    pub fn new(point: Point2D) -> ControlPoint {
        ControlPoint {
            point,
            handle1: None,
            handle2: None,
        }
    }

    ///
    /// Returns this control point with an active leading handle
    ///
    #[inline]
    pub fn with_handle1(self, position: Point2D) -> ControlPoint {
        ControlPoint {
            handle1: Some(Handle::active(position)),
            ..self
        }
    }

    ///
    /// Returns this control point with an active trailing handle
    ///
    #[inline]
    pub fn with_handle2(self, position: Point2D) -> ControlPoint {
        ControlPoint {
            handle2: Some(Handle::active(position)),
            ..self
        }
    }

    ///
    /// The position of the leading handle, if it's present and active
    ///
    #[inline]
    pub fn active_handle1(&self) -> Option<Point2D> {
        self.handle1.filter(|handle| handle.active).map(|handle| handle.position)
    }

    ///
    /// The position of the trailing handle, if it's present and active
    ///
    #[inline]
    pub fn active_handle2(&self) -> Option<Point2D> {
        self.handle2.filter(|handle| handle.active).map(|handle| handle.position)
    }

    ///
    /// Switches the leading handle on or off (has no effect if there is no leading handle)
    ///
    pub fn set_handle1_active(&mut self, active: bool) {
        if let Some(handle) = self.handle1.as_mut() {
            handle.active = active;
        }
    }

    ///
    /// Switches the trailing handle on or off (has no effect if there is no trailing handle)
    ///
    pub fn set_handle2_active(&mut self, active: bool) {
        if let Some(handle) = self.handle2.as_mut() {
            handle.active = active;
        }
    }

    ///
    /// Applies a transformation to the anchor and both handles
    ///
    pub fn transformed(&self, transform: &Transform2D) -> ControlPoint {
        let transform_handle = |handle: Handle| Handle {
            position: transform.transform_point(handle.position),
            active: handle.active,
        };

        ControlPoint {
            point: transform.transform_point(self.point),
            handle1: self.handle1.map(transform_handle),
            handle2: self.handle2.map(transform_handle),
        }
    }
}

impl From<Point2D> for ControlPoint {
    #[inline]
    fn from(point: Point2D) -> ControlPoint {
        ControlPoint::new(point)
    }
}
