/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

///
/// Reasons why a segment cannot describe a curve
///
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum SegmentError {
    /// The segment has no start point
    MissingFirst,

    /// The segment has no end point (for example, it follows the last point of an open path)
    MissingSecond,
}
