/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

///
/// Reports that a subdivision routine stopped at the depth limit and returned its best estimate
///
#[cfg(feature = "logging")]
macro_rules! depth_limit_warning {
    ($operation:expr, $depth:expr) => {{
        log::warn!(
            "flo_segment: {} stopped subdividing at depth {}, returning the current estimate",
            $operation,
            $depth
        );
    }};
}

#[cfg(not(feature = "logging"))]
macro_rules! depth_limit_warning {
    ($operation:expr, $depth:expr) => {{
        let _ = (&$operation, &$depth);
    }};
}

///
/// Traces a step of one of the recursive algorithms
///
#[cfg(feature = "logging")]
macro_rules! segment_trace {
    ($($arg:tt)+) => {{
        log::trace!($($arg)+);
    }};
}

#[cfg(not(feature = "logging"))]
macro_rules! segment_trace {
    ($($arg:tt)+) => {{}};
}
