// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised when building a ring from unchecked input.

use thiserror::Error;

/// Invalid input to a checked ring constructor.
///
/// Queries on a built ring never fail; only [`Ring::try_new`](crate::Ring::try_new)
/// and [`Ring::from_flat_coords`](crate::Ring::from_flat_coords) return this.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RingError {
    /// Interleaved coordinates must come in `x, y` pairs.
    #[error("flat coordinate array has odd length {0}")]
    OddCoordinateCount(usize),

    /// A point has a NaN or infinite coordinate.
    #[error("point {index} has a non-finite coordinate")]
    NonFinite {
        /// Position of the offending point.
        index: usize,
    },
}
