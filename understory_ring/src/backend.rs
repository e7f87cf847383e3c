// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend trait for ring edge lookup.

use core::fmt::Debug;
use core::ops::ControlFlow;

use crate::ring::Edges;
use crate::types::{Rect, Segment};

/// Edge visitor used at the backend seam: receives the edge's position in ring
/// order and the edge itself, and returns whether to keep going.
pub type EdgeVisitor<'v> = dyn FnMut(usize, Segment) -> ControlFlow<()> + 'v;

/// Spatial strategy used by [`RingGeneric`](crate::RingGeneric) to narrow edge
/// candidates for a query rectangle.
///
/// A backend is built once from the ring's edges and is read-only afterwards.
pub trait Backend: Debug + Sized {
    /// Build the backend over the ring's edges.
    fn build(edges: Edges<'_>) -> Self;

    /// Visit every edge whose bounding rectangle intersects `rect`.
    ///
    /// Order is unspecified. Returns [`ControlFlow::Break`] if the visitor
    /// stopped the walk.
    fn search(&self, edges: Edges<'_>, rect: Rect, visit: &mut EdgeVisitor<'_>) -> ControlFlow<()>;
}
