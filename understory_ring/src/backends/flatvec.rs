// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flat backend with linear scans. No preprocessing; the reference semantics
//! for every other backend.

use core::ops::ControlFlow;

use crate::backend::{Backend, EdgeVisitor};
use crate::ring::Edges;
use crate::types::Rect;

/// Linear-scan backend: searches by walking every edge in ring order and
/// filtering by rectangle.
#[derive(Copy, Clone, Debug, Default)]
pub struct FlatVec {
    _priv: (),
}

impl Backend for FlatVec {
    fn build(_edges: Edges<'_>) -> Self {
        Self::default()
    }

    fn search(&self, edges: Edges<'_>, rect: Rect, visit: &mut EdgeVisitor<'_>) -> ControlFlow<()> {
        for (i, seg) in edges.enumerate() {
            if seg.rect().intersects(&rect) {
                visit(i, seg)?;
            }
        }
        ControlFlow::Continue(())
    }
}
