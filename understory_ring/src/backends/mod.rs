// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend implementations for ring edge lookup.
//!
//! - `flatvec`: linear scan over the ring's edges (reference semantics).
//! - `rtree`: bulk-loaded R-tree over edge bounding rectangles.
//!
//! Bulk load note
//! --------------
//! The R-tree is packed top-down. Each level splits its entries at the median
//! of the minimum coordinate along the longer axis of their combined bounds,
//! halving `log2(M)` times to produce up to `M` children, and recurses until a
//! group fits in a leaf. Partitioning uses selection rather than a full sort,
//! so a build is `O(n log n)` overall.

pub mod flatvec;
pub mod rtree;
