// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_ring --heading-base-level=0

//! Understory Ring: planar ring predicates with an optional segment R-tree.
//!
//! A *ring* is an ordered, implicitly closed sequence of points. This crate answers,
//! exactly and without tolerances:
//!
//! - does a ring contain a point or another ring, and does a segment meet its boundary?
//! - do two rings intersect?
//! - is a ring convex, and what are its bounds?
//!
//! Every query takes an `allow_on_edge` flag deciding whether boundary contact counts.
//!
//! Rings come with one of two backends sharing the [`Shape`] contract:
//!
//! - [`SimpleRing`] scans every edge for each query; no preprocessing.
//! - [`IndexedRing`] bulk loads an R-tree over its edges once at construction and narrows
//!   each query to the edges near it.
//!
//! Both return identical answers for identical input. [`Ring`] picks one at runtime from
//! [`RingOptions`].
//!
//! # Example
//!
//! ```rust
//! use understory_ring::{Point, Ring, RingOptions, Shape};
//!
//! let outer = Ring::new(
//!     [(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)].map(Point::from),
//!     RingOptions::default(),
//! );
//! let inner = Ring::new(
//!     [(2.0, 2.0), (8.0, 2.0), (8.0, 8.0), (2.0, 8.0)].map(Point::from),
//!     RingOptions { indexed: false },
//! );
//!
//! assert!(outer.convex());
//! assert!(outer.contains_point(Point::new(5.0, 5.0), false));
//! // Boundary points count only when asked to.
//! assert!(outer.contains_point(Point::new(10.0, 5.0), true));
//! assert!(!outer.contains_point(Point::new(10.0, 5.0), false));
//!
//! assert!(outer.contains_ring(&inner, false));
//! assert!(inner.intersects_ring(&outer, false));
//! ```
//!
//! ## Choosing a backend
//!
//! - `SimpleRing`: smallest and cheapest to build. Good for rings of a few dozen points or
//!   rings queried once.
//! - `IndexedRing`: `O(n log n)` build, sub-linear edge lookup per query. Good for large rings
//!   (thousands of vertices) queried repeatedly.
//!
//! ### Float semantics
//!
//! This crate assumes finite coordinates. [`Ring::try_new`] and [`Ring::from_flat_coords`]
//! reject NaN and infinities; the unchecked constructors debug-assert.

#![no_std]

extern crate alloc;

pub mod backend;
pub mod backends;
pub mod error;
pub mod predicates;
pub mod ring;
pub mod types;

pub use backend::Backend;
pub use backends::flatvec::FlatVec;
pub use backends::rtree::RTree;
pub use error::RingError;
pub use predicates::Raycast;
pub use ring::{Edges, IndexedRing, Ring, RingGeneric, RingOptions, Shape, SimpleRing};
pub use types::{Overlap, Point, Rect, Segment, Vec2};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backends_agree_on_a_concave_ring() {
        let coords = [
            (0.0, 0.0),
            (10.0, 0.0),
            (10.0, 10.0),
            (5.0, 5.0),
            (0.0, 10.0),
        ];
        let simple = SimpleRing::new(coords.map(Point::from));
        let indexed = IndexedRing::new(coords.map(Point::from));
        assert!(!simple.convex());
        assert_eq!(simple.convex(), indexed.convex());
        assert_eq!(simple.rect(), indexed.rect());
        for y in 0..=10 {
            for x in 0..=10 {
                let p = Point::new(f64::from(x), f64::from(y));
                for allow in [false, true] {
                    assert_eq!(
                        simple.contains_point(p, allow),
                        indexed.contains_point(p, allow),
                        "disagreement at {p:?} allow_on_edge={allow}"
                    );
                }
            }
        }
    }

    #[test]
    fn reflex_vertex_notch_excludes_points() {
        let ring = Ring::new(
            [(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (5.0, 5.0), (0.0, 10.0)].map(Point::from),
            RingOptions::default(),
        );
        assert!(ring.contains_point(Point::new(5.0, 2.0), false));
        assert!(!ring.contains_point(Point::new(5.0, 8.0), true));
        assert!(ring.contains_point(Point::new(5.0, 5.0), true));
        assert!(!ring.contains_point(Point::new(5.0, 5.0), false));
    }
}
