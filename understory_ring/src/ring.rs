// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rings: the shared [`Shape`] contract, the generic implementation over a
//! pluggable [`Backend`], and the two-variant [`Ring`] type.

use alloc::vec;
use alloc::vec::Vec;
use core::iter::FusedIterator;
use core::ops::ControlFlow;

use crate::backend::Backend;
use crate::backends::flatvec::FlatVec;
use crate::backends::rtree::RTree;
use crate::error::RingError;
use crate::predicates;
use crate::types::{Point, Rect, Segment};

/// Lazy iterator over the edges of a closed point sequence, in ring order.
///
/// - no points: no edges
/// - one point `p`: the single degenerate edge `(p, p)`
/// - two points `a, b`: the single edge `(a, b)`
/// - `n >= 3` points: `n` edges, the last one closing back to the first point
///
/// Cloning restarts nothing; it copies the current position.
#[derive(Clone, Debug)]
pub struct Edges<'a> {
    points: &'a [Point],
    next: usize,
    end: usize,
}

impl<'a> Edges<'a> {
    /// Edges of `points`, which must not repeat the first point at the end.
    pub fn new(points: &'a [Point]) -> Self {
        let end = match points.len() {
            0 => 0,
            1 | 2 => 1,
            n => n,
        };
        Self {
            points,
            next: 0,
            end,
        }
    }

    /// The edge at position `i` in ring order, if any.
    pub fn get(&self, i: usize) -> Option<Segment> {
        if i >= self.end {
            return None;
        }
        let n = self.points.len();
        let a = self.points[i];
        let b = match n {
            1 => a,
            _ => self.points[(i + 1) % n],
        };
        Some(Segment::new(a, b))
    }
}

impl Iterator for Edges<'_> {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        let seg = self.get(self.next)?;
        self.next += 1;
        Some(seg)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.end - self.next;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Edges<'_> {}

impl FusedIterator for Edges<'_> {}

/// Construction-time choice of backend.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RingOptions {
    /// Build an R-tree over the ring's edges. When false, queries scan every
    /// edge.
    pub indexed: bool,
}

impl Default for RingOptions {
    fn default() -> Self {
        Self { indexed: true }
    }
}

/// The contract every ring satisfies, whatever its backend.
///
/// Only the first four methods are backend-specific; everything else is
/// defined on top of them, so two rings over the same points answer every
/// query identically.
///
/// The `allow_on_edge` flag decides boundary contact: when true a point or
/// segment touching the boundary counts as inside / intersecting, when false
/// it does not.
pub trait Shape {
    /// The ring's points, without a closing duplicate.
    fn points(&self) -> &[Point];

    /// Tight bounds over every point; empty for an empty ring.
    fn rect(&self) -> Rect;

    /// Whether the boundary turns in a single direction at every vertex.
    /// Rings of fewer than three points are never convex.
    fn convex(&self) -> bool;

    /// Visit every edge whose bounding rectangle intersects `rect`, in
    /// unspecified order, until `visit` breaks.
    fn search(
        &self,
        rect: Rect,
        visit: impl FnMut(usize, Segment) -> ControlFlow<()>,
    ) -> ControlFlow<()>;

    /// Edges in ring order.
    fn edges(&self) -> Edges<'_> {
        Edges::new(self.points())
    }

    /// Visit every edge once in ring order, until `visit` breaks.
    fn scan(&self, mut visit: impl FnMut(usize, Segment) -> ControlFlow<()>) -> ControlFlow<()> {
        for (i, seg) in self.edges().enumerate() {
            visit(i, seg)?;
        }
        ControlFlow::Continue(())
    }

    /// True if the ring has no points.
    fn is_empty(&self) -> bool {
        self.points().is_empty()
    }

    /// Number of points.
    fn num_points(&self) -> usize {
        self.points().len()
    }

    /// Number of edges.
    fn num_segments(&self) -> usize {
        self.edges().len()
    }

    /// The edge at position `i` in ring order.
    fn segment_at(&self, i: usize) -> Option<Segment> {
        self.edges().get(i)
    }

    /// Signed area; positive for counter-clockwise winding in a y-up frame.
    fn signed_area(&self) -> f64 {
        predicates::signed_area(self.points())
    }

    /// Unsigned area.
    fn area(&self) -> f64 {
        let a = self.signed_area();
        if a < 0.0 { -a } else { a }
    }

    /// Whether the points wind clockwise in a y-up frame.
    fn clockwise(&self) -> bool {
        self.signed_area() < 0.0
    }

    /// Whether `p` lies inside the ring.
    ///
    /// A point exactly on the boundary is inside iff `allow_on_edge`,
    /// regardless of parity. Rings of one or two points contain only the
    /// points of their single edge, and only when `allow_on_edge`.
    fn contains_point(&self, p: Point, allow_on_edge: bool) -> bool {
        let rect = self.rect();
        if self.is_empty() || !rect.contains_point(p) {
            return false;
        }
        if self.num_points() < 3 {
            return allow_on_edge && self.edges().any(|seg| seg.contains_point(p));
        }
        // Only edges reaching the rightward ray from `p` can toggle parity or
        // hold `p`.
        let ray = Rect::new(p, Point::new(rect.max.x, p.y));
        let mut inside = false;
        let on = self
            .search(ray, |_, seg| {
                let hit = seg.raycast(p);
                if hit.on {
                    return ControlFlow::Break(());
                }
                if hit.inside {
                    inside = !inside;
                }
                ControlFlow::Continue(())
            })
            .is_break();
        if on { allow_on_edge } else { inside }
    }

    /// Whether `seg` meets the ring's boundary.
    ///
    /// With `allow_on_edge` any shared point counts. Without it `seg` must
    /// pass through the boundary: either some edge crosses it properly, or it
    /// enters through a vertex or along a stretch of edge, leaving parts of it
    /// strictly inside and strictly outside the ring. Contact that stays on
    /// one side does not count.
    fn intersects_segment(&self, seg: &Segment, allow_on_edge: bool) -> bool {
        let probe = seg.rect();
        if self.is_empty() || !self.rect().intersects(&probe) {
            return false;
        }
        let hit = self
            .search(probe, |_, edge| {
                let hit = if allow_on_edge {
                    edge.intersects(seg)
                } else {
                    edge.crosses(seg)
                };
                if hit {
                    ControlFlow::Break(())
                } else {
                    ControlFlow::Continue(())
                }
            })
            .is_break();
        if hit || allow_on_edge || self.num_points() < 3 {
            return hit;
        }
        let mut inside = false;
        let mut outside = false;
        for mid in uncovered_pieces(self, seg) {
            if self.contains_point(mid, false) {
                inside = true;
            } else if !self.contains_point(mid, true) {
                outside = true;
            }
            if inside && outside {
                return true;
            }
        }
        false
    }

    /// Whether every point of `other` lies inside this ring.
    ///
    /// Every vertex of `other` must pass [`Shape::contains_point`]. For a
    /// convex ring that is enough. Otherwise `other`'s edges must not leave
    /// the ring between vertices: with `allow_on_edge` each edge is cut at its
    /// boundary contacts and every piece must stay inside or on the boundary;
    /// without it no edge may touch the boundary at all.
    fn contains_ring<S: Shape>(&self, other: &S, allow_on_edge: bool) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        if !self.rect().contains_rect(&other.rect()) {
            return false;
        }
        if !other
            .points()
            .iter()
            .all(|&p| self.contains_point(p, allow_on_edge))
        {
            return false;
        }
        if self.convex() {
            return true;
        }
        if allow_on_edge {
            other.edges().all(|seg| {
                uncovered_pieces(self, &seg).all(|mid| self.contains_point(mid, true))
            })
        } else {
            !other
                .edges()
                .any(|seg| self.intersects_segment(&seg, true))
        }
    }

    /// Whether this ring and `other` overlap.
    ///
    /// With `allow_on_edge` any shared point counts, including boundary
    /// contact. Without it the interiors must overlap: a vertex strictly
    /// inside the other ring, a proper edge crossing, a stretch of edge
    /// strictly inside the other ring, or a shared stretch of boundary with
    /// both interiors on the same side.
    fn intersects_ring<S: Shape>(&self, other: &S, allow_on_edge: bool) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        if !self.rect().intersects(&other.rect()) {
            return false;
        }
        if other
            .points()
            .iter()
            .any(|&p| self.contains_point(p, allow_on_edge))
            || self
                .points()
                .iter()
                .any(|&p| other.contains_point(p, allow_on_edge))
        {
            return true;
        }
        if other
            .edges()
            .any(|seg| self.intersects_segment(&seg, allow_on_edge))
        {
            return true;
        }
        if allow_on_edge {
            return false;
        }
        edge_strictly_inside(self, other)
            || edge_strictly_inside(other, self)
            || shares_interior_side(self, other)
    }
}

/// Midpoints of the pieces of `seg` between consecutive boundary contacts
/// with `ring`, skipping pieces that run along a boundary edge.
fn uncovered_pieces<S: Shape + ?Sized>(ring: &S, seg: &Segment) -> impl Iterator<Item = Point> {
    let mut cuts = vec![0.0, 1.0];
    let mut covered: Vec<(f64, f64)> = Vec::new();
    let whole = ring.search(seg.rect(), |_, edge| {
        if let Some((t0, t1)) = predicates::contact_range(seg, &edge) {
            if t0 == 0.0 && t1 == 1.0 {
                return ControlFlow::Break(());
            }
            cuts.push(t0);
            if t1 > t0 {
                cuts.push(t1);
                covered.push((t0, t1));
            }
        }
        ControlFlow::Continue(())
    });
    let pieces: Vec<(f64, f64)> = if whole.is_break() {
        // The segment runs entirely along one edge.
        Vec::new()
    } else {
        cuts.sort_by(f64::total_cmp);
        cuts.dedup();
        cuts.windows(2)
            .map(|w| (w[0], w[1]))
            .filter(|&(t0, t1)| t0 < t1)
            .filter(|&(t0, t1)| !covered.iter().any(|&(c0, c1)| c0 <= t0 && t1 <= c1))
            .collect()
    };
    let seg = *seg;
    pieces
        .into_iter()
        .map(move |(t0, t1)| seg.point_at((t0 + t1) * 0.5))
}

/// Whether some piece of an edge of `b` lies strictly inside `a`.
fn edge_strictly_inside<A: Shape + ?Sized, B: Shape + ?Sized>(a: &A, b: &B) -> bool {
    b.edges().any(|seg| {
        let mut pieces = uncovered_pieces(a, &seg);
        pieces.any(|mid| a.contains_point(mid, false))
    })
}

/// Whether the two rings share a stretch of boundary with both interiors on
/// the same side of it. Rings without area have no interior side.
fn shares_interior_side<A: Shape + ?Sized, B: Shape + ?Sized>(a: &A, b: &B) -> bool {
    let side = |area: f64| {
        if area > 0.0 {
            1
        } else if area < 0.0 {
            -1
        } else {
            0
        }
    };
    let side_a = side(a.signed_area());
    let side_b = side(b.signed_area());
    if side_a == 0 || side_b == 0 {
        return false;
    }
    b.edges().any(|seg| {
        a.search(seg.rect(), |_, edge| match predicates::contact_range(&seg, &edge) {
            Some((t0, t1)) if t1 > t0 => {
                let along = if seg.vector().dot(edge.vector()) > 0.0 {
                    side_a
                } else {
                    -side_a
                };
                if along == side_b {
                    ControlFlow::Break(())
                } else {
                    ControlFlow::Continue(())
                }
            }
            _ => ControlFlow::Continue(()),
        })
        .is_break()
    })
}

/// A ring over a specific backend.
#[derive(Debug)]
pub struct RingGeneric<B: Backend> {
    points: Vec<Point>,
    rect: Rect,
    convex: bool,
    backend: B,
}

impl<B: Backend> RingGeneric<B> {
    /// Build a ring from an ordered point sequence.
    ///
    /// A trailing point equal to the first is the explicit form of the closing
    /// edge and is dropped. Points are assumed finite; debug builds assert.
    pub fn new(points: impl IntoIterator<Item = Point>) -> Self {
        let mut points: Vec<Point> = points.into_iter().collect();
        debug_assert!(
            points.iter().all(|p| p.is_finite()),
            "ring points must be finite"
        );
        if points.len() >= 2 && points.first() == points.last() {
            points.pop();
            tracing::trace!(points = points.len(), "dropped closing duplicate");
        }
        let (convex, rect) = predicates::convexity(&points);
        let backend = B::build(Edges::new(&points));
        Self {
            points,
            rect,
            convex,
            backend,
        }
    }

    /// The backend built over this ring's edges.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Consume the ring, returning its points.
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

impl<B: Backend> Shape for RingGeneric<B> {
    fn points(&self) -> &[Point] {
        &self.points
    }

    fn rect(&self) -> Rect {
        self.rect
    }

    fn convex(&self) -> bool {
        self.convex
    }

    fn search(
        &self,
        rect: Rect,
        mut visit: impl FnMut(usize, Segment) -> ControlFlow<()>,
    ) -> ControlFlow<()> {
        Backend::search(&self.backend, self.edges(), rect, &mut visit)
    }
}

impl RingGeneric<RTree> {
    /// Depth-first walk over every index node and leaf entry with its depth.
    pub fn traverse(&self, visit: impl FnMut(&Rect, usize) -> ControlFlow<()>) -> ControlFlow<()> {
        self.backend.traverse(visit)
    }
}

/// Ring whose queries scan every edge.
pub type SimpleRing = RingGeneric<FlatVec>;

/// Ring whose queries go through a bulk-loaded R-tree.
pub type IndexedRing = RingGeneric<RTree>;

/// A ring with its backend chosen at construction time.
#[derive(Debug)]
pub enum Ring {
    /// Linear-scan backend.
    Simple(SimpleRing),
    /// R-tree backend.
    Indexed(IndexedRing),
}

impl Ring {
    /// Build a ring, choosing the backend from `options`.
    pub fn new(points: impl IntoIterator<Item = Point>, options: RingOptions) -> Self {
        let ring = if options.indexed {
            Self::Indexed(IndexedRing::new(points))
        } else {
            Self::Simple(SimpleRing::new(points))
        };
        tracing::trace!(
            points = ring.num_points(),
            indexed = options.indexed,
            convex = ring.convex(),
            "built ring"
        );
        ring
    }

    /// Build a ring after checking that every coordinate is finite.
    pub fn try_new(
        points: impl IntoIterator<Item = Point>,
        options: RingOptions,
    ) -> Result<Self, RingError> {
        let points: Vec<Point> = points.into_iter().collect();
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(RingError::NonFinite { index });
        }
        Ok(Self::new(points, options))
    }

    /// Build a ring from interleaved `[x0, y0, x1, y1, ...]` coordinates.
    pub fn from_flat_coords(coords: &[f64], options: RingOptions) -> Result<Self, RingError> {
        if coords.len() % 2 != 0 {
            return Err(RingError::OddCoordinateCount(coords.len()));
        }
        Self::try_new(
            coords.chunks_exact(2).map(|c| Point::new(c[0], c[1])),
            options,
        )
    }

    /// Whether this ring carries an R-tree.
    pub fn is_indexed(&self) -> bool {
        matches!(self, Self::Indexed(_))
    }

    /// The options that select this ring's backend.
    pub fn options(&self) -> RingOptions {
        RingOptions {
            indexed: self.is_indexed(),
        }
    }

    /// Rebuild the ring over the other backend.
    pub fn with_options(&self, options: RingOptions) -> Self {
        Self::new(self.points().iter().copied(), options)
    }

    /// Depth-first walk over the index, if this ring has one.
    pub fn traverse(&self, visit: impl FnMut(&Rect, usize) -> ControlFlow<()>) -> ControlFlow<()> {
        match self {
            Self::Simple(_) => ControlFlow::Continue(()),
            Self::Indexed(r) => r.traverse(visit),
        }
    }
}

impl Shape for Ring {
    fn points(&self) -> &[Point] {
        match self {
            Self::Simple(r) => r.points(),
            Self::Indexed(r) => r.points(),
        }
    }

    fn rect(&self) -> Rect {
        match self {
            Self::Simple(r) => r.rect(),
            Self::Indexed(r) => r.rect(),
        }
    }

    fn convex(&self) -> bool {
        match self {
            Self::Simple(r) => r.convex(),
            Self::Indexed(r) => r.convex(),
        }
    }

    fn search(
        &self,
        rect: Rect,
        visit: impl FnMut(usize, Segment) -> ControlFlow<()>,
    ) -> ControlFlow<()> {
        match self {
            Self::Simple(r) => r.search(rect, visit),
            Self::Indexed(r) => r.search(rect, visit),
        }
    }
}

impl From<SimpleRing> for Ring {
    fn from(r: SimpleRing) -> Self {
        Self::Simple(r)
    }
}

impl From<IndexedRing> for Ring {
    fn from(r: IndexedRing) -> Self {
        Self::Indexed(r)
    }
}
