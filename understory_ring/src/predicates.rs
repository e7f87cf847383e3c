// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Exact planar predicates: raycast classification, segment intersection,
//! orientation and convexity.
//!
//! All tests are exact comparisons on `f64` without epsilons. Degenerate input
//! (coincident endpoints, horizontal and vertical segments, points exactly on a
//! vertex) is resolved by explicit rules rather than tolerance, so that the
//! same input always yields the same answer.

use crate::types::{Point, Rect, Segment};

/// Result of casting a horizontal ray rightward from a point against a segment.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Raycast {
    /// The ray crosses the segment; toggles point-in-ring parity.
    pub inside: bool,
    /// The point lies exactly on the closed segment.
    pub on: bool,
}

impl Raycast {
    const MISS: Self = Self {
        inside: false,
        on: false,
    };
    const ON: Self = Self {
        inside: false,
        on: true,
    };
    const CROSS: Self = Self {
        inside: true,
        on: false,
    };
}

/// Classify `p` against segment `(a, b)` with a rightward horizontal ray.
///
/// - `on` is set when `p` lies on the closed segment. Degenerate, horizontal
///   and vertical segments are decided by range checks; everything else by
///   comparing the parameter of `p` along each axis,
///   `(p.x - a.x) / (b.x - a.x) == (p.y - a.y) / (b.y - a.y)`.
/// - `inside` is set when the ray crosses the segment. A ray passing exactly
///   through an endpoint is nudged upward by one ulp first, so a vertex shared
///   by two edges is counted once.
pub fn raycast(p: Point, a: Point, b: Point) -> Raycast {
    let (min_y, max_y) = if a.y < b.y { (a.y, b.y) } else { (b.y, a.y) };
    if p.y < min_y || p.y > max_y {
        return Raycast::MISS;
    }
    if a == b {
        return if p == a { Raycast::ON } else { Raycast::MISS };
    }
    if a.y == b.y {
        // Horizontal: p.y == a.y here, so only the x range matters.
        let (min_x, max_x) = if a.x < b.x { (a.x, b.x) } else { (b.x, a.x) };
        if p.x >= min_x && p.x <= max_x {
            return Raycast::ON;
        }
        // A horizontal edge never contributes to parity.
        return Raycast::MISS;
    }
    if a.x == b.x && p.x == a.x {
        // Vertical, and already inside the y range.
        return Raycast::ON;
    }
    if a.x != b.x && (p.x - a.x) / (b.x - a.x) == (p.y - a.y) / (b.y - a.y) {
        return Raycast::ON;
    }

    let mut p = p;
    while p.y == a.y || p.y == b.y {
        p.y = p.y.next_up();
    }
    if p.y < min_y || p.y > max_y {
        return Raycast::MISS;
    }
    if a.x > b.x {
        if p.x >= a.x {
            return Raycast::MISS;
        }
        if p.x <= b.x {
            return Raycast::CROSS;
        }
    } else {
        if p.x >= b.x {
            return Raycast::MISS;
        }
        if p.x <= a.x {
            return Raycast::CROSS;
        }
    }
    // p.x is strictly between the endpoint x values: compare slopes from the
    // lower endpoint.
    let (lo, hi) = if a.y < b.y { (a, b) } else { (b, a) };
    if (p.y - lo.y) / (p.x - lo.x) >= (hi.y - lo.y) / (hi.x - lo.x) {
        Raycast::CROSS
    } else {
        Raycast::MISS
    }
}

/// Twice the signed area of triangle `(a, b, c)`.
///
/// Positive when `c` lies to the left of the directed line `a -> b`.
#[inline]
pub fn orient(a: Point, b: Point, c: Point) -> f64 {
    (b - a).cross(c - a)
}

/// Whether `p` lies within the bounding box of `(a, b)`.
fn in_box(p: Point, a: Point, b: Point) -> bool {
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}

/// Whether the closed segments `(a, b)` and `(c, d)` share at least one point.
///
/// Touching endpoints and collinear overlap both count.
///
/// Decided by the sides of each segment's endpoints relative to the other's
/// line. A side depends only on the line and the endpoint, so two edges
/// sharing a vertex agree on which side of `(c, d)` that vertex lies, and a
/// segment passing through the vertex is never missed by both. An endpoint
/// exactly on the other line counts when it lies within that segment's box.
pub fn segments_intersect(a: Point, b: Point, c: Point, d: Point) -> bool {
    // Bounding boxes, one axis at a time.
    if a.x.max(b.x) < c.x.min(d.x) || c.x.max(d.x) < a.x.min(b.x) {
        return false;
    }
    if a.y.max(b.y) < c.y.min(d.y) || c.y.max(d.y) < a.y.min(b.y) {
        return false;
    }
    let o1 = orient(a, b, c);
    let o2 = orient(a, b, d);
    let o3 = orient(c, d, a);
    let o4 = orient(c, d, b);
    let straddles = |x: f64, y: f64| (x > 0.0 && y < 0.0) || (x < 0.0 && y > 0.0);
    if straddles(o1, o2) && straddles(o3, o4) {
        return true;
    }
    (o1 == 0.0 && in_box(c, a, b))
        || (o2 == 0.0 && in_box(d, a, b))
        || (o3 == 0.0 && in_box(a, c, d))
        || (o4 == 0.0 && in_box(b, c, d))
}

/// Whether segments `(a, b)` and `(c, d)` cross at a single point interior to
/// both.
pub fn segments_cross(a: Point, b: Point, c: Point, d: Point) -> bool {
    let o1 = orient(a, b, c);
    let o2 = orient(a, b, d);
    let o3 = orient(c, d, a);
    let o4 = orient(c, d, b);
    ((o1 > 0.0 && o2 < 0.0) || (o1 < 0.0 && o2 > 0.0))
        && ((o3 > 0.0 && o4 < 0.0) || (o3 < 0.0 && o4 > 0.0))
}

/// Parameter range along `seg` where it touches `edge`.
///
/// Returns `(t0, t1)` with `0 <= t0 <= t1 <= 1`; a single contact point has
/// `t0 == t1`, a collinear overlap spans the overlapping stretch. `None` when
/// the segments are disjoint.
pub fn contact_range(seg: &Segment, edge: &Segment) -> Option<(f64, f64)> {
    if !seg.intersects(edge) {
        return None;
    }
    let r = seg.vector();
    let rr = r.dot(r);
    if rr == 0.0 {
        return Some((0.0, 0.0));
    }
    let s = edge.vector();
    let rxs = r.cross(s);
    if rxs != 0.0 {
        let t = ((edge.a - seg.a).cross(s) / rxs).clamp(0.0, 1.0);
        return Some((t, t));
    }
    // Collinear (or a degenerate edge lying on the segment).
    let ta = ((edge.a - seg.a).dot(r) / rr).clamp(0.0, 1.0);
    let tb = ((edge.b - seg.a).dot(r) / rr).clamp(0.0, 1.0);
    Some((ta.min(tb), ta.max(tb)))
}

/// Convexity and bounds of a closed point sequence, computed in one pass.
///
/// Walks every consecutive triple (wrapping around) and records the first
/// non-zero turn direction; any later turn of the opposite sign makes the
/// sequence concave. Fewer than three points, or points that never turn, are
/// not convex.
pub fn convexity(points: &[Point]) -> (bool, Rect) {
    let n = points.len();
    let mut rect = Rect::EMPTY;
    if n < 3 {
        for &p in points {
            rect = rect.union_point(p);
        }
        return (false, rect);
    }
    let mut convex = true;
    let mut dir = 0_i8;
    for i in 0..n {
        let a = points[i];
        rect = rect.union_point(a);
        if !convex {
            continue;
        }
        let b = points[(i + 1) % n];
        let c = points[(i + 2) % n];
        let z = (b - a).cross(c - b);
        let turn = if z < 0.0 {
            -1
        } else if z > 0.0 {
            1
        } else {
            0
        };
        if dir == 0 {
            dir = turn;
        } else if turn != 0 && turn != dir {
            convex = false;
        }
    }
    (convex && dir != 0, rect)
}

/// Whether the closed point sequence is convex. See [`convexity`].
pub fn is_convex(points: &[Point]) -> bool {
    convexity(points).0
}

/// Signed area of the closed point sequence (shoelace formula).
///
/// Positive for counter-clockwise winding in a y-up frame.
pub fn signed_area(points: &[Point]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut twice = 0.0;
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        twice += a.x * b.y - b.x * a.y;
    }
    twice * 0.5
}
