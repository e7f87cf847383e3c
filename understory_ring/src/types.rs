// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive geometry types and helpers.

pub use kurbo::{Point, Vec2};

use crate::predicates::{self, Raycast};

/// Three-way relationship between a container rectangle and a probe rectangle.
///
/// Used by the R-tree search to decide between pruning a subtree
/// ([`Overlap::Disjoint`]), recursing into it ([`Overlap::Intersects`]), or
/// visiting every entry beneath it without further tests ([`Overlap::Contains`]).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Overlap {
    /// Separated on at least one axis.
    Disjoint,
    /// Touching or partially overlapping.
    Intersects,
    /// The container fully encloses the probe on every axis.
    Contains,
}

/// Axis-aligned bounding rectangle.
///
/// A rectangle built from zero points is *empty*: it is distinguishable from
/// every rectangle built from one or more points, never intersects anything
/// and is the identity for [`Rect::union`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rect {
    /// Minimum corner.
    pub min: Point,
    /// Maximum corner.
    pub max: Point,
}

impl Rect {
    /// The empty rectangle (inverted infinite bounds).
    pub const EMPTY: Self = Self {
        min: Point::new(f64::INFINITY, f64::INFINITY),
        max: Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
    };

    /// Create a rectangle from two arbitrary corners.
    pub fn new(a: Point, b: Point) -> Self {
        Self {
            min: Point::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Create a rectangle from origin and size.
    pub const fn from_xywh(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            min: Point::new(x, y),
            max: Point::new(x + w, y + h),
        }
    }

    /// Tight bounds of a point set; [`Rect::EMPTY`] when the set is empty.
    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Self {
        points
            .into_iter()
            .fold(Self::EMPTY, |acc, p| acc.union_point(p))
    }

    /// True if no point has been accumulated into this rectangle.
    pub fn is_empty(&self) -> bool {
        self.max.x < self.min.x || self.max.y < self.min.y
    }

    /// Width, or zero when empty.
    pub fn width(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.max.x - self.min.x
        }
    }

    /// Height, or zero when empty.
    pub fn height(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.max.y - self.min.y
        }
    }

    /// Center point. Meaningless for the empty rectangle.
    pub fn center(&self) -> Point {
        self.min.midpoint(self.max)
    }

    /// Smallest rectangle enclosing both.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: Point::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Point::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }

    /// Smallest rectangle enclosing this one and `p`.
    pub fn union_point(&self, p: Point) -> Self {
        Self {
            min: Point::new(self.min.x.min(p.x), self.min.y.min(p.y)),
            max: Point::new(self.max.x.max(p.x), self.max.y.max(p.y)),
        }
    }

    /// Whether the two rectangles share at least one point (edges included).
    pub fn intersects(&self, other: &Self) -> bool {
        !(self.is_empty()
            || other.is_empty()
            || self.min.x > other.max.x
            || self.max.x < other.min.x
            || self.min.y > other.max.y
            || self.max.y < other.min.y)
    }

    /// Whether `p` lies inside or on the boundary.
    pub fn contains_point(&self, p: Point) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Whether `other` lies entirely inside this rectangle (boundary included).
    pub fn contains_rect(&self, other: &Self) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && other.min.x >= self.min.x
            && other.max.x <= self.max.x
            && other.min.y >= self.min.y
            && other.max.y <= self.max.y
    }

    /// Classify `probe` relative to `self` acting as the container.
    pub fn overlap(&self, probe: &Self) -> Overlap {
        if !self.intersects(probe) {
            Overlap::Disjoint
        } else if self.contains_rect(probe) {
            Overlap::Contains
        } else {
            Overlap::Intersects
        }
    }

    /// Convert to a kurbo rectangle; `None` for the empty rectangle.
    pub fn to_kurbo(&self) -> Option<kurbo::Rect> {
        (!self.is_empty()).then(|| kurbo::Rect::from_points(self.min, self.max))
    }
}

impl Default for Rect {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl From<kurbo::Rect> for Rect {
    fn from(r: kurbo::Rect) -> Self {
        Self::new(Point::new(r.x0, r.y0), Point::new(r.x1, r.y1))
    }
}

/// A directed line segment between two points.
///
/// The endpoints may coincide, in which case the segment behaves as a point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Segment {
    /// Start point.
    pub a: Point,
    /// End point.
    pub b: Point,
}

impl Segment {
    /// Create a segment from its endpoints.
    pub const fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    /// Bounding rectangle of the two endpoints.
    pub fn rect(&self) -> Rect {
        Rect::new(self.a, self.b)
    }

    /// True if both endpoints coincide.
    pub fn is_degenerate(&self) -> bool {
        self.a == self.b
    }

    /// Direction vector `b - a`.
    pub fn vector(&self) -> Vec2 {
        self.b - self.a
    }

    /// Point at parameter `t` (`0` is `a`, `1` is `b`).
    pub fn point_at(&self, t: f64) -> Point {
        self.a.lerp(self.b, t)
    }

    /// Midpoint of the two endpoints.
    pub fn midpoint(&self) -> Point {
        self.a.midpoint(self.b)
    }

    /// Classify a rightward horizontal ray from `p` against this segment.
    pub fn raycast(&self, p: Point) -> Raycast {
        predicates::raycast(p, self.a, self.b)
    }

    /// Whether `p` lies on the closed segment.
    pub fn contains_point(&self, p: Point) -> bool {
        predicates::raycast(p, self.a, self.b).on
    }

    /// Whether the two closed segments share at least one point.
    pub fn intersects(&self, other: &Self) -> bool {
        predicates::segments_intersect(self.a, self.b, other.a, other.b)
    }

    /// Whether the segments cross at a single point interior to both.
    ///
    /// Touching at an endpoint and collinear overlap are not crossings.
    pub fn crosses(&self, other: &Self) -> bool {
        predicates::segments_cross(self.a, self.b, other.a, other.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_rect_is_distinct_and_union_identity() {
        let e = Rect::from_points(core::iter::empty());
        assert!(e.is_empty());
        assert_eq!(e, Rect::EMPTY);
        let r = Rect::from_xywh(1.0, 2.0, 3.0, 4.0);
        assert_eq!(e.union(&r), r);
        assert!(!e.intersects(&r));
        assert!(e.to_kurbo().is_none());

        let single = Rect::from_points([Point::new(3.0, 3.0)]);
        assert!(!single.is_empty());
        assert_eq!(single.width(), 0.0);
    }

    #[test]
    fn overlap_classification() {
        let outer = Rect::from_xywh(0.0, 0.0, 10.0, 10.0);
        assert_eq!(
            outer.overlap(&Rect::from_xywh(2.0, 2.0, 3.0, 3.0)),
            Overlap::Contains
        );
        assert_eq!(
            outer.overlap(&Rect::from_xywh(8.0, 8.0, 5.0, 5.0)),
            Overlap::Intersects
        );
        // Touching edges still intersect.
        assert_eq!(
            outer.overlap(&Rect::from_xywh(10.0, 0.0, 5.0, 5.0)),
            Overlap::Intersects
        );
        assert_eq!(
            outer.overlap(&Rect::from_xywh(11.0, 0.0, 5.0, 5.0)),
            Overlap::Disjoint
        );
        assert_eq!(outer.overlap(&outer), Overlap::Contains);
    }

    #[test]
    fn kurbo_round_trip() {
        let r = Rect::new(Point::new(5.0, 1.0), Point::new(-1.0, 4.0));
        assert_eq!(r.min, Point::new(-1.0, 1.0));
        let k = r.to_kurbo().unwrap();
        assert_eq!(Rect::from(k), r);
    }
}
