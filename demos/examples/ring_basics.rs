// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ring basics.
//!
//! Build a concave ring, query points and segments against it, and compare it
//! with a second ring.
//!
//! Run:
//! - `cargo run -p understory_ring_demos --example ring_basics`

use kurbo::Point;
use understory_ring::{Ring, RingOptions, Segment, Shape};

fn main() {
    // An L shape, given with an explicit closing point.
    let l_shape = Ring::new(
        [
            (0.0, 0.0),
            (10.0, 0.0),
            (10.0, 4.0),
            (4.0, 4.0),
            (4.0, 10.0),
            (0.0, 10.0),
            (0.0, 0.0),
        ]
        .map(Point::from),
        RingOptions::default(),
    );
    println!(
        "points={} segments={} convex={} area={} bounds={:?}",
        l_shape.num_points(),
        l_shape.num_segments(),
        l_shape.convex(),
        l_shape.area(),
        l_shape.rect().to_kurbo(),
    );

    for p in [(2.0, 2.0), (8.0, 8.0), (4.0, 6.0), (10.0, 2.0)] {
        let p = Point::from(p);
        println!(
            "contains {p:?}: strict={} on_edge_ok={}",
            l_shape.contains_point(p, false),
            l_shape.contains_point(p, true),
        );
    }

    // Touches the inner corner without crossing.
    let graze = Segment::new(Point::new(4.0, 4.0), Point::new(8.0, 8.0));
    println!(
        "graze: touching={} crossing={}",
        l_shape.intersects_segment(&graze, true),
        l_shape.intersects_segment(&graze, false),
    );

    // Every vertex of this triangle lies inside the L, but its long edge cuts
    // across the missing quadrant.
    let triangle = Ring::new(
        [(1.0, 3.0), (8.0, 3.0), (3.0, 8.0)].map(Point::from),
        RingOptions { indexed: false },
    );
    let all_vertices_inside = triangle
        .points()
        .iter()
        .all(|&p| l_shape.contains_point(p, true));
    println!(
        "triangle: vertices_inside={} contained={} intersects={}",
        all_vertices_inside,
        l_shape.contains_ring(&triangle, true),
        l_shape.intersects_ring(&triangle, false),
    );
    assert!(
        all_vertices_inside && !l_shape.contains_ring(&triangle, true),
        "the triangle leaves the L between its vertices"
    );
}
