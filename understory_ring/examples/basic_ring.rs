// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of Understory Ring: build, query a point, search edges.

use std::ops::ControlFlow;

use understory_ring::{Point, Rect, Ring, RingOptions, Shape};

fn main() {
    let ring = Ring::new(
        [(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)].map(Point::from),
        RingOptions::default(),
    );

    println!("inside (5,5): {}", ring.contains_point(Point::new(5.0, 5.0), false));
    println!("on edge (10,5): {}", ring.contains_point(Point::new(10.0, 5.0), true));

    // Edges near the right side.
    let mut hits = Vec::new();
    let _ = ring.search(Rect::from_xywh(9.0, 4.0, 2.0, 2.0), |i, seg| {
        hits.push((i, seg));
        ControlFlow::Continue(())
    });
    println!("edges near (10,5): {:?}", hits);
}
