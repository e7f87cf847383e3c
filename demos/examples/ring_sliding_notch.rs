// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slide a small square across a ring with a thin notch and report how the
//! containment and intersection predicates change at each step.
//!
//! Run:
//! - `cargo run -p understory_ring_demos --example ring_sliding_notch`

use kurbo::Point;
use understory_ring::{Ring, RingOptions, Shape};

fn square_at(x: f64, y: f64, size: f64) -> Ring {
    Ring::new(
        [(x, y), (x + size, y), (x + size, y + size), (x, y + size)].map(Point::from),
        RingOptions { indexed: false },
    )
}

fn main() {
    let notched = Ring::from_flat_coords(
        &[
            0.0, 0.0, 20.0, 0.0, 20.0, 9.5, 10.0, 9.5, 10.0, 10.5, 20.0, 10.5, 20.0, 20.0, 0.0,
            20.0,
        ],
        RingOptions::default(),
    );
    let notched = match notched {
        Ok(ring) => ring,
        Err(err) => {
            eprintln!("invalid ring: {err}");
            return;
        }
    };

    println!(" x    contains  contains_strict  intersects_strict");
    for k in 0..=20 {
        let x = 1.0 + f64::from(k);
        let square = square_at(x, 9.0, 2.0);
        println!(
            "{x:4.1}  {:<8}  {:<15}  {}",
            notched.contains_ring(&square, true),
            notched.contains_ring(&square, false),
            notched.intersects_ring(&square, false),
        );
    }
}
