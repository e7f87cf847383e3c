// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Build a large ring over both backends, print the shape of its edge index,
//! and check that both backends agree on a grid of probe points.
//!
//! Run:
//! - `RUST_LOG=understory_ring=trace cargo run -p understory_ring_demos --example ring_index_stats`

use std::f64::consts::TAU;
use std::ops::ControlFlow;
use std::time::Instant;

use kurbo::Point;
use understory_ring::{IndexedRing, Shape, SimpleRing};

fn main() {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("understory_ring=debug".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let n = 20_000;
    let points: Vec<Point> = (0..n)
        .map(|i| {
            let t = TAU * f64::from(i) / f64::from(n);
            let r = 100.0 + 30.0 * (7.0 * t).sin() + 10.0 * (23.0 * t).cos();
            Point::new(r * t.cos(), r * t.sin())
        })
        .collect();

    let simple = SimpleRing::new(points.iter().copied());
    let indexed = IndexedRing::new(points);
    let tree = indexed.backend();
    println!(
        "edges={} nodes={} height={}",
        tree.len(),
        tree.num_nodes(),
        tree.height()
    );

    let mut per_depth = vec![0_usize; tree.height() + 1];
    let _ = indexed.traverse(|_, depth| {
        per_depth[depth] += 1;
        ControlFlow::Continue(())
    });
    for (depth, count) in per_depth.iter().enumerate() {
        println!("depth {depth}: {count} entries");
    }

    let rect = indexed.rect();
    let steps = 100;
    let probes: Vec<Point> = (0..=steps)
        .flat_map(|j| {
            (0..=steps).map(move |i| {
                Point::new(
                    rect.min.x + rect.width() * f64::from(i) / f64::from(steps),
                    rect.min.y + rect.height() * f64::from(j) / f64::from(steps),
                )
            })
        })
        .collect();

    let start = Instant::now();
    let simple_hits = probes
        .iter()
        .filter(|&&p| simple.contains_point(p, false))
        .count();
    let simple_time = start.elapsed();
    let start = Instant::now();
    let indexed_hits = probes
        .iter()
        .filter(|&&p| indexed.contains_point(p, false))
        .count();
    let indexed_time = start.elapsed();

    tracing::info!(
        probes = probes.len(),
        simple_hits,
        indexed_hits,
        "probed both backends"
    );
    println!("simple:  {simple_hits} inside in {simple_time:?}");
    println!("indexed: {indexed_hits} inside in {indexed_time:?}");
    assert_eq!(simple_hits, indexed_hits, "backends must agree");
}
