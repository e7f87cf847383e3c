// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use std::f64::consts::TAU;
use std::ops::ControlFlow;

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_ring::{Edges, Point, RTree, Rect, Segment};

use rstar::AABB;
use rstar::primitives::Line;

fn gen_wobbly_ring(n: usize) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let t = TAU * i as f64 / n as f64;
            let r = 1000.0 + 300.0 * (7.0 * t).sin() + 100.0 * (23.0 * t).cos();
            Point::new(r * t.cos(), r * t.sin())
        })
        .collect()
}

fn to_rstar_lines(edges: &[Segment]) -> Vec<Line<[f64; 2]>> {
    edges
        .iter()
        .map(|s| Line::new([s.a.x, s.a.y], [s.b.x, s.b.y]))
        .collect()
}

fn bench_rtree_external_compare_f64(c: &mut Criterion) {
    let mut group = c.benchmark_group("rtree_external_compare_edges");
    for &n in &[4096usize, 32768] {
        let pts = gen_wobbly_ring(n);
        let edges: Vec<Segment> = Edges::new(&pts).collect();
        let query = Rect::from_xywh(800.0, -200.0, 400.0, 400.0);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_function(format!("understory_build_query_bulk_n{}", n), |b| {
            b.iter_batched(
                || edges.clone(),
                |edges| {
                    let tree = RTree::bulk_load(edges.into_iter().enumerate());
                    let mut hits = 0_usize;
                    let _ = tree.search(query, &mut |_, _| {
                        hits += 1;
                        ControlFlow::Continue(())
                    });
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("rstar_build_query_bulk_n{}", n), |b| {
            b.iter_batched(
                || to_rstar_lines(&edges),
                |lines| {
                    let tree = rstar::RTree::bulk_load(lines);
                    let aabb = AABB::from_corners(
                        [query.min.x, query.min.y],
                        [query.max.x, query.max.y],
                    );
                    let hits: usize = tree.locate_in_envelope_intersecting(&aabb).count();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rtree_external_compare_f64);
criterion_main!(benches);
