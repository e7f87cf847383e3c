// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::f64::consts::TAU;

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_ring::{IndexedRing, Point, Segment, Shape, SimpleRing};

/// Star-shaped, mostly concave ring with `n` vertices.
fn gen_wobbly_ring(n: usize) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let t = TAU * i as f64 / n as f64;
            let r = 1000.0 + 300.0 * (7.0 * t).sin() + 100.0 * (23.0 * t).cos();
            Point::new(r * t.cos(), r * t.sin())
        })
        .collect()
}

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
    fn next_point(&mut self, extent: f64) -> Point {
        Point::new(
            (self.next_f64() - 0.5) * 2.0 * extent,
            (self.next_f64() - 0.5) * 2.0 * extent,
        )
    }
}

fn gen_probe_points(count: usize) -> Vec<Point> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count).map(|_| rng.next_point(1400.0)).collect()
}

fn gen_probe_segments(count: usize) -> Vec<Segment> {
    let mut rng = Rng::new(0xBADC_F00D_1234_5678);
    (0..count)
        .map(|_| {
            let a = rng.next_point(1400.0);
            let d = rng.next_point(50.0);
            Segment::new(a, a + d.to_vec2())
        })
        .collect()
}

fn gen_small_square(at: Point, size: f64) -> Vec<Point> {
    vec![
        at,
        Point::new(at.x + size, at.y),
        Point::new(at.x + size, at.y + size),
        Point::new(at.x, at.y + size),
    ]
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for &n in &[256usize, 4096, 32768] {
        let pts = gen_wobbly_ring(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("simple_n{}", n), |b| {
            b.iter_batched(
                || pts.clone(),
                |pts| black_box(SimpleRing::new(pts)),
                BatchSize::SmallInput,
            )
        });
        group.bench_function(format!("indexed_n{}", n), |b| {
            b.iter_batched(
                || pts.clone(),
                |pts| black_box(IndexedRing::new(pts)),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_contains_point(c: &mut Criterion) {
    let mut group = c.benchmark_group("contains_point");
    let probes = gen_probe_points(1024);
    for &n in &[256usize, 4096, 32768] {
        let pts = gen_wobbly_ring(n);
        let simple = SimpleRing::new(pts.iter().copied());
        let indexed = IndexedRing::new(pts);
        group.throughput(Throughput::Elements(probes.len() as u64));
        group.bench_function(format!("simple_n{}", n), |b| {
            b.iter(|| {
                let hits = probes
                    .iter()
                    .filter(|&&p| simple.contains_point(p, true))
                    .count();
                black_box(hits);
            })
        });
        group.bench_function(format!("indexed_n{}", n), |b| {
            b.iter(|| {
                let hits = probes
                    .iter()
                    .filter(|&&p| indexed.contains_point(p, true))
                    .count();
                black_box(hits);
            })
        });
    }
    group.finish();
}

fn bench_intersects_segment(c: &mut Criterion) {
    let mut group = c.benchmark_group("intersects_segment");
    let probes = gen_probe_segments(1024);
    for &n in &[4096usize, 32768] {
        let pts = gen_wobbly_ring(n);
        let simple = SimpleRing::new(pts.iter().copied());
        let indexed = IndexedRing::new(pts);
        group.throughput(Throughput::Elements(probes.len() as u64));
        group.bench_function(format!("simple_n{}", n), |b| {
            b.iter(|| {
                let hits = probes
                    .iter()
                    .filter(|s| simple.intersects_segment(s, false))
                    .count();
                black_box(hits);
            })
        });
        group.bench_function(format!("indexed_n{}", n), |b| {
            b.iter(|| {
                let hits = probes
                    .iter()
                    .filter(|s| indexed.intersects_segment(s, false))
                    .count();
                black_box(hits);
            })
        });
    }
    group.finish();
}

fn bench_ring_ring(c: &mut Criterion) {
    let mut group = c.benchmark_group("ring_ring");
    let pts = gen_wobbly_ring(4096);
    let simple = SimpleRing::new(pts.iter().copied());
    let indexed = IndexedRing::new(pts);
    let inside = SimpleRing::new(gen_small_square(Point::new(-200.0, -200.0), 400.0));
    let straddling = SimpleRing::new(gen_small_square(Point::new(500.0, -100.0), 900.0));
    for (name, other) in [("inside", &inside), ("straddling", &straddling)] {
        group.bench_function(format!("simple_contains_{}", name), |b| {
            b.iter(|| black_box(simple.contains_ring(other, true)))
        });
        group.bench_function(format!("indexed_contains_{}", name), |b| {
            b.iter(|| black_box(indexed.contains_ring(other, true)))
        });
        group.bench_function(format!("simple_intersects_{}", name), |b| {
            b.iter(|| black_box(simple.intersects_ring(other, false)))
        });
        group.bench_function(format!("indexed_intersects_{}", name), |b| {
            b.iter(|| black_box(indexed.intersects_ring(other, false)))
        });
    }
    group.bench_function("indexed_contains_self", |b| {
        b.iter(|| black_box(indexed.contains_ring(&indexed, true)))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_build,
    bench_contains_point,
    bench_intersects_segment,
    bench_ring_ring
);
criterion_main!(benches);
