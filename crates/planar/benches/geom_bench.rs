//! Criterion benchmarks for planar primitives.
//! Focus: line intersection, vector rotation, set algebra at n in {10, 100, 500}.
//! Results: by default under target/criterion.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use planar::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_lines(n: usize, seed: u64) -> Vec<Line> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut out = Vec::with_capacity(n);
    while out.len() < n {
        let p1 = Point::new(rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0));
        let p2 = Point::new(rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0));
        // coincident draws are skipped
        if let Ok(l) = Line::new(p1, p2) {
            out.push(l);
        }
    }
    out
}

fn random_set(n: usize, seed: u64) -> Set<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen_range(0..(2 * n as i64))).collect()
}

fn bench_lines(c: &mut Criterion) {
    let lines = random_lines(64, 41);
    c.bench_function("line_intersection_pairs", |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for (i, a) in lines.iter().enumerate() {
                for l in &lines[i + 1..] {
                    if a.intersection(black_box(l)).is_some() {
                        hits += 1;
                    }
                }
            }
            hits
        })
    });
}

fn bench_rotation(c: &mut Criterion) {
    let v = Vector::new(3.0, -4.0);
    c.bench_function("vector_rotated_by_deg", |b| {
        b.iter(|| black_box(v).rotated_by(black_box(37.5), AngleUnit::Degrees))
    });
}

fn bench_sets(c: &mut Criterion) {
    let mut group = c.benchmark_group("set");
    for &n in &[10usize, 100, 500] {
        group.bench_with_input(BenchmarkId::new("union", n), &n, |b, &n| {
            b.iter_batched(
                || (random_set(n, 42), random_set(n, 43)),
                |(a, s)| {
                    let _u = a.union(&s);
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("intersection", n), &n, |b, &n| {
            b.iter_batched(
                || (random_set(n, 44), random_set(n, 45)),
                |(a, s)| {
                    let _i = &a * &s;
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("from_range", n), &n, |b, &n| {
            b.iter(|| Set::from_range(0i64, n as i64))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_lines, bench_rotation, bench_sets);
criterion_main!(benches);
