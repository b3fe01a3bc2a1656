//! Benchmarks for polygon decomposition.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use ringwalk::polygon::{ComplexPolygon, IntersectionDetector, SegmentCrossings};
use ringwalk::{decompose, Point2};

/// Generates a {n/2} star polygon for odd `n`; every edge crosses the two
/// edges whose endpoints interleave with its own.
fn generate_star(num_points: usize) -> ComplexPolygon<f64> {
    let ring = (0..num_points)
        .map(|i| {
            let t = (2 * i) as f64 / num_points as f64 * 2.0 * std::f64::consts::PI;
            Point2::new(10.0 * t.cos(), 10.0 * t.sin())
        })
        .collect();
    ComplexPolygon::from_rings(vec![ring]).expect("valid star")
}

/// Generates a square with a grid of square holes, without any crossings.
fn generate_grid_of_holes(per_side: usize) -> ComplexPolygon<f64> {
    let size = per_side as f64 * 2.0 + 1.0;
    let mut rings = vec![vec![
        Point2::new(0.0, 0.0),
        Point2::new(size, 0.0),
        Point2::new(size, size),
        Point2::new(0.0, size),
    ]];
    for i in 0..per_side {
        for j in 0..per_side {
            let x = i as f64 * 2.0 + 1.0;
            let y = j as f64 * 2.0 + 1.0;
            rings.push(vec![
                Point2::new(x, y),
                Point2::new(x, y + 1.0),
                Point2::new(x + 1.0, y + 1.0),
                Point2::new(x + 1.0, y),
            ]);
        }
    }
    ComplexPolygon::from_rings(rings).expect("valid grid")
}

fn bench_crossings(c: &mut Criterion) {
    let mut group = c.benchmark_group("crossings");
    let detector = SegmentCrossings::default();

    for size in [51, 201, 801] {
        let star = generate_star(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("star", size), &star, |b, poly| {
            b.iter(|| detector.detect(black_box(poly)))
        });
    }

    group.finish();
}

fn bench_decompose(c: &mut Criterion) {
    let mut group = c.benchmark_group("decompose");

    for size in [51, 201, 801] {
        let star = generate_star(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("star", size), &star, |b, poly| {
            b.iter(|| decompose(black_box(poly)))
        });
    }

    for per_side in [4, 8, 16] {
        let grid = generate_grid_of_holes(per_side);
        group.throughput(Throughput::Elements(grid.num_rings() as u64));
        group.bench_with_input(
            BenchmarkId::new("grid_of_holes", per_side),
            &grid,
            |b, poly| b.iter(|| decompose(black_box(poly))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_crossings, bench_decompose);
criterion_main!(benches);
