use criterion::{black_box, criterion_group, criterion_main, Criterion};
use math_quadrature::{
    midpoint, midpoint_vectorized, simpson, simpson_reference, simpson_vectorized, trapezoid,
    trapezoid_reference, trapezoid_vectorized, CubicPolynomial,
};

const SEGMENTS: usize = 1_000;

fn bench_midpoint(c: &mut Criterion) {
    let p = CubicPolynomial::new([1.0, 2.0, 3.0, 4.0]);

    c.bench_function("midpoint_iterative", |b| {
        b.iter(|| midpoint(black_box(&p), 0.0, 10.0, SEGMENTS))
    });

    c.bench_function("midpoint_vectorized", |b| {
        b.iter(|| midpoint_vectorized(black_box(&p), 0.0, 10.0, SEGMENTS))
    });
}

fn bench_trapezoid(c: &mut Criterion) {
    let p = CubicPolynomial::new([1.0, 2.0, 3.0, 4.0]);

    c.bench_function("trapezoid_iterative", |b| {
        b.iter(|| trapezoid(black_box(&p), 0.0, 10.0, SEGMENTS))
    });

    c.bench_function("trapezoid_vectorized", |b| {
        b.iter(|| trapezoid_vectorized(black_box(&p), 0.0, 10.0, SEGMENTS))
    });

    c.bench_function("trapezoid_reference", |b| {
        b.iter(|| trapezoid_reference(black_box(&p), 0.0, 10.0, SEGMENTS))
    });
}

fn bench_simpson(c: &mut Criterion) {
    let p = CubicPolynomial::new([1.0, 2.0, 3.0, 4.0]);

    c.bench_function("simpson_iterative", |b| {
        b.iter(|| simpson(black_box(&p), 0.0, 10.0, SEGMENTS))
    });

    c.bench_function("simpson_vectorized", |b| {
        b.iter(|| simpson_vectorized(black_box(&p), 0.0, 10.0, SEGMENTS))
    });

    c.bench_function("simpson_reference", |b| {
        b.iter(|| simpson_reference(black_box(&p), 0.0, 10.0, SEGMENTS))
    });
}

criterion_group!(benches, bench_midpoint, bench_trapezoid, bench_simpson);
criterion_main!(benches);
