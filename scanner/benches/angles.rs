use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use aspect_scan::aspect;
use aspect_scan::math::{angle_between, Vec3};

fn bench_angle_between(c: &mut Criterion) {
    let earth_sun = Vec3::new(1.47e8, 2.3e7, 1.1e4);
    let earth_mars = Vec3::new(-3.9e7, 1.2e8, 5.0e5);
    c.bench_function("angle_between", |b| {
        b.iter(|| angle_between(black_box(&earth_sun), black_box(&earth_mars)))
    });
}

fn bench_classify(c: &mut Criterion) {
    c.bench_function("classify", |b| {
        b.iter(|| aspect::classify(black_box(89.4), black_box(1.0)))
    });
}

criterion_group!(benches, bench_angle_between, bench_classify);
criterion_main!(benches);
