//! Performance benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gfmul::{evaluate, GaloisField};

fn benchmark_multiply(c: &mut Criterion) {
    let aes = GaloisField::new(0x11b, 8).expect("valid field");
    c.bench_function("multiply_gf256", |b| {
        b.iter(|| aes.multiply(black_box(0x57), black_box(0x83)))
    });

    let wide = GaloisField::new((1 << 127) | 0b11, 127).expect("valid field");
    c.bench_function("multiply_gf2_127", |b| {
        b.iter(|| wide.multiply(black_box(u128::MAX >> 1), black_box(u128::MAX >> 2)))
    });
}

fn benchmark_reduce(c: &mut Criterion) {
    let aes = GaloisField::new(0x11b, 8).expect("valid field");
    c.bench_function("reduce_u128_gf256", |b| {
        b.iter(|| aes.reduce(black_box(u128::MAX)))
    });
}

fn benchmark_evaluate(c: &mut Criterion) {
    c.bench_function("evaluate_gf256", |b| {
        b.iter(|| evaluate(black_box(0x1f3), black_box(0x2a7), "x^8+x^4+x^3+x+1", 8))
    });
}

criterion_group!(benches, benchmark_multiply, benchmark_reduce, benchmark_evaluate);
criterion_main!(benches);
