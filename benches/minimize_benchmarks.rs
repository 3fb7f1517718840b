//! Benchmark suite for the minimization pipeline
//!
//! Covers the pipeline end to end on formulas of growing variable count and
//! the Quine-McCluskey engine alone on dense minterm sets.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use qmc_logic::minimize::prime_implicants;
use qmc_logic::BoolExpr;

/// Canned formulas, roughly ordered by how hard they work the engine
const FORMULAS: &[(&str, &str)] = &[
    ("absorption", "a & (a | b)"),
    ("xor3", "a ^ b ^ c"),
    ("consensus", "(a & b) | (!a & c) | (b & c)"),
    (
        "two_groups",
        "((x & y & z) | (u & v)) & ((x | !y | !z) | (u & v))",
    ),
    (
        "majority5",
        "(a & b) | (a & c) | (a & d) | (a & e) | (b & c) | (b & d) | (b & e) | (c & d) | (c & e) | (d & e)",
    ),
    (
        "parity6",
        "a ^ b ^ c ^ d ^ e ^ f",
    ),
];

fn bench_simplify(c: &mut Criterion) {
    let mut group = c.benchmark_group("simplify");
    for (name, formula) in FORMULAS {
        let expr = BoolExpr::parse(formula).expect("benchmark formula parses");
        group.bench_with_input(BenchmarkId::from_parameter(name), &expr, |b, expr| {
            b.iter(|| black_box(expr).simplify().unwrap());
        });
    }
    group.finish();
}

fn bench_prime_implicants(c: &mut Criterion) {
    let mut group = c.benchmark_group("prime_implicants");
    for n in [4usize, 6, 8] {
        // Dense input: every even minterm, which merges heavily.
        let minterms: Vec<usize> = (0..(1usize << n)).step_by(2).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &minterms, |b, minterms| {
            b.iter(|| prime_implicants(black_box(minterms), n));
        });
    }
    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse", |b| {
        b.iter(|| BoolExpr::parse(black_box("!(a & b) | c ^ d & (e | !f)")).unwrap());
    });
}

criterion_group!(benches, bench_simplify, bench_prime_implicants, bench_parse);
criterion_main!(benches);
