//! Benchmark for the sequence-only operations.
//!
//! Covers the quadratic set operations and the explicit-stack flatten.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use underbar::{Value, compact, difference, flatten, uniq, without};

fn lift(size: i64) -> Value {
    (0..size).map(Value::from).collect()
}

/// Builds `width` sequences, each nested `depth` levels deep.
fn nested(width: i64, depth: usize) -> Value {
    (0..width)
        .map(|index| {
            let mut value = Value::from(index);
            for _ in 0..depth {
                value = Value::from(vec![value, Value::from(index)]);
            }
            value
        })
        .collect()
}

// =============================================================================
// flatten Benchmark
// =============================================================================

fn benchmark_flatten(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("flatten");

    for depth in [1, 8, 64] {
        let sequence = nested(100, depth);

        group.bench_with_input(BenchmarkId::new("deep", depth), &sequence, |bencher, sequence| {
            bencher.iter(|| black_box(flatten(black_box(sequence), false)));
        });

        group.bench_with_input(BenchmarkId::new("shallow", depth), &sequence, |bencher, sequence| {
            bencher.iter(|| black_box(flatten(black_box(sequence), true)));
        });
    }

    group.finish();
}

// =============================================================================
// Set Operation Benchmarks
// =============================================================================

fn benchmark_set_operations(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("set_operations");

    for size in [100, 1000] {
        let sequence = lift(size);
        let excluded: Vec<Value> = (0..size).step_by(2).map(Value::from).collect();
        let others = [Value::from(excluded.clone())];
        let duplicated: Value = (0..size).map(|index| Value::from(index % 10)).collect();

        group.bench_with_input(BenchmarkId::new("without", size), &sequence, |bencher, sequence| {
            bencher.iter(|| black_box(without(black_box(sequence), &excluded)));
        });

        group.bench_with_input(BenchmarkId::new("difference", size), &sequence, |bencher, sequence| {
            bencher.iter(|| black_box(difference(black_box(sequence), &others)));
        });

        group.bench_with_input(BenchmarkId::new("uniq", size), &duplicated, |bencher, duplicated| {
            bencher.iter(|| black_box(uniq(black_box(duplicated))));
        });
    }

    group.finish();
}

// =============================================================================
// compact Benchmark
// =============================================================================

fn benchmark_compact(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("compact");

    for size in [100, 1000, 10000] {
        let sequence: Value = (0..size).map(|index| Value::from(index % 2)).collect();

        group.bench_with_input(BenchmarkId::new("underbar", size), &sequence, |bencher, sequence| {
            bencher.iter(|| black_box(compact(black_box(sequence))));
        });
    }

    group.finish();
}

// =============================================================================
// Criterion Group and Main
// =============================================================================

criterion_group!(benches, benchmark_flatten, benchmark_set_operations, benchmark_compact);

criterion_main!(benches);
