//! Binomial heap operation benchmarks
//!
//! Compares `BinomialHeap` against `std::collections::BinaryHeap<Reverse<T>>`
//! on the operations both support, plus melding, which is where a binomial
//! forest earns its keep.
//!
//! ## Running
//!
//! ```bash
//! cargo bench --bench heap_ops
//!
//! # Only the merge group
//! cargo bench --bench heap_ops -- merge
//! ```

use binomial_forest::binomial::BinomialHeap;
use binomial_forest::Heap;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

const SIZES: [usize; 3] = [1 << 10, 1 << 14, 1 << 17];

fn random_keys(n: usize, seed: u64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.random()).collect()
}

/// Benchmark building a heap by repeated insertion
fn benchmark_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");

    for n in SIZES {
        let keys = random_keys(n, 12345);
        let label = format!("2^{}", n.trailing_zeros());

        group.bench_with_input(BenchmarkId::new("binomial", &label), &keys, |b, keys| {
            b.iter(|| {
                let mut heap = BinomialHeap::new();
                for &key in keys {
                    heap.insert(key);
                }
                black_box(heap.len())
            });
        });

        group.bench_with_input(BenchmarkId::new("std_binary", &label), &keys, |b, keys| {
            b.iter(|| {
                let mut heap = BinaryHeap::new();
                for &key in keys {
                    heap.push(Reverse(key));
                }
                black_box(heap.len())
            });
        });
    }

    group.finish();
}

/// Benchmark draining a full heap in order
fn benchmark_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("drain");

    for n in SIZES {
        let keys = random_keys(n, 54321);
        let label = format!("2^{}", n.trailing_zeros());

        group.bench_with_input(BenchmarkId::new("binomial", &label), &keys, |b, keys| {
            b.iter_batched(
                || keys.iter().copied().collect::<BinomialHeap<u64>>(),
                |mut heap| {
                    while let Some(key) = heap.pop() {
                        black_box(key);
                    }
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("std_binary", &label), &keys, |b, keys| {
            b.iter_batched(
                || keys.iter().copied().map(Reverse).collect::<BinaryHeap<_>>(),
                |mut heap| {
                    while let Some(Reverse(key)) = heap.pop() {
                        black_box(key);
                    }
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

/// Benchmark melding two heaps of equal size
fn benchmark_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge");

    for n in SIZES {
        let lhs = random_keys(n, 1);
        let rhs = random_keys(n - 1, 2);
        let label = format!("2^{}", n.trailing_zeros());

        group.bench_function(BenchmarkId::new("binomial", &label), |b| {
            b.iter_batched(
                || {
                    (
                        lhs.iter().copied().collect::<BinomialHeap<u64>>(),
                        rhs.iter().copied().collect::<BinomialHeap<u64>>(),
                    )
                },
                |(mut a, other)| {
                    a.merge(other);
                    black_box(a.len())
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_function(BenchmarkId::new("std_binary", &label), |b| {
            b.iter_batched(
                || {
                    (
                        lhs.iter().copied().map(Reverse).collect::<BinaryHeap<_>>(),
                        rhs.iter().copied().map(Reverse).collect::<BinaryHeap<_>>(),
                    )
                },
                |(mut a, mut other)| {
                    a.append(&mut other);
                    black_box(a.len())
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

/// Benchmark a mixed workload of inserts and pops on a steady-state heap
fn benchmark_mixed(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed");
    let n = 1 << 14;
    let keys = random_keys(n, 777);

    group.bench_function("binomial", |b| {
        let mut rng = StdRng::seed_from_u64(99);
        b.iter_batched(
            || keys.iter().copied().collect::<BinomialHeap<u64>>(),
            |mut heap| {
                for _ in 0..1000 {
                    heap.insert(rng.random());
                    black_box(heap.pop());
                }
                heap
            },
            BatchSize::LargeInput,
        );
    });

    group.bench_function("std_binary", |b| {
        let mut rng = StdRng::seed_from_u64(99);
        b.iter_batched(
            || keys.iter().copied().map(Reverse).collect::<BinaryHeap<_>>(),
            |mut heap| {
                for _ in 0..1000 {
                    heap.push(Reverse(rng.random()));
                    black_box(heap.pop());
                }
                heap
            },
            BatchSize::LargeInput,
        );
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_insert,
    benchmark_drain,
    benchmark_merge,
    benchmark_mixed,
);

criterion_main!(benches);
