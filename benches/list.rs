use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rand::prelude::*;
use seq_list::List;
use std::iter::FromIterator;

const LEN: usize = 10_000;

fn random_values(seed: u64, len: usize) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(0..1_000_000)).collect()
}

/// Benchmark pushing to both ends
fn bench_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("push");
    group.throughput(Throughput::Elements(1));

    group.bench_function("push_back", |b| {
        let mut list = List::new();
        let mut value = 0u64;
        b.iter(|| {
            list.push_back(black_box(value));
            value += 1;
        });
    });

    group.bench_function("push_front_pop_back", |b| {
        let mut list = List::from_iter(0..LEN as u64);
        b.iter(|| {
            list.push_front(black_box(0));
            black_box(list.pop_back().ok());
        });
    });

    group.finish();
}

/// Benchmark sorting random lists
fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");
    group.throughput(Throughput::Elements(LEN as u64));

    let values = random_values(42, LEN);
    group.bench_function("sort_random", |b| {
        b.iter(|| {
            let mut list = List::from_iter(values.iter().copied());
            list.sort();
            black_box(list)
        });
    });

    group.finish();
}

/// Benchmark merging two sorted lists
fn bench_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge");
    group.throughput(Throughput::Elements(2 * LEN as u64));

    let mut left = random_values(1, LEN);
    let mut right = random_values(2, LEN);
    left.sort_unstable();
    right.sort_unstable();

    group.bench_function("merge_sorted", |b| {
        b.iter(|| {
            let mut list = List::from_iter(left.iter().copied());
            let mut other = List::from_iter(right.iter().copied());
            list.merge(&mut other);
            black_box(list)
        });
    });

    group.finish();
}

/// Benchmark splicing a list in and splitting it out again
fn bench_splice(c: &mut Criterion) {
    let mut group = c.benchmark_group("splice");
    group.throughput(Throughput::Elements(1));

    group.bench_function("splice_split", |b| {
        let mut list = List::from_iter(0..LEN as u64);
        let mut other = List::from_iter(0..LEN as u64);
        b.iter(|| {
            let mut cursor = list.cursor_start_mut();
            cursor.splice(&mut other);
            other = list.split_off(LEN).unwrap_or_default();
        });
    });

    group.finish();
}

criterion_group!(benches, bench_push, bench_sort, bench_merge, bench_splice);
criterion_main!(benches);
