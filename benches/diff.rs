//! Benchmarks for the sequence diff.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use tola_seqdiff::{diff, diff_with_config, DiffConfig};

/// `len` keyed rows with every 7th row edited, every 11th dropped, and a
/// block of 16 rows rotated to the front.
fn states(len: u32) -> (Vec<(u32, u32)>, Vec<(u32, u32)>) {
    let old: Vec<_> = (0..len).map(|i| (i, i)).collect();
    let mut new: Vec<_> = old
        .iter()
        .filter(|(id, _)| id % 11 != 0)
        .map(|&(id, v)| if id % 7 == 0 { (id, v + 1) } else { (id, v) })
        .collect();
    let split = new.len().saturating_sub(16);
    new.rotate_right(new.len() - split);
    new.extend((len..len + 32).map(|i| (i, i)));
    (old, new)
}

fn bench_diff(c: &mut Criterion) {
    let mut group = c.benchmark_group("diff");
    for len in [100u32, 1_000, 10_000, 100_000] {
        let (old, new) = states(len);
        group.bench_with_input(BenchmarkId::new("minimal", len), &len, |b, _| {
            b.iter(|| diff(black_box(&old), black_box(&new)))
        });
        group.bench_with_input(BenchmarkId::new("positional", len), &len, |b, _| {
            b.iter(|| diff_with_config(black_box(&old), black_box(&new), DiffConfig::positional()))
        });
    }
    group.finish();
}

fn bench_identical(c: &mut Criterion) {
    let (old, _) = states(100_000);
    c.bench_function("identical_100k", |b| b.iter(|| diff(black_box(&old), black_box(&old))));
}

criterion_group!(benches, bench_diff, bench_identical);
criterion_main!(benches);
