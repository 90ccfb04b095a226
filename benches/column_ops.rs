use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

use colvec::{Column, NanDirection, RowKey};

fn test_column(rows: usize) -> Column<i64> {
    Column::from_values((0..rows as i64).map(|i| (i * 7919) % 104_729).collect())
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter");

    for rows in [4096usize, 65_536] {
        let col = test_column(rows);
        group.throughput(Throughput::Elements(rows as u64));

        // Run-length-correlated mask: alternating all-true / all-false pages.
        let runs: Vec<u8> = (0..rows).map(|i| u8::from((i / 512) % 2 == 0)).collect();
        group.bench_with_input(BenchmarkId::new("copy_runs", rows), &runs, |b, mask| {
            b.iter(|| black_box(col.filter(black_box(mask), None).unwrap()))
        });

        let mixed: Vec<u8> = (0..rows).map(|i| u8::from(i % 3 == 0)).collect();
        group.bench_with_input(BenchmarkId::new("copy_mixed", rows), &mixed, |b, mask| {
            b.iter(|| black_box(col.filter(black_box(mask), None).unwrap()))
        });

        group.bench_with_input(
            BenchmarkId::new("in_place_runs", rows),
            &runs,
            |b, mask| {
                b.iter(|| {
                    let mut scratch = col.clone();
                    black_box(scratch.filter_in_place(black_box(mask)).unwrap())
                })
            },
        );
    }

    group.finish();
}

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");

    for rows in [4096usize, 65_536] {
        let col = test_column(rows);
        group.throughput(Throughput::Elements(rows as u64));

        group.bench_with_input(BenchmarkId::new("full", rows), &col, |b, col| {
            b.iter(|| black_box(col.get_permutation(false, 0, NanDirection::Last)))
        });

        group.bench_with_input(BenchmarkId::new("top_64", rows), &col, |b, col| {
            b.iter(|| black_box(col.get_permutation(false, 64, NanDirection::Last)))
        });
    }

    group.finish();
}

fn bench_hash(c: &mut Criterion) {
    let mut group = c.benchmark_group("hash");

    for rows in [4096usize, 65_536] {
        let col = test_column(rows);
        group.throughput(Throughput::Elements(rows as u64));

        group.bench_with_input(BenchmarkId::new("xxh64_batch", rows), &col, |b, col| {
            b.iter(|| {
                let mut hashes = vec![0u64; col.len()];
                col.update_hashes_batch(&mut hashes, None).unwrap();
                black_box(hashes)
            })
        });

        group.bench_with_input(BenchmarkId::new("crc32_batch", rows), &col, |b, col| {
            b.iter(|| {
                let mut crcs = vec![0u32; col.len()];
                col.update_checksums_batch(&mut crcs, None, None).unwrap();
                black_box(crcs)
            })
        });
    }

    group.finish();
}

fn bench_keys(c: &mut Criterion) {
    let mut group = c.benchmark_group("row_keys");

    for rows in [4096usize, 65_536] {
        let col = test_column(rows);
        group.throughput(Throughput::Elements(rows as u64));

        group.bench_with_input(BenchmarkId::new("serialize_batch", rows), &col, |b, col| {
            b.iter(|| {
                let mut keys: Vec<RowKey> = vec![RowKey::new(); col.len()];
                col.serialize_batch(&mut keys).unwrap();
                black_box(keys)
            })
        });

        let null_map: Vec<u8> = (0..rows).map(|i| u8::from(i % 7 == 0)).collect();
        group.bench_with_input(
            BenchmarkId::new("serialize_batch_with_nulls", rows),
            &null_map,
            |b, nulls| {
                b.iter(|| {
                    let mut keys: Vec<RowKey> = vec![RowKey::new(); col.len()];
                    col.serialize_batch_with_nulls(&mut keys, nulls).unwrap();
                    black_box(keys)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_filter, bench_sort, bench_hash, bench_keys);
criterion_main!(benches);
