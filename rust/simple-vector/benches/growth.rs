use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use simple_vector::{SimpleVector, reserve_hint};
use std::hint::black_box;

fn bench_push_back(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_back");

    let sizes = [100, 1000, 10000, 100000];

    for &size in &sizes {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("from_empty", size), &size, |b, &n| {
            b.iter(|| {
                let mut v = SimpleVector::new();
                for i in 0..n {
                    v.push_back(black_box(i)).unwrap();
                }
                black_box(v)
            });
        });

        group.bench_with_input(BenchmarkId::new("with_hint", size), &size, |b, &n| {
            b.iter(|| {
                let mut v = SimpleVector::with_capacity_hint(reserve_hint(n)).unwrap();
                for i in 0..n {
                    v.push_back(black_box(i)).unwrap();
                }
                black_box(v)
            });
        });

        group.bench_with_input(BenchmarkId::new("std_vec", size), &size, |b, &n| {
            b.iter(|| {
                let mut v = Vec::new();
                for i in 0..n {
                    v.push(black_box(i));
                }
                black_box(v)
            });
        });
    }

    group.finish();
}

fn bench_insert_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_front");

    for &size in &[100usize, 1000, 5000] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &n| {
            b.iter(|| {
                let mut v = SimpleVector::new();
                for i in 0..n {
                    v.insert(v.begin(), black_box(i)).unwrap();
                }
                black_box(v)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_push_back, bench_insert_front);
criterion_main!(benches);
