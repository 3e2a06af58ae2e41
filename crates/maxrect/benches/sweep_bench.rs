//! Criterion benchmarks for the sweep.
//! Sizes: N in {1000, 4000, 10000} on the reference point sets, plus uniform
//! `StdRng` sets to check the pruning speedup does not hinge on one recurrence.
//! Results land under target/criterion.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use maxrect::gen::uniform_obstacles;
use maxrect::{sweep, sweep_parallel, GridCfg, PointSet, SweepCfg};

fn bench_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("sweep");
    group.sample_size(10);
    for &n in &[1_000usize, 4_000, 10_000] {
        let sorted = PointSet::generate(&GridCfg::with_size(n))
            .expect("reference set")
            .sorted();
        group.bench_with_input(BenchmarkId::new("sequential", n), &sorted, |b, s| {
            b.iter(|| sweep(s, SweepCfg::default()))
        });
        group.bench_with_input(BenchmarkId::new("parallel", n), &sorted, |b, s| {
            b.iter(|| sweep_parallel(s, SweepCfg::default()))
        });
        if n <= 4_000 {
            group.bench_with_input(BenchmarkId::new("unpruned", n), &sorted, |b, s| {
                b.iter(|| sweep(s, SweepCfg { prune: false }))
            });
        }
    }
    group.finish();
}

fn bench_uniform(c: &mut Criterion) {
    let mut group = c.benchmark_group("sweep_uniform");
    group.sample_size(10);
    for &n in &[1_000usize, 4_000] {
        let sorted = PointSet::with_obstacles(n, uniform_obstacles(n, n, 42))
            .expect("uniform set")
            .sorted();
        group.bench_with_input(BenchmarkId::new("sequential", n), &sorted, |b, s| {
            b.iter(|| sweep(s, SweepCfg::default()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sweep, bench_uniform);
criterion_main!(benches);
