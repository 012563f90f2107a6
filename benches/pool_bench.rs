use criterion::{criterion_group, criterion_main, Criterion};
use rand::prelude::*;
use workpool::{Job, PoolConfig, RayonPool, SimplePool, WorkerPool};

const JOBS: u64 = 1000;

fn bench_config() -> PoolConfig {
    PoolConfig {
        workers: 4,
        buffer_capacity: Some(JOBS as usize),
    }
}

fn square_drain<P: WorkerPool<u64>>(pool: P) -> usize {
    let results = pool.run(|job: Job<u64>| Ok(job.args * job.args)).unwrap();
    for i in 0..JOBS {
        pool.add(Job::new(i)).unwrap();
    }
    pool.close().unwrap();
    results.iter().count()
}

fn spin_drain<P: WorkerPool<u64>>(pool: P, spins: Vec<u64>) -> usize {
    let results = pool
        .run(|job: Job<u64>| {
            let mut acc = 0u64;
            for i in 0..job.args {
                acc = acc.wrapping_add(i);
            }
            Ok(acc)
        })
        .unwrap();
    for spin in spins {
        pool.add(Job::new(spin)).unwrap();
    }
    pool.close().unwrap();
    results.iter().count()
}

fn uniform_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("square_drain");

    group.bench_function("simple", |b| {
        b.iter_batched(
            || SimplePool::with_config(bench_config()).unwrap(),
            |pool| assert_eq!(square_drain(pool), JOBS as usize),
            criterion::BatchSize::SmallInput,
        );
    });

    group.bench_function("rayon", |b| {
        b.iter_batched(
            || RayonPool::with_config(bench_config()).unwrap(),
            |pool| assert_eq!(square_drain(pool), JOBS as usize),
            criterion::BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn jitter_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("jitter_drain");

    group.bench_function("simple", |b| {
        b.iter_batched(
            || {
                let mut rng = thread_rng();
                let spins: Vec<u64> = (0..JOBS).map(|_| rng.gen_range(0..10_000)).collect();
                (SimplePool::with_config(bench_config()).unwrap(), spins)
            },
            |(pool, spins)| assert_eq!(spin_drain(pool, spins), JOBS as usize),
            criterion::BatchSize::SmallInput,
        );
    });

    group.bench_function("rayon", |b| {
        b.iter_batched(
            || {
                let mut rng = thread_rng();
                let spins: Vec<u64> = (0..JOBS).map(|_| rng.gen_range(0..10_000)).collect();
                (RayonPool::with_config(bench_config()).unwrap(), spins)
            },
            |(pool, spins)| assert_eq!(spin_drain(pool, spins), JOBS as usize),
            criterion::BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, uniform_bench, jitter_bench);
criterion_main!(benches);
