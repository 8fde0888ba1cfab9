use std::hint::black_box;
use std::time::{Duration, Instant};

use bench::{
    Pattern, apply_large_runtime_config, apply_medium_runtime_config, apply_small_runtime_config,
    default_rng, generate_i64, random_floats,
};
use criterion::measurement::Measurement;
use criterion::{BenchmarkGroup, BenchmarkId, Criterion, criterion_group, criterion_main};
use hybrid_sort::{
    SortContext, SortElement, Strategy, all_strategies, sort_with_strategy, strategy_name,
    supports_strategy,
};

const BENCH_SIZES: [usize; 4] = [256, 4_096, 65_536, 262_144];

fn apply_runtime_config_for_size<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, size: usize) {
    if size <= 4_096 {
        apply_small_runtime_config(group);
    } else if size <= 65_536 {
        apply_medium_runtime_config(group);
    } else {
        apply_large_runtime_config(group);
    }
}

#[inline]
fn is_benchmark_target(strategy: Strategy, size: usize) -> bool {
    strategy != Strategy::InsertionSort || size <= 4_096
}

fn bench_strategies<T, M>(group: &mut BenchmarkGroup<'_, M>, base: &[T])
where
    T: SortElement,
    M: Measurement,
{
    let size = base.len();
    for &strategy in all_strategies() {
        if !supports_strategy::<T>(strategy) || !is_benchmark_target(strategy, size) {
            continue;
        }
        group.bench_function(BenchmarkId::new(strategy_name(strategy), size), |bencher| {
            bencher.iter_custom(|iters| {
                let mut total = Duration::ZERO;
                let mut ctx = SortContext::new();
                for _ in 0..iters {
                    let mut data = base.to_vec();
                    let start = Instant::now();
                    sort_with_strategy(&mut data, strategy, &mut ctx);
                    total += start.elapsed();
                    black_box(&data);
                }
                total
            });
        });
    }
}

fn bench_std_unstable<T, M>(group: &mut BenchmarkGroup<'_, M>, base: &[T])
where
    T: Copy,
    M: Measurement,
    [T]: StdSort,
{
    group.bench_function(BenchmarkId::new("std_unstable", base.len()), |bencher| {
        bencher.iter_custom(|iters| {
            let mut total = Duration::ZERO;
            for _ in 0..iters {
                let mut data = base.to_vec();
                let start = Instant::now();
                data.std_sort();
                total += start.elapsed();
                black_box(&data);
            }
            total
        });
    });
}

/// Baseline comparator: `sort_unstable` for integers, `total_cmp` for floats.
trait StdSort {
    fn std_sort(&mut self);
}

macro_rules! impl_std_sort_ord { ($($t:ty)*) => ($(
    impl StdSort for [$t] {
        fn std_sort(&mut self) {
            self.sort_unstable();
        }
    }
)*) }

impl_std_sort_ord! { u8 i16 i64 }

impl StdSort for [f64] {
    fn std_sort(&mut self) {
        self.sort_unstable_by(f64::total_cmp);
    }
}

fn bench_integers(c: &mut Criterion) {
    let mut rng = default_rng();
    for &pattern in Pattern::ALL {
        let mut group = c.benchmark_group(format!("sort/i64/{}", pattern.label()));
        for &size in &BENCH_SIZES {
            apply_runtime_config_for_size(&mut group, size);
            let base = generate_i64(pattern, size, &mut rng);
            bench_strategies(&mut group, &base);
            bench_std_unstable(&mut group, &base);
        }
        group.finish();
    }
}

fn bench_narrow(c: &mut Criterion) {
    let mut rng = default_rng();
    for pattern in [Pattern::RandomUniform, Pattern::FewUnique] {
        let mut group = c.benchmark_group(format!("sort/u8/{}", pattern.label()));
        for &size in &BENCH_SIZES {
            apply_runtime_config_for_size(&mut group, size);
            let base: Vec<u8> = generate_i64(pattern, size, &mut rng)
                .into_iter()
                .map(|x| x as u8)
                .collect();
            bench_strategies(&mut group, &base);
            bench_std_unstable(&mut group, &base);
        }
        group.finish();

        let mut group = c.benchmark_group(format!("sort/i16/{}", pattern.label()));
        for &size in &BENCH_SIZES {
            apply_runtime_config_for_size(&mut group, size);
            let base: Vec<i16> = generate_i64(pattern, size, &mut rng)
                .into_iter()
                .map(|x| x as i16)
                .collect();
            bench_strategies(&mut group, &base);
            bench_std_unstable(&mut group, &base);
        }
        group.finish();
    }
}

fn bench_floats(c: &mut Criterion) {
    let mut rng = default_rng();
    let mut group = c.benchmark_group("sort/f64/random_with_specials");
    for &size in &BENCH_SIZES {
        apply_runtime_config_for_size(&mut group, size);
        let base = random_floats(size, &mut rng);
        bench_strategies(&mut group, &base);
        bench_std_unstable(&mut group, &base);
    }
    group.finish();
}

criterion_group!(benches, bench_integers, bench_narrow, bench_floats);
criterion_main!(benches);
