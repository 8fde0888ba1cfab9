use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const MEDIUM_RUNTIME_SAMPLE_SIZE: usize = 15;
const MEDIUM_RUNTIME_WARM_UP_MS: u64 = 500;
const MEDIUM_RUNTIME_MEASURE_MS: u64 = 1000;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 800;
const LARGE_RUNTIME_MEASURE_MS: u64 = 1500;
const RNG_SEED: u64 = 0x5EED_2026;

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
}

pub fn apply_medium_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(MEDIUM_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(MEDIUM_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(MEDIUM_RUNTIME_MEASURE_MS));
}

pub fn apply_large_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(LARGE_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(LARGE_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(LARGE_RUNTIME_MEASURE_MS));
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

/// Input shapes that steer the engine down its different paths.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Pattern {
    /// `:.:.:.::`
    RandomUniform,
    /// Values drawn from a handful of keys.
    FewUnique,
    /// `.:::::`
    Ascending,
    /// `:::::.`
    Descending,
    /// Ascending with one percent of positions swapped.
    NearlySorted,
    /// `.:.:.:` a few sorted chunks, alternating direction.
    SawMixed,
    /// `::::::` every element equal.
    AllEqual,
    /// Ascending runs broken up by long stretches of one value.
    Plateaus,
}

impl Pattern {
    pub const ALL: &'static [Pattern] = &[
        Pattern::RandomUniform,
        Pattern::FewUnique,
        Pattern::Ascending,
        Pattern::Descending,
        Pattern::NearlySorted,
        Pattern::SawMixed,
        Pattern::AllEqual,
        Pattern::Plateaus,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::RandomUniform => "random_uniform",
            Self::FewUnique => "few_unique",
            Self::Ascending => "ascending",
            Self::Descending => "descending",
            Self::NearlySorted => "nearly_sorted_1pct_swaps",
            Self::SawMixed => "saw_mixed",
            Self::AllEqual => "all_equal",
            Self::Plateaus => "plateaus",
        }
    }
}

/// Generates `len` values shaped by `pattern`.
///
/// Values span the full `i64` range for the random patterns; callers
/// narrowing with `as` get the low bits, which keeps the shape for the
/// ordered patterns only while `len` fits the target type.
pub fn generate_i64<R: Rng + ?Sized>(pattern: Pattern, len: usize, rng: &mut R) -> Vec<i64> {
    match pattern {
        Pattern::RandomUniform => (0..len).map(|_| rng.random::<i64>()).collect(),
        Pattern::FewUnique => (0..len).map(|_| rng.random_range(0..8) * 17 - 50).collect(),
        Pattern::Ascending => (0..len as i64).collect(),
        Pattern::Descending => (0..len as i64).rev().collect(),
        Pattern::NearlySorted => {
            let mut data: Vec<i64> = (0..len as i64).collect();
            if len > 0 {
                for _ in 0..(len / 100).max(1) {
                    let a = rng.random_range(0..len);
                    let b = rng.random_range(0..len);
                    data.swap(a, b);
                }
            }
            data
        }
        Pattern::SawMixed => {
            let mut data: Vec<i64> = (0..len).map(|_| rng.random_range(-1000..1000)).collect();
            let chunk = (len / 5).max(1);
            for (i, part) in data.chunks_mut(chunk).enumerate() {
                if i % 2 == 0 {
                    part.sort_unstable();
                } else {
                    part.sort_unstable_by(|a, b| b.cmp(a));
                }
            }
            data
        }
        Pattern::AllEqual => vec![66; len],
        Pattern::Plateaus => (0..len as i64)
            .map(|i| if (i / 50) % 2 == 0 { i } else { (i / 100) * 100 })
            .collect(),
    }
}

/// Random floats mixed with NaNs, signed zeros and infinities.
pub fn random_floats<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Vec<f64> {
    (0..len)
        .map(|_| match rng.random_range(0..16) {
            0 => f64::NAN,
            1 => -f64::NAN,
            2 => 0.0,
            3 => -0.0,
            4 => f64::INFINITY,
            5 => f64::NEG_INFINITY,
            6 => f64::from(rng.random_range(-4_i32..4)),
            _ => rng.random_range(-1.0e6..1.0e6),
        })
        .collect()
}
