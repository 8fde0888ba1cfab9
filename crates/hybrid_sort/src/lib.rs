//! Adaptive hybrid in-memory sorting for fixed-width numeric elements.
//!
//! The engine picks among natural-run merging, dual-pivot quicksort,
//! insertion sort and counting sort based on the element type and the length
//! and shape of the input. Floating-point slices additionally get NaNs moved
//! to the tail and negative zeros placed before positive zeros.
//!
//! The sort is not stable and allocates at most one buffer the size of the
//! input (merge path) or one frequency table (counting path). Both can be
//! reused across calls through [`SortContext`].

mod algorithms;
mod element;

use log::trace;

use algorithms::common::Workspace;

pub use element::{Domain, SortElement};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Strategy {
    /// Full adaptive driver.
    Hybrid,
    /// Partitioning only, no run detection and no counting.
    DualPivotQuickSort,
    /// Run detection and merging, falling back to partitioning on unstructured input.
    NaturalMergeSort,
    /// Plain insertion sort over the whole range.
    InsertionSort,
    /// Frequency counting over the value domain. Narrow integer types only.
    CountingSort,
}

pub const ALL_STRATEGIES: [Strategy; 5] = [
    Strategy::Hybrid,
    Strategy::DualPivotQuickSort,
    Strategy::NaturalMergeSort,
    Strategy::InsertionSort,
    Strategy::CountingSort,
];

pub fn all_strategies() -> &'static [Strategy] {
    &ALL_STRATEGIES
}

pub fn strategy_name(strategy: Strategy) -> &'static str {
    match strategy {
        Strategy::Hybrid => "hybrid",
        Strategy::DualPivotQuickSort => "dual_pivot_quick_sort",
        Strategy::NaturalMergeSort => "natural_merge_sort",
        Strategy::InsertionSort => "insertion_sort",
        Strategy::CountingSort => "counting_sort",
    }
}

pub fn supports_strategy<T: SortElement>(strategy: Strategy) -> bool {
    !matches!(
        (strategy, T::DOMAIN),
        (Strategy::CountingSort, Domain::Integral | Domain::Float)
    )
}

/// Length thresholds steering the driver.
///
/// Comparisons are made against `right - left` (one less than the length)
/// for the quicksort and counting thresholds, and against the length for the
/// insertion threshold.
#[derive(Clone, Copy, Debug)]
pub struct TunedParams {
    pub quicksort_threshold: usize,
    pub insertion_sort_threshold: usize,
    pub max_run_count: usize,
    pub max_run_length: usize,
    pub counting_sort_threshold_8bit: usize,
    pub counting_sort_threshold_16bit: usize,
}

pub const TUNED_PARAMS: TunedParams = TunedParams {
    quicksort_threshold: 286,
    insertion_sort_threshold: 47,
    max_run_count: 67,
    max_run_length: 33,
    counting_sort_threshold_8bit: 29,
    counting_sort_threshold_16bit: 3200,
};

/// Reusable scratch space for repeated sorts of the same element type.
#[derive(Clone, Debug)]
pub struct SortContext<T> {
    pub scratch: Vec<T>,
    pub counts: Vec<usize>,
}

impl<T> Default for SortContext<T> {
    fn default() -> Self {
        Self {
            scratch: Vec::new(),
            counts: Vec::new(),
        }
    }
}

impl<T: Copy> SortContext<T> {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub(crate) fn ensure_scratch(&mut self, len: usize, fill: T) -> &mut [T] {
        if self.scratch.len() < len {
            self.scratch.resize(len, fill);
        }
        &mut self.scratch[..len]
    }

    #[inline]
    pub(crate) fn ensure_counts(&mut self, len: usize) -> &mut [usize] {
        if self.counts.len() < len {
            self.counts.resize(len, 0);
        }
        &mut self.counts[..len]
    }
}

/// Sorts `v` ascending in place.
///
/// For floats, NaNs end up after every number and `-0.0` before `0.0`.
pub fn sort<T: SortElement>(v: &mut [T]) {
    sort_impl(v, Workspace::Absent, Strategy::Hybrid);
}

/// Same as [`sort`], reusing the buffers held by `ctx`.
pub fn sort_with_ctx<T: SortElement>(v: &mut [T], ctx: &mut SortContext<T>) {
    sort_impl(v, Workspace::Context(ctx), Strategy::Hybrid);
}

/// Sorts the inclusive range `v[left..=right]`.
///
/// `workspace` is an optional merge buffer. It is used when it holds at least
/// `right - left + 1` elements; otherwise a buffer is allocated for this call.
///
/// # Panics
///
/// Panics if `left > right` or `right >= v.len()`. The bounds are asserted in
/// debug builds and otherwise enforced only by slice indexing.
pub fn sort_range<T: SortElement>(
    v: &mut [T],
    left: usize,
    right: usize,
    workspace: Option<&mut [T]>,
) {
    debug_assert!(
        left <= right && right < v.len(),
        "invalid sort range {left}..={right} for length {}",
        v.len()
    );
    let workspace = match workspace {
        Some(buf) => Workspace::Borrowed(buf),
        None => Workspace::Absent,
    };
    sort_impl(&mut v[left..=right], workspace, Strategy::Hybrid);
}

/// Sorts `v` forcing one engine path.
///
/// A strategy that `T` does not support falls back to [`Strategy::Hybrid`].
pub fn sort_with_strategy<T: SortElement>(
    v: &mut [T],
    strategy: Strategy,
    ctx: &mut SortContext<T>,
) {
    sort_impl(v, Workspace::Context(ctx), strategy);
}

/// Returns whether `v` is in the order produced by [`sort`].
pub fn is_sorted<T: SortElement>(v: &[T]) -> bool {
    v.windows(2).all(|w| T::in_order(w[0], w[1]))
}

fn sort_impl<T: SortElement>(v: &mut [T], workspace: Workspace<'_, T>, strategy: Strategy) {
    if v.len() < 2 {
        return;
    }

    let strategy = if supports_strategy::<T>(strategy) {
        strategy
    } else {
        trace!(
            "{} not supported for {}, using {}",
            strategy_name(strategy),
            std::any::type_name::<T>(),
            strategy_name(Strategy::Hybrid)
        );
        Strategy::Hybrid
    };

    T::sort_engine(v, workspace, strategy);
    debug_assert!(is_sorted(v));
}
