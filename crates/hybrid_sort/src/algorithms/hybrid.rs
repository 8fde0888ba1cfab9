use std::any::type_name;

use log::trace;

use crate::element::CountingKey;
use crate::{SortElement, Strategy, TUNED_PARAMS, strategy_name};

use super::common::{SortRange, Workspace};
use super::{counting_sort, dual_pivot_quick_sort, insertion_sort, natural_merge_sort};

/// Entry for element types sorted by comparison only.
pub fn sort_integral<T: SortElement>(
    data: &mut [T],
    mut workspace: Workspace<'_, T>,
    strategy: Strategy,
) {
    if data.len() < 2 {
        return;
    }

    match strategy {
        Strategy::Hybrid | Strategy::CountingSort => {
            if data.len() - 1 < TUNED_PARAMS.quicksort_threshold {
                trace!(
                    "{}: partitioning {} elements",
                    type_name::<T>(),
                    data.len()
                );
                dual_pivot_quick_sort::sort(SortRange::leftmost(data));
            } else {
                trace!(
                    "{}: looking for runs in {} elements",
                    type_name::<T>(),
                    data.len()
                );
                natural_merge_sort::sort(data, &mut workspace);
            }
        }
        Strategy::DualPivotQuickSort => dual_pivot_quick_sort::sort(SortRange::leftmost(data)),
        Strategy::NaturalMergeSort => natural_merge_sort::sort(data, &mut workspace),
        Strategy::InsertionSort => insertion_sort::insertion_sort(data),
    }
}

/// Entry for 8- and 16-bit integers.
///
/// Past the type's counting threshold the value domain is cheaper to
/// enumerate than to compare. Below it, bytes are insertion sorted and
/// 16-bit values take the comparison pipeline.
pub fn sort_narrow<T: CountingKey>(
    data: &mut [T],
    mut workspace: Workspace<'_, T>,
    strategy: Strategy,
) {
    if data.len() < 2 {
        return;
    }

    match strategy {
        Strategy::Hybrid => {
            if data.len() - 1 > T::THRESHOLD {
                trace!(
                    "{}: counting {} elements over {} buckets",
                    type_name::<T>(),
                    data.len(),
                    T::BUCKETS
                );
                counting_sort::sort(data, &mut workspace);
            } else if T::BUCKETS <= 1 << u8::BITS {
                trace!(
                    "{}: insertion sorting {} elements",
                    type_name::<T>(),
                    data.len()
                );
                insertion_sort::insertion_sort(data);
            } else {
                sort_integral(data, workspace, strategy);
            }
        }
        Strategy::CountingSort => counting_sort::sort(data, &mut workspace),
        Strategy::DualPivotQuickSort | Strategy::NaturalMergeSort | Strategy::InsertionSort => {
            trace!(
                "{}: forced {} on {} elements",
                type_name::<T>(),
                strategy_name(strategy),
                data.len()
            );
            sort_integral(data, workspace, strategy);
        }
    }
}
