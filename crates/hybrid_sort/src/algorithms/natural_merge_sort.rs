use log::trace;

use crate::TUNED_PARAMS;

use super::common::{self, SortRange, Workspace};
use super::dual_pivot_quick_sort;

/// Why a range was handed to the partitioner instead of being merged.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Unstructured {
    TooManyRuns,
    LongPlateau,
}

/// Sorts `data` by merging its natural runs, or by partitioning when the
/// input has too little structure for merging to pay off.
pub fn sort<T: PartialOrd + Copy>(data: &mut [T], workspace: &mut Workspace<'_, T>) {
    if data.len() < 2 {
        return;
    }

    let runs = match collect_runs(data) {
        Ok(runs) => runs,
        Err(reason) => {
            trace!(
                "natural merge abandoned ({reason:?}), partitioning {} elements",
                data.len()
            );
            dual_pivot_quick_sort::sort(SortRange::leftmost(data));
            return;
        }
    };

    if runs.len() == 2 {
        trace!("input of {} elements is a single run", data.len());
        return;
    }

    trace!(
        "merging {} runs over {} elements",
        runs.len() - 1,
        data.len()
    );
    merge_all(data, runs, workspace);
}

/// Splits `data` into ascending runs, reversing descending ones in place.
///
/// The returned table holds the start of every run followed by `data.len()`.
fn collect_runs<T: PartialOrd + Copy>(data: &mut [T]) -> Result<Vec<usize>, Unstructured> {
    let max_run_count = TUNED_PARAMS.max_run_count;
    let right = data.len() - 1;

    let mut runs = Vec::with_capacity(max_run_count + 1);
    runs.push(0);

    let mut k = 0usize;
    while k < right {
        let start = k;
        if data[k] < data[k + 1] {
            k += 1;
            while k <= right && data[k - 1] <= data[k] {
                k += 1;
            }
        } else if data[k] > data[k + 1] {
            k += 1;
            while k <= right && data[k - 1] >= data[k] {
                k += 1;
            }
            data[start..k].reverse();
        } else {
            let mut budget = TUNED_PARAMS.max_run_length;
            k += 1;
            while k <= right && data[k - 1] == data[k] {
                budget -= 1;
                if budget == 0 {
                    return Err(Unstructured::LongPlateau);
                }
                k += 1;
            }
        }

        runs.push(k);
        if runs.len() - 1 == max_run_count {
            return Err(Unstructured::TooManyRuns);
        }
    }

    // A last element left alone forms its own run.
    if k == right {
        runs.push(right + 1);
    }

    debug_assert!(runs.len() <= max_run_count + 1);
    Ok(runs)
}

/// Bottom-up pairwise merging of the runs in `runs`, alternating between
/// `data` and a buffer so that the last pass writes into `data`.
fn merge_all<T: PartialOrd + Copy>(
    data: &mut [T],
    mut runs: Vec<usize>,
    workspace: &mut Workspace<'_, T>,
) {
    let len = data.len();

    // An even number of passes starts from `data`, an odd number from the buffer.
    let passes = (runs.len() - 1).next_power_of_two().trailing_zeros();
    let mut src_is_buf = passes % 2 == 1;

    let mut owned;
    let buf: &mut [T] = match workspace.scratch(len, data[0]) {
        Some(buf) => buf,
        None => {
            owned = vec![data[0]; len];
            &mut owned[..]
        }
    };
    if src_is_buf {
        buf.copy_from_slice(data);
    }

    while runs.len() > 2 {
        if src_is_buf {
            merge_pass(buf, data, &mut runs);
        } else {
            merge_pass(data, buf, &mut runs);
        }
        src_is_buf = !src_is_buf;
    }

    debug_assert!(!src_is_buf);
}

/// Merges runs pairwise from `src` into `dst` and rewrites `runs` to the
/// boundaries of the merged runs. An unpaired last run is copied through.
fn merge_pass<T: PartialOrd + Copy>(src: &[T], dst: &mut [T], runs: &mut Vec<usize>) {
    let count = runs.len() - 1;
    let mut last = 0usize;

    let mut k = 2usize;
    while k <= count {
        let (lo, mid, hi) = (runs[k - 2], runs[k - 1], runs[k]);
        common::merge_runs(&src[lo..mid], &src[mid..hi], &mut dst[lo..hi]);
        last += 1;
        runs[last] = hi;
        k += 2;
    }

    if count % 2 == 1 {
        let (lo, hi) = (runs[count - 1], runs[count]);
        dst[lo..hi].copy_from_slice(&src[lo..hi]);
        last += 1;
        runs[last] = hi;
    }

    runs.truncate(last + 1);
}

#[cfg(test)]
mod tests {
    use bench::{Pattern, generate_i64};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    fn check(data: &[i64]) {
        let mut actual = data.to_vec();
        sort(&mut actual, &mut Workspace::Absent);
        let mut expected = data.to_vec();
        expected.sort_unstable();
        assert_eq!(actual, expected, "input_len={}", data.len());
    }

    #[test]
    fn ascending_is_one_run() {
        let mut data: Vec<i32> = (0..1000).collect();
        assert_eq!(collect_runs(&mut data), Ok(vec![0, 1000]));
    }

    #[test]
    fn descending_is_reversed_into_one_run() {
        let mut data: Vec<i32> = (0..1000).rev().collect();
        assert_eq!(collect_runs(&mut data), Ok(vec![0, 1000]));
        assert_eq!(data, (0..1000).collect::<Vec<i32>>());
    }

    #[test]
    fn trailing_single_element_gets_its_own_run() {
        let mut data: Vec<i32> = (1..300).chain(std::iter::once(0)).collect();
        assert_eq!(collect_runs(&mut data), Ok(vec![0, 299, 300]));
    }

    #[test]
    fn long_plateau_is_unstructured() {
        let mut data: Vec<i32> = (0..100).chain(std::iter::repeat_n(50, 40)).collect();
        assert_eq!(collect_runs(&mut data), Err(Unstructured::LongPlateau));

        let mut data: Vec<i32> = std::iter::repeat_n(5, 33).chain(0..10).collect();
        assert!(collect_runs(&mut data).is_ok());
    }

    #[test]
    fn too_many_runs_is_unstructured() {
        let mut data: Vec<i32> = (0..200).map(|i| if i % 2 == 0 { i } else { -i }).collect();
        assert_eq!(collect_runs(&mut data), Err(Unstructured::TooManyRuns));
    }

    #[test]
    fn merges_every_run_count() {
        // 2 through 66 runs, which covers both pass parities.
        for runs in 2..TUNED_PARAMS.max_run_count {
            let data: Vec<i64> = (0..runs as i64)
                .flat_map(|r| (0..10).map(move |i| i * 1000 + r))
                .collect();
            check(&data);
        }
    }

    #[test]
    fn sorts_all_patterns() {
        let mut rng = StdRng::seed_from_u64(0x3E26_2026);
        for &pattern in Pattern::ALL {
            for &size in &[2_usize, 3, 300, 1000, 8192] {
                check(&generate_i64(pattern, size, &mut rng));
            }
        }
    }

    #[test]
    fn reuses_borrowed_buffer() {
        let mut rng = StdRng::seed_from_u64(0xB0FF_2026);
        let mut data: Vec<i64> = (0..400).collect();
        data.extend((0..400).map(|_| rng.random_range(0..1000_i64)));
        data[400..].sort_unstable_by(|a, b| b.cmp(a));
        let mut expected = data.clone();
        expected.sort_unstable();

        let mut buf = vec![0_i64; 1000];
        sort(&mut data, &mut Workspace::Borrowed(&mut buf[..]));
        assert_eq!(data, expected);
    }
}
