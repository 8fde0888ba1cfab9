use crate::TUNED_PARAMS;

use super::common::{SortRange, longest_last};
use super::insertion_sort;

/// Sorts `range` by recursive dual-pivot partitioning.
///
/// The two shorter segments of every split are sorted recursively and the
/// longest one is continued in the loop, so stack depth stays logarithmic.
pub fn sort<T: PartialOrd + Copy>(mut range: SortRange<'_, T>) {
    while range.len() >= TUNED_PARAMS.insertion_sort_threshold {
        let sample = pivot_sample(&mut range);
        let SortRange { data, leftmost } = range;

        range = if sample_is_distinct(data, &sample) {
            let mut parts = partition_dual(data, leftmost, &sample);
            longest_last(&mut parts);
            let [first, second, longest] = parts;
            sort(first);
            sort(second);
            longest
        } else {
            let mut parts = partition_single(data, leftmost, sample[2]);
            longest_last(&mut parts);
            let [shorter, longest] = parts;
            sort(shorter);
            longest
        };
    }

    insertion_sort::sort(range);
}

/// Picks five evenly spaced positions around the middle of `range` and sorts
/// the values found there in place.
fn pivot_sample<T: PartialOrd + Copy>(range: &mut SortRange<'_, T>) -> [usize; 5] {
    let len = range.len();
    let (left, right) = (range.left(), range.right());

    // Roughly len / 7.
    let seventh = (len >> 3) + (len >> 6) + 1;
    let e3 = (left + right) >> 1;
    let e2 = e3 - seventh;
    let e1 = e2 - seventh;
    let e4 = e3 + seventh;
    let e5 = e4 + seventh;
    debug_assert!(left < e1 && e5 < right);

    let sample = [e1, e2, e3, e4, e5];
    let data = &mut *range.data;
    for i in 1..sample.len() {
        let t = data[sample[i]];
        let mut j = i;
        while j > 0 && t < data[sample[j - 1]] {
            data[sample[j]] = data[sample[j - 1]];
            j -= 1;
        }
        data[sample[j]] = t;
    }

    sample
}

#[inline]
fn sample_is_distinct<T: PartialOrd>(data: &[T], sample: &[usize; 5]) -> bool {
    sample.windows(2).all(|w| data[w[0]] != data[w[1]])
}

/// Three-way partition around `data[e2] < data[e4]`.
///
/// Returns the segments below `pivot1`, between the pivots, and above
/// `pivot2`. The pivots end up in their final slots and serve as the left
/// neighbours of the middle and upper segments.
fn partition_dual<'a, T: PartialOrd + Copy>(
    data: &'a mut [T],
    leftmost: bool,
    sample: &[usize; 5],
) -> [SortRange<'a, T>; 3] {
    let left = usize::from(!leftmost);
    let right = data.len() - 1;
    let [e1, e2, _, e4, e5] = *sample;

    let pivot1 = data[e2];
    let pivot2 = data[e4];

    // The pivot slots take the edge elements; the edges are filled with the
    // pivots once partitioning is done.
    data[e2] = data[left];
    data[e4] = data[right];

    // Both scans stop at e3 at the latest, since pivot1 < data[e3] < pivot2.
    let mut less = left + 1;
    while data[less] < pivot1 {
        less += 1;
    }
    let mut great = right - 1;
    while data[great] > pivot2 {
        great -= 1;
    }

    //   left  |  < pivot1  | pivot1 <= && <= pivot2 |    ?    |  > pivot2  | right
    //         ^            ^                        ^         ^            ^
    //       left         less                       k       great        right
    let mut k = less;
    'scan: while k <= great {
        let ak = data[k];
        if ak < pivot1 {
            data[k] = data[less];
            data[less] = ak;
            less += 1;
        } else if ak > pivot2 {
            while data[great] > pivot2 {
                if great == k {
                    great -= 1;
                    break 'scan;
                }
                great -= 1;
            }
            if data[great] < pivot1 {
                data[k] = data[less];
                data[less] = data[great];
                less += 1;
            } else {
                data[k] = data[great];
            }
            data[great] = ak;
            great -= 1;
        }
        k += 1;
    }

    data[left] = data[less - 1];
    data[less - 1] = pivot1;
    data[right] = data[great + 1];
    data[great + 1] = pivot2;

    let (p1, p2) = (less - 1, great + 1);

    // A middle segment wider than the sample span holds many pivot-equal
    // elements; peel them off so only values strictly between the pivots recurse.
    if less < e1 && e5 < great {
        (less, great) = peel_pivot_equal(data, less, great, pivot1, pivot2);
    }

    let (lower, rest) = data.split_at_mut(p1);
    let (_, rest) = rest.split_at_mut(less - 1 - p1);
    let (middle, upper) = rest.split_at_mut(great + 2 - less);
    let upper = &mut upper[p2 - (great + 1)..];

    [
        SortRange {
            data: lower,
            leftmost,
        },
        SortRange::with_sentinel(middle),
        SortRange::with_sentinel(upper),
    ]
}

/// Moves elements equal to `pivot1` to the front and equal to `pivot2` to
/// the back of `data[less..=great]`, returning the bounds of what remains.
fn peel_pivot_equal<T: PartialOrd + Copy>(
    data: &mut [T],
    mut less: usize,
    mut great: usize,
    pivot1: T,
    pivot2: T,
) -> (usize, usize) {
    while data[less] == pivot1 {
        less += 1;
    }
    while data[great] == pivot2 {
        great -= 1;
    }

    let mut k = less;
    'scan: while k <= great {
        let ak = data[k];
        if ak == pivot1 {
            data[k] = data[less];
            data[less] = ak;
            less += 1;
        } else if ak == pivot2 {
            while data[great] == pivot2 {
                if great == k {
                    great -= 1;
                    break 'scan;
                }
                great -= 1;
            }
            if data[great] == pivot1 {
                data[k] = data[less];
                data[less] = data[great];
                less += 1;
            } else {
                data[k] = data[great];
            }
            data[great] = ak;
            great -= 1;
        }
        k += 1;
    }

    (less, great)
}

/// Dutch national flag partition around `data[e3]`.
///
/// Returns the segments below and above the pivot; the equal block between
/// them is final.
fn partition_single<T: PartialOrd + Copy>(
    data: &mut [T],
    leftmost: bool,
    e3: usize,
) -> [SortRange<'_, T>; 2] {
    let left = usize::from(!leftmost);
    let pivot = data[e3];

    let mut less = left;
    let mut great = data.len() - 1;

    //   left  |  < pivot  |  == pivot  |    ?    |  > pivot  | right
    //         ^           ^            ^         ^           ^
    //       left        less           k       great       right
    let mut k = less;
    while k <= great {
        let ak = data[k];
        if ak < pivot {
            data[k] = data[less];
            data[less] = ak;
            less += 1;
        } else if ak > pivot {
            while great > k && data[great] > pivot {
                great -= 1;
            }
            if great == k {
                great -= 1;
                break;
            }
            if data[great] < pivot {
                data[k] = data[less];
                data[less] = data[great];
                less += 1;
            } else {
                // Equal but possibly a different bit pattern, so move the
                // element itself rather than writing the pivot.
                data[k] = data[great];
            }
            data[great] = ak;
            great -= 1;
        }
        k += 1;
    }

    // The equal block holds at least the pivot itself, so less <= great and
    // data[great] is a valid left neighbour for the upper segment.
    debug_assert!(less <= great);
    let (lower, upper) = data.split_at_mut(less);
    let upper = &mut upper[great - less..];

    [
        SortRange {
            data: lower,
            leftmost,
        },
        SortRange::with_sentinel(upper),
    ]
}
