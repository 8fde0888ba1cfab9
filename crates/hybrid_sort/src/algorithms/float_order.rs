use log::trace;

use crate::Strategy;
use crate::element::FloatKey;

use super::common::Workspace;
use super::hybrid;

/// Sorts floats: NaNs go to the tail unsorted, the rest is sorted by the
/// integral pipeline and then each `-0.0` is moved ahead of every `0.0`.
pub fn sort<T: FloatKey>(data: &mut [T], workspace: Workspace<'_, T>, strategy: Strategy) {
    let numbers = segregate_nan(data);
    if numbers < data.len() {
        trace!("moved {} NaNs to the tail", data.len() - numbers);
    }

    let numbers = &mut data[..numbers];
    hybrid::sort_integral(numbers, workspace, strategy);
    order_signed_zeros(numbers);
}

/// Swaps every NaN to the end of `data` and returns how many non-NaN
/// elements precede them.
pub fn segregate_nan<T: FloatKey>(data: &mut [T]) -> usize {
    let mut end = data.len();
    while end > 0 && data[end - 1].is_nan() {
        end -= 1;
    }

    let mut k = end;
    while k > 0 {
        k -= 1;
        if data[k].is_nan() {
            end -= 1;
            data.swap(k, end);
        }
    }
    end
}

/// In sorted, NaN-free `data`, moves negative zeros in front of positive ones.
pub fn order_signed_zeros<T: FloatKey>(data: &mut [T]) {
    // First element that is not negative, which may be a leading -0.0.
    let mut first = data.partition_point(|&x| x < T::ZERO);
    while first < data.len() && data[first].is_negative_zero() {
        first += 1;
    }

    // data[first] is 0.0 or positive; every -0.0 after it is swapped to `next`.
    let mut next = first;
    for k in (first + 1)..data.len() {
        let x = data[k];
        if x != T::ZERO {
            break;
        }
        if x.is_negative_zero() {
            data.swap(next, k);
            next += 1;
        }
    }
}
