use super::common::SortRange;

/// Sorts a short range, picking the variant its left edge allows.
#[inline]
pub fn sort<T: PartialOrd + Copy>(range: SortRange<'_, T>) {
    if range.leftmost {
        insertion_sort(range.data);
    } else {
        pair_insertion_sort(range.data);
    }
}

/// Classic insertion sort, bounded by the start of `data`.
#[inline]
pub fn insertion_sort<T: PartialOrd + Copy>(data: &mut [T]) {
    for i in 1..data.len() {
        let key = data[i];
        let mut j = i;
        while j > 0 && key < data[j - 1] {
            data[j] = data[j - 1];
            j -= 1;
        }
        data[j] = key;
    }
}

/// Insertion sort of `data[1..]` that inserts two elements per shift loop.
///
/// `data[0]` must be no greater than any other element of `data`. It stops
/// every leftward scan, so the scans carry no bound check of their own.
pub fn pair_insertion_sort<T: PartialOrd + Copy>(data: &mut [T]) {
    let right = data.len() - 1;

    // Skip the ascending prefix.
    let mut k = 1usize;
    loop {
        if k >= right {
            return;
        }
        k += 1;
        if data[k] < data[k - 1] {
            break;
        }
    }

    while k < right {
        let (mut a1, mut a2) = (data[k], data[k + 1]);
        if a1 < a2 {
            std::mem::swap(&mut a1, &mut a2);
        }

        // Shift by two past everything above the larger element.
        let mut j = k;
        while a1 < data[j - 1] {
            data[j + 1] = data[j - 1];
            j -= 1;
        }
        data[j + 1] = a1;

        while a2 < data[j - 1] {
            data[j] = data[j - 1];
            j -= 1;
        }
        data[j] = a2;

        k += 2;
    }

    // The last element, when the remainder was odd.
    let last = data[right];
    let mut j = right;
    while last < data[j - 1] {
        data[j] = data[j - 1];
        j -= 1;
    }
    data[j] = last;
}
