use crate::element::CountingKey;

use super::common::Workspace;

/// Tallies every value into a table spanning the whole domain of `T`, then
/// rewrites `data` in domain order.
pub fn sort<T: CountingKey>(data: &mut [T], workspace: &mut Workspace<'_, T>) {
    let mut owned;
    let counts: &mut [usize] = match workspace.counts(T::BUCKETS) {
        Some(counts) => counts,
        None => {
            owned = vec![0usize; T::BUCKETS];
            &mut owned[..]
        }
    };

    for &x in data.iter() {
        counts[x.to_bucket()] += 1;
    }

    let mut out = 0usize;
    for (bucket, &count) in counts.iter().enumerate() {
        if count == 0 {
            continue;
        }
        data[out..(out + count)].fill(T::from_bucket(bucket));
        out += count;
    }
    debug_assert_eq!(out, data.len());
}
