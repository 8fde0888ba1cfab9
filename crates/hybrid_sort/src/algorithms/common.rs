use crate::SortContext;

/// Where the merge buffer and the frequency table come from.
pub enum Workspace<'a, T> {
    /// Allocate per call.
    Absent,
    /// Caller-owned merge buffer, used only when it is long enough.
    Borrowed(&'a mut [T]),
    /// Buffers that grow on demand and outlive the call.
    Context(&'a mut SortContext<T>),
}

impl<T: Copy> Workspace<'_, T> {
    /// Returns a merge buffer of exactly `len` elements, if one is available.
    #[inline]
    pub fn scratch(&mut self, len: usize, fill: T) -> Option<&mut [T]> {
        match self {
            Self::Absent => None,
            Self::Borrowed(buf) => buf.get_mut(..len),
            Self::Context(ctx) => Some(ctx.ensure_scratch(len, fill)),
        }
    }

    /// Returns a zeroed frequency table of `len` buckets, if one is available.
    #[inline]
    pub fn counts(&mut self, len: usize) -> Option<&mut [usize]> {
        match self {
            Self::Context(ctx) => {
                let counts = ctx.ensure_counts(len);
                counts.fill(0);
                Some(counts)
            }
            Self::Absent | Self::Borrowed(_) => None,
        }
    }
}

/// A range being sorted, `data[left()..=right()]`.
///
/// A range that is not leftmost carries its left neighbour in `data[0]`.
/// That slot is never written and holds a value no greater than any element
/// of the range, so scans moving left may use it as a stop.
pub struct SortRange<'a, T> {
    pub data: &'a mut [T],
    pub leftmost: bool,
}

impl<'a, T> SortRange<'a, T> {
    #[inline]
    pub fn leftmost(data: &'a mut [T]) -> Self {
        Self {
            data,
            leftmost: true,
        }
    }

    #[inline]
    pub fn with_sentinel(data: &'a mut [T]) -> Self {
        debug_assert!(!data.is_empty());
        Self {
            data,
            leftmost: false,
        }
    }

    #[inline]
    pub fn left(&self) -> usize {
        usize::from(!self.leftmost)
    }

    /// Inclusive; meaningless for an empty range.
    #[inline]
    pub fn right(&self) -> usize {
        self.data.len() - 1
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len() - self.left()
    }
}

/// Moves the longest range to the end of `parts`.
#[inline]
pub fn longest_last<T, const N: usize>(parts: &mut [SortRange<'_, T>; N]) {
    let mut longest = 0;
    for i in 1..N {
        if parts[i].len() > parts[longest].len() {
            longest = i;
        }
    }
    parts.swap(longest, N - 1);
}

/// Merges two ascending runs into `dst`, taking from `left` on ties.
#[inline]
pub fn merge_runs<T: PartialOrd + Copy>(left: &[T], right: &[T], dst: &mut [T]) {
    debug_assert_eq!(left.len() + right.len(), dst.len());

    let mut i = 0usize;
    let mut j = 0usize;
    let mut k = 0usize;

    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            dst[k] = left[i];
            i += 1;
        } else {
            dst[k] = right[j];
            j += 1;
        }
        k += 1;
    }

    if i < left.len() {
        dst[k..].copy_from_slice(&left[i..]);
    } else if j < right.len() {
        dst[k..].copy_from_slice(&right[j..]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_bounds() {
        let mut data = [9, 1, 2, 3];
        let range = SortRange::with_sentinel(&mut data);
        assert_eq!((range.left(), range.right(), range.len()), (1, 3, 3));

        let range = SortRange::leftmost(&mut data);
        assert_eq!((range.left(), range.right(), range.len()), (0, 3, 4));

        let mut empty: [i32; 0] = [];
        assert_eq!(SortRange::leftmost(&mut empty).len(), 0);
    }

    #[test]
    fn longest_last_picks_largest() {
        let (mut a, mut b, mut c) = ([0; 3], [0; 9], [0; 4]);
        let mut parts = [
            SortRange::leftmost(&mut a[..]),
            SortRange::with_sentinel(&mut b[..]),
            SortRange::with_sentinel(&mut c[..]),
        ];
        longest_last(&mut parts);
        assert_eq!(parts[2].len(), 8);
    }

    #[test]
    fn merge_prefers_left_on_ties() {
        // Ordered by the number only; the tag records the source run.
        #[derive(Clone, Copy, Debug, PartialEq)]
        struct Tagged(i32, char);
        impl PartialOrd for Tagged {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                self.0.partial_cmp(&other.0)
            }
        }

        let left = [Tagged(1, 'a'), Tagged(2, 'a')];
        let right = [Tagged(1, 'b'), Tagged(2, 'b'), Tagged(3, 'b')];
        let mut dst = [Tagged(0, '-'); 5];
        merge_runs(&left, &right, &mut dst);
        let tags: String = dst.iter().map(|t| t.1).collect();
        assert_eq!(tags, "ababb");
    }

    #[test]
    fn borrowed_workspace_too_short_is_unavailable() {
        let mut buf = [0_u32; 4];
        let mut ws = Workspace::Borrowed(&mut buf[..]);
        assert!(ws.scratch(5, 0).is_none());
        assert_eq!(ws.scratch(3, 0).map(|s| s.len()), Some(3));
        assert!(ws.counts(256).is_none());
    }

    #[test]
    fn context_workspace_grows_and_zeroes() {
        let mut ctx = SortContext::<u8>::new();
        ctx.counts = vec![7; 10];
        let mut ws = Workspace::Context(&mut ctx);
        assert_eq!(ws.scratch(16, 0).map(|s| s.len()), Some(16));
        assert!(ws.counts(256).is_some_and(|c| c.iter().all(|&n| n == 0)));
        assert_eq!(ctx.scratch.len(), 16);
        assert_eq!(ctx.counts.len(), 256);
    }
}
