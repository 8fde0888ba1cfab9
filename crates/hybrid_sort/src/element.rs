use std::fmt::Debug;

use crate::algorithms::common::Workspace;
use crate::algorithms::{float_order, hybrid};
use crate::{Strategy, TUNED_PARAMS};

/// Which pipeline an element type goes through.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Domain {
    /// Integers whose value domain is too large to enumerate.
    Integral,
    /// 8- and 16-bit integers, eligible for counting sort.
    Narrow,
    /// IEEE floats, wrapped by the NaN and signed-zero passes.
    Float,
}

/// A fixed-width numeric type the engine can sort.
///
/// Implemented for all primitive integers up to 64 bits, `isize`, `usize`,
/// `f32` and `f64`. The trait is sealed.
pub trait SortElement: Copy + PartialOrd + Debug + private::Sealed {
    const DOMAIN: Domain;
}

/// Integers whose whole domain fits in a frequency table.
pub(crate) trait CountingKey: SortElement {
    const BUCKETS: usize;
    /// Counting is used when `len - 1` exceeds this.
    const THRESHOLD: usize;

    fn to_bucket(self) -> usize;
    fn from_bucket(bucket: usize) -> Self;
}

pub(crate) trait FloatKey: SortElement {
    const ZERO: Self;

    #[inline]
    #[allow(clippy::eq_op)]
    fn is_nan(self) -> bool {
        self != self
    }

    fn is_sign_negative(self) -> bool;

    #[inline]
    fn is_negative_zero(self) -> bool {
        self == Self::ZERO && self.is_sign_negative()
    }
}

macro_rules! impl_integral { ($($t:ty)*) => ($(
    impl SortElement for $t {
        const DOMAIN: Domain = Domain::Integral;
    }

    impl private::Sealed for $t {
        #[inline]
        fn sort_engine(v: &mut [Self], workspace: Workspace<'_, Self>, strategy: Strategy) {
            hybrid::sort_integral(v, workspace, strategy);
        }

        #[inline]
        fn in_order(a: Self, b: Self) -> bool {
            a <= b
        }
    }
)*) }

macro_rules! impl_narrow { ($($t:ty => $threshold:ident),* $(,)?) => ($(
    impl SortElement for $t {
        const DOMAIN: Domain = Domain::Narrow;
    }

    impl CountingKey for $t {
        const BUCKETS: usize = 1 << <$t>::BITS;
        const THRESHOLD: usize = TUNED_PARAMS.$threshold;

        #[inline]
        fn to_bucket(self) -> usize {
            (self as i64 - <$t>::MIN as i64) as usize
        }

        #[inline]
        fn from_bucket(bucket: usize) -> Self {
            (bucket as i64 + <$t>::MIN as i64) as $t
        }
    }

    impl private::Sealed for $t {
        #[inline]
        fn sort_engine(v: &mut [Self], workspace: Workspace<'_, Self>, strategy: Strategy) {
            hybrid::sort_narrow(v, workspace, strategy);
        }

        #[inline]
        fn in_order(a: Self, b: Self) -> bool {
            a <= b
        }
    }
)*) }

macro_rules! impl_float { ($($t:ty)*) => ($(
    impl SortElement for $t {
        const DOMAIN: Domain = Domain::Float;
    }

    impl FloatKey for $t {
        const ZERO: Self = 0.0;

        #[inline]
        fn is_sign_negative(self) -> bool {
            <$t>::is_sign_negative(self)
        }
    }

    impl private::Sealed for $t {
        #[inline]
        fn sort_engine(v: &mut [Self], workspace: Workspace<'_, Self>, strategy: Strategy) {
            float_order::sort(v, workspace, strategy);
        }

        fn in_order(a: Self, b: Self) -> bool {
            if FloatKey::is_nan(b) {
                return true;
            }
            if FloatKey::is_nan(a) {
                return false;
            }
            a < b || (a == b && !(b.is_negative_zero() && !a.is_negative_zero()))
        }
    }
)*) }

impl_integral! { i32 u32 i64 u64 isize usize }

impl_narrow! {
    i8 => counting_sort_threshold_8bit,
    u8 => counting_sort_threshold_8bit,
    i16 => counting_sort_threshold_16bit,
    u16 => counting_sort_threshold_16bit,
}

impl_float! { f32 f64 }

pub(crate) mod private {
    use crate::Strategy;
    use crate::algorithms::common::Workspace;

    /// Seals [`SortElement`](super::SortElement) and carries the per-type
    /// entry into the engine.
    pub trait Sealed: Sized {
        fn sort_engine(v: &mut [Self], workspace: Workspace<'_, Self>, strategy: Strategy);

        /// `a` may precede `b` in sorted output.
        fn in_order(a: Self, b: Self) -> bool;
    }
}
