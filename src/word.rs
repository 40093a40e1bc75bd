use std::fmt::Debug;

use num_traits::{PrimInt, WrappingAdd, WrappingSub};

/// An unsigned machine word used as the bitvector of one lane.
///
/// The same type is used for the lane's length field and its score, so a
/// `u8` lane supports queries of at most 8 characters and candidates (and
/// hence distances) of at most 255.
pub trait Word: PrimInt + WrappingAdd + WrappingSub + Default + Debug + 'static {
    /// Number of bits, i.e. the maximal query length.
    const BITS: usize;
    /// Largest representable length.
    const MAX_LEN: usize;

    /// Truncating conversion; callers check against `MAX_LEN` first.
    fn from_len(len: usize) -> Self;
    fn as_usize(self) -> usize;
}

macro_rules! impl_word {
    ($($t:ty),*) => {$(
        impl Word for $t {
            const BITS: usize = <$t>::BITS as usize;
            const MAX_LEN: usize = if <$t>::BITS as usize >= usize::BITS as usize {
                usize::MAX
            } else {
                <$t>::MAX as usize
            };

            #[inline(always)]
            fn from_len(len: usize) -> Self {
                len as $t
            }
            #[inline(always)]
            fn as_usize(self) -> usize {
                self as usize
            }
        }
    )*};
}

impl_word!(u8, u16, u32, u64, u128);
