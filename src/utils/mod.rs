//! The module provides low-level utilities for word arithmetic and for the
//! validation of indices and ranges.
//!
//! Validations go through the `checks` feature: with the feature enabled (the
//! default) a failed validation panics with the corresponding [`Error`] message,
//! without it the validation is a `debug_assert!` and vanishes from release builds.
use num_traits::PrimInt;

use crate::Error;

/// Number of bits in a word.
pub const WORD_BITS: usize = 64;
/// log2 of [`WORD_BITS`].
pub const LOG2_WORD_BITS: usize = 6;
/// Mask extracting the position of a bit inside its word.
pub const WORD_MASK: usize = WORD_BITS - 1;

/// Returns the number of words needed to store `n_bits` bits.
///
/// # Examples
///
/// ```
/// use wordbits::utils::words_for;
///
/// assert_eq!(words_for(0), 0);
/// assert_eq!(words_for(64), 1);
/// assert_eq!(words_for(65), 2);
/// ```
#[inline(always)]
pub const fn words_for(n_bits: usize) -> usize {
    (n_bits >> LOG2_WORD_BITS) + (n_bits & WORD_MASK != 0) as usize
}

/// Index of the word containing bit `index`.
#[inline(always)]
pub const fn word_of(index: usize) -> usize {
    index >> LOG2_WORD_BITS
}

/// Position of bit `index` inside its word.
#[inline(always)]
pub const fn bit_of(index: usize) -> usize {
    index & WORD_MASK
}

/// Returns a mask with the `len` least significant bits set, `len` in [0, 64].
///
/// # Examples
///
/// ```
/// use wordbits::utils::compute_mask;
///
/// assert_eq!(compute_mask(0), 0);
/// assert_eq!(compute_mask(3), 0b111);
/// assert_eq!(compute_mask(64), u64::MAX);
/// ```
#[inline(always)]
pub const fn compute_mask(len: usize) -> u64 {
    if len >= WORD_BITS {
        u64::MAX
    } else {
        (1_u64 << len) - 1
    }
}

/// Computes the position of the most significant bit in v.
pub fn msb<T>(v: T) -> u32
where
    T: PrimInt,
{
    if v == T::zero() {
        return 0;
    }
    (std::mem::size_of::<T>() * 8 - 1) as u32 - v.leading_zeros()
}

macro_rules! check {
    ($cond:expr, $err:expr) => {{
        #[cfg(feature = "checks")]
        {
            if !$cond {
                panic!("{}", $err);
            }
        }
        #[cfg(not(feature = "checks"))]
        {
            debug_assert!($cond, "{}", $err);
        }
    }};
}

pub(crate) use check;

/// Validates a read/write index: `index < len`.
#[inline(always)]
#[track_caller]
pub(crate) fn check_index(index: usize, len: usize) {
    check!(index < len, Error::IndexOutOfBounds { index, len });
}

/// Validates an insertion index: `index <= len`.
#[inline(always)]
#[track_caller]
pub(crate) fn check_insert_index(index: usize, len: usize) {
    check!(index <= len, Error::IndexOutOfBounds { index, len });
}

/// Validates a range: `from <= to <= len`.
#[inline(always)]
#[track_caller]
pub(crate) fn check_range(from: usize, to: usize, len: usize) {
    check!(from <= to && to <= len, Error::InvalidRange { from, to, len });
}

/// Validates a window of at most 64 bits inside `[0, len)`.
#[inline(always)]
#[track_caller]
pub(crate) fn check_window(from: usize, to: usize, len: usize) {
    check_range(from, to, len);
    check!(to - from <= WORD_BITS, Error::SpanTooWide { from, to });
}
