//! Immutable bit vectors whose bits all have the same value.
//!
//! [`EMPTY`], [`ZERO`] and [`ONE`] are shared instances for the three most
//! common cases. They implement only [`BitVector`], so any attempt to change them
//! is rejected by the compiler.

use std::hash::{Hash, Hasher};

use crate::traits::BitVector;
use crate::utils::{check_index, check_window, compute_mask};

/// A read-only bit vector of `len` bits, all equal to the same value.
///
/// # Examples
/// ```
/// use wordbits::{BitVector, ConstantBitVector, FlatBitVector};
///
/// let ones = ConstantBitVector::new(100, true);
/// assert_eq!(ones.count_ones(), 100);
/// assert_eq!(ones.next_zero(0), None);
///
/// let bv = FlatBitVector::with_ones(100);
/// assert!(ones.bits_eq(&bv));
/// assert_eq!(ones.bits_hash(), bv.bits_hash());
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ConstantBitVector {
    len: usize,
    bit: bool,
}

/// The empty bit vector.
pub static EMPTY: ConstantBitVector = ConstantBitVector::new(0, false);

/// The bit vector made of a single zero.
pub static ZERO: ConstantBitVector = ConstantBitVector::new(1, false);

/// The bit vector made of a single one.
pub static ONE: ConstantBitVector = ConstantBitVector::new(1, true);

impl ConstantBitVector {
    /// Creates a vector of `len` bits equal to `bit`.
    #[must_use]
    pub const fn new(len: usize, bit: bool) -> Self {
        Self { len, bit }
    }

    /// Returns the value of every bit.
    #[inline]
    pub fn bit(&self) -> bool {
        self.bit
    }

    /// Returns `self`: an immutable vector needs no copy.
    ///
    /// Shadows [`BitVector::copy`], which would build a
    /// [`FlatBitVector`](crate::FlatBitVector).
    ///
    /// # Examples
    /// ```
    /// use wordbits::ONE;
    ///
    /// assert!(std::ptr::eq(ONE.copy(), &ONE));
    /// ```
    #[inline]
    pub fn copy(&self) -> &Self {
        self
    }
}

impl BitVector for ConstantBitVector {
    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn get_bit(&self, index: usize) -> bool {
        check_index(index, self.len);
        self.bit
    }

    #[inline]
    fn get_word_range(&self, from: usize, to: usize) -> u64 {
        check_window(from, to, self.len);
        if self.bit {
            compute_mask(to - from)
        } else {
            0
        }
    }

    #[inline]
    fn count_ones(&self) -> usize {
        if self.bit {
            self.len
        } else {
            0
        }
    }

    fn next_one(&self, index: usize) -> Option<usize> {
        (self.bit && index < self.len).then_some(index)
    }

    fn previous_one(&self, index: usize) -> Option<usize> {
        let index = index.min(self.len);
        (self.bit && index > 0).then(|| index - 1)
    }

    fn next_zero(&self, index: usize) -> Option<usize> {
        (!self.bit && index < self.len).then_some(index)
    }

    fn previous_zero(&self, index: usize) -> Option<usize> {
        let index = index.min(self.len);
        (!self.bit && index > 0).then(|| index - 1)
    }
}

impl<O: BitVector> PartialEq<O> for ConstantBitVector {
    fn eq(&self, other: &O) -> bool {
        self.bits_eq(other)
    }
}

impl Eq for ConstantBitVector {}

impl Hash for ConstantBitVector {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(self.bits_hash());
    }
}

#[cfg(test)]
mod tests;
