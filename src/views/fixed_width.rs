//! A bit vector seen as a list of fixed-width unsigned integers.
//!
//! Element `i` occupies bits `[i * width, (i + 1) * width)`, least significant bit
//! first. Trailing bits that do not make a whole element are ignored.

use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::traits::{BitVector, BitVectorMut, ResizableBitVector};
use crate::utils::{check, check_index, compute_mask, WORD_BITS};
use crate::{Error, Result};

/// A list of `width`-bit unsigned integers stored in a backing vector.
///
/// # Examples
/// ```
/// use wordbits::{BitVector, BitVectorMut, FlatBitVector};
///
/// let mut bv = FlatBitVector::new();
/// let mut list = bv.as_fixed_width_mut(5);
/// list.push(17);
/// list.push(3);
/// assert_eq!(list.set(0, 31), 17);
/// assert_eq!(list.iter().collect::<Vec<_>>(), vec![31, 3]);
/// assert_eq!(bv.len(), 10);
/// ```
pub struct FixedWidthView<B> {
    backing: B,
    width: usize,
}

impl<B> FixedWidthView<B>
where
    B: Deref,
    B::Target: BitVector,
{
    /// Creates a view of `backing` as a list of `width`-bit integers.
    ///
    /// # Panics
    /// Panics if `width` is not in `[1, 64]` (only in debug builds when the
    /// `checks` feature is disabled).
    #[must_use]
    pub fn new(backing: B, width: usize) -> Self {
        check!(
            width > 0 && width <= WORD_BITS,
            Error::InvalidWidth(width)
        );
        Self { backing, width }
    }

    /// Creates a view of `backing` as a list of `width`-bit integers, or returns
    /// [`Error::InvalidWidth`] if `width` is not in `[1, 64]`.
    pub fn try_new(backing: B, width: usize) -> Result<Self> {
        if width == 0 || width > WORD_BITS {
            return Err(Error::InvalidWidth(width));
        }
        Ok(Self { backing, width })
    }

    /// Returns the width of the elements.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the backing vector.
    #[inline]
    pub fn backing(&self) -> &B::Target {
        &self.backing
    }

    /// Consumes the view and returns the pointer to the backing vector.
    pub fn into_inner(self) -> B {
        self.backing
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.backing.len() / self.width
    }

    /// Checks if there are no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the element at `index`, or [`None`] if `index` is out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<u64> {
        if index >= self.len() {
            return None;
        }
        let from = index * self.width;
        Some(self.backing.get_word_range(from, from + self.width))
    }

    /// Returns an iterator over the elements.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = u64> + ExactSizeIterator + '_ {
        let width = self.width;
        (0..self.len()).map(move |i| self.backing.get_word_range(i * width, (i + 1) * width))
    }
}

impl<B> FixedWidthView<B>
where
    B: DerefMut,
    B::Target: BitVectorMut,
{
    /// Sets the element at `index` to `value` and returns the previous value.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds or `value` does not fit in `width` bits
    /// (only in debug builds when the `checks` feature is disabled).
    pub fn set(&mut self, index: usize, value: u64) -> u64 {
        check_index(index, self.len());
        self.check_value(value);
        let from = index * self.width;
        let old = self.backing.get_word_range(from, from + self.width);
        let width = self.width;
        self.backing.set_bits(from, width, value);
        old
    }

    #[inline]
    fn check_value(&self, value: u64) {
        check!(
            value & !compute_mask(self.width) == 0,
            Error::ValueTooWide {
                value,
                width: self.width
            }
        );
    }
}

impl<B> FixedWidthView<B>
where
    B: DerefMut,
    B::Target: ResizableBitVector,
{
    /// Sets the number of elements to `new_len`, that is, the length of the backing
    /// vector to `new_len * width`. New elements are zero.
    pub fn resize(&mut self, new_len: usize) {
        let n_bits = new_len * self.width;
        self.backing.set_len(n_bits);
    }

    /// Appends `value`. Trailing bits of the backing vector that do not make a
    /// whole element are dropped first.
    ///
    /// # Panics
    /// Panics if `value` does not fit in `width` bits (only in debug builds when
    /// the `checks` feature is disabled).
    pub fn push(&mut self, value: u64) {
        self.check_value(value);
        let len = self.len();
        self.resize(len);
        let width = self.width;
        self.backing.append_bits(value, width);
    }

    /// Removes the last element and returns it, or [`None`] if there are none.
    pub fn pop(&mut self) -> Option<u64> {
        let len = self.len();
        let last = self.get(len.checked_sub(1)?)?;
        self.resize(len - 1);
        Some(last)
    }
}

impl<B> Extend<u64> for FixedWidthView<B>
where
    B: DerefMut,
    B::Target: ResizableBitVector,
{
    fn extend<T>(&mut self, iter: T)
    where
        T: IntoIterator<Item = u64>,
    {
        for value in iter {
            self.push(value);
        }
    }
}

impl<B> fmt::Debug for FixedWidthView<B>
where
    B: Deref,
    B::Target: BitVector,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests;
