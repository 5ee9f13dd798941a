//! A range of a bit vector seen as a bit vector of its own.

use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::traits::{BitVector, BitVectorMut, ResizableBitVector};
use crate::utils::{check, check_index, check_insert_index, check_range, check_window, WORD_BITS};
use crate::Error;

/// The bits in `[from, to)` of a backing vector, indexed from zero.
///
/// Insertions and removals through the view shift the rest of the backing vector
/// and move the end of the view accordingly.
///
/// # Examples
/// ```
/// use wordbits::{BitVector, BitVectorMut, FlatBitVector, ResizableBitVector};
///
/// let mut bv = FlatBitVector::with_zeros(8);
/// {
///     let mut view = bv.sub_vector_mut(2, 5);
///     view.set(0, true);
///     view.insert(3, true);
///     assert_eq!(view.len(), 4);
/// }
/// assert_eq!(bv.len(), 9);
/// assert_eq!(bv.ones().collect::<Vec<_>>(), vec![2, 5]);
/// ```
pub struct SubBitVector<B> {
    backing: B,
    from: usize,
    to: usize,
}

impl<B> SubBitVector<B>
where
    B: Deref,
    B::Target: BitVector,
{
    /// Creates a view of the bits in `[from, to)` of `backing`.
    ///
    /// # Panics
    /// Panics if `from > to` or `to > backing.len()` (only in debug builds when
    /// the `checks` feature is disabled).
    #[must_use]
    pub fn new(backing: B, from: usize, to: usize) -> Self {
        check_range(from, to, backing.len());
        Self { backing, from, to }
    }

    /// Returns the position in the backing vector of the first bit of the view.
    #[inline]
    pub fn start(&self) -> usize {
        self.from
    }

    /// Returns the position in the backing vector just past the view.
    #[inline]
    pub fn end(&self) -> usize {
        self.to
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

    /// Returns a read-only view of the bits in `[from, to)` of this view.
    ///
    /// The new view reads the backing vector directly, with offsets added.
    ///
    /// # Examples
    /// ```
    /// use wordbits::{BitVector, FlatBitVector};
    ///
    /// let bv: FlatBitVector = vec![4_usize, 6].into_iter().collect();
    /// let outer = bv.sub_vector(2, 7);
    /// let inner = outer.sub_vector(1, 5);
    /// assert_eq!((inner.start(), inner.end()), (3, 7));
    /// assert_eq!(inner.ones().collect::<Vec<_>>(), vec![1, 3]);
    /// ```
    #[must_use]
    pub fn sub_vector(&self, from: usize, to: usize) -> SubBitVector<&B::Target> {
        check_range(from, to, self.len());
        SubBitVector {
            backing: &*self.backing,
            from: self.from + from,
            to: self.from + to,
        }
    }

    // Maps a position of the backing vector back into the view, if it falls inside.
    #[inline]
    fn local(&self, pos: Option<usize>) -> Option<usize> {
        pos.filter(|&p| p >= self.from && p < self.to)
            .map(|p| p - self.from)
    }
}

impl<B> BitVector for SubBitVector<B>
where
    B: Deref,
    B::Target: BitVector,
{
    #[inline]
    fn len(&self) -> usize {
        self.to - self.from
    }

    #[inline]
    fn get_bit(&self, index: usize) -> bool {
        check_index(index, self.len());
        self.backing.get_bit(self.from + index)
    }

    #[inline]
    fn get_word_range(&self, from: usize, to: usize) -> u64 {
        check_window(from, to, self.len());
        self.backing
            .get_word_range(self.from + from, self.from + to)
    }

    fn next_one(&self, index: usize) -> Option<usize> {
        if index >= self.len() {
            return None;
        }
        self.local(self.backing.next_one(self.from + index))
    }

    fn previous_one(&self, index: usize) -> Option<usize> {
        let index = index.min(self.len());
        self.local(self.backing.previous_one(self.from + index))
    }

    fn next_zero(&self, index: usize) -> Option<usize> {
        if index >= self.len() {
            return None;
        }
        self.local(self.backing.next_zero(self.from + index))
    }

    fn previous_zero(&self, index: usize) -> Option<usize> {
        let index = index.min(self.len());
        self.local(self.backing.previous_zero(self.from + index))
    }
}

impl<B> SubBitVector<B>
where
    B: DerefMut,
    B::Target: BitVectorMut,
{
    // Applies `op` to the first `min(len, other.len())` bits, one window at a time.
    fn combine<O, F>(&mut self, other: &O, op: F)
    where
        O: BitVector + ?Sized,
        F: Fn(u64, u64) -> u64,
    {
        let n = self.len().min(other.len());
        let mut i = 0;
        while i < n {
            let end = (i + WORD_BITS).min(n);
            let bits = op(self.get_word_range(i, end), other.get_word_range(i, end));
            self.set_bits(i, end - i, bits);
            i = end;
        }
    }
}

impl<B> BitVectorMut for SubBitVector<B>
where
    B: DerefMut,
    B::Target: BitVectorMut,
{
    #[inline]
    fn set(&mut self, index: usize, bit: bool) -> bool {
        check_index(index, self.len());
        let from = self.from;
        self.backing.set(from + index, bit)
    }

    #[inline]
    fn set_bits(&mut self, from: usize, width: usize, value: u64) {
        check_window(from, from + width, self.len());
        let offset = self.from;
        self.backing.set_bits(offset + from, width, value);
    }

    fn fill_range(&mut self, from: usize, to: usize, bit: bool) {
        check_range(from, to, self.len());
        let offset = self.from;
        self.backing.fill_range(offset + from, offset + to, bit);
    }

    fn flip_range(&mut self, from: usize, to: usize) {
        check_range(from, to, self.len());
        let offset = self.from;
        self.backing.flip_range(offset + from, offset + to);
    }

    fn and<O>(&mut self, other: &O) -> &mut Self
    where
        O: BitVector + ?Sized,
    {
        self.combine(other, |a, b| a & b);
        self
    }

    fn or<O>(&mut self, other: &O) -> &mut Self
    where
        O: BitVector + ?Sized,
    {
        self.combine(other, |a, b| a | b);
        self
    }

    fn xor<O>(&mut self, other: &O) -> &mut Self
    where
        O: BitVector + ?Sized,
    {
        self.combine(other, |a, b| a ^ b);
        self
    }
}

impl<B> ResizableBitVector for SubBitVector<B>
where
    B: DerefMut,
    B::Target: ResizableBitVector,
{
    /// Resizes the view, shifting the bits of the backing vector that follow it.
    ///
    /// Runs in O(`new_len` + bits after the view).
    fn set_len(&mut self, new_len: usize) {
        let new_to = self.from + new_len;
        self.edit_end(|backing| backing.set_len(new_to));
    }

    fn insert(&mut self, index: usize, bit: bool) {
        check_insert_index(index, self.len());
        let from = self.from;
        self.backing.insert(from + index, bit);
        self.to += 1;
    }

    fn remove(&mut self, index: usize) -> bool {
        check_index(index, self.len());
        let from = self.from;
        let bit = self.backing.remove(from + index);
        self.to -= 1;
        bit
    }

    fn append_bits(&mut self, bits: u64, len: usize) {
        check!(
            len <= WORD_BITS,
            Error::SpanTooWide {
                from: self.len(),
                to: self.len() + len
            }
        );
        self.edit_end(|backing| backing.append_bits(bits, len));
    }
}

impl<B> SubBitVector<B>
where
    B: DerefMut,
    B::Target: ResizableBitVector,
{
    /// Detaches the bits after the view, lets `edit` change the backing vector
    /// ending at the view's end, then reattaches them.
    fn edit_end(&mut self, edit: impl FnOnce(&mut B::Target)) {
        let len = self.backing.len();
        if self.to == len {
            edit(&mut *self.backing);
            self.to = self.backing.len();
            return;
        }
        let tail = self.backing.copy_range(self.to, len);
        self.backing.set_len(self.to);
        edit(&mut *self.backing);
        self.to = self.backing.len();
        self.backing.append(&tail);
    }
}

impl<B, O> PartialEq<O> for SubBitVector<B>
where
    B: Deref,
    B::Target: BitVector,
    O: BitVector,
{
    fn eq(&self, other: &O) -> bool {
        self.bits_eq(other)
    }
}

impl<B> fmt::Debug for SubBitVector<B>
where
    B: Deref,
    B::Target: BitVector,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bits: String = self.iter().map(|b| if b { '1' } else { '0' }).collect();
        f.debug_struct("SubBitVector")
            .field("from", &self.from)
            .field("to", &self.to)
            .field("bits", &bits)
            .finish()
    }
}
