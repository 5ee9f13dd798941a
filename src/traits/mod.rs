//! Traits defining the bit vector contract and every operation derived from it.
//!
//! A type becomes a bit vector by implementing [`BitVector::len`] and
//! [`BitVector::get_bit`]. Everything else, from scans to comparisons, hashing and
//! views, is a provided method built on those two primitives and on the 64-bit
//! window accessor [`BitVector::get_word_range`], whose default assembles the window
//! one bit at a time. Storage types override the window accessor and the scans with
//! word-at-a-time versions; the derived operations pick the speedup up for free.
//!
//! Mutation comes in two levels. [`BitVectorMut`] changes bits in place and keeps
//! the length fixed; [`ResizableBitVector`] adds structural changes (insertion,
//! removal, resizing, appending). Read-only and fixed-length implementations simply
//! do not implement the higher levels.

use std::cmp::Ordering;

use crate::utils::{check, check_range, check_window, compute_mask, msb, WORD_BITS, WORD_MASK};
use crate::views::{FixedWidthView, PositionSetView, SubBitVector};
use crate::{Error, FlatBitVector};

/// Seed of [`BitVector::bits_hash`].
const HASH_SEED: u64 = 0x9e37_79b9_7f4a_7c13;

/// Read access to a sequence of bits.
pub trait BitVector {
    /// Returns the number of bits.
    fn len(&self) -> usize;

    /// Returns the bit at position `index`.
    ///
    /// # Panics
    /// Panics if `index >= self.len()` (only in debug builds when the `checks`
    /// feature is disabled).
    fn get_bit(&self, index: usize) -> bool;

    /// Checks if the bit vector is empty.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the bit at position `index`, or [`None`] if `index` is out of bounds.
    ///
    /// # Examples
    /// ```
    /// use wordbits::{BitVector, FlatBitVector};
    ///
    /// let bv: FlatBitVector = [true, false].into_iter().collect();
    /// assert_eq!(bv.get(0), Some(true));
    /// assert_eq!(bv.get(2), None);
    /// ```
    #[inline]
    fn get(&self, index: usize) -> Option<bool> {
        if index >= self.len() {
            return None;
        }
        Some(self.get_bit(index))
    }

    /// Returns the bits in `[from, to)` packed in a word, bit `from` in the least
    /// significant position. The window can be at most 64 bits wide.
    ///
    /// # Panics
    /// Panics if the range is invalid or wider than 64 bits (only in debug builds
    /// when the `checks` feature is disabled).
    fn get_word_range(&self, from: usize, to: usize) -> u64 {
        check_window(from, to, self.len());
        let mut bits = 0;
        for i in from..to {
            bits |= (self.get_bit(i) as u64) << (i - from);
        }
        bits
    }

    /// Returns the bits in `[from, to)` packed in a word, or [`None`] if the range
    /// is out of bounds or wider than 64 bits.
    ///
    /// # Examples
    /// ```
    /// use wordbits::{BitVector, FlatBitVector, ResizableBitVector};
    ///
    /// let mut bv = FlatBitVector::new();
    /// bv.append_bits(0b111101, 6);
    ///
    /// assert_eq!(bv.get_bits(1, 4), Some(0b110));
    /// assert_eq!(bv.get_bits(1, 8), None);
    /// assert_eq!(bv.get_bits(3, 3), Some(0));
    /// ```
    #[inline]
    fn get_bits(&self, from: usize, to: usize) -> Option<u64> {
        if from > to || to > self.len() || to - from > WORD_BITS {
            return None;
        }
        Some(self.get_word_range(from, to))
    }

    /// Counts the number of bits set to one.
    fn count_ones(&self) -> usize {
        let n = self.len();
        let mut count = 0;
        let mut i = 0;
        while i < n {
            let to = (i + WORD_BITS).min(n);
            count += self.get_word_range(i, to).count_ones() as usize;
            i = to;
        }
        count
    }

    /// Counts the number of bits set to zero.
    #[inline]
    fn count_zeros(&self) -> usize {
        self.len() - self.count_ones()
    }

    /// Returns the smallest position `>= index` of a bit set to one.
    ///
    /// # Examples
    /// ```
    /// use wordbits::{BitVector, FlatBitVector};
    ///
    /// let bv: FlatBitVector = vec![3_usize, 70, 200].into_iter().collect();
    /// assert_eq!(bv.next_one(0), Some(3));
    /// assert_eq!(bv.next_one(4), Some(70));
    /// assert_eq!(bv.next_one(201), None);
    /// ```
    fn next_one(&self, index: usize) -> Option<usize> {
        next_in_windows(self, index, true)
    }

    /// Returns the largest position `< index` of a bit set to one.
    ///
    /// # Examples
    /// ```
    /// use wordbits::{BitVector, FlatBitVector};
    ///
    /// let bv: FlatBitVector = vec![3_usize, 70, 200].into_iter().collect();
    /// assert_eq!(bv.previous_one(201), Some(200));
    /// assert_eq!(bv.previous_one(200), Some(70));
    /// assert_eq!(bv.previous_one(3), None);
    /// ```
    fn previous_one(&self, index: usize) -> Option<usize> {
        previous_in_windows(self, index, true)
    }

    /// Returns the smallest position `>= index` of a bit set to zero.
    fn next_zero(&self, index: usize) -> Option<usize> {
        next_in_windows(self, index, false)
    }

    /// Returns the largest position `< index` of a bit set to zero.
    fn previous_zero(&self, index: usize) -> Option<usize> {
        previous_in_windows(self, index, false)
    }

    /// Returns the position of the first bit set to one.
    #[inline]
    fn first_one(&self) -> Option<usize> {
        self.next_one(0)
    }

    /// Returns the position of the last bit set to one.
    #[inline]
    fn last_one(&self) -> Option<usize> {
        self.previous_one(self.len())
    }

    /// Returns the position of the first bit set to zero.
    #[inline]
    fn first_zero(&self) -> Option<usize> {
        self.next_zero(0)
    }

    /// Returns the position of the last bit set to zero.
    #[inline]
    fn last_zero(&self) -> Option<usize> {
        self.previous_zero(self.len())
    }

    /// Returns the length of the longest common prefix of `self` and `other`.
    ///
    /// # Examples
    /// ```
    /// use wordbits::{BitVector, FlatBitVector};
    ///
    /// let a: FlatBitVector = [true, false, true, true].into_iter().collect();
    /// let b: FlatBitVector = [true, false, false].into_iter().collect();
    /// assert_eq!(a.longest_common_prefix_len(&b), 2);
    /// ```
    fn longest_common_prefix_len<O>(&self, other: &O) -> usize
    where
        O: BitVector + ?Sized,
    {
        let min_len = self.len().min(other.len());
        let mut i = 0;
        while i < min_len {
            let to = (i + WORD_BITS).min(min_len);
            let w0 = self.get_word_range(i, to);
            let w1 = other.get_word_range(i, to);
            if w0 != w1 {
                return i + (w0 ^ w1).trailing_zeros() as usize;
            }
            i = to;
        }
        min_len
    }

    /// Checks if `self` is a prefix of `other`.
    #[inline]
    fn is_prefix_of<O>(&self, other: &O) -> bool
    where
        O: BitVector + ?Sized,
    {
        self.len() <= other.len() && self.longest_common_prefix_len(other) == self.len()
    }

    /// Checks if `self` is a prefix of `other` and is shorter than `other`.
    #[inline]
    fn is_proper_prefix_of<O>(&self, other: &O) -> bool
    where
        O: BitVector + ?Sized,
    {
        self.len() < other.len() && self.is_prefix_of(other)
    }

    /// Compares `self` and `other` lexicographically.
    ///
    /// Windows of 64 bits are compared from position 0 upward. In the first window
    /// that differs, the lowest differing bit decides: the vector having it set to
    /// zero is the smaller. If no window differs, the shorter vector is the smaller.
    ///
    /// # Examples
    /// ```
    /// use std::cmp::Ordering;
    /// use wordbits::{BitVector, FlatBitVector};
    ///
    /// let a: FlatBitVector = [true, false, true].into_iter().collect();
    /// let b: FlatBitVector = [true, true].into_iter().collect();
    /// assert_eq!(a.compare_bits(&b), Ordering::Less);
    /// assert_eq!(b.compare_bits(&a), Ordering::Greater);
    ///
    /// let prefix: FlatBitVector = [true, false].into_iter().collect();
    /// assert_eq!(prefix.compare_bits(&a), Ordering::Less);
    /// ```
    fn compare_bits<O>(&self, other: &O) -> Ordering
    where
        O: BitVector + ?Sized,
    {
        let min_len = self.len().min(other.len());
        let mut i = 0;
        while i < min_len {
            let to = (i + WORD_BITS).min(min_len);
            let w0 = self.get_word_range(i, to);
            let w1 = other.get_word_range(i, to);
            let xor = w0 ^ w1;
            if xor != 0 {
                return if w0 & (xor & xor.wrapping_neg()) == 0 {
                    Ordering::Less
                } else {
                    Ordering::Greater
                };
            }
            i = to;
        }
        self.len().cmp(&other.len())
    }

    /// Checks if `self` and `other` have the same length and the same bits.
    fn bits_eq<O>(&self, other: &O) -> bool
    where
        O: BitVector + ?Sized,
    {
        let n = self.len();
        n == other.len() && self.bits_eq_range(other, 0, n)
    }

    /// Checks if `self` and `other` have the same bits in `[from, to)`.
    ///
    /// # Panics
    /// Panics if the range is invalid for either vector (only in debug builds when
    /// the `checks` feature is disabled).
    fn bits_eq_range<O>(&self, other: &O, from: usize, to: usize) -> bool
    where
        O: BitVector + ?Sized,
    {
        check_range(from, to, self.len());
        check_range(from, to, other.len());
        let mut i = from;
        while i < to {
            let end = (i + WORD_BITS).min(to);
            if self.get_word_range(i, end) != other.get_word_range(i, end) {
                return false;
            }
            i = end;
        }
        true
    }

    /// Returns the hash code of the bit vector.
    ///
    /// The value depends only on the length and on the bits, so every
    /// implementation of the trait hashes the same content to the same value.
    /// Starting from `h = 0x9e3779b97f4a7c13 ^ len`, every 64-bit window `w`
    /// (the last one possibly partial) is folded in as
    /// `h ^= (h << 5) + w + (h >> 2)`; the result is `((h >> 32) ^ h) as u32`.
    fn bits_hash(&self) -> u32 {
        let n = self.len();
        let full = n - n % WORD_BITS;
        let mut h = HASH_SEED ^ n as u64;
        let mut i = 0;
        while i < full {
            h ^= (h << 5)
                .wrapping_add(self.get_word_range(i, i + WORD_BITS))
                .wrapping_add(h >> 2);
            i += WORD_BITS;
        }
        if n != full {
            h ^= (h << 5)
                .wrapping_add(self.get_word_range(full, n))
                .wrapping_add(h >> 2);
        }
        ((h >> 32) ^ h) as u32
    }

    /// Returns an independent [`FlatBitVector`] with the same bits.
    fn copy(&self) -> FlatBitVector {
        let mut copy = FlatBitVector::with_capacity(self.len());
        copy.append(self);
        copy
    }

    /// Returns an independent [`FlatBitVector`] with the bits in `[from, to)`.
    fn copy_range(&self, from: usize, to: usize) -> FlatBitVector {
        check_range(from, to, self.len());
        let mut copy = FlatBitVector::with_capacity(to - from);
        let mut i = from;
        while i < to {
            let end = (i + WORD_BITS).min(to);
            copy.append_bits(self.get_word_range(i, end), end - i);
            i = end;
        }
        copy
    }

    /// Returns a read-only view of the bits in `[from, to)`.
    #[inline]
    fn sub_vector(&self, from: usize, to: usize) -> SubBitVector<&Self> {
        SubBitVector::new(self, from, to)
    }

    /// Returns a read-only view of the bits from `from` to the end.
    #[inline]
    fn sub_vector_from(&self, from: usize) -> SubBitVector<&Self> {
        SubBitVector::new(self, from, self.len())
    }

    /// Returns a read-only view of the positions of the ones as a sorted set.
    #[inline]
    fn as_position_set(&self) -> PositionSetView<&Self> {
        PositionSetView::new(self)
    }

    /// Returns a read-only view of the bits as a list of `width`-bit integers.
    #[inline]
    fn as_fixed_width(&self, width: usize) -> FixedWidthView<&Self> {
        FixedWidthView::new(self, width)
    }

    /// Returns an iterator over the bits.
    #[inline]
    fn iter(&self) -> BitIter<'_, Self> {
        BitIter {
            bv: self,
            front: 0,
            back: self.len(),
        }
    }

    /// Returns an iterator over the positions of the ones.
    ///
    /// # Examples
    /// ```
    /// use wordbits::{BitVector, FlatBitVector};
    ///
    /// let vv: Vec<usize> = vec![0, 63, 128, 129, 254, 1026];
    /// let bv: FlatBitVector = vv.iter().copied().collect();
    ///
    /// assert_eq!(bv.ones().collect::<Vec<_>>(), vv);
    /// assert_eq!(bv.ones().rev().next(), Some(1026));
    /// ```
    #[inline]
    fn ones(&self) -> BitPositionsIter<'_, Self, true> {
        BitPositionsIter::new(self, 0, self.len())
    }

    /// Returns an iterator over the positions of the ones, starting at position
    /// `from`.
    ///
    /// # Examples
    /// ```
    /// use wordbits::{BitVector, FlatBitVector};
    ///
    /// let vv: Vec<usize> = vec![0, 63, 128, 129, 254, 1026];
    /// let bv: FlatBitVector = vv.iter().copied().collect();
    ///
    /// assert_eq!(bv.ones_from(2).collect::<Vec<_>>(), vec![63, 128, 129, 254, 1026]);
    /// ```
    #[inline]
    fn ones_from(&self, from: usize) -> BitPositionsIter<'_, Self, true> {
        BitPositionsIter::new(self, from, self.len())
    }

    /// Returns an iterator over the positions of the zeros.
    #[inline]
    fn zeros(&self) -> BitPositionsIter<'_, Self, false> {
        BitPositionsIter::new(self, 0, self.len())
    }

    /// Returns an iterator over the positions of the zeros, starting at position
    /// `from`.
    #[inline]
    fn zeros_from(&self, from: usize) -> BitPositionsIter<'_, Self, false> {
        BitPositionsIter::new(self, from, self.len())
    }
}

/// In-place mutation of the bits of a vector whose length does not change.
pub trait BitVectorMut: BitVector {
    /// Sets the bit at position `index` to `bit` and returns its previous value.
    ///
    /// # Panics
    /// Panics if `index >= self.len()` (only in debug builds when the `checks`
    /// feature is disabled).
    fn set(&mut self, index: usize, bit: bool) -> bool;

    /// Sets the bit at position `index` to zero and returns its previous value.
    #[inline]
    fn clear_bit(&mut self, index: usize) -> bool {
        self.set(index, false)
    }

    /// Flips the bit at position `index` and returns its previous value.
    #[inline]
    fn flip(&mut self, index: usize) -> bool {
        let old = self.get_bit(index);
        self.set(index, !old);
        old
    }

    /// Overwrites the `width` bits starting at `from` with the `width` least
    /// significant bits of `value`. Bits outside the field are preserved.
    ///
    /// # Panics
    /// Panics if the field is out of bounds, `width > 64`, or `value` does not fit
    /// in `width` bits (only in debug builds when the `checks` feature is disabled).
    fn set_bits(&mut self, from: usize, width: usize, value: u64) {
        check_window(from, from + width, self.len());
        check!(
            value & !compute_mask(width) == 0,
            Error::ValueTooWide { value, width }
        );
        for i in 0..width {
            self.set(from + i, (value >> i) & 1 == 1);
        }
    }

    /// Sets every bit in `[from, to)` to `bit`.
    fn fill_range(&mut self, from: usize, to: usize, bit: bool) {
        check_range(from, to, self.len());
        for i in from..to {
            self.set(i, bit);
        }
    }

    /// Sets every bit to `bit`.
    #[inline]
    fn fill(&mut self, bit: bool) {
        let n = self.len();
        self.fill_range(0, n, bit);
    }

    /// Flips every bit in `[from, to)`.
    fn flip_range(&mut self, from: usize, to: usize) {
        check_range(from, to, self.len());
        for i in from..to {
            self.flip(i);
        }
    }

    /// Flips every bit.
    #[inline]
    fn flip_all(&mut self) {
        let n = self.len();
        self.flip_range(0, n);
    }

    /// Replaces the first `min(self.len(), other.len())` bits with their AND with
    /// the bits of `other`. Bits past that point are untouched.
    ///
    /// # Examples
    /// ```
    /// use wordbits::{BitVector, BitVectorMut, FlatBitVector};
    ///
    /// let mut a: FlatBitVector = [true, true, true, true].into_iter().collect();
    /// let b: FlatBitVector = [true, false].into_iter().collect();
    /// a.and(&b);
    /// assert_eq!(a.get_bits(0, 4), Some(0b1101));
    /// ```
    fn and<O>(&mut self, other: &O) -> &mut Self
    where
        O: BitVector + ?Sized,
    {
        for i in 0..self.len().min(other.len()) {
            if !other.get_bit(i) {
                self.set(i, false);
            }
        }
        self
    }

    /// Replaces the first `min(self.len(), other.len())` bits with their OR with
    /// the bits of `other`.
    fn or<O>(&mut self, other: &O) -> &mut Self
    where
        O: BitVector + ?Sized,
    {
        for i in 0..self.len().min(other.len()) {
            if other.get_bit(i) {
                self.set(i, true);
            }
        }
        self
    }

    /// Replaces the first `min(self.len(), other.len())` bits with their XOR with
    /// the bits of `other`.
    fn xor<O>(&mut self, other: &O) -> &mut Self
    where
        O: BitVector + ?Sized,
    {
        for i in 0..self.len().min(other.len()) {
            if other.get_bit(i) {
                self.flip(i);
            }
        }
        self
    }

    /// Returns a view of the bits in `[from, to)` that writes through to `self`.
    #[inline]
    fn sub_vector_mut(&mut self, from: usize, to: usize) -> SubBitVector<&mut Self> {
        SubBitVector::new(self, from, to)
    }

    /// Returns a view of the positions of the ones that writes through to `self`.
    #[inline]
    fn as_position_set_mut(&mut self) -> PositionSetView<&mut Self> {
        PositionSetView::new(self)
    }

    /// Returns a view of the bits as `width`-bit integers that writes through to
    /// `self`.
    #[inline]
    fn as_fixed_width_mut(&mut self, width: usize) -> FixedWidthView<&mut Self> {
        FixedWidthView::new(self, width)
    }
}

/// Structural mutation: bits can be inserted, removed and appended.
pub trait ResizableBitVector: BitVectorMut {
    /// Sets the length to `new_len`. New bits are zero.
    fn set_len(&mut self, new_len: usize);

    /// Inserts `bit` at position `index`, shifting the following bits up by one.
    ///
    /// # Panics
    /// Panics if `index > self.len()` (only in debug builds when the `checks`
    /// feature is disabled).
    fn insert(&mut self, index: usize, bit: bool);

    /// Removes the bit at position `index`, shifting the following bits down by
    /// one, and returns it.
    ///
    /// # Panics
    /// Panics if `index >= self.len()` (only in debug builds when the `checks`
    /// feature is disabled).
    fn remove(&mut self, index: usize) -> bool;

    /// Appends `bit` at the end.
    #[inline]
    fn push(&mut self, bit: bool) {
        let n = self.len();
        self.insert(n, bit);
    }

    /// Removes the last bit and returns it, or [`None`] if the vector is empty.
    #[inline]
    fn pop(&mut self) -> Option<bool> {
        let n = self.len();
        if n == 0 {
            return None;
        }
        Some(self.remove(n - 1))
    }

    /// Removes every bit.
    #[inline]
    fn clear(&mut self) {
        self.set_len(0);
    }

    /// Appends the `len` least significant bits of `bits`, `len <= 64`.
    ///
    /// # Panics
    /// Panics if `len > 64` (only in debug builds when the `checks` feature is
    /// disabled).
    fn append_bits(&mut self, bits: u64, len: usize) {
        check!(
            len <= WORD_BITS,
            Error::SpanTooWide {
                from: self.len(),
                to: self.len() + len
            }
        );
        for i in 0..len {
            self.push((bits >> i) & 1 == 1);
        }
    }

    /// Appends all the bits of `other`.
    fn append<O>(&mut self, other: &O) -> &mut Self
    where
        O: BitVector + ?Sized,
    {
        let n = other.len();
        let full = n - n % WORD_BITS;
        let mut i = 0;
        while i < full {
            self.append_bits(other.get_word_range(i, i + WORD_BITS), WORD_BITS);
            i += WORD_BITS;
        }
        if i < n {
            self.append_bits(other.get_word_range(i, n), n - i);
        }
        self
    }

    /// Replaces the content of `self` with the content of `other`.
    fn replace<O>(&mut self, other: &O) -> &mut Self
    where
        O: BitVector + ?Sized,
    {
        self.clear();
        self.append(other)
    }
}

// Scans `[index, len)` for a bit equal to `bit` one window at a time. Windows are
// aligned to multiples of 64 so that storage-backed windows are single word reads.
fn next_in_windows<V>(bv: &V, index: usize, bit: bool) -> Option<usize>
where
    V: BitVector + ?Sized,
{
    let n = bv.len();
    let mut i = index;
    while i < n {
        let to = ((i & !WORD_MASK) + WORD_BITS).min(n);
        let mut w = bv.get_word_range(i, to);
        if !bit {
            w = !w & compute_mask(to - i);
        }
        if w != 0 {
            return Some(i + w.trailing_zeros() as usize);
        }
        i = to;
    }
    None
}

// Scans `[0, min(index, len))` backward for a bit equal to `bit`.
fn previous_in_windows<V>(bv: &V, index: usize, bit: bool) -> Option<usize>
where
    V: BitVector + ?Sized,
{
    let mut to = index.min(bv.len());
    while to > 0 {
        let from = (to - 1) & !WORD_MASK;
        let mut w = bv.get_word_range(from, to);
        if !bit {
            w = !w & compute_mask(to - from);
        }
        if w != 0 {
            return Some(from + msb(w) as usize);
        }
        to = from;
    }
    None
}

/// An iterator over the bits of a [`BitVector`].
pub struct BitIter<'a, V: ?Sized> {
    bv: &'a V,
    front: usize,
    back: usize,
}

impl<'a, V> Iterator for BitIter<'a, V>
where
    V: BitVector + ?Sized,
{
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.front += 1;
        Some(self.bv.get_bit(self.front - 1))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl<'a, V> DoubleEndedIterator for BitIter<'a, V>
where
    V: BitVector + ?Sized,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.bv.get_bit(self.back))
    }
}

impl<'a, V> ExactSizeIterator for BitIter<'a, V> where V: BitVector + ?Sized {}

/// Iterator over the positions of bits set to BIT (false for zeros, true for
/// ones) in `[front, back)`. Each step is a call to the scans of the vector, so
/// the cost depends on the positions reported rather than on the range size.
pub struct BitPositionsIter<'a, V: ?Sized, const BIT: bool> {
    bv: &'a V,
    front: usize,
    back: usize,
}

impl<'a, V, const BIT: bool> BitPositionsIter<'a, V, BIT>
where
    V: BitVector + ?Sized,
{
    /// Creates an iterator over the positions in `[from, to)`.
    #[must_use]
    pub fn new(bv: &'a V, from: usize, to: usize) -> Self {
        Self {
            bv,
            front: from,
            back: to.min(bv.len()),
        }
    }
}

impl<'a, V, const BIT: bool> Iterator for BitPositionsIter<'a, V, BIT>
where
    V: BitVector + ?Sized,
{
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let pos = if BIT {
            self.bv.next_one(self.front)
        } else {
            self.bv.next_zero(self.front)
        };
        match pos {
            Some(pos) if pos < self.back => {
                self.front = pos + 1;
                Some(pos)
            }
            _ => {
                self.front = self.back;
                None
            }
        }
    }
}

impl<'a, V, const BIT: bool> DoubleEndedIterator for BitPositionsIter<'a, V, BIT>
where
    V: BitVector + ?Sized,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let pos = if BIT {
            self.bv.previous_one(self.back)
        } else {
            self.bv.previous_zero(self.back)
        };
        match pos {
            Some(pos) if pos >= self.front => {
                self.back = pos;
                Some(pos)
            }
            _ => {
                self.back = self.front;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests;
