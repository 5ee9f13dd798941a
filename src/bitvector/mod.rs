//! This module provides [`WordBitVector`], a mutable bit vector stored in 64-bit
//! words, and its two instantiations [`FlatBitVector`] and [`SegmentedBitVector`].
//!
//! All the operations of [`BitVector`], [`BitVectorMut`] and [`ResizableBitVector`]
//! that can work a word at a time are overridden here: windows are read with at
//! most two word accesses, scans skip whole words, counting uses popcount, and
//! insertions and removals shift whole words with carry propagation.
//!
//! Bits past the length in the last word are always zero.

use std::fmt;
use std::hash::{Hash, Hasher};

use tracing::debug;

use crate::error::{Error, Result};
use crate::storage::{Segments, WordStore};
use crate::traits::{BitIter, BitVector, BitVectorMut, ResizableBitVector};
use crate::utils::{
    bit_of, check, check_index, check_insert_index, check_range, check_window, compute_mask,
    msb, word_of, words_for, WORD_BITS,
};
use crate::SpaceUsage;

/// A bit vector stored in the words of a [`WordStore`].
#[derive(Default, Clone)]
pub struct WordBitVector<S: WordStore> {
    data: S,
    n_bits: usize,
}

/// A bit vector stored in a single `Vec<u64>`.
pub type FlatBitVector = WordBitVector<Vec<u64>>;

/// A bit vector stored in segments of `2^SHIFT` words.
pub type SegmentedBitVector<const SHIFT: usize = 27> = WordBitVector<Segments<SHIFT>>;

impl<S: WordStore> WordBitVector<S> {
    /// Creates a new empty bit vector.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordbits::{BitVector, FlatBitVector};
    ///
    /// let bv = FlatBitVector::new();
    /// assert_eq!(bv.len(), 0);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty bit vector with room for at least `n_bits` bits.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordbits::{BitVector, FlatBitVector};
    ///
    /// let bv = FlatBitVector::with_capacity(1000);
    /// assert!(bv.is_empty());
    /// assert!(bv.capacity() >= 1000);
    /// ```
    #[must_use]
    pub fn with_capacity(n_bits: usize) -> Self {
        let mut bv = Self::default();
        bv.ensure_capacity(n_bits);
        bv
    }

    /// Creates a bit vector with `n_bits` bits set to 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordbits::{BitVector, FlatBitVector};
    ///
    /// let bv = FlatBitVector::with_zeros(5);
    /// assert_eq!(bv.len(), 5);
    /// assert_eq!(bv.count_ones(), 0);
    /// ```
    #[must_use]
    pub fn with_zeros(n_bits: usize) -> Self {
        let mut bv = Self::with_capacity(n_bits);
        bv.set_len(n_bits);
        bv
    }

    /// Creates a bit vector with `n_bits` bits set to 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordbits::{BitVector, SegmentedBitVector};
    ///
    /// let bv = SegmentedBitVector::<2>::with_ones(300);
    /// assert_eq!(bv.len(), 300);
    /// assert_eq!(bv.count_ones(), 300);
    /// ```
    #[must_use]
    pub fn with_ones(n_bits: usize) -> Self {
        let mut bv = Self::with_zeros(n_bits);
        bv.data.fill_words(0, words_for(n_bits), u64::MAX);
        bv.clear_tail();
        bv
    }

    /// Builds a bit vector of length `n_bits` over `words`.
    ///
    /// Fails with [`Error::InvalidAdoption`] if `words` cannot hold `n_bits` bits
    /// or if a bit past `n_bits` is set. Zero words past the last needed one are
    /// dropped.
    pub fn try_from_words(mut words: Vec<u64>, n_bits: usize) -> Result<Self> {
        check_adoption(words.iter().copied(), words.len(), n_bits)?;
        words.truncate(words_for(n_bits));
        Ok(Self {
            data: S::from_words(words),
            n_bits,
        })
    }

    /// Makes room for at least `n_bits` bits.
    ///
    /// # Panics
    ///
    /// Panics if the allocation fails. See
    /// [`try_ensure_capacity`](Self::try_ensure_capacity) for a fallible version.
    pub fn ensure_capacity(&mut self, n_bits: usize) {
        if let Err(err) = self.try_ensure_capacity(n_bits) {
            panic!("cannot grow to {n_bits} bits: {err}");
        }
    }

    /// Makes room for at least `n_bits` bits. Growth is geometric and the backing
    /// store never shrinks.
    ///
    /// On failure the bit vector is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordbits::{Error, FlatBitVector};
    ///
    /// let mut bv = FlatBitVector::new();
    /// assert!(bv.try_ensure_capacity(1 << 20).is_ok());
    /// assert!(matches!(bv.try_ensure_capacity(usize::MAX), Err(Error::Allocation(_))));
    /// ```
    pub fn try_ensure_capacity(&mut self, n_bits: usize) -> Result<()> {
        self.data.try_reserve(words_for(n_bits))?;
        Ok(())
    }

    /// Returns the number of bits the vector can hold without allocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.capacity().saturating_mul(WORD_BITS)
    }

    /// Shrinks the backing store to the words needed by the current length.
    pub fn trim(&mut self) {
        let before = self.data.capacity();
        self.data.shrink_to_fit();
        debug!(
            n_bits = self.n_bits,
            before,
            after = self.data.capacity(),
            "trimmed word store"
        );
    }

    /// Returns the number of words in use.
    #[must_use]
    #[inline(always)]
    pub fn n_words(&self) -> usize {
        words_for(self.n_bits)
    }

    /// Gets the 64-bit word at index `i` of the backing store.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.n_words()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordbits::{FlatBitVector, ResizableBitVector};
    ///
    /// let mut bv = FlatBitVector::new();
    /// bv.append_bits(0b111101, 64);
    ///
    /// assert_eq!(bv.get_word(0), 0b111101);
    /// ```
    #[must_use]
    #[inline(always)]
    pub fn get_word(&self, i: usize) -> u64 {
        check_index(i, self.n_words());
        self.data.word(i)
    }

    /// Returns the backing store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.data
    }

    // Zeroes the bits past the length in the last word.
    #[inline]
    fn clear_tail(&mut self) {
        let b = bit_of(self.n_bits);
        if b != 0 {
            *self.data.word_mut(word_of(self.n_bits)) &= compute_mask(b);
        }
    }

    #[inline(always)]
    fn update_word(&mut self, w: usize, mask: u64, bit: bool) {
        let word = self.data.word_mut(w);
        if bit {
            *word |= mask;
        } else {
            *word &= !mask;
        }
    }

    // Applies `op` to the words of `self` and the aligned windows of `other` over
    // the first `min(len, other.len)` bits. The last, partial window comes masked.
    fn combine_words<O, F>(&mut self, other: &O, mut op: F)
    where
        O: BitVector + ?Sized,
        F: FnMut(&mut u64, u64, u64),
    {
        let n = self.n_bits.min(other.len());
        let full = n / WORD_BITS;
        for w in 0..full {
            let from = w * WORD_BITS;
            op(
                self.data.word_mut(w),
                other.get_word_range(from, from + WORD_BITS),
                u64::MAX,
            );
        }
        let rest = bit_of(n);
        if rest != 0 {
            op(
                self.data.word_mut(full),
                other.get_word_range(n - rest, n),
                compute_mask(rest),
            );
        }
    }
}

impl WordBitVector<Vec<u64>> {
    /// Adopts `words` as the storage of a bit vector of length `n_bits`, without
    /// copying.
    ///
    /// Fails with [`Error::InvalidAdoption`] if `words` is too short or a bit past
    /// `n_bits` is set.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordbits::{BitVector, FlatBitVector};
    ///
    /// let bv = FlatBitVector::wrap(vec![0b1011, 0], 70).unwrap();
    /// assert_eq!(bv.len(), 70);
    /// assert_eq!(bv.ones().collect::<Vec<_>>(), vec![0, 1, 3]);
    ///
    /// assert!(FlatBitVector::wrap(vec![0b1000], 3).is_err());
    /// assert!(FlatBitVector::wrap(vec![0], 65).is_err());
    /// ```
    pub fn wrap(words: Vec<u64>, n_bits: usize) -> Result<Self> {
        Self::try_from_words(words, n_bits)
    }

    /// Returns the words in use.
    #[must_use]
    pub fn words(&self) -> &[u64] {
        &self.data
    }

    /// Consumes the bit vector and returns its words.
    #[must_use]
    pub fn into_words(self) -> Vec<u64> {
        self.data
    }
}

impl<const SHIFT: usize> WordBitVector<Segments<SHIFT>> {
    /// Adopts `segments` as the storage of a bit vector of length `n_bits`.
    ///
    /// Every segment but the last must hold exactly `2^SHIFT` words. Fails with
    /// [`Error::InvalidAdoption`] if the segments are malformed, too short, or a
    /// bit past `n_bits` is set.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordbits::{BitVector, SegmentedBitVector};
    ///
    /// let bv = SegmentedBitVector::<1>::wrap_segments(vec![vec![1, 0], vec![1]], 129).unwrap();
    /// assert_eq!(bv.ones().collect::<Vec<_>>(), vec![0, 128]);
    /// ```
    pub fn wrap_segments(segments: Vec<Vec<u64>>, n_bits: usize) -> Result<Self> {
        let mut data = Segments::try_from_segments(segments)?;
        let words = (0..data.n_words()).map(|i| data.word(i));
        check_adoption(words, data.n_words(), n_bits)?;
        data.resize(words_for(n_bits));
        Ok(Self { data, n_bits })
    }

    /// Returns the segments in use.
    #[must_use]
    pub fn segments(&self) -> &[Vec<u64>] {
        self.data.segments()
    }
}

// Validates adopted storage: enough words, and no bit set past `n_bits`.
fn check_adoption<I>(words: I, n_words: usize, n_bits: usize) -> Result<()>
where
    I: IntoIterator<Item = u64>,
{
    let needed = words_for(n_bits);
    if n_words < needed {
        debug!(n_words, n_bits, "rejected storage: too short");
        return Err(Error::InvalidAdoption(format!(
            "{n_words} words cannot hold {n_bits} bits"
        )));
    }
    let garbage = words.into_iter().enumerate().skip(needed.saturating_sub(1)).find(
        |&(w, word)| {
            if w + 1 == needed {
                word & !compute_mask(n_bits - w * WORD_BITS) != 0
            } else {
                word != 0
            }
        },
    );
    if let Some((w, _)) = garbage {
        debug!(word = w, n_bits, "rejected storage: bits set past the length");
        return Err(Error::InvalidAdoption(format!(
            "word {w} has bits set past length {n_bits}"
        )));
    }
    Ok(())
}

impl<S: WordStore> BitVector for WordBitVector<S> {
    #[inline(always)]
    fn len(&self) -> usize {
        self.n_bits
    }

    #[inline(always)]
    fn get_bit(&self, index: usize) -> bool {
        check_index(index, self.n_bits);
        (self.data.word(word_of(index)) >> bit_of(index)) & 1 == 1
    }

    #[inline]
    fn get_word_range(&self, from: usize, to: usize) -> u64 {
        check_window(from, to, self.n_bits);
        let len = to - from;
        if len == 0 {
            return 0;
        }
        let w = word_of(from);
        let b = bit_of(from);
        let low = self.data.word(w) >> b;
        if b + len <= WORD_BITS {
            return low & compute_mask(len);
        }
        (low | (self.data.word(w + 1) << (WORD_BITS - b))) & compute_mask(len)
    }

    fn count_ones(&self) -> usize {
        (0..self.n_words())
            .map(|w| self.data.word(w).count_ones() as usize)
            .sum()
    }

    fn next_one(&self, index: usize) -> Option<usize> {
        if index >= self.n_bits {
            return None;
        }
        let mut w = word_of(index);
        let mut word = self.data.word(w) & (u64::MAX << bit_of(index));
        loop {
            if word != 0 {
                return Some(w * WORD_BITS + word.trailing_zeros() as usize);
            }
            w += 1;
            if w >= self.n_words() {
                return None;
            }
            word = self.data.word(w);
        }
    }

    fn next_zero(&self, index: usize) -> Option<usize> {
        if index >= self.n_bits {
            return None;
        }
        let mut w = word_of(index);
        // For zeros, negate the word and report the positions of bits set to one.
        let mut word = !self.data.word(w) & (u64::MAX << bit_of(index));
        loop {
            if word != 0 {
                let pos = w * WORD_BITS + word.trailing_zeros() as usize;
                return (pos < self.n_bits).then_some(pos);
            }
            w += 1;
            if w >= self.n_words() {
                return None;
            }
            word = !self.data.word(w);
        }
    }

    fn previous_one(&self, index: usize) -> Option<usize> {
        let index = index.min(self.n_bits);
        if index == 0 {
            return None;
        }
        let mut w = word_of(index - 1);
        let mut word = self.data.word(w) & compute_mask(bit_of(index - 1) + 1);
        loop {
            if word != 0 {
                return Some(w * WORD_BITS + msb(word) as usize);
            }
            if w == 0 {
                return None;
            }
            w -= 1;
            word = self.data.word(w);
        }
    }

    fn previous_zero(&self, index: usize) -> Option<usize> {
        let index = index.min(self.n_bits);
        if index == 0 {
            return None;
        }
        let mut w = word_of(index - 1);
        let mut word = !self.data.word(w) & compute_mask(bit_of(index - 1) + 1);
        loop {
            if word != 0 {
                return Some(w * WORD_BITS + msb(word) as usize);
            }
            if w == 0 {
                return None;
            }
            w -= 1;
            word = !self.data.word(w);
        }
    }
}

impl<S: WordStore> BitVectorMut for WordBitVector<S> {
    /// Sets the bit at position `index` to `bit` and returns its previous value.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordbits::{BitVector, BitVectorMut, FlatBitVector, ResizableBitVector};
    ///
    /// let mut bv = FlatBitVector::with_capacity(2);
    /// bv.push(true);
    /// bv.push(false);
    ///
    /// assert!(!bv.set(1, true));
    /// assert_eq!(bv.get(1), Some(true));
    /// ```
    #[inline]
    fn set(&mut self, index: usize, bit: bool) -> bool {
        check_index(index, self.n_bits);
        let mask = 1 << bit_of(index);
        let w = word_of(index);
        let old = self.data.word(w) & mask != 0;
        self.update_word(w, mask, bit);
        old
    }

    /// Overwrites `width` bits, with `width <= 64`, starting at position `from`
    /// with the `width` least significant bits of `value`.
    ///
    /// # Panics
    ///
    /// Panics if `from + width` is out of bounds, `width` is greater than 64, or
    /// `value` has a bit set at a position greater than or equal to `width`.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordbits::{BitVector, BitVectorMut, FlatBitVector};
    ///
    /// let mut bv = FlatBitVector::with_zeros(100);
    /// bv.set_bits(60, 8, 0b1010_0101);
    /// assert_eq!(bv.get_bits(60, 68), Some(0b1010_0101));
    /// assert_eq!(bv.count_ones(), 4);
    /// ```
    fn set_bits(&mut self, from: usize, width: usize, value: u64) {
        check_window(from, from + width, self.n_bits);
        check!(
            value & !compute_mask(width) == 0,
            Error::ValueTooWide { value, width }
        );
        if width == 0 {
            return;
        }
        let mask = compute_mask(width);
        let w = word_of(from);
        let b = bit_of(from);

        let word = self.data.word_mut(w);
        *word = (*word & !(mask << b)) | (value << b);

        let stored = WORD_BITS - b;
        if stored < width {
            let word = self.data.word_mut(w + 1);
            *word = (*word & !(mask >> stored)) | (value >> stored);
        }
    }

    fn fill_range(&mut self, from: usize, to: usize, bit: bool) {
        check_range(from, to, self.n_bits);
        if from == to {
            return;
        }
        let (sw, sb) = (word_of(from), bit_of(from));
        let (ew, eb) = (word_of(to), bit_of(to));
        if sw == ew {
            self.update_word(sw, compute_mask(to - from) << sb, bit);
            return;
        }
        self.update_word(sw, u64::MAX << sb, bit);
        self.data.fill_words(sw + 1, ew, if bit { u64::MAX } else { 0 });
        if eb != 0 {
            self.update_word(ew, compute_mask(eb), bit);
        }
    }

    fn flip_range(&mut self, from: usize, to: usize) {
        check_range(from, to, self.n_bits);
        if from == to {
            return;
        }
        let (sw, sb) = (word_of(from), bit_of(from));
        let (ew, eb) = (word_of(to), bit_of(to));
        if sw == ew {
            *self.data.word_mut(sw) ^= compute_mask(to - from) << sb;
            return;
        }
        *self.data.word_mut(sw) ^= u64::MAX << sb;
        for w in sw + 1..ew {
            *self.data.word_mut(w) ^= u64::MAX;
        }
        if eb != 0 {
            *self.data.word_mut(ew) ^= compute_mask(eb);
        }
    }

    fn and<O>(&mut self, other: &O) -> &mut Self
    where
        O: BitVector + ?Sized,
    {
        self.combine_words(other, |word, bits, mask| *word &= bits | !mask);
        self
    }

    fn or<O>(&mut self, other: &O) -> &mut Self
    where
        O: BitVector + ?Sized,
    {
        self.combine_words(other, |word, bits, _| *word |= bits);
        self
    }

    fn xor<O>(&mut self, other: &O) -> &mut Self
    where
        O: BitVector + ?Sized,
    {
        self.combine_words(other, |word, bits, _| *word ^= bits);
        self
    }
}

impl<S: WordStore> ResizableBitVector for WordBitVector<S> {
    /// Sets the length to `new_len`. Bits exposed by growth are zero; bits cut by
    /// shrinking are cleared from the backing store, which keeps its capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordbits::{BitVector, FlatBitVector, ResizableBitVector};
    ///
    /// let mut bv = FlatBitVector::with_ones(100);
    /// bv.set_len(10);
    /// bv.set_len(100);
    /// assert_eq!(bv.count_ones(), 10);
    /// ```
    fn set_len(&mut self, new_len: usize) {
        if new_len > self.n_bits {
            self.ensure_capacity(new_len);
            self.data.resize(words_for(new_len));
            self.n_bits = new_len;
        } else {
            self.data.resize(words_for(new_len));
            self.n_bits = new_len;
            self.clear_tail();
        }
    }

    /// Inserts `bit` at position `index`, shifting the following bits up by one.
    ///
    /// Inserting at the end takes constant time; anywhere else, every following
    /// word is shifted.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordbits::{BitVector, FlatBitVector, ResizableBitVector};
    ///
    /// let mut bv: FlatBitVector = [true, true, false].into_iter().collect();
    /// bv.insert(1, false);
    /// assert_eq!(bv.iter().collect::<Vec<_>>(), vec![true, false, true, false]);
    /// ```
    fn insert(&mut self, index: usize, bit: bool) {
        check_insert_index(index, self.n_bits);
        if index == self.n_bits {
            self.push(bit);
            return;
        }
        self.set_len(self.n_bits + 1);

        let w = word_of(index);
        let b = bit_of(index);
        for i in (w + 1..self.n_words()).rev() {
            let carry = self.data.word(i - 1) >> (WORD_BITS - 1);
            let word = self.data.word_mut(i);
            *word = (*word << 1) | carry;
        }
        let low = compute_mask(b);
        let word = self.data.word_mut(w);
        *word = ((*word & !low) << 1) | (*word & low) | ((bit as u64) << b);
    }

    /// Removes the bit at position `index`, shifting the following bits down by
    /// one, and returns it.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordbits::{BitVector, FlatBitVector, ResizableBitVector};
    ///
    /// let mut bv: FlatBitVector = [true, false, true, false].into_iter().collect();
    /// assert!(!bv.remove(1));
    /// assert_eq!(bv.iter().collect::<Vec<_>>(), vec![true, true, false]);
    /// ```
    fn remove(&mut self, index: usize) -> bool {
        check_index(index, self.n_bits);
        let old = self.get_bit(index);
        if index + 1 == self.n_bits {
            self.set_len(index);
            return old;
        }

        let w = word_of(index);
        let b = bit_of(index);
        let low = compute_mask(b);
        let word = self.data.word_mut(w);
        *word = ((*word >> 1) & !low) | (*word & low);
        for i in w + 1..self.n_words() {
            let next = self.data.word(i);
            *self.data.word_mut(i - 1) |= (next & 1) << (WORD_BITS - 1);
            *self.data.word_mut(i) = next >> 1;
        }
        self.n_bits -= 1;
        self.data.resize(self.n_words());
        old
    }

    /// Pushes a `bit` at the end of the bit vector.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordbits::{BitVector, FlatBitVector, ResizableBitVector};
    ///
    /// let mut bv = FlatBitVector::new();
    /// bv.push(true);
    /// bv.push(false);
    /// bv.push(true);
    ///
    /// assert_eq!(bv.len(), 3);
    /// assert_eq!(bv.get(0), Some(true));
    /// assert_eq!(bv.count_ones(), 2);
    /// ```
    #[inline]
    fn push(&mut self, bit: bool) {
        let b = bit_of(self.n_bits);
        if b == 0 {
            self.ensure_capacity(self.n_bits + 1);
            self.data.resize(self.n_words() + 1);
        }
        if bit {
            *self.data.word_mut(word_of(self.n_bits)) |= 1 << b;
        }
        self.n_bits += 1;
    }

    /// Appends `len` bits at the end of the bit vector by taking the least
    /// significant `len` bits of `bits`. Higher bits of `bits` are ignored.
    ///
    /// # Panics
    ///
    /// Panics if `len` is larger than 64.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordbits::{BitVector, FlatBitVector, ResizableBitVector};
    ///
    /// let mut bv = FlatBitVector::with_capacity(7);
    /// bv.append_bits(0b101, 3); // appends 101
    /// bv.append_bits(0b0110, 4); // appends 0110
    ///
    /// assert_eq!(bv.len(), 7);
    /// assert_eq!(bv.get_bits(0, 3), Some(0b101));
    /// assert_eq!(bv.get_bits(3, 7), Some(0b0110));
    /// ```
    fn append_bits(&mut self, bits: u64, len: usize) {
        check!(
            len <= WORD_BITS,
            Error::SpanTooWide {
                from: self.n_bits,
                to: self.n_bits + len
            }
        );
        if len == 0 {
            return;
        }
        let bits = bits & compute_mask(len);
        let w = word_of(self.n_bits);
        let b = bit_of(self.n_bits);
        self.set_len(self.n_bits + len);

        *self.data.word_mut(w) |= bits << b;
        if b + len > WORD_BITS {
            *self.data.word_mut(w + 1) |= bits >> (WORD_BITS - b);
        }
    }

    fn append<O>(&mut self, other: &O) -> &mut Self
    where
        O: BitVector + ?Sized,
    {
        let n = other.len();
        self.ensure_capacity(self.n_bits + n);
        let mut i = 0;
        while i < n {
            let to = (i + WORD_BITS).min(n);
            self.append_bits(other.get_word_range(i, to), to - i);
            i = to;
        }
        self
    }
}

impl<S: WordStore> SpaceUsage for WordBitVector<S> {
    /// Returns the space usage in bytes.
    fn space_usage_byte(&self) -> usize {
        self.data.space_usage_byte() + 8
    }
}

impl<S: WordStore, T: WordStore> PartialEq<WordBitVector<T>> for WordBitVector<S> {
    fn eq(&self, other: &WordBitVector<T>) -> bool {
        self.bits_eq(other)
    }
}

impl<S: WordStore> Eq for WordBitVector<S> {}

impl<S: WordStore, T: WordStore> PartialOrd<WordBitVector<T>> for WordBitVector<S> {
    fn partial_cmp(&self, other: &WordBitVector<T>) -> Option<std::cmp::Ordering> {
        Some(self.compare_bits(other))
    }
}

impl<S: WordStore> Ord for WordBitVector<S> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.compare_bits(other)
    }
}

impl<S: WordStore> Hash for WordBitVector<S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(self.bits_hash());
    }
}

impl<S: WordStore> Extend<bool> for WordBitVector<S> {
    fn extend<T>(&mut self, iter: T)
    where
        T: IntoIterator<Item = bool>,
    {
        let iter = iter.into_iter();
        self.ensure_capacity(self.n_bits + iter.size_hint().0);
        for bit in iter {
            self.push(bit);
        }
    }
}

/// Extends a bit vector with positions of ones, growing it to fit the largest.
///
/// # Examples
///
/// ```
/// use wordbits::{BitVector, FlatBitVector};
///
/// let mut bv = FlatBitVector::new();
///
/// // Extending the bit vector with a range of positions
/// bv.extend(0..5);
/// assert_eq!(bv.len(), 5);
/// assert_eq!(bv.get(3), Some(true));
/// ```
impl<S: WordStore> Extend<usize> for WordBitVector<S> {
    fn extend<T>(&mut self, iter: T)
    where
        T: IntoIterator<Item = usize>,
    {
        for pos in iter {
            if pos >= self.n_bits {
                self.set_len(pos + 1);
            }
            self.set(pos, true);
        }
    }
}

/// Creates a bit vector from an iterator over `bool` values.
///
/// # Examples
///
/// ```
/// use wordbits::{BitVector, FlatBitVector};
///
/// let bv: FlatBitVector = vec![true, false, true].into_iter().collect();
/// assert_eq!(bv.len(), 3);
/// assert_eq!(bv.get(1), Some(false));
/// ```
impl<S: WordStore> FromIterator<bool> for WordBitVector<S> {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = bool>,
    {
        let mut bv = Self::default();
        bv.extend(iter);
        bv
    }
}

/// Creates a bit vector from an iterator over positions of ones. The length is
/// one past the largest position.
///
/// # Examples
///
/// ```
/// use wordbits::{BitVector, FlatBitVector};
///
/// let bv: FlatBitVector = vec![0, 1, 3, 5].into_iter().collect();
/// assert_eq!(bv.len(), 6);
/// assert_eq!(bv.get(3), Some(true));
/// ```
impl<S: WordStore> FromIterator<usize> for WordBitVector<S> {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = usize>,
    {
        let mut bv = Self::default();
        bv.extend(iter);
        bv
    }
}

/// An owning iterator over the bits of a [`WordBitVector`].
pub struct WordBitVectorIntoIter<S: WordStore> {
    bv: WordBitVector<S>,
    i: usize,
}

impl<S: WordStore> Iterator for WordBitVectorIntoIter<S> {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        self.i += 1;
        self.bv.get(self.i - 1)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bv.n_bits.saturating_sub(self.i);
        (len, Some(len))
    }
}

impl<S: WordStore> ExactSizeIterator for WordBitVectorIntoIter<S> {}

impl<S: WordStore> IntoIterator for WordBitVector<S> {
    type IntoIter = WordBitVectorIntoIter<S>;
    type Item = bool;

    fn into_iter(self) -> Self::IntoIter {
        WordBitVectorIntoIter { bv: self, i: 0 }
    }
}

impl<'a, S: WordStore> IntoIterator for &'a WordBitVector<S> {
    type IntoIter = BitIter<'a, WordBitVector<S>>;
    type Item = bool;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S: WordStore> fmt::Debug for WordBitVector<S> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let words: Vec<String> = (0..self.n_words())
            .map(|w| format!("{:#018x}", self.data.word(w)))
            .collect();
        write!(
            fmt,
            "WordBitVector {{ n_bits: {:?}, words: {:?} }}",
            self.n_bits, words
        )
    }
}
