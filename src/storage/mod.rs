//! Backing stores for the words of a [`WordBitVector`](crate::WordBitVector).
//!
//! A [`WordStore`] is a growable array of 64-bit words. The crate provides two of
//! them: a plain `Vec<u64>`, and [`Segments`], which splits the words into
//! fixed-size segments so that no single allocation has to hold the whole vector.
//!
//! Stores never shrink their allocation on their own; [`WordStore::shrink_to_fit`]
//! is the only operation that gives memory back.

use std::collections::TryReserveError;

use tracing::trace;

use crate::SpaceUsage;

pub mod segments;
pub use segments::Segments;

/// A growable array of 64-bit words.
///
/// The logical size of a store is [`n_words`](WordStore::n_words); words are read
/// and written by index in `[0, n_words)`.
pub trait WordStore: Default + Clone + SpaceUsage {
    /// Returns the number of words in the store.
    fn n_words(&self) -> usize;

    /// Returns the number of words the store can hold without allocating.
    fn capacity(&self) -> usize;

    /// Returns the word at index `i`.
    ///
    /// # Panics
    /// Panics if `i >= self.n_words()`.
    fn word(&self, i: usize) -> u64;

    /// Returns a mutable reference to the word at index `i`.
    ///
    /// # Panics
    /// Panics if `i >= self.n_words()`.
    fn word_mut(&mut self, i: usize) -> &mut u64;

    /// Makes room for at least `n_words` words in total. Growth is geometric.
    ///
    /// On failure the store is left unchanged.
    fn try_reserve(&mut self, n_words: usize) -> Result<(), TryReserveError>;

    /// Sets the number of words to `n_words`. New words are zero.
    ///
    /// Does not allocate if a previous [`try_reserve`](WordStore::try_reserve)
    /// of at least `n_words` succeeded.
    fn resize(&mut self, n_words: usize);

    /// Reduces the allocation to what is needed to hold the current words.
    fn shrink_to_fit(&mut self);

    /// Sets every word in `[from, to)` to `value`.
    fn fill_words(&mut self, from: usize, to: usize, value: u64) {
        for i in from..to {
            *self.word_mut(i) = value;
        }
    }

    /// Builds a store holding `words`.
    fn from_words(words: Vec<u64>) -> Self;
}

impl WordStore for Vec<u64> {
    #[inline(always)]
    fn n_words(&self) -> usize {
        self.len()
    }

    #[inline(always)]
    fn capacity(&self) -> usize {
        Vec::capacity(self)
    }

    #[inline(always)]
    fn word(&self, i: usize) -> u64 {
        self[i]
    }

    #[inline(always)]
    fn word_mut(&mut self, i: usize) -> &mut u64 {
        &mut self[i]
    }

    fn try_reserve(&mut self, n_words: usize) -> Result<(), TryReserveError> {
        if n_words <= Vec::capacity(self) {
            return Ok(());
        }
        trace!(
            n_words,
            capacity = Vec::capacity(self),
            "growing flat word store"
        );
        Vec::try_reserve(self, n_words - self.len())
    }

    #[inline]
    fn resize(&mut self, n_words: usize) {
        Vec::resize(self, n_words, 0);
    }

    fn shrink_to_fit(&mut self) {
        Vec::shrink_to_fit(self);
    }

    #[inline]
    fn fill_words(&mut self, from: usize, to: usize, value: u64) {
        self[from..to].fill(value);
    }

    fn from_words(words: Vec<u64>) -> Self {
        words
    }
}
