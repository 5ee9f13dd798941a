//! A word store split into segments of `2^SHIFT` words each.
//!
//! Word `i` lives in segment `i >> SHIFT` at displacement `i & (2^SHIFT - 1)`.
//! Every segment before the last used one is full; segments past the last used one
//! may exist with zero length, holding capacity reserved for future growth.

use std::collections::TryReserveError;
use std::mem;

use tracing::trace;

use super::WordStore;
use crate::{Error, Result, SpaceUsage};

/// Words split into segments of `2^SHIFT` words.
///
/// The default shift of 27 gives segments of 2^27 words (1 GiB).
#[derive(Clone, Default, Debug)]
pub struct Segments<const SHIFT: usize = 27> {
    segments: Vec<Vec<u64>>,
    n_words: usize,
}

impl<const SHIFT: usize> Segments<SHIFT> {
    /// Number of words in a segment.
    pub const SEGMENT_SIZE: usize = 1 << SHIFT;
    /// Mask extracting the displacement of a word inside its segment.
    pub const SEGMENT_MASK: usize = Self::SEGMENT_SIZE - 1;

    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    fn segments_for(n_words: usize) -> usize {
        (n_words + Self::SEGMENT_MASK) >> SHIFT
    }

    /// Number of words held by segment `s` when the store holds `n_words` words.
    #[inline(always)]
    fn live_words(s: usize, n_words: usize) -> usize {
        n_words.saturating_sub(s << SHIFT).min(Self::SEGMENT_SIZE)
    }

    /// Adopts `segments` as the content of the store.
    ///
    /// Every segment but the last must hold exactly `2^SHIFT` words and the last
    /// one at most that many.
    ///
    /// # Examples
    /// ```
    /// use wordbits::Segments;
    ///
    /// let segments = Segments::<1>::try_from_segments(vec![vec![1, 2], vec![3]]).unwrap();
    /// assert_eq!(segments.segments().len(), 2);
    ///
    /// assert!(Segments::<1>::try_from_segments(vec![vec![1], vec![2]]).is_err());
    /// ```
    pub fn try_from_segments(segments: Vec<Vec<u64>>) -> Result<Self> {
        let last = segments.len().saturating_sub(1);
        for (s, segment) in segments.iter().enumerate() {
            let ok = if s < last {
                segment.len() == Self::SEGMENT_SIZE
            } else {
                segment.len() <= Self::SEGMENT_SIZE
            };
            if !ok {
                return Err(Error::InvalidAdoption(format!(
                    "segment {s} holds {} words, expected {}{}",
                    segment.len(),
                    if s < last { "" } else { "at most " },
                    Self::SEGMENT_SIZE
                )));
            }
        }
        let n_words = segments.iter().map(Vec::len).sum();
        Ok(Self { segments, n_words })
    }

    /// Returns the segments holding words.
    #[must_use]
    pub fn segments(&self) -> &[Vec<u64>] {
        &self.segments[..Self::segments_for(self.n_words)]
    }

    /// Consumes the store and returns its segments.
    #[must_use]
    pub fn into_segments(mut self) -> Vec<Vec<u64>> {
        self.segments.truncate(Self::segments_for(self.n_words));
        self.segments
    }
}

impl<const SHIFT: usize> WordStore for Segments<SHIFT> {
    #[inline(always)]
    fn n_words(&self) -> usize {
        self.n_words
    }

    fn capacity(&self) -> usize {
        // Only a prefix of segments with full capacity is usable without allocating.
        // Segments below the last used one are full.
        let first = self.n_words >> SHIFT;
        let mut capacity = first << SHIFT;
        for segment in &self.segments[first.min(self.segments.len())..] {
            let c = segment.capacity().min(Self::SEGMENT_SIZE);
            capacity += c;
            if c < Self::SEGMENT_SIZE {
                break;
            }
        }
        capacity
    }

    #[inline(always)]
    fn word(&self, i: usize) -> u64 {
        self.segments[i >> SHIFT][i & Self::SEGMENT_MASK]
    }

    #[inline(always)]
    fn word_mut(&mut self, i: usize) -> &mut u64 {
        &mut self.segments[i >> SHIFT][i & Self::SEGMENT_MASK]
    }

    fn try_reserve(&mut self, n_words: usize) -> std::result::Result<(), TryReserveError> {
        if n_words <= self.capacity() {
            return Ok(());
        }
        trace!(
            n_words,
            capacity = self.capacity(),
            segment_size = Self::SEGMENT_SIZE,
            "growing segmented word store"
        );

        let needed = Self::segments_for(n_words);
        if needed > self.segments.len() {
            self.segments.try_reserve(needed - self.segments.len())?;
            self.segments.resize_with(needed, Vec::new);
        }
        for s in self.n_words >> SHIFT..needed {
            let want = Self::live_words(s, n_words);
            let segment = &mut self.segments[s];
            if segment.capacity() < want {
                let target = want.max(2 * segment.capacity()).min(Self::SEGMENT_SIZE);
                segment.try_reserve_exact(target - segment.len())?;
            }
        }
        Ok(())
    }

    fn resize(&mut self, n_words: usize) {
        let needed = Self::segments_for(n_words);
        if needed > self.segments.len() {
            self.segments.resize_with(needed, Vec::new);
        }
        let first = self.n_words.min(n_words) >> SHIFT;
        let last = Self::segments_for(self.n_words.max(n_words)).min(self.segments.len());
        for s in first..last {
            let live = Self::live_words(s, n_words);
            self.segments[s].resize(live, 0);
        }
        self.n_words = n_words;
    }

    fn shrink_to_fit(&mut self) {
        self.segments.truncate(Self::segments_for(self.n_words));
        self.segments.shrink_to_fit();
        for segment in &mut self.segments {
            segment.shrink_to_fit();
        }
    }

    fn fill_words(&mut self, from: usize, to: usize, value: u64) {
        let mut i = from;
        while i < to {
            let s = i >> SHIFT;
            let start = i & Self::SEGMENT_MASK;
            let end = (to - (s << SHIFT)).min(Self::SEGMENT_SIZE);
            self.segments[s][start..end].fill(value);
            i = (s << SHIFT) + end;
        }
    }

    fn from_words(words: Vec<u64>) -> Self {
        let n_words = words.len();
        let segments = words
            .chunks(Self::SEGMENT_SIZE)
            .map(<[u64]>::to_vec)
            .collect();
        Self { segments, n_words }
    }
}

impl<const SHIFT: usize> SpaceUsage for Segments<SHIFT> {
    fn space_usage_byte(&self) -> usize {
        mem::size_of::<Self>()
            + mem::size_of::<Vec<u64>>() * self.segments.capacity()
            + self
                .segments
                .iter()
                .map(|segment| mem::size_of::<u64>() * segment.capacity())
                .sum::<usize>()
    }
}

#[cfg(test)]
mod tests;
