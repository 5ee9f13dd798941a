//! The positions of the ones of a bit vector, seen as a sorted set of integers.
//!
//! Membership is a bit test and the set operations map to bit operations: adding a
//! position sets its bit, removing it clears the bit. Ordered traversal uses the
//! scans of the backing vector, so it skips runs of zeros a word at a time.

use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::traits::{BitPositionsIter, BitVector, BitVectorMut, ResizableBitVector};
use crate::utils::check;
use crate::Error;

/// A sorted set of the positions in `[from, to)` whose bit is one.
///
/// An unbounded view (`to == usize::MAX`) follows the length of the backing
/// vector; inserting a position past the end extends the vector.
///
/// # Examples
/// ```
/// use wordbits::{BitVector, BitVectorMut, FlatBitVector};
///
/// let mut bv = FlatBitVector::new();
/// {
///     let mut set = bv.as_position_set_mut();
///     assert!(set.insert(10));
///     assert!(set.insert(3));
///     assert!(!set.insert(10));
///     assert!(set.insert(1000));
///     assert_eq!(set.iter().collect::<Vec<_>>(), vec![3, 10, 1000]);
///     assert_eq!(set.head_set(500).last(), Some(10));
/// }
/// assert_eq!(bv.len(), 1001);
/// ```
pub struct PositionSetView<B> {
    backing: B,
    from: usize,
    to: usize,
}

impl<B> PositionSetView<B>
where
    B: Deref,
    B::Target: BitVector,
{
    /// Creates an unbounded view of the positions of the ones of `backing`.
    #[must_use]
    pub fn new(backing: B) -> Self {
        Self {
            backing,
            from: 0,
            to: usize::MAX,
        }
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

    #[inline]
    fn upper(&self) -> usize {
        self.to.min(self.backing.len())
    }

    #[inline]
    fn in_bounds(&self, pos: usize) -> bool {
        pos >= self.from && pos < self.upper()
    }

    // Intersects the bounds of the view with `[from, to)`.
    #[inline]
    fn bounds(&self, from: usize, to: usize) -> (usize, usize) {
        let to = to.min(self.to);
        (from.max(self.from).min(to), to)
    }

    /// Checks if `pos` is in the set.
    #[inline]
    pub fn contains(&self, pos: usize) -> bool {
        self.in_bounds(pos) && self.backing.get_bit(pos)
    }

    /// Returns the number of positions in the set.
    pub fn len(&self) -> usize {
        let upper = self.upper();
        if self.from >= upper {
            return 0;
        }
        self.backing.sub_vector(self.from, upper).count_ones()
    }

    /// Checks if the set is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.first().is_none()
    }

    /// Returns the smallest position in the set.
    #[inline]
    pub fn first(&self) -> Option<usize> {
        let upper = self.upper();
        self.backing.next_one(self.from).filter(|&p| p < upper)
    }

    /// Returns the largest position in the set.
    #[inline]
    pub fn last(&self) -> Option<usize> {
        let from = self.from;
        self.backing
            .previous_one(self.upper())
            .filter(|&p| p >= from)
    }

    /// Returns an iterator over the positions in increasing order. The iterator is
    /// double-ended.
    #[inline]
    pub fn iter(&self) -> BitPositionsIter<'_, B::Target, true> {
        BitPositionsIter::new(&*self.backing, self.from, self.upper())
    }

    /// Returns an iterator over the positions `>= pos` in increasing order.
    #[inline]
    pub fn iter_from(&self, pos: usize) -> BitPositionsIter<'_, B::Target, true> {
        BitPositionsIter::new(&*self.backing, pos.max(self.from), self.upper())
    }

    /// Returns a read-only view of the positions of this set in `[from, to)`.
    ///
    /// # Examples
    /// ```
    /// use wordbits::{BitVector, FlatBitVector};
    ///
    /// let bv: FlatBitVector = vec![1_usize, 5, 9, 14].into_iter().collect();
    /// let set = bv.as_position_set();
    /// assert_eq!(set.sub_set(2, 10).iter().collect::<Vec<_>>(), vec![5, 9]);
    /// assert_eq!(set.sub_set(2, 10).tail_set(6).len(), 1);
    /// ```
    #[must_use]
    pub fn sub_set(&self, from: usize, to: usize) -> PositionSetView<&B::Target> {
        let (from, to) = self.bounds(from, to);
        PositionSetView {
            backing: &*self.backing,
            from,
            to,
        }
    }

    /// Returns a read-only view of the positions of this set smaller than `to`.
    #[inline]
    #[must_use]
    pub fn head_set(&self, to: usize) -> PositionSetView<&B::Target> {
        self.sub_set(0, to)
    }

    /// Returns a read-only view of the positions of this set not smaller than
    /// `from`.
    #[inline]
    #[must_use]
    pub fn tail_set(&self, from: usize) -> PositionSetView<&B::Target> {
        self.sub_set(from, usize::MAX)
    }
}

impl<B> PositionSetView<B>
where
    B: DerefMut,
    B::Target: BitVectorMut,
{
    /// Removes `pos` from the set and returns whether it was present.
    pub fn remove(&mut self, pos: usize) -> bool {
        if !self.in_bounds(pos) {
            return false;
        }
        self.backing.set(pos, false)
    }

    /// Removes every position of the set.
    pub fn clear(&mut self) {
        let upper = self.upper();
        if self.from < upper {
            let from = self.from;
            self.backing.fill_range(from, upper, false);
        }
    }

    /// Returns a view of the positions of this set in `[from, to)` that writes
    /// through to the backing vector.
    #[must_use]
    pub fn sub_set_mut(&mut self, from: usize, to: usize) -> PositionSetView<&mut B::Target> {
        let (from, to) = self.bounds(from, to);
        PositionSetView {
            backing: &mut *self.backing,
            from,
            to,
        }
    }

    /// Mutable version of [`head_set`](Self::head_set).
    #[inline]
    #[must_use]
    pub fn head_set_mut(&mut self, to: usize) -> PositionSetView<&mut B::Target> {
        self.sub_set_mut(0, to)
    }

    /// Mutable version of [`tail_set`](Self::tail_set).
    #[inline]
    #[must_use]
    pub fn tail_set_mut(&mut self, from: usize) -> PositionSetView<&mut B::Target> {
        self.sub_set_mut(from, usize::MAX)
    }
}

impl<B> PositionSetView<B>
where
    B: DerefMut,
    B::Target: ResizableBitVector,
{
    /// Adds `pos` to the set and returns whether it was absent. The backing vector
    /// is extended with zeros if `pos` is past its end.
    ///
    /// # Panics
    /// Panics if `pos` is outside the bounds of the view (only in debug builds when
    /// the `checks` feature is disabled).
    pub fn insert(&mut self, pos: usize) -> bool {
        check!(
            pos >= self.from && pos < self.to,
            Error::OutOfView {
                index: pos,
                from: self.from,
                to: self.to
            }
        );
        if pos >= self.backing.len() {
            self.backing.set_len(pos + 1);
        }
        !self.backing.set(pos, true)
    }
}

impl<B> Extend<usize> for PositionSetView<B>
where
    B: DerefMut,
    B::Target: ResizableBitVector,
{
    fn extend<T>(&mut self, iter: T)
    where
        T: IntoIterator<Item = usize>,
    {
        for pos in iter {
            self.insert(pos);
        }
    }
}

impl<'a, B> IntoIterator for &'a PositionSetView<B>
where
    B: Deref,
    B::Target: BitVector + 'a,
{
    type Item = usize;
    type IntoIter = BitPositionsIter<'a, B::Target, true>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<B> fmt::Debug for PositionSetView<B>
where
    B: Deref,
    B::Target: BitVector,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests;
