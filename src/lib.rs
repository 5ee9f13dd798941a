//! This library provides mutable, bit-addressable vectors stored in 64-bit words,
//! together with live views over them.
//!
//! Bits are numbered from 0; bit `i` lives in word `i >> 6` at position `i & 63`,
//! where position 0 is the least significant bit of the word.
//!
//! The crate is organized in layers:
//! - the [`BitVector`], [`BitVectorMut`] and [`ResizableBitVector`] traits implement
//!   every derived operation (scans, comparisons, hashing, boolean operations, views)
//!   on top of two primitives, [`BitVector::len`] and [`BitVector::get_bit`];
//! - [`WordBitVector`] implements the traits with word-at-a-time algorithms over a
//!   [`WordStore`]. [`FlatBitVector`] keeps the words in a single `Vec<u64>`,
//!   [`SegmentedBitVector`] splits them into fixed-size segments so that it can grow
//!   past the size of a single allocation;
//! - [`SubBitVector`], [`PositionSetView`] and [`FixedWidthView`] are views that
//!   read and write through to the vector they are built on;
//! - [`serialization`] writes and reads vectors in a fixed binary format and
//!   [`constant`] provides the immutable [`EMPTY`], [`ZERO`] and [`ONE`] vectors.
//!
//! Equality, ordering and hashing are defined only in terms of the contract of
//! [`BitVector`], so vectors stored in different ways compare and hash consistently.
//!
//! ```
//! use wordbits::{BitVector, BitVectorMut, FlatBitVector, ResizableBitVector, SegmentedBitVector};
//!
//! let mut flat = FlatBitVector::new();
//! flat.append_bits(0b1011, 4);
//! flat.push(true);
//!
//! let segmented: SegmentedBitVector = [true, true, false, true, true].into_iter().collect();
//!
//! assert!(flat.bits_eq(&segmented));
//! assert_eq!(flat.bits_hash(), segmented.bits_hash());
//!
//! flat.sub_vector_mut(1, 3).fill(true);
//! assert_eq!(flat.get_bits(0, 5), Some(0b11111));
//! ```
//!
//! None of the types synchronize internally: a vector and the views built on it are
//! meant to be used by one thread at a time.

pub mod bitvector;
pub mod constant;
pub mod error;
pub mod perf_and_test_utils;
pub mod serialization;
pub mod storage;
pub mod traits;
pub mod utils;
pub mod views;

pub use bitvector::{FlatBitVector, SegmentedBitVector, WordBitVector};
pub use constant::{ConstantBitVector, EMPTY, ONE, ZERO};
pub use error::{Error, Result};
pub use storage::{Segments, WordStore};
pub use traits::{BitVector, BitVectorMut, ResizableBitVector};
pub use views::{FixedWidthView, PositionSetView, SubBitVector};

/// An interface to report the space usage of a data structure.
pub trait SpaceUsage {
    /// Gives the space usage of the data structure in bytes.
    fn space_usage_byte(&self) -> usize;

    /// Gives the space usage of the data structure in KiB.
    #[allow(non_snake_case)]
    fn space_usage_KiB(&self) -> f64 {
        let bytes = self.space_usage_byte();
        (bytes as f64) / (1024_f64)
    }

    /// Gives the space usage of the data structure in MiB.
    #[allow(non_snake_case)]
    fn space_usage_MiB(&self) -> f64 {
        let bytes = self.space_usage_byte();
        (bytes as f64) / ((1024 * 1024) as f64)
    }

    /// Gives the space usage of the data structure in GiB.
    #[allow(non_snake_case)]
    fn space_usage_GiB(&self) -> f64 {
        let bytes = self.space_usage_byte();
        (bytes as f64) / ((1024 * 1024 * 1024) as f64)
    }
}

use std::mem;

impl<T> SpaceUsage for Vec<T>
where
    T: SpaceUsage + Copy,
{
    fn space_usage_byte(&self) -> usize {
        mem::size_of::<Self>() + mem::size_of::<T>() * self.capacity()
    }
}

impl<T> SpaceUsage for Box<[T]>
where
    T: SpaceUsage + Copy,
{
    fn space_usage_byte(&self) -> usize {
        mem::size_of::<Self>() + mem::size_of::<T>() * self.len()
    }
}

macro_rules! impl_space_usage {
    ($($t:ty),*) => {
        $(impl SpaceUsage for $t {
            fn space_usage_byte(&self) -> usize {
                mem::size_of::<Self>()
            }
        })*
    }
}

impl_space_usage![bool, i8, u8, i16, u16, i32, u32, i64, u64, i128, u128, isize, usize, f32, f64];
