//! Views over a bit vector.
//!
//! A view borrows (or owns) a backing vector through any pointer implementing
//! [`Deref`](std::ops::Deref): `&V`, `&mut V`, `Box<V>` and so on. Views never
//! copy bits; reads go to the backing vector and, when the pointer allows it,
//! writes go through to it.
//!
//! - [`SubBitVector`] exposes a range `[from, to)` as a bit vector of its own.
//! - [`PositionSetView`] exposes the positions of the ones as a sorted set.
//! - [`FixedWidthView`] exposes the bits as a list of `width`-bit integers.

pub mod fixed_width;
pub mod position_set;
pub mod sub_vector;

pub use fixed_width::FixedWidthView;
pub use position_set::PositionSetView;
pub use sub_vector::SubBitVector;
