//! Errors reported by bit vectors, views and the serialization helpers.
//!
//! Every variant describes a programmer error, an allocation failure or an I/O
//! failure. Validation happens before any bit is written.

use std::collections::TryReserveError;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("invalid range [{from}, {to}) for length {len}")]
    InvalidRange { from: usize, to: usize, len: usize },

    #[error("range [{from}, {to}) spans more than 64 bits")]
    SpanTooWide { from: usize, to: usize },

    #[error("position {index} outside view [{from}, {to})")]
    OutOfView { index: usize, from: usize, to: usize },

    #[error("value {value} does not fit in {width} bits")]
    ValueTooWide { value: u64, width: usize },

    #[error("invalid width {0}: must be in [1, 64]")]
    InvalidWidth(usize),

    #[error("cannot adopt storage: {0}")]
    InvalidAdoption(String),

    #[error("allocation failed")]
    Allocation(#[from] TryReserveError),

    #[error("invalid format: {0}")]
    InvalidFormat(String),

    #[error("i/o error")]
    Io(#[from] std::io::Error),
}
