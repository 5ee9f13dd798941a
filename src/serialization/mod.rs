//! Persistence of bit vectors.
//!
//! Two formats are supported.
//!
//! The binary stream format is a big-endian `i64` holding the length in bits,
//! followed by `ceil(length / 64)` big-endian 64-bit words. Bit `i` is bit
//! `i % 64` of word `i / 64`, and the bits of the last word past the length are
//! zero. [`write_to`] accepts any [`BitVector`]; [`read_from`] and [`read_into`]
//! validate the stream before accepting it.
//!
//! Through serde, a [`WordBitVector`] is a struct `{ n_bits, words }` whatever its
//! store, so a flat vector can be deserialized as a segmented one and vice versa.

use std::fmt;
use std::io::{Read, Write};

use byteorder::{ReadBytesExt, WriteBytesExt, BE};
use serde::de::{self, Deserializer};
use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::storage::WordStore;
use crate::traits::{BitVector, ResizableBitVector};
use crate::utils::{bit_of, compute_mask, words_for, WORD_BITS};
use crate::{Error, FlatBitVector, Result, WordBitVector};

/// Capacity reserved up front by the readers. Longer vectors grow while the words
/// arrive, so a corrupted length cannot trigger a huge allocation by itself.
const MAX_PREALLOCATED_BITS: usize = 1 << 26;

/// Writes `bv` to `writer` in the binary stream format.
///
/// # Examples
/// ```
/// use wordbits::serialization::write_to;
/// use wordbits::FlatBitVector;
///
/// let bv: FlatBitVector = [true, false, true].into_iter().collect();
/// let mut bytes = Vec::new();
/// write_to(&bv, &mut bytes).unwrap();
/// assert_eq!(bytes, [0, 0, 0, 0, 0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 5]);
/// ```
pub fn write_to<V, W>(bv: &V, writer: &mut W) -> Result<()>
where
    V: BitVector + ?Sized,
    W: Write,
{
    let n = bv.len();
    let len = i64::try_from(n)
        .map_err(|_| Error::InvalidFormat(format!("length {n} does not fit in an i64")))?;
    writer.write_i64::<BE>(len)?;

    let mut i = 0;
    while i < n {
        let to = (i + WORD_BITS).min(n);
        writer.write_u64::<BE>(bv.get_word_range(i, to))?;
        i = to;
    }
    debug!(n_bits = n, n_words = words_for(n), "wrote bit vector");
    Ok(())
}

/// Reads a [`FlatBitVector`] in the binary stream format from `reader`.
///
/// # Examples
/// ```
/// use wordbits::serialization::{read_from, write_to};
/// use wordbits::{BitVector, FlatBitVector};
///
/// let bv: FlatBitVector = vec![1_usize, 64, 300].into_iter().collect();
/// let mut bytes = Vec::new();
/// write_to(&bv, &mut bytes).unwrap();
///
/// let read = read_from(&mut bytes.as_slice()).unwrap();
/// assert_eq!(read, bv);
/// ```
pub fn read_from<R: Read>(reader: &mut R) -> Result<FlatBitVector> {
    let mut bv = FlatBitVector::new();
    read_into(reader, &mut bv)?;
    Ok(bv)
}

/// Reads a bit vector in the binary stream format from `reader` into `bv`,
/// replacing its content and reusing its storage.
///
/// Fails with [`Error::InvalidFormat`] if the length is negative or the last word
/// has bits set past the length, and with [`Error::Io`] if the stream ends early.
/// On failure `bv` is left empty.
pub fn read_into<R, S>(reader: &mut R, bv: &mut WordBitVector<S>) -> Result<()>
where
    R: Read,
    S: WordStore,
{
    bv.clear();
    let result = read_words(reader, bv);
    if result.is_err() {
        bv.clear();
    }
    result
}

fn read_words<R, S>(reader: &mut R, bv: &mut WordBitVector<S>) -> Result<()>
where
    R: Read,
    S: WordStore,
{
    let len = reader.read_i64::<BE>()?;
    let n_bits = usize::try_from(len).map_err(|_| {
        debug!(len, "rejected stream: invalid length");
        Error::InvalidFormat(format!("invalid length {len}"))
    })?;
    bv.try_ensure_capacity(n_bits.min(MAX_PREALLOCATED_BITS))?;

    let full = n_bits / WORD_BITS;
    for _ in 0..full {
        bv.append_bits(reader.read_u64::<BE>()?, WORD_BITS);
    }
    let rest = bit_of(n_bits);
    if rest != 0 {
        let word = reader.read_u64::<BE>()?;
        if word & !compute_mask(rest) != 0 {
            debug!(n_bits, "rejected stream: bits set past the length");
            return Err(Error::InvalidFormat(format!(
                "last word has bits set past length {n_bits}"
            )));
        }
        bv.append_bits(word, rest);
    }
    debug!(n_bits, "read bit vector");
    Ok(())
}

struct Words<'a, S: WordStore>(&'a WordBitVector<S>);

impl<S: WordStore> Serialize for Words<'_, S> {
    fn serialize<T: Serializer>(&self, serializer: T) -> std::result::Result<T::Ok, T::Error> {
        serializer.collect_seq((0..self.0.n_words()).map(|i| self.0.get_word(i)))
    }
}

impl<S: WordStore> Serialize for WordBitVector<S> {
    fn serialize<T: Serializer>(&self, serializer: T) -> std::result::Result<T::Ok, T::Error> {
        let mut state = serializer.serialize_struct("WordBitVector", 2)?;
        state.serialize_field("n_bits", &self.len())?;
        state.serialize_field("words", &Words(self))?;
        state.end()
    }
}

#[derive(Deserialize)]
#[serde(rename = "WordBitVector")]
struct RawBits {
    n_bits: usize,
    words: Vec<u64>,
}

impl<'de, S: WordStore> Deserialize<'de> for WordBitVector<S> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = RawBits::deserialize(deserializer)?;
        if raw.words.len() != words_for(raw.n_bits) {
            return Err(de::Error::invalid_length(
                raw.words.len(),
                &ExpectedWords(raw.n_bits),
            ));
        }
        WordBitVector::try_from_words(raw.words, raw.n_bits).map_err(de::Error::custom)
    }
}

struct ExpectedWords(usize);

impl de::Expected for ExpectedWords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} words for {} bits", words_for(self.0), self.0)
    }
}
