use super::*;
use crate::perf_and_test_utils::gen_random_words;
use crate::{FlatBitVector, SegmentedBitVector};

#[test]
fn test_len_ignores_trailing_bits() {
    let bv = FlatBitVector::with_zeros(23);
    assert_eq!(bv.as_fixed_width(5).len(), 4);
    assert_eq!(bv.as_fixed_width(64).len(), 0);
    assert!(bv.as_fixed_width(64).is_empty());
    assert_eq!(bv.as_fixed_width(1).len(), 23);
}

#[test]
fn test_get_and_set() {
    for width in [1, 3, 7, 13, 32, 63, 64] {
        let mask = compute_mask(width);
        let values: Vec<u64> = gen_random_words(300, width as u64)
            .into_iter()
            .map(|v| v & mask)
            .collect();

        let mut bv = FlatBitVector::with_ones(300 * width);
        let mut list = bv.as_fixed_width_mut(width);
        assert_eq!(list.width(), width);
        for (i, &v) in values.iter().enumerate() {
            assert_eq!(list.set(i, v), mask);
        }
        for (i, &v) in values.iter().enumerate() {
            assert_eq!(list.get(i), Some(v));
        }
        assert_eq!(list.get(300), None);
        assert_eq!(list.iter().collect::<Vec<_>>(), values);
        assert_eq!(list.iter().rev().next(), values.last().copied());
        assert_eq!(list.iter().len(), 300);
    }
}

#[test]
fn test_set_preserves_neighbours() {
    let mut bv = FlatBitVector::with_ones(200);
    bv.as_fixed_width_mut(11).set(7, 0);
    assert_eq!(bv.count_zeros(), 11);
    assert_eq!(bv.first_zero(), Some(77));
    assert_eq!(bv.last_zero(), Some(87));
}

#[test]
fn test_push_resize_pop() {
    let mut bv = SegmentedBitVector::<1>::new();
    let mut list = bv.as_fixed_width_mut(9);
    list.extend([5, 511, 0, 256]);
    assert_eq!(list.len(), 4);
    assert_eq!(list.pop(), Some(256));
    assert_eq!(format!("{list:?}"), "[5, 511, 0]");

    list.resize(6);
    assert_eq!(list.iter().collect::<Vec<_>>(), vec![5, 511, 0, 0, 0, 0]);
    list.resize(1);
    assert_eq!(list.pop(), Some(5));
    assert_eq!(list.pop(), None);
    assert_eq!(bv.len(), 0);
}

#[test]
fn test_push_drops_partial_element() {
    let mut bv = FlatBitVector::with_ones(10);
    let mut list = bv.as_fixed_width_mut(4);
    list.push(0b0101);
    assert_eq!(list.len(), 3);
    assert_eq!(list.iter().collect::<Vec<_>>(), vec![0b1111, 0b1111, 0b0101]);
    assert_eq!(bv.len(), 12);
}

#[test]
fn test_over_sub_vector() {
    let mut bv = FlatBitVector::with_zeros(64);
    {
        let mut sub = bv.sub_vector_mut(3, 35);
        let mut list = sub.as_fixed_width_mut(8);
        assert_eq!(list.len(), 4);
        list.set(1, 0xff);
        list.push(0x81);
        assert_eq!(list.len(), 5);
    }
    assert_eq!(bv.len(), 72);
    assert_eq!(bv.get_bits(11, 19), Some(0xff));
    assert_eq!(bv.get_bits(35, 43), Some(0x81));
    assert_eq!(bv.count_ones(), 10);
}

#[test]
fn test_try_new() {
    let bv = FlatBitVector::with_zeros(10);
    assert!(matches!(
        FixedWidthView::try_new(&bv, 0),
        Err(Error::InvalidWidth(0))
    ));
    assert!(matches!(
        FixedWidthView::try_new(&bv, 65),
        Err(Error::InvalidWidth(65))
    ));
    assert_eq!(FixedWidthView::try_new(&bv, 2).map(|l| l.len()).ok(), Some(5));
}

#[cfg(feature = "checks")]
#[test]
#[should_panic(expected = "invalid width 0")]
fn test_zero_width() {
    let bv = FlatBitVector::new();
    let _ = bv.as_fixed_width(0);
}

#[cfg(feature = "checks")]
#[test]
#[should_panic(expected = "value 16 does not fit in 4 bits")]
fn test_value_too_wide() {
    let mut bv = FlatBitVector::with_zeros(8);
    bv.as_fixed_width_mut(4).set(0, 16);
}

#[cfg(feature = "checks")]
#[test]
#[should_panic(expected = "index 2 out of bounds for length 2")]
fn test_set_out_of_bounds() {
    let mut bv = FlatBitVector::with_zeros(8);
    bv.as_fixed_width_mut(4).set(2, 1);
}
