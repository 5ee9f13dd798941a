use std::cmp::Ordering;

use super::*;
use crate::FlatBitVector;

#[test]
fn test_singletons() {
    assert!(EMPTY.is_empty());
    assert_eq!(EMPTY.first_one(), None);
    assert_eq!(EMPTY.last_zero(), None);

    assert_eq!(ZERO.len(), 1);
    assert!(!ZERO.get_bit(0));
    assert_eq!(ZERO.first_zero(), Some(0));
    assert_eq!(ZERO.first_one(), None);

    assert_eq!(ONE.len(), 1);
    assert!(ONE.get_bit(0));
    assert_eq!(ONE.get(1), None);
    assert_eq!(ONE.last_one(), Some(0));
    assert!(ONE.bit() && !ZERO.bit());
}

#[test]
fn test_copy_is_identity() {
    for constant in [&EMPTY, &ZERO, &ONE] {
        assert!(std::ptr::eq(constant.copy(), constant));
    }
}

#[test]
fn test_agrees_with_stored_vectors() {
    for n in [0, 1, 63, 64, 65, 300] {
        for bit in [false, true] {
            let constant = ConstantBitVector::new(n, bit);
            let stored = if bit {
                FlatBitVector::with_ones(n)
            } else {
                FlatBitVector::with_zeros(n)
            };

            assert_eq!(constant, stored);
            assert_eq!(constant.bits_hash(), stored.bits_hash());
            assert_eq!(constant.compare_bits(&stored), Ordering::Equal);
            assert_eq!(constant.count_ones(), stored.count_ones());
            assert_eq!(constant.ones().collect::<Vec<_>>(), stored.ones().collect::<Vec<_>>());
            assert_eq!(
                constant.zeros().rev().collect::<Vec<_>>(),
                stored.zeros().rev().collect::<Vec<_>>()
            );
            for i in [0, 1, 40, 64, 299, 300, 1000] {
                assert_eq!(constant.next_one(i), stored.next_one(i));
                assert_eq!(constant.previous_one(i), stored.previous_one(i));
                assert_eq!(constant.next_zero(i), stored.next_zero(i));
                assert_eq!(constant.previous_zero(i), stored.previous_zero(i));
            }
        }
    }
}

#[test]
fn test_ordering_against_stored() {
    let bv: FlatBitVector = [true, false].into_iter().collect();
    assert_eq!(ZERO.compare_bits(&bv), Ordering::Less);
    assert_eq!(ONE.compare_bits(&bv), Ordering::Less);
    assert!(ONE.is_proper_prefix_of(&bv));
    assert_eq!(EMPTY.compare_bits(&ZERO), Ordering::Less);
    assert_ne!(ZERO, ONE);
}

#[test]
fn test_windows() {
    let ones = ConstantBitVector::new(200, true);
    assert_eq!(ones.get_word_range(10, 74), u64::MAX);
    assert_eq!(ones.get_bits(190, 200), Some(0x3ff));
    assert_eq!(ZERO.get_bits(0, 1), Some(0));
    assert_eq!(ones.copy_range(5, 15).count_ones(), 10);
}

#[cfg(feature = "checks")]
#[test]
#[should_panic(expected = "index 1 out of bounds for length 1")]
fn test_get_out_of_bounds() {
    ONE.get_bit(1);
}
