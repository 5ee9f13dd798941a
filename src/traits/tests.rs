use super::*;
use crate::perf_and_test_utils::gen_random_bits;
use crate::SegmentedBitVector;

/// A bit vector implementing only the required methods, so that every other
/// operation runs through the provided, bit-at-a-time defaults.
#[derive(Clone, Debug, Default)]
struct BoolVec(Vec<bool>);

impl BitVector for BoolVec {
    fn len(&self) -> usize {
        self.0.len()
    }

    fn get_bit(&self, index: usize) -> bool {
        self.0[index]
    }
}

impl BitVectorMut for BoolVec {
    fn set(&mut self, index: usize, bit: bool) -> bool {
        std::mem::replace(&mut self.0[index], bit)
    }
}

impl ResizableBitVector for BoolVec {
    fn set_len(&mut self, new_len: usize) {
        self.0.resize(new_len, false);
    }

    fn insert(&mut self, index: usize, bit: bool) {
        self.0.insert(index, bit);
    }

    fn remove(&mut self, index: usize) -> bool {
        self.0.remove(index)
    }
}

fn both(bits: &[bool]) -> (BoolVec, FlatBitVector) {
    (BoolVec(bits.to_vec()), bits.iter().copied().collect())
}

#[test]
fn test_get_and_get_bits() {
    let (bv, _) = both(&[true, false, true, true, false]);

    assert_eq!(bv.get(0), Some(true));
    assert_eq!(bv.get(4), Some(false));
    assert_eq!(bv.get(5), None);

    assert_eq!(bv.get_bits(0, 4), Some(0b1101));
    assert_eq!(bv.get_bits(2, 2), Some(0));
    assert_eq!(bv.get_bits(3, 6), None);
    assert_eq!(bv.get_bits(4, 3), None);
}

#[test]
fn test_get_bits_rejects_wide_windows() {
    let bv = BoolVec(vec![true; 100]);
    assert_eq!(bv.get_bits(0, 64), Some(u64::MAX));
    assert_eq!(bv.get_bits(10, 74), Some(u64::MAX));
    assert_eq!(bv.get_bits(0, 65), None);
}

#[test]
fn test_count() {
    let bits = gen_random_bits(1000, 42);
    let (bv, flat) = both(&bits);
    let expected = bits.iter().filter(|&&b| b).count();

    assert_eq!(bv.count_ones(), expected);
    assert_eq!(bv.count_zeros(), 1000 - expected);
    assert_eq!(flat.count_ones(), expected);
}

#[test]
fn test_scans_on_all_zeros() {
    let bv = BoolVec(vec![false; 100]);

    assert_eq!(bv.next_one(0), None);
    assert_eq!(bv.previous_one(100), None);
    assert_eq!(bv.next_zero(0), Some(0));
    assert_eq!(bv.previous_zero(100), Some(99));
    assert_eq!(bv.first_one(), None);
    assert_eq!(bv.last_zero(), Some(99));
}

#[test]
fn test_scans_match_linear_search() {
    let bits = gen_random_bits(700, 7);
    let (bv, flat) = both(&bits);

    for i in 0..=bits.len() + 3 {
        let next_one = (i..bits.len()).find(|&j| bits[j]);
        let next_zero = (i..bits.len()).find(|&j| !bits[j]);
        let previous_one = (0..i.min(bits.len())).rev().find(|&j| bits[j]);
        let previous_zero = (0..i.min(bits.len())).rev().find(|&j| !bits[j]);

        assert_eq!(bv.next_one(i), next_one, "next_one({i})");
        assert_eq!(bv.next_zero(i), next_zero, "next_zero({i})");
        assert_eq!(bv.previous_one(i), previous_one, "previous_one({i})");
        assert_eq!(bv.previous_zero(i), previous_zero, "previous_zero({i})");

        assert_eq!(flat.next_one(i), next_one);
        assert_eq!(flat.next_zero(i), next_zero);
        assert_eq!(flat.previous_one(i), previous_one);
        assert_eq!(flat.previous_zero(i), previous_zero);
    }
}

#[test]
fn test_previous_is_exclusive() {
    let bv = BoolVec(vec![false, true, true]);
    assert_eq!(bv.previous_one(2), Some(1));
    assert_eq!(bv.previous_one(1), None);
    assert_eq!(bv.previous_zero(1), Some(0));
    assert_eq!(bv.previous_one(1000), Some(2));
}

#[test]
fn test_longest_common_prefix() {
    let mut a = BoolVec(vec![true; 200]);
    let b = BoolVec(vec![true; 150]);

    assert_eq!(a.longest_common_prefix_len(&b), 150);
    assert!(b.is_prefix_of(&a));
    assert!(b.is_proper_prefix_of(&a));
    assert!(a.is_prefix_of(&a.clone()));
    assert!(!a.is_proper_prefix_of(&a.clone()));

    a.set(130, false);
    assert_eq!(a.longest_common_prefix_len(&b), 130);
    assert!(!b.is_prefix_of(&a));

    let empty = BoolVec::default();
    assert_eq!(empty.longest_common_prefix_len(&a), 0);
    assert!(empty.is_prefix_of(&a));
}

#[test]
fn test_compare_bits() {
    let a = BoolVec(vec![true, false, true]);
    let b = BoolVec(vec![true, true]);
    let prefix = BoolVec(vec![true, false]);

    assert_eq!(a.compare_bits(&b), Ordering::Less);
    assert_eq!(b.compare_bits(&a), Ordering::Greater);
    assert_eq!(prefix.compare_bits(&a), Ordering::Less);
    assert_eq!(a.compare_bits(&prefix), Ordering::Greater);
    assert_eq!(a.compare_bits(&a.clone()), Ordering::Equal);
}

#[test]
fn test_compare_bits_past_first_window() {
    let mut a = BoolVec(vec![false; 300]);
    let mut b = a.clone();
    a.set(200, true);
    b.set(250, true);

    assert_eq!(a.compare_bits(&b), Ordering::Greater);
    assert_eq!(b.compare_bits(&a), Ordering::Less);
}

#[test]
fn test_equality_and_hash_parity() {
    for n in [0, 1, 63, 64, 65, 128, 1000] {
        let bits = gen_random_bits(n, n as u64);
        let (bv, flat) = both(&bits);
        let segmented: SegmentedBitVector<2> = bits.iter().copied().collect();

        assert!(bv.bits_eq(&flat));
        assert!(flat.bits_eq(&bv));
        assert!(segmented.bits_eq(&bv));
        assert_eq!(bv.compare_bits(&flat), Ordering::Equal);
        assert_eq!(bv.bits_hash(), flat.bits_hash());
        assert_eq!(bv.bits_hash(), segmented.bits_hash());
    }
}

#[test]
fn test_hash_depends_on_length() {
    let a = BoolVec(vec![false; 10]);
    let b = BoolVec(vec![false; 11]);
    assert_ne!(a.bits_hash(), b.bits_hash());
    assert!(!a.bits_eq(&b));
}

#[test]
fn test_hash_of_empty() {
    let h = HASH_SEED;
    assert_eq!(BoolVec::default().bits_hash(), ((h >> 32) ^ h) as u32);
}

#[test]
fn test_bits_eq_range() {
    let mut a = BoolVec(vec![false; 100]);
    let b = a.clone();
    a.set(50, true);

    assert!(a.bits_eq_range(&b, 0, 50));
    assert!(a.bits_eq_range(&b, 51, 100));
    assert!(!a.bits_eq_range(&b, 40, 60));
}

#[test]
fn test_copy() {
    let bits = gen_random_bits(333, 3);
    let (bv, _) = both(&bits);

    let copy = bv.copy();
    assert!(copy.bits_eq(&bv));
    assert_eq!(copy.bits_hash(), bv.bits_hash());

    let range = bv.copy_range(10, 200);
    assert_eq!(range.len(), 190);
    assert!(range.bits_eq(&BoolVec(bits[10..200].to_vec())));
}

#[test]
fn test_iterators() {
    let bits = vec![true, false, false, true, true];
    let bv = BoolVec(bits.clone());

    assert_eq!(bv.iter().collect::<Vec<_>>(), bits);
    assert_eq!(bv.iter().rev().collect::<Vec<_>>(), vec![true, true, false, false, true]);
    assert_eq!(bv.iter().len(), 5);
    assert_eq!(bv.ones().collect::<Vec<_>>(), vec![0, 3, 4]);
    assert_eq!(bv.zeros().collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(bv.ones().rev().collect::<Vec<_>>(), vec![4, 3, 0]);

    let mut ones = bv.ones();
    assert_eq!(ones.next(), Some(0));
    assert_eq!(ones.next_back(), Some(4));
    assert_eq!(ones.next(), Some(3));
    assert_eq!(ones.next_back(), None);
    assert_eq!(ones.next(), None);
}

#[test]
fn test_flip_and_fill() {
    let mut bv = BoolVec(vec![false; 10]);

    assert!(!bv.flip(3));
    assert!(bv.flip(3));
    assert!(!bv.get_bit(3));

    bv.fill_range(2, 5, true);
    assert_eq!(bv.get_bits(0, 10), Some(0b0000011100));

    bv.flip_range(0, 4);
    assert_eq!(bv.get_bits(0, 10), Some(0b0000010011));

    bv.flip_all();
    assert_eq!(bv.get_bits(0, 10), Some(0b1111101100));

    bv.fill(false);
    assert_eq!(bv.count_ones(), 0);

    assert!(!bv.clear_bit(0));
}

#[test]
fn test_set_bits() {
    let mut bv = BoolVec(vec![true; 20]);
    bv.set_bits(3, 5, 0b00101);
    assert_eq!(bv.get_bits(0, 20), Some(0b1111_1111_1111_0010_1111));

    bv.set_bits(0, 0, 0);
    assert_eq!(bv.count_ones(), 17);
}

#[cfg(feature = "checks")]
#[test]
#[should_panic(expected = "value 8 does not fit in 3 bits")]
fn test_set_bits_rejects_wide_value() {
    let mut bv = BoolVec(vec![false; 20]);
    bv.set_bits(0, 3, 8);
}

#[test]
fn test_boolean_ops_truncate() {
    let mut a = BoolVec(vec![true, true, false, false, true, true]);
    let b = BoolVec(vec![true, false, true, false]);

    let mut x = a.clone();
    x.and(&b);
    assert_eq!(x.0, vec![true, false, false, false, true, true]);

    let mut x = a.clone();
    x.or(&b);
    assert_eq!(x.0, vec![true, true, true, false, true, true]);

    a.xor(&b);
    assert_eq!(a.0, vec![false, true, true, false, true, true]);

    let mut short = BoolVec(vec![true, true]);
    short.and(&BoolVec(vec![false; 10]));
    assert_eq!(short.0, vec![false, false]);
}

#[test]
fn test_boolean_ops_agree_with_flat() {
    let a = gen_random_bits(300, 1);
    let b = gen_random_bits(200, 2);

    let (mut bv_a, mut flat_a) = both(&a);
    let (bv_b, flat_b) = both(&b);

    bv_a.and(&bv_b).xor(&flat_b);
    flat_a.and(&flat_b).xor(&bv_b);
    assert!(bv_a.bits_eq(&flat_a));

    bv_a.or(&bv_b);
    flat_a.or(&flat_b);
    assert!(bv_a.bits_eq(&flat_a));
}

#[test]
fn test_resizable_defaults() {
    let mut bv = BoolVec::default();

    bv.push(true);
    bv.append_bits(0b0110, 4);
    assert_eq!(bv.0, vec![true, false, true, true, false]);

    assert_eq!(bv.pop(), Some(false));
    assert_eq!(bv.len(), 4);

    bv.append(&BoolVec(vec![true; 70]));
    assert_eq!(bv.len(), 74);
    assert_eq!(bv.count_ones(), 73);

    bv.replace(&BoolVec(vec![false, true]));
    assert_eq!(bv.0, vec![false, true]);

    bv.clear();
    assert!(bv.is_empty());
    assert_eq!(bv.pop(), None);
}

#[test]
fn test_append_bits_masks_high_bits() {
    let mut bv = BoolVec::default();
    bv.append_bits(0b1111_0101, 4);
    assert_eq!(bv.0, vec![true, false, true, false]);
}

#[test]
fn test_views_over_collaborator() {
    let mut bv = BoolVec(vec![false; 20]);
    bv.sub_vector_mut(5, 10).fill(true);
    assert_eq!(bv.count_ones(), 5);
    assert_eq!(bv.sub_vector(4, 11).ones().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);

    let set = bv.as_position_set();
    assert!(set.contains(5));
    assert!(!set.contains(4));
    assert_eq!(set.len(), 5);

    let fixed = bv.as_fixed_width(5);
    assert_eq!(fixed.len(), 4);
    assert_eq!(fixed.get(1), Some(0b11111));
}
