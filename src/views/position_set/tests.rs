use super::*;
use crate::perf_and_test_utils::gen_strictly_increasing_sequence;
use crate::{FlatBitVector, SegmentedBitVector};

#[test]
fn test_small_set() {
    let mut bv = FlatBitVector::new();
    let mut set = bv.as_position_set_mut();
    for pos in [3, 10, 1000] {
        assert!(set.insert(pos));
    }
    assert!(!set.insert(10));

    assert!(set.contains(3));
    assert!(!set.contains(4));
    assert!(!set.contains(5000));
    assert_eq!(set.len(), 3);
    assert_eq!(set.first(), Some(3));
    assert_eq!(set.last(), Some(1000));
    assert_eq!(set.iter().collect::<Vec<_>>(), vec![3, 10, 1000]);
    assert_eq!(set.iter().rev().collect::<Vec<_>>(), vec![1000, 10, 3]);
    assert_eq!(set.iter_from(4).collect::<Vec<_>>(), vec![10, 1000]);
    assert_eq!(format!("{set:?}"), "{3, 10, 1000}");

    assert!(set.remove(10));
    assert!(!set.remove(10));
    assert!(!set.remove(5000));
    assert_eq!(set.len(), 2);
    assert_eq!(bv.len(), 1001);
}

#[test]
fn test_matches_positions() {
    let positions = gen_strictly_increasing_sequence(500, 20_000);
    let bv: FlatBitVector = positions.iter().copied().collect();
    let set = bv.as_position_set();

    assert_eq!(set.len(), positions.len());
    assert_eq!(set.iter().collect::<Vec<_>>(), positions);
    assert_eq!((&set).into_iter().count(), positions.len());
    for &pos in positions.iter().take(50) {
        assert!(set.contains(pos));
        assert_eq!(
            set.iter_from(pos).collect::<Vec<_>>(),
            positions.iter().copied().filter(|&p| p >= pos).collect::<Vec<_>>()
        );
    }
}

#[test]
fn test_bounded_views() {
    let bv: FlatBitVector = vec![1_usize, 5, 9, 14, 200].into_iter().collect();
    let set = bv.as_position_set();

    let head = set.head_set(9);
    assert_eq!(head.iter().collect::<Vec<_>>(), vec![1, 5]);
    assert!(!head.contains(9));
    assert_eq!(head.last(), Some(5));

    let tail = set.tail_set(9);
    assert_eq!(tail.iter().collect::<Vec<_>>(), vec![9, 14, 200]);
    assert_eq!(tail.first(), Some(9));
    assert_eq!(tail.len(), 3);

    let sub = set.sub_set(2, 100);
    assert_eq!(sub.iter().rev().collect::<Vec<_>>(), vec![14, 9, 5]);
    // Bounds of nested views intersect.
    assert_eq!(sub.head_set(1000).iter().collect::<Vec<_>>(), vec![5, 9, 14]);
    assert_eq!(sub.tail_set(0).first(), Some(5));
    assert!(sub.sub_set(50, 60).is_empty());
    assert!(set.sub_set(10, 3).is_empty());
    assert_eq!(set.sub_set(10, 3).len(), 0);
    assert_eq!(set.tail_set(500).last(), None);
}

#[test]
fn test_bounded_mutation() {
    let mut bv: FlatBitVector = (0..100).collect::<Vec<usize>>().into_iter().collect();
    {
        let mut set = bv.as_position_set_mut();
        let mut middle = set.sub_set_mut(20, 80);
        assert!(!middle.remove(10));
        assert!(middle.remove(20));
        middle.clear();
        assert!(middle.is_empty());
        assert!(middle.insert(50));
    }
    assert_eq!(bv.count_ones(), 41);
    assert!(bv.get_bit(19));
    assert!(bv.get_bit(50));
    assert!(!bv.get_bit(79));
    assert!(bv.get_bit(80));

    {
        let mut set = bv.as_position_set_mut();
        set.head_set_mut(10).clear();
        let mut tail = set.tail_set_mut(150);
        assert!(tail.insert(150));
    }
    assert_eq!(bv.len(), 151);
    assert_eq!(bv.first_one(), Some(10));
    assert_eq!(bv.last_one(), Some(150));
}

#[test]
fn test_extend() {
    let mut bv = SegmentedBitVector::<1>::new();
    let mut set = bv.as_position_set_mut();
    set.extend([700, 3, 129, 3]);
    assert_eq!(set.iter().collect::<Vec<_>>(), vec![3, 129, 700]);
    assert_eq!(bv.len(), 701);
}

#[test]
fn test_over_sub_vector() {
    let bv: FlatBitVector = vec![2_usize, 12, 40].into_iter().collect();
    let sub = bv.sub_vector(10, 41);
    let set = sub.as_position_set();
    assert_eq!(set.iter().collect::<Vec<_>>(), vec![2, 30]);
    assert_eq!(set.len(), 2);
}

#[cfg(feature = "checks")]
#[test]
#[should_panic(expected = "position 90 outside view [20, 80)")]
fn test_insert_out_of_view() {
    let mut bv = FlatBitVector::with_zeros(100);
    let mut set = bv.as_position_set_mut();
    set.sub_set_mut(20, 80).insert(90);
}
