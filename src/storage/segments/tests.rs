use super::*;

type Small = Segments<2>;

fn numbered(n: usize) -> Small {
    Small::from_words((0..n as u64).collect())
}

#[test]
fn test_word_access_across_segments() {
    let mut store = numbered(10);
    assert_eq!(store.n_words(), 10);
    assert_eq!(store.segments().len(), 3);
    assert_eq!(store.segments()[2], vec![8, 9]);

    for i in 0..10 {
        assert_eq!(store.word(i), i as u64);
    }

    *store.word_mut(4) = 100;
    assert_eq!(store.segments()[1][0], 100);
}

#[test]
fn test_resize_grow_and_shrink() {
    let mut store = numbered(6);

    store.resize(13);
    assert_eq!(store.n_words(), 13);
    assert_eq!(store.segments().len(), 4);
    assert!((6..13).all(|i| store.word(i) == 0));
    assert_eq!(store.word(5), 5);

    store.resize(3);
    assert_eq!(store.n_words(), 3);
    assert_eq!(store.segments().len(), 1);

    store.resize(8);
    assert_eq!(store.word(2), 2);
    assert!((3..8).all(|i| store.word(i) == 0));
}

#[test]
fn test_reserve_then_resize_keeps_capacity() {
    let mut store = Small::new();
    store.try_reserve(11).unwrap();
    let capacity = store.capacity();
    assert!(capacity >= 11);

    store.resize(11);
    assert_eq!(store.capacity(), capacity);
    assert_eq!(store.n_words(), 11);

    store.resize(0);
    assert_eq!(store.n_words(), 0);
    assert!(store.capacity() >= 11);

    store.shrink_to_fit();
    assert_eq!(store.capacity(), 0);
    assert!(store.segments().is_empty());
}

#[test]
fn test_segments_are_capped() {
    let mut store = Small::new();
    store.try_reserve(3).unwrap();
    store.try_reserve(100).unwrap();
    store.resize(100);
    assert_eq!(store.segments().len(), 25);
    assert!(store.segments().iter().all(|s| s.len() == Small::SEGMENT_SIZE));
}

#[test]
fn test_fill_words_across_segments() {
    let mut store = numbered(12);
    store.fill_words(3, 10, u64::MAX);

    for i in 0..12 {
        let expected = if (3..10).contains(&i) { u64::MAX } else { i as u64 };
        assert_eq!(store.word(i), expected, "word {i}");
    }
}

#[test]
fn test_try_from_segments() {
    let store = Small::try_from_segments(vec![vec![1; 4], vec![2; 4], vec![3]]).unwrap();
    assert_eq!(store.n_words(), 9);
    assert_eq!(store.word(8), 3);
    assert_eq!(store.clone().into_segments().len(), 3);

    let err = Small::try_from_segments(vec![vec![1; 3], vec![2; 4]]).unwrap_err();
    assert!(matches!(err, Error::InvalidAdoption(_)));

    assert!(Small::try_from_segments(vec![vec![1; 5]]).is_err());
    assert_eq!(Small::try_from_segments(Vec::new()).unwrap().n_words(), 0);
}

#[test]
fn test_unit_segments() {
    let mut store = Segments::<0>::from_words(vec![7, 8, 9]);
    assert_eq!(store.segments().len(), 3);
    store.resize(5);
    store.fill_words(1, 4, 1);
    assert_eq!(
        (0..5).map(|i| store.word(i)).collect::<Vec<_>>(),
        vec![7, 1, 1, 1, 0]
    );
}

#[test]
fn test_space_usage_grows_with_content() {
    let empty = Small::new();
    let full = numbered(100);
    assert!(full.space_usage_byte() >= empty.space_usage_byte() + 100 * 8);
}
