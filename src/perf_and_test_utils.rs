//! Generators of random inputs shared by tests, doctests and benchmarks.
//!
//! Every generator takes a seed, so a failing input can be reproduced.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generates a random strictly increasing sequence of `n` values smaller than `u`.
///
/// # Panics
/// Panics if `n > u`.
///
/// # Examples
/// ```
/// use wordbits::perf_and_test_utils::gen_strictly_increasing_sequence;
///
/// let v = gen_strictly_increasing_sequence(100, 1000);
/// assert_eq!(v.len(), 100);
/// assert!(v.windows(2).all(|w| w[0] < w[1]));
/// assert!(*v.last().unwrap() < 1000);
/// ```
pub fn gen_strictly_increasing_sequence(n: usize, u: usize) -> Vec<usize> {
    assert!(n <= u, "cannot pick {n} distinct values below {u}");
    let mut rng = StdRng::seed_from_u64(n as u64 ^ u as u64);
    let mut v = rand::seq::index::sample(&mut rng, u, n).into_vec();
    v.sort_unstable();
    v
}

/// Returns the sorted positions in `[0, max(vv)]` that do not appear in the
/// strictly increasing sequence `vv`.
///
/// # Examples
/// ```
/// use wordbits::perf_and_test_utils::negate_vector;
///
/// assert_eq!(negate_vector(&[1, 4, 5]), vec![0, 2, 3]);
/// assert!(negate_vector(&[]).is_empty());
/// ```
pub fn negate_vector(vv: &[usize]) -> Vec<usize> {
    let Some(&max) = vv.last() else {
        return Vec::new();
    };
    let mut negated = Vec::with_capacity(max + 1 - vv.len());
    let mut next = vv.iter().peekable();
    for i in 0..max {
        if next.peek() == Some(&&i) {
            next.next();
        } else {
            negated.push(i);
        }
    }
    negated
}

/// Generates `n` random bits.
pub fn gen_random_bits(n: usize, seed: u64) -> Vec<bool> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen()).collect()
}

/// Generates `n` random words.
pub fn gen_random_words(n: usize, seed: u64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen()).collect()
}
