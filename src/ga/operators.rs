//! Generic genetic operators.
//!
//! Permutation operators work on `&[usize]` index vectors and are
//! domain-agnostic: any tour or ordering problem can use them.
//! [`single_point_crossover`] works on any fixed-length gene sequence.
//!
//! # Crossover Operators
//!
//! - [`order_crossover`] (OX): Davis (1985), preserves relative order
//! - [`single_point_crossover`]: classic one-cut recombination
//!
//! # Mutation Operators
//!
//! - [`swap_mutation`]: Exchange two distinct random positions, O(1)
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

use rand::seq::index;
use rand::Rng;

// ============================================================================
// Crossover operators
// ============================================================================

/// Order Crossover (OX) for permutations.
///
/// Preserves the **relative order** of the donor's genes outside the
/// copied segment.
///
/// # Algorithm (Davis, 1985)
///
/// 1. Pick two distinct cut points `start < end` in `0..n`
/// 2. Copy `parent1[start..end]` to the child at the same positions
/// 3. Scan `parent2` from `end`, wrapping around, and place every gene
///    not yet in the child at the next free position from `end`, wrapping
///    to 0
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if parents have different lengths.
pub fn order_crossover<R: Rng>(parent1: &[usize], parent2: &[usize], rng: &mut R) -> Vec<usize> {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");

    if n < 2 {
        return parent1.to_vec();
    }

    let (start, end) = cut_points(n, rng);
    ox_child(parent1, parent2, start, end)
}

/// Build one OX child for the segment `start..end` (end exclusive).
pub(crate) fn ox_child(template: &[usize], donor: &[usize], start: usize, end: usize) -> Vec<usize> {
    let n = template.len();
    let mut child = vec![usize::MAX; n];
    let mut present = vec![false; n];

    for i in start..end {
        child[i] = template[i];
        present[template[i]] = true;
    }

    let mut pos = end % n;
    for offset in 0..n {
        let gene = donor[(end + offset) % n];
        if !present[gene] {
            child[pos] = gene;
            present[gene] = true;
            pos = (pos + 1) % n;
        }
    }

    child
}

/// Single-point crossover for fixed-length sequences.
///
/// Picks a cut point uniformly in `1..n` and swaps the tails:
/// `child1 = p1[..cut] + p2[cut..]`, `child2 = p2[..cut] + p1[cut..]`.
/// Sequences shorter than 2 are returned unchanged.
///
/// # Panics
/// Panics if parents have different lengths.
pub fn single_point_crossover<T: Clone, R: Rng>(
    parent1: &[T],
    parent2: &[T],
    rng: &mut R,
) -> (Vec<T>, Vec<T>) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");

    if n < 2 {
        return (parent1.to_vec(), parent2.to_vec());
    }

    let cut = rng.random_range(1..n);
    let child1 = parent1[..cut].iter().chain(&parent2[cut..]).cloned().collect();
    let child2 = parent2[..cut].iter().chain(&parent1[cut..]).cloned().collect();
    (child1, child2)
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Swap mutation: exchange two distinct random positions.
///
/// # Complexity
/// O(1)
pub fn swap_mutation<R: Rng>(perm: &mut [usize], rng: &mut R) {
    let n = perm.len();
    if n < 2 {
        return;
    }
    let picks = index::sample(rng, n, 2);
    perm.swap(picks.index(0), picks.index(1));
}

// ============================================================================
// Helpers
// ============================================================================

/// Returns `true` if `perm` contains every value of `0..n` exactly once.
pub fn is_permutation(perm: &[usize], n: usize) -> bool {
    if perm.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &v in perm {
        if v >= n || seen[v] {
            return false;
        }
        seen[v] = true;
    }
    true
}

/// Two distinct cut points `start < end` within `0..n`. Requires `n >= 2`.
fn cut_points<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let picks = index::sample(rng, n, 2);
    let (a, b) = (picks.index(0), picks.index(1));
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{create_rng, shuffle};
    use proptest::prelude::*;

    // ---- OX Crossover ----

    #[test]
    fn test_ox_known_cut() {
        let p1: Vec<usize> = (0..8).collect();
        let p2: Vec<usize> = (0..8).rev().collect();
        // Segment [2, 5) from p1, then 1, 0, 7, 6, 5 from p2 starting at index 5.
        assert_eq!(ox_child(&p1, &p2, 2, 5), vec![6, 5, 2, 3, 4, 1, 0, 7]);
    }

    #[test]
    fn test_ox_segment_at_start() {
        let p1 = vec![0, 1, 2, 3, 4];
        let p2 = vec![4, 2, 0, 3, 1];
        assert_eq!(ox_child(&p1, &p2, 0, 2), vec![0, 1, 3, 4, 2]);
    }

    #[test]
    fn test_ox_produces_valid_permutations() {
        let mut rng = create_rng(42);
        let p1 = vec![0, 1, 2, 3, 4, 5, 6, 7];
        let p2 = vec![7, 6, 5, 4, 3, 2, 1, 0];

        for _ in 0..100 {
            let c1 = order_crossover(&p1, &p2, &mut rng);
            let c2 = order_crossover(&p2, &p1, &mut rng);
            assert!(is_permutation(&c1, 8), "OX child1 not valid: {c1:?}");
            assert!(is_permutation(&c2, 8), "OX child2 not valid: {c2:?}");
        }
    }

    #[test]
    fn test_ox_preserves_parent1_segment() {
        let mut rng = create_rng(123);
        let p1 = vec![3, 0, 4, 1, 2];
        let p2 = vec![4, 3, 2, 1, 0];

        for _ in 0..50 {
            let child = order_crossover(&p1, &p2, &mut rng);
            let kept = child.iter().zip(&p1).filter(|(c, p)| c == p).count();
            assert!(kept >= 1, "segment of length >= 1 must be kept: {child:?}");
            assert!(is_permutation(&child, 5));
        }
    }

    #[test]
    fn test_ox_single_element() {
        let mut rng = create_rng(42);
        assert_eq!(order_crossover(&[0], &[0], &mut rng), vec![0]);
    }

    #[test]
    fn test_ox_identical_parents() {
        let mut rng = create_rng(42);
        let p = vec![2, 0, 3, 1];
        for _ in 0..20 {
            assert_eq!(order_crossover(&p, &p, &mut rng), p);
        }
    }

    proptest! {
        #[test]
        fn prop_ox_child_is_permutation(n in 2usize..40, seed in any::<u64>()) {
            let mut rng = create_rng(seed);
            let mut p1: Vec<usize> = (0..n).collect();
            let mut p2: Vec<usize> = (0..n).collect();
            shuffle(&mut p1, &mut rng);
            shuffle(&mut p2, &mut rng);

            let child = order_crossover(&p1, &p2, &mut rng);
            prop_assert!(is_permutation(&child, n), "{:?}", child);
        }
    }

    // ---- Single-point crossover ----

    #[test]
    fn test_single_point_swaps_tails() {
        let mut rng = create_rng(5);
        let p1 = vec!['a'; 6];
        let p2 = vec!['b'; 6];

        for _ in 0..50 {
            let (c1, c2) = single_point_crossover(&p1, &p2, &mut rng);
            assert_eq!(c1.len(), 6);
            assert_eq!(c2.len(), 6);
            // Cut in 1..n: both heads and tails are non-empty.
            assert_eq!(c1[0], 'a');
            assert_eq!(c1[5], 'b');
            assert_eq!(c2[0], 'b');
            assert_eq!(c2[5], 'a');
            let cut = c1.iter().position(|&g| g == 'b').unwrap();
            assert!(c1[cut..].iter().all(|&g| g == 'b'));
            assert!(c2[..cut].iter().all(|&g| g == 'b'));
        }
    }

    #[test]
    fn test_single_point_short_sequences() {
        let mut rng = create_rng(5);
        let (c1, c2) = single_point_crossover(&[1], &[2], &mut rng);
        assert_eq!((c1, c2), (vec![1], vec![2]));
    }

    // ---- Swap Mutation ----

    #[test]
    fn test_swap_changes_exactly_two_positions() {
        let mut rng = create_rng(42);
        for _ in 0..100 {
            let original: Vec<usize> = (0..10).collect();
            let mut perm = original.clone();
            swap_mutation(&mut perm, &mut rng);
            assert!(is_permutation(&perm, 10));
            let moved = perm.iter().zip(&original).filter(|(a, b)| a != b).count();
            assert_eq!(moved, 2);
        }
    }

    #[test]
    fn test_swap_single_element() {
        let mut rng = create_rng(42);
        let mut perm = vec![0];
        swap_mutation(&mut perm, &mut rng);
        assert_eq!(perm, vec![0]);
    }

    // ---- Helpers ----

    #[test]
    fn test_is_permutation() {
        assert!(is_permutation(&[2, 0, 1], 3));
        assert!(!is_permutation(&[2, 0, 0], 3));
        assert!(!is_permutation(&[0, 1, 3], 3));
        assert!(!is_permutation(&[0, 1], 3));
    }

    #[test]
    fn test_cut_points_bounds() {
        let mut rng = create_rng(42);
        for _ in 0..1000 {
            let (start, end) = cut_points(10, &mut rng);
            assert!(start < end);
            assert!(end < 10);
        }
    }
}
