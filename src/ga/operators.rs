//! Permutation operators for tour chromosomes.
//!
//! Both operators work on `&[usize]` city sequences and never produce a
//! duplicate or drop a city.
//!
//! # Crossover Operators
//!
//! - [`cycle_crossover`] (CX): Oliver, Smith & Holland (1987), preserves
//!   absolute positions along the cycle through index 0
//!
//! # Mutation Operators
//!
//! - [`inversion_mutation`]: reverse a random segment with a given
//!   probability (2-opt move)
//!
//! # References
//!
//! - Oliver, Smith & Holland (1987), "A Study of Permutation Crossover
//!   Operators on the Traveling Salesman Problem"
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

use rand::seq::index::sample;
use rand::Rng;

// ============================================================================
// Crossover operators
// ============================================================================

/// Cycle Crossover (CX) producing a single child.
///
/// # Algorithm
///
/// 1. Starting at index 0, copy `parent1[i]` into the child and mark `i`
/// 2. Jump to the index in parent1 holding `parent2[i]`; repeat until the
///    walk returns to a marked index (it always closes, since both parents
///    are permutations of the same set)
/// 3. Every unmarked position takes `parent2`'s gene at that position
///
/// No randomness is involved: the child depends only on the parents.
///
/// # Complexity
/// O(n) time, O(n + max gene) space; each cycle hop is a lookup in a
/// value→index table built from parent1.
///
/// # Panics
/// Panics if parents have different lengths or are not permutations of the
/// same set.
///
/// # Examples
///
/// ```
/// use u_tsp::ga::operators::cycle_crossover;
///
/// let p1 = [1, 2, 3, 4, 5, 6, 7, 8];
/// let p2 = [8, 5, 2, 1, 3, 6, 4, 7];
/// assert_eq!(cycle_crossover(&p1, &p2), vec![1, 5, 2, 4, 3, 6, 7, 8]);
/// ```
pub fn cycle_crossover(parent1: &[usize], parent2: &[usize]) -> Vec<usize> {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    if n == 0 {
        return Vec::new();
    }

    let position = inverse_positions(parent1);

    let mut child = parent2.to_vec();
    let mut visited = vec![false; n];
    let mut idx = 0;
    while !visited[idx] {
        child[idx] = parent1[idx];
        visited[idx] = true;
        idx = position
            .get(parent2[idx])
            .copied()
            .filter(|&p| p != usize::MAX)
            .expect("parents must be permutations of the same set");
    }

    child
}

/// Value→index table for `perm`; absent values map to `usize::MAX`.
fn inverse_positions(perm: &[usize]) -> Vec<usize> {
    let bound = perm.iter().copied().max().map_or(0, |m| m + 1);
    let mut position = vec![usize::MAX; bound];
    for (i, &v) in perm.iter().enumerate() {
        position[v] = i;
    }
    position
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Inversion mutation: with probability `rate`, reverse a random segment.
///
/// Returns `true` if the tour was mutated. Tours shorter than two cities
/// are never changed.
pub fn inversion_mutation<R: Rng + ?Sized>(perm: &mut [usize], rate: f64, rng: &mut R) -> bool {
    if rng.random_range(0.0..1.0) >= rate {
        return false;
    }
    invert_segment(perm, rng)
}

/// Reverse the inclusive segment between two distinct random cut points.
///
/// Returns `false` (and leaves `perm` alone) when `perm.len() < 2`.
///
/// # Complexity
/// O(n) worst case for segment reversal
pub fn invert_segment<R: Rng + ?Sized>(perm: &mut [usize], rng: &mut R) -> bool {
    let n = perm.len();
    if n < 2 {
        return false;
    }
    let (start, end) = distinct_cut_points(n, rng);
    perm[start..=end].reverse();
    true
}

// ============================================================================
// Helpers
// ============================================================================

/// Pick two distinct indices in `0..n`, returned as `(start, end)` with
/// `start < end`.
fn distinct_cut_points<R: Rng + ?Sized>(n: usize, rng: &mut R) -> (usize, usize) {
    let picks = sample(rng, n, 2);
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
