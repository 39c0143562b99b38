//! Parent selection for the GA.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use super::types::Individual;
use rand::seq::index::sample;
use rand::Rng;

/// Tournament selection: sample `k` distinct individuals uniformly without
/// replacement and return the index of the cheapest.
///
/// Ties go to whichever tied entrant was sampled first.
///
/// # Complexity
/// O(k) per selection
///
/// # Panics
/// Panics if `population` is empty or `k` is zero or exceeds the population
/// size. [`GaConfig::validate`](super::GaConfig::validate) rules these out
/// before a run starts.
pub fn tournament<I: Individual, R: Rng + ?Sized>(population: &[I], k: usize, rng: &mut R) -> usize {
    assert!(
        !population.is_empty(),
        "cannot select from empty population"
    );
    assert!(
        k >= 1 && k <= population.len(),
        "tournament size {k} must be in 1..={}",
        population.len()
    );

    let entrants = sample(rng, population.len(), k);
    let mut entrants = entrants.iter();
    let mut best_idx = entrants.next().expect("k >= 1");
    for idx in entrants {
        if population[idx].fitness() < population[best_idx].fitness() {
            best_idx = idx;
        }
    }
    best_idx
}

/// Index of the cheapest individual; the first one wins ties.
///
/// # Panics
/// Panics if `population` is empty.
pub(crate) fn best_index<I: Individual>(population: &[I]) -> usize {
    assert!(!population.is_empty(), "population must not be empty");
    let mut best = 0;
    for (i, ind) in population.iter().enumerate().skip(1) {
        if ind.fitness() < population[best].fitness() {
            best = i;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[derive(Clone)]
    struct TestInd {
        fit: f64,
    }

    impl Individual for TestInd {
        fn fitness(&self) -> f64 {
            self.fit
        }
        fn set_fitness(&mut self, f: f64) {
            self.fit = f;
        }
    }

    fn make_population(fitnesses: &[f64]) -> Vec<TestInd> {
        fitnesses.iter().map(|&f| TestInd { fit: f }).collect()
    }

    #[test]
    fn test_full_tournament_always_picks_best() {
        let pop = make_population(&[10.0, 5.0, 1.0, 8.0]);
        let mut rng = create_rng(42);
        // Without replacement, k = n means every individual competes
        for _ in 0..1000 {
            assert_eq!(tournament(&pop, 4, &mut rng), 2);
        }
    }

    #[test]
    fn test_tournament_size_1_is_uniform() {
        let pop = make_population(&[10.0, 5.0, 1.0, 8.0]);
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        let n = 10000;
        for _ in 0..n {
            counts[tournament(&pop, 1, &mut rng)] += 1;
        }
        for &c in &counts {
            assert!(c > 2000, "expected uniform, got counts: {counts:?}");
        }
    }

    #[test]
    fn test_worst_never_wins_with_k_two() {
        let pop = make_population(&[100.0, 50.0, 1.0, 80.0]);
        let mut rng = create_rng(42);
        for _ in 0..5000 {
            assert_ne!(tournament(&pop, 2, &mut rng), 0);
        }
    }

    #[test]
    fn test_infinite_cost_loses() {
        let pop = make_population(&[f64::INFINITY, 3.0]);
        let mut rng = create_rng(1);
        for _ in 0..100 {
            assert_eq!(tournament(&pop, 2, &mut rng), 1);
        }
    }

    #[test]
    fn test_equal_fitness_tie_goes_to_first_sampled() {
        let pop = make_population(&[5.0, 5.0, 5.0, 5.0]);
        let mut rng = create_rng(42);
        let mut counts = [0u32; 4];
        for _ in 0..10000 {
            counts[tournament(&pop, 2, &mut rng)] += 1;
        }
        // First-sampled wins, and the first draw is uniform
        for &c in &counts {
            assert!(c > 2000, "expected roughly uniform winners, got {counts:?}");
        }
    }

    #[test]
    fn test_single_individual() {
        let pop = make_population(&[5.0]);
        let mut rng = create_rng(42);
        assert_eq!(tournament(&pop, 1, &mut rng), 0);
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_population_panics() {
        let pop: Vec<TestInd> = vec![];
        let mut rng = create_rng(42);
        tournament(&pop, 3, &mut rng);
    }

    #[test]
    #[should_panic(expected = "tournament size")]
    fn test_oversized_tournament_panics() {
        let pop = make_population(&[1.0, 2.0]);
        let mut rng = create_rng(42);
        tournament(&pop, 3, &mut rng);
    }

    #[test]
    fn test_best_index_first_on_ties() {
        let pop = make_population(&[4.0, 2.0, 2.0, 9.0]);
        assert_eq!(best_index(&pop), 1);
        let all_inf = make_population(&[f64::INFINITY, f64::INFINITY]);
        assert_eq!(best_index(&all_inf), 0);
    }
}
