//! GA problem definition for the TSP.
//!
//! Implements [`GaProblem`] for [`TourProblem`] with permutation encoding.
//!
//! # Operators
//!
//! - **Initialization**: uniformly random permutation of the problem's cities
//! - **Crossover**: cycle crossover (CX)
//! - **Mutation**: segment inversion with the configured probability
//! - **Evaluation**: cyclic (or origin-anchored) tour cost

use rand::Rng;

use crate::tour::TourProblem;

use super::chromosome::TourChromosome;
use super::operators::{cycle_crossover, inversion_mutation};
use super::types::GaProblem;

impl GaProblem for TourProblem<'_> {
    type Individual = TourChromosome;

    fn create_individual<R: Rng>(&self, rng: &mut R) -> TourChromosome {
        TourChromosome::new(self.random_tour(rng))
    }

    fn evaluate(&self, individual: &TourChromosome) -> f64 {
        self.cost(individual.tour())
    }

    fn crossover<R: Rng>(
        &self,
        parent1: &TourChromosome,
        parent2: &TourChromosome,
        _rng: &mut R,
    ) -> TourChromosome {
        TourChromosome::new(cycle_crossover(parent1.tour(), parent2.tour()))
    }

    fn mutate<R: Rng>(&self, individual: &mut TourChromosome, rate: f64, rng: &mut R) {
        inversion_mutation(individual.tour_mut(), rate, rng);
    }
}
