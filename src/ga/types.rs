//! Core trait definitions for the GA engine.
//!
//! [`Individual`] and [`GaProblem`] are the contract between the generic
//! generational loop and a concrete encoding. The TSP encoding lives in
//! [`TourChromosome`](super::TourChromosome) and the
//! [`TourProblem`](crate::tour::TourProblem) implementation.

use rand::Rng;

/// A candidate solution carrying its own cost.
///
/// Lower fitness is better (minimization). Unevaluated individuals hold
/// `f64::INFINITY`.
pub trait Individual: Clone + Send + Sync {
    /// Returns the current fitness of this individual.
    fn fitness(&self) -> f64;

    /// Sets the fitness of this individual.
    ///
    /// Called by the runner after evaluation.
    fn set_fitness(&mut self, fitness: f64);
}

/// Defines a GA optimization problem.
///
/// # Thread Safety
///
/// `GaProblem` must be `Send + Sync` because the runner may evaluate
/// individuals in parallel using rayon.
pub trait GaProblem: Send + Sync {
    /// The individual (solution) type for this problem.
    type Individual: Individual;

    /// Creates a random individual for the initial population.
    fn create_individual<R: Rng>(&self, rng: &mut R) -> Self::Individual;

    /// Evaluates an individual and returns its fitness.
    ///
    /// Must be pure: the runner may call it concurrently.
    fn evaluate(&self, individual: &Self::Individual) -> f64;

    /// Produces one child from two parents.
    ///
    /// The default implementation clones parent1 (no crossover).
    fn crossover<R: Rng>(
        &self,
        parent1: &Self::Individual,
        _parent2: &Self::Individual,
        _rng: &mut R,
    ) -> Self::Individual {
        parent1.clone()
    }

    /// Mutates an offspring in place. Called once per offspring; `rate` is
    /// the configured mutation probability and the implementation decides
    /// whether to act on it.
    ///
    /// The default implementation is a no-op.
    fn mutate<R: Rng>(&self, _individual: &mut Self::Individual, _rate: f64, _rng: &mut R) {}

    /// Called at the end of each generation with the global best fitness.
    ///
    /// The default implementation is a no-op.
    fn on_generation(&self, _generation: usize, _best_fitness: f64) {}
}
