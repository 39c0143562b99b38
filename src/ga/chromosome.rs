//! Tour chromosome for the TSP genetic algorithm.

use super::types::Individual;

/// A tour together with its cost.
///
/// # Examples
///
/// ```
/// use u_tsp::ga::{Individual, TourChromosome};
///
/// let c = TourChromosome::new(vec![2, 0, 1]);
/// assert_eq!(c.tour(), &[2, 0, 1]);
/// assert_eq!(c.fitness(), f64::INFINITY);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TourChromosome {
    tour: Vec<usize>,
    fitness: f64,
}

impl TourChromosome {
    /// Wraps an unevaluated tour.
    pub fn new(tour: Vec<usize>) -> Self {
        Self {
            tour,
            fitness: f64::INFINITY,
        }
    }

    /// The city permutation.
    pub fn tour(&self) -> &[usize] {
        &self.tour
    }

    /// Mutable access to the city permutation.
    pub fn tour_mut(&mut self) -> &mut Vec<usize> {
        &mut self.tour
    }

    /// Consumes the chromosome, returning the tour.
    pub fn into_tour(self) -> Vec<usize> {
        self.tour
    }

    /// Number of cities in the tour.
    pub fn len(&self) -> usize {
        self.tour.len()
    }

    /// Returns true if the tour is empty.
    pub fn is_empty(&self) -> bool {
        self.tour.is_empty()
    }
}

impl Individual for TourChromosome {
    fn fitness(&self) -> f64 {
        self.fitness
    }

    fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }
}
