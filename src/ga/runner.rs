//! GA generational loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → evaluation → record → selection → crossover →
//! mutation → replacement → repeat, for a fixed number of generations.

use super::config::GaConfig;
use super::selection::{best_index, tournament};
use super::types::{GaProblem, Individual};
use super::TourChromosome;
use crate::distance::DistanceMatrix;
use crate::error::TspResult;
use crate::history::ConvergenceHistory;
use crate::random::master_rng;
use crate::tour::TourProblem;
use log::{debug, info, trace};
use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaResult<I: Individual> {
    /// The best individual found during the entire run.
    pub best: I,

    /// Best fitness value (same as `best.fitness()`).
    pub best_fitness: f64,

    /// Total number of generations executed.
    pub generations: usize,

    /// Global best fitness recorded once per generation.
    pub history: ConvergenceHistory,
}

impl GaResult<TourChromosome> {
    /// The best tour found.
    pub fn best_tour(&self) -> &[usize] {
        self.best.tour()
    }

    /// Cost of the best tour.
    pub fn best_cost(&self) -> f64 {
        self.best_fitness
    }
}

/// Executes the GA generational loop.
///
/// # Usage
///
/// ```
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::ga::{GaConfig, GaRunner};
/// use u_tsp::tour::TourProblem;
///
/// let dm = DistanceMatrix::from_upper_triangle(4, &[1.0, 2.0, 1.0, 1.0, 2.0, 1.0]).unwrap();
/// let problem = TourProblem::new(&dm, 4).unwrap();
/// let config = GaConfig::default()
///     .with_population_size(20)
///     .with_max_generations(30)
///     .with_seed(42);
///
/// let result = GaRunner::run(&problem, &config).unwrap();
/// assert_eq!(result.history.len(), 30);
/// assert_eq!(result.best_cost(), 4.0);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA optimization with a generator derived from
    /// [`GaConfig::seed`].
    ///
    /// Returns a configuration error before any generation executes if the
    /// configuration is invalid.
    pub fn run<P: GaProblem>(problem: &P, config: &GaConfig) -> TspResult<GaResult<P::Individual>> {
        let mut rng = master_rng(config.seed);
        Self::run_with_rng(problem, config, &mut rng)
    }

    /// Runs the GA drawing all randomness from `rng`.
    ///
    /// [`GaConfig::seed`] is ignored.
    pub fn run_with_rng<P: GaProblem, R: Rng>(
        problem: &P,
        config: &GaConfig,
        rng: &mut R,
    ) -> TspResult<GaResult<P::Individual>> {
        config.validate()?;
        info!(
            "GA start: population={}, generations={}, tournament={}, mutation_rate={}, elitism={}",
            config.population_size,
            config.max_generations,
            config.tournament_size,
            config.mutation_rate,
            config.elitism
        );

        // 1. Initialize population
        let mut population: Vec<P::Individual> = (0..config.population_size)
            .map(|_| problem.create_individual(rng))
            .collect();

        let mut best: Option<P::Individual> = None;
        let mut history = ConvergenceHistory::with_capacity(config.max_generations);

        // 2. Generational loop
        for gen in 0..config.max_generations {
            evaluate_population(problem, &mut population, config.parallel);

            // Record global best
            let gen_best_idx = best_index(&population);
            let gen_best = &population[gen_best_idx];
            if best
                .as_ref()
                .is_none_or(|b| gen_best.fitness() < b.fitness())
            {
                debug!("generation {}: new best {}", gen + 1, gen_best.fitness());
                best = Some(gen_best.clone());
            }
            let best_fitness = best.as_ref().map_or(f64::INFINITY, Individual::fitness);
            history.record(best_fitness);
            trace!(
                "generation {}: generation best {}, global best {}",
                gen + 1,
                gen_best.fitness(),
                best_fitness
            );
            problem.on_generation(gen + 1, best_fitness);

            // The last generation's offspring would never be evaluated
            if gen + 1 < config.max_generations {
                population = next_generation(problem, &population, gen_best_idx, config, rng);
            }
        }

        let best = best.expect("max_generations >= 1 evaluates at least one generation");
        info!(
            "GA finished after {} generations: best {}",
            config.max_generations,
            best.fitness()
        );

        Ok(GaResult {
            best_fitness: best.fitness(),
            best,
            generations: config.max_generations,
            history,
        })
    }
}

/// Breed the replacement generation: optional elite first, then
/// tournament → crossover → mutation until the population is full.
fn next_generation<P: GaProblem, R: Rng>(
    problem: &P,
    population: &[P::Individual],
    elite_idx: usize,
    config: &GaConfig,
    rng: &mut R,
) -> Vec<P::Individual> {
    let mut next_gen = Vec::with_capacity(config.population_size);
    if config.elitism {
        next_gen.push(population[elite_idx].clone());
    }

    while next_gen.len() < config.population_size {
        let p1_idx = tournament(population, config.tournament_size, rng);
        let p2_idx = tournament(population, config.tournament_size, rng);

        let mut child = problem.crossover(&population[p1_idx], &population[p2_idx], rng);
        problem.mutate(&mut child, config.mutation_rate, rng);

        next_gen.push(child);
    }

    next_gen
}

/// Evaluate all individuals in the population.
fn evaluate_population<P: GaProblem>(
    problem: &P,
    population: &mut [P::Individual],
    parallel: bool,
) {
    #[cfg(feature = "parallel")]
    {
        if parallel {
            population.par_iter_mut().for_each(|ind| {
                let f = problem.evaluate(ind);
                ind.set_fitness(f);
            });
            return;
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    for ind in population.iter_mut() {
        let f = problem.evaluate(ind);
        ind.set_fitness(f);
    }
}

/// Runs the genetic algorithm over cities `0..num_cities` of `distances`.
///
/// Input and configuration are both validated before the first generation.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::ga::GaConfig;
/// use u_tsp::run_genetic_algorithm;
///
/// let dm = DistanceMatrix::from_upper_triangle(3, &[1.0, 2.0, 3.0]).unwrap();
/// let result = run_genetic_algorithm(&dm, 3, &GaConfig::auto_select(3).with_seed(1)).unwrap();
/// assert_eq!(result.best_cost(), 6.0);
/// ```
pub fn run_genetic_algorithm(
    distances: &DistanceMatrix,
    num_cities: usize,
    config: &GaConfig,
) -> TspResult<GaResult<TourChromosome>> {
    let problem = TourProblem::new(distances, num_cities)?;
    GaRunner::run(&problem, config)
}

// ============================================================================
// Tests
// ============================================================================
