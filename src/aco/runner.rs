//! ACO iteration loop.

use super::ant::construct_tour;
use super::config::AcoConfig;
use super::pheromone::PheromoneField;
use crate::distance::DistanceMatrix;
use crate::error::TspResult;
use crate::history::ConvergenceHistory;
use crate::random::{create_rng, derive_seeds, master_rng};
use crate::tour::TourProblem;
use log::{debug, info, trace};
use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Result of an ACO run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoResult {
    /// The shortest tour found during the entire run.
    pub best_tour: Vec<usize>,

    /// Length of the best tour.
    pub best_length: f64,

    /// Total number of iterations executed.
    pub iterations: usize,

    /// Global best length recorded once per iteration.
    pub history: ConvergenceHistory,

    /// Pheromone field after the final update.
    pub pheromone: PheromoneField,
}

/// Executes the Ant Colony Optimizer.
///
/// Each iteration: every ant builds a tour against the current field, the
/// global best is updated and recorded, then the field is evaporated and
/// reinforced once. The field is never read while it is being updated.
///
/// # Usage
///
/// ```
/// use u_tsp::aco::{AcoConfig, AcoRunner};
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::tour::TourProblem;
///
/// let dm = DistanceMatrix::from_upper_triangle(4, &[1.0, 2.0, 1.0, 1.0, 2.0, 1.0]).unwrap();
/// let problem = TourProblem::new(&dm, 4).unwrap();
/// let config = AcoConfig::default()
///     .with_ant_count(5)
///     .with_max_iterations(20)
///     .with_seed(42);
///
/// let result = AcoRunner::run(&problem, &config).unwrap();
/// assert_eq!(result.history.len(), 20);
/// assert_eq!(result.best_length, 4.0);
/// ```
pub struct AcoRunner;

impl AcoRunner {
    /// Runs ACO with a generator derived from [`AcoConfig::seed`].
    pub fn run(problem: &TourProblem<'_>, config: &AcoConfig) -> TspResult<AcoResult> {
        let mut rng = master_rng(config.seed);
        Self::run_with_rng(problem, config, &mut rng)
    }

    /// Runs ACO drawing all randomness from `rng`.
    ///
    /// [`AcoConfig::seed`] is ignored.
    pub fn run_with_rng<R: Rng>(
        problem: &TourProblem<'_>,
        config: &AcoConfig,
        rng: &mut R,
    ) -> TspResult<AcoResult> {
        config.validate()?;
        info!(
            "ACO start: ants={}, iterations={}, alpha={}, beta={}, evaporation={}, Q={}",
            config.ant_count,
            config.max_iterations,
            config.alpha,
            config.beta,
            config.evaporation_rate,
            config.deposit
        );

        let mut pheromone =
            PheromoneField::new(problem.distances().size(), config.initial_pheromone);
        let mut best: Option<(Vec<usize>, f64)> = None;
        let mut history = ConvergenceHistory::with_capacity(config.max_iterations);

        for iter in 0..config.max_iterations {
            // Ants read the field; nothing writes it until all tours exist
            let seeds = derive_seeds(rng, config.ant_count);
            let tours = construct_tours(problem, &pheromone, config, &seeds);
            let lengths: Vec<f64> = tours.iter().map(|t| problem.cost(t)).collect();

            let iter_best = first_min(&lengths);
            if best
                .as_ref()
                .is_none_or(|(_, len)| lengths[iter_best] < *len)
            {
                debug!("iteration {}: new best {}", iter + 1, lengths[iter_best]);
                best = Some((tours[iter_best].clone(), lengths[iter_best]));
            }
            let best_length = best.as_ref().map_or(f64::INFINITY, |(_, len)| *len);
            history.record(best_length);
            trace!(
                "iteration {}: iteration best {}, global best {}",
                iter + 1,
                lengths[iter_best],
                best_length
            );

            update_pheromone(&mut pheromone, problem, &tours, &lengths, config);
        }

        let (best_tour, best_length) =
            best.expect("max_iterations >= 1 constructs at least one tour");
        info!(
            "ACO finished after {} iterations: best {}",
            config.max_iterations, best_length
        );

        Ok(AcoResult {
            best_tour,
            best_length,
            iterations: config.max_iterations,
            history,
            pheromone,
        })
    }
}

/// Build one tour per seed. Each ant owns a generator seeded from the
/// master, so the result is the same with or without rayon.
fn construct_tours(
    problem: &TourProblem<'_>,
    pheromone: &PheromoneField,
    config: &AcoConfig,
    seeds: &[u64],
) -> Vec<Vec<usize>> {
    let build = |seed: u64| {
        let mut rng = create_rng(seed);
        construct_tour(problem, pheromone, config.alpha, config.beta, &mut rng)
    };

    #[cfg(feature = "parallel")]
    {
        if config.parallel {
            return seeds.par_iter().map(|&seed| build(seed)).collect();
        }
    }

    seeds.iter().map(|&seed| build(seed)).collect()
}

/// Evaporate the whole field, then let every ant deposit `Q / length` on
/// each edge of its tour. Deposits from one iteration accumulate.
///
/// A zero-length tour would deposit `+∞`; such deposits are skipped so
/// the field stays finite.
pub fn update_pheromone(
    pheromone: &mut PheromoneField,
    problem: &TourProblem<'_>,
    tours: &[Vec<usize>],
    lengths: &[f64],
    config: &AcoConfig,
) {
    pheromone.evaporate(config.evaporation_rate);
    for (tour, &length) in tours.iter().zip(lengths) {
        let amount = config.deposit / length;
        if amount.is_finite() {
            pheromone.deposit(&problem.edges(tour), amount);
        }
    }
}

/// Index of the smallest value; the first one wins ties.
fn first_min(values: &[f64]) -> usize {
    let mut best = 0;
    for (i, &v) in values.iter().enumerate().skip(1) {
        if v < values[best] {
            best = i;
        }
    }
    best
}

/// Runs the ant colony optimizer over cities `0..num_cities` of
/// `distances`.
///
/// # Examples
///
/// ```
/// use u_tsp::aco::AcoConfig;
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::run_ant_colony;
///
/// let dm = DistanceMatrix::from_upper_triangle(3, &[1.0, 2.0, 3.0]).unwrap();
/// let config = AcoConfig::default().with_max_iterations(5).with_seed(1);
/// let result = run_ant_colony(&dm, 3, &config).unwrap();
/// assert_eq!(result.best_length, 6.0);
/// ```
pub fn run_ant_colony(
    distances: &DistanceMatrix,
    num_cities: usize,
    config: &AcoConfig,
) -> TspResult<AcoResult> {
    let problem = TourProblem::new(distances, num_cities)?;
    AcoRunner::run(&problem, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::Metric;

    fn circle(n: usize) -> DistanceMatrix {
        let pts: Vec<(f64, f64)> = (0..n)
            .map(|i| {
                let a = i as f64 * std::f64::consts::TAU / n as f64;
                (a.cos() * 10.0, a.sin() * 10.0)
            })
            .collect();
        DistanceMatrix::from_points(&pts, Metric::Euclidean).unwrap()
    }

    #[test]
    fn test_circle_convergence() {
        let dm = circle(10);
        let problem = TourProblem::new(&dm, 10).unwrap();
        let optimum = crate::tour::tour_cost(&(0..10).collect::<Vec<_>>(), &dm);
        let config = AcoConfig::default()
            .with_ant_count(10)
            .with_max_iterations(100)
            .with_seed(42);

        let result = AcoRunner::run(&problem, &config).unwrap();

        assert!(problem.is_valid_tour(&result.best_tour));
        assert!(
            (result.best_length - optimum).abs() < 1e-9,
            "expected optimum {optimum}, got {}",
            result.best_length
        );
    }

    #[test]
    fn test_history_length_and_monotone() {
        let dm = circle(12);
        let problem = TourProblem::new(&dm, 12).unwrap();
        let config = AcoConfig::default()
            .with_ant_count(4)
            .with_max_iterations(30)
            .with_beta(1.0)
            .with_seed(9);

        let result = AcoRunner::run(&problem, &config).unwrap();
        assert_eq!(result.iterations, 30);
        assert_eq!(result.history.len(), 30);
        assert!(result.history.is_non_increasing());
        assert_eq!(result.history.last(), Some(result.best_length));
        assert_eq!(problem.cost(&result.best_tour), result.best_length);
    }

    #[test]
    fn test_parallel_and_sequential_agree() {
        let dm = circle(9);
        let problem = TourProblem::new(&dm, 9).unwrap();
        let config = AcoConfig::default()
            .with_ant_count(8)
            .with_max_iterations(15)
            .with_seed(5);

        let a = AcoRunner::run(&problem, &config.clone().with_parallel(true)).unwrap();
        let b = AcoRunner::run(&problem, &config.with_parallel(false)).unwrap();
        assert_eq!(a.best_tour, b.best_tour);
        assert_eq!(a.history, b.history);
        assert_eq!(a.pheromone, b.pheromone);
    }

    #[test]
    fn test_update_evaporates_then_deposits() {
        let dm = DistanceMatrix::from_upper_triangle(3, &[1.0, 2.0, 3.0]).unwrap();
        let problem = TourProblem::new(&dm, 3).unwrap();
        let config = AcoConfig::default()
            .with_evaporation_rate(0.5)
            .with_deposit(12.0);
        let mut field = PheromoneField::new(3, 1.0);

        // Two ants, each tour has length 6 -> deposit 2 per ant per edge
        let tours = vec![vec![0, 1, 2], vec![2, 1, 0]];
        update_pheromone(&mut field, &problem, &tours, &[6.0, 6.0], &config);

        assert!((field.get(0, 1) - (0.5 + 4.0)).abs() < 1e-12);
        assert!((field.get(2, 0) - (0.5 + 4.0)).abs() < 1e-12);
        assert!((field.get(1, 1) - 0.5).abs() < 1e-12);
        assert!(field.is_symmetric());
    }

    #[test]
    fn test_update_skips_infinite_deposits() {
        let dm = DistanceMatrix::from_upper_triangle(2, &[0.0]).unwrap();
        let problem = TourProblem::new(&dm, 2).unwrap();
        let config = AcoConfig::default().with_evaporation_rate(0.0);
        let mut field = PheromoneField::new(2, 0.1);
        update_pheromone(&mut field, &problem, &[vec![0, 1]], &[0.0], &config);
        assert_eq!(field.get(0, 1), 0.1);
    }

    #[test]
    fn test_unroutable_tours_deposit_nothing() {
        let dm = DistanceMatrix::new(3);
        let problem = TourProblem::new(&dm, 3).unwrap();
        let config = AcoConfig::default()
            .with_ant_count(3)
            .with_max_iterations(5)
            .with_seed(2);
        let result = AcoRunner::run(&problem, &config).unwrap();
        assert!(result.best_length.is_infinite());
        assert!(problem.is_valid_tour(&result.best_tour));
        // Only evaporation acted on the field
        let expected = 0.1 * 0.9f64.powi(5);
        assert!((result.pheromone.get(0, 1) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_depot_anchored_run() {
        let dm = circle(7);
        let problem = TourProblem::with_origin(&dm, 0).unwrap();
        let optimum = crate::tour::tour_cost(&(0..7).collect::<Vec<_>>(), &dm);
        let config = AcoConfig::default()
            .with_ant_count(10)
            .with_max_iterations(60)
            .with_seed(13);
        let result = AcoRunner::run(&problem, &config).unwrap();
        assert!(!result.best_tour.contains(&0));
        assert!((result.best_length - optimum).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_config() {
        let dm = circle(5);
        let err = run_ant_colony(&dm, 5, &AcoConfig::default().with_ant_count(0)).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_input_error() {
        let dm = circle(5);
        let err = run_ant_colony(&dm, 0, &AcoConfig::default()).unwrap_err();
        assert!(err.is_input());
    }

    #[test]
    fn test_first_min() {
        assert_eq!(first_min(&[3.0, 1.0, 1.0]), 1);
        assert_eq!(first_min(&[f64::INFINITY, f64::INFINITY]), 0);
    }
}
