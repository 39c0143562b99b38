//! Metaheuristic solvers for the symmetric Traveling Salesman Problem.
//!
//! Two independent solvers share one problem model:
//!
//! - **Genetic Algorithm (GA)**: generational evolution of tour
//!   permutations with tournament selection, cycle crossover, inversion
//!   mutation and optional elitism.
//! - **Ant Colony Optimization (ACO)**: ants sample tours from a persistent
//!   pheromone field weighted by inverse distance; the field evaporates
//!   and is reinforced after every iteration.
//!
//! Both run for a fixed number of steps and return the best tour, its cost
//! and a [`ConvergenceHistory`](history::ConvergenceHistory) of the global
//! best after every step.
//!
//! # Modules
//!
//! - [`distance`]: Symmetric distance matrix (missing edges cost `+∞`)
//! - [`tour`]: Tour evaluation and the shared [`TourProblem`](tour::TourProblem)
//! - [`ga`]: Genetic algorithm engine
//! - [`aco`]: Ant colony engine
//! - [`history`]: Convergence record
//! - [`error`]: Input and configuration errors
//! - [`random`]: Seedable random source
//!
//! # Example
//!
//! ```
//! use u_tsp::distance::DistanceMatrix;
//! use u_tsp::{run_ant_colony, run_genetic_algorithm};
//! use u_tsp::aco::AcoConfig;
//! use u_tsp::ga::GaConfig;
//!
//! let dm = DistanceMatrix::from_upper_triangle(4, &[1.0, 2.0, 1.0, 1.0, 2.0, 1.0]).unwrap();
//!
//! let ga = run_genetic_algorithm(&dm, 4, &GaConfig::auto_select(4).with_seed(1)).unwrap();
//! let aco = run_ant_colony(&dm, 4, &AcoConfig::default().with_max_iterations(20).with_seed(1)).unwrap();
//! assert_eq!(ga.best_cost(), 4.0);
//! assert_eq!(aco.best_length, 4.0);
//! ```

pub mod aco;
pub mod distance;
pub mod error;
pub mod ga;
pub mod history;
pub mod random;
pub mod tour;

pub use aco::run_ant_colony;
pub use error::{TspError, TspResult};
pub use ga::run_genetic_algorithm;
