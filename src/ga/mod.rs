//! Genetic Algorithm engine.
//!
//! A generational GA over tour permutations. The loop itself is generic
//! over [`GaProblem`]; [`TourProblem`](crate::tour::TourProblem) supplies
//! the TSP encoding.
//!
//! # Core Traits
//!
//! - [`Individual`]: A candidate solution carrying its cost
//! - [`GaProblem`]: Problem definition: initialization, evaluation, operators
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population, tournament, elitism)
//! - [`GaRunner`]: Executes the generational loop
//! - [`GaResult`]: Best tour, its cost, and the convergence history
//!
//! # Submodules
//!
//! - [`operators`]: Cycle crossover and inversion mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Oliver, Smith & Holland (1987), "A Study of Permutation Crossover
//!   Operators on the Traveling Salesman Problem"

mod chromosome;
mod config;
pub mod operators;
mod problem;
mod runner;
mod selection;
mod types;

pub use chromosome::TourChromosome;
pub use config::GaConfig;
pub use runner::{run_genetic_algorithm, GaResult, GaRunner};
pub use selection::tournament;
pub use types::{GaProblem, Individual};
