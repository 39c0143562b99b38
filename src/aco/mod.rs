//! Ant Colony Optimization (Ant System).
//!
//! A colony of ants repeatedly builds tours guided by a persistent
//! pheromone field and inverse-distance visibility. After each iteration
//! the field evaporates uniformly and every ant reinforces the edges it
//! used in proportion to the quality of its tour.
//!
//! # Key Types
//!
//! - [`AcoConfig`]: Colony size, exponents, evaporation and deposit
//! - [`AcoRunner`]: Executes the iteration loop
//! - [`PheromoneField`]: Trail intensities owned by the runner
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//!   Colony of Cooperating Agents"
//! - Dorigo & Stützle (2004), *Ant Colony Optimization*

mod ant;
mod config;
mod pheromone;
mod runner;

pub use ant::{construct_tour, sample_index, transition_probabilities, VISIBILITY_EPSILON};
pub use config::AcoConfig;
pub use pheromone::PheromoneField;
pub use runner::{run_ant_colony, update_pheromone, AcoResult, AcoRunner};
