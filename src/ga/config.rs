//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the generational loop.

use crate::error::{TspError, TspResult};

/// Configuration for the Genetic Algorithm.
///
/// # Defaults
///
/// ```
/// use u_tsp::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.max_generations, 500);
/// assert_eq!(config.tournament_size, 3);
/// assert!(config.elitism);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_tsp::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(50)
///     .with_max_generations(200)
///     .with_mutation_rate(0.1)
///     .with_tournament_size(3)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of tours in every generation.
    pub population_size: usize,

    /// Number of generations to run. There is no early stop.
    pub max_generations: usize,

    /// Probability that an offspring receives an inversion mutation
    /// (0.0–1.0).
    pub mutation_rate: f64,

    /// Number of distinct entrants per tournament.
    ///
    /// Must not exceed `population_size`.
    pub tournament_size: usize,

    /// Copy each generation's best tour unchanged into the next.
    pub elitism: bool,

    /// Whether to evaluate tours in parallel using rayon.
    ///
    /// Ignored unless the `parallel` feature is enabled.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            max_generations: 500,
            mutation_rate: 0.02,
            tournament_size: 3,
            elitism: true,
            parallel: true,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Enables or disables elitism.
    pub fn with_elitism(mut self, elitism: bool) -> Self {
        self.elitism = elitism;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Preset sized to the instance.
    ///
    /// - `num_cities <= 5` → population 50, 100 generations
    /// - otherwise → population 100, 500 generations
    ///
    /// Other parameters keep their defaults.
    pub fn auto_select(num_cities: usize) -> Self {
        if num_cities <= 5 {
            Self {
                population_size: 50,
                max_generations: 100,
                ..Self::default()
            }
        } else {
            Self::default()
        }
    }

    /// Validates the configuration.
    ///
    /// Returns [`TspError::Configuration`] describing the first invalid
    /// parameter.
    pub fn validate(&self) -> TspResult<()> {
        if self.population_size == 0 {
            return Err(TspError::configuration("population_size must be at least 1"));
        }
        if self.max_generations == 0 {
            return Err(TspError::configuration("max_generations must be at least 1"));
        }
        if self.tournament_size == 0 {
            return Err(TspError::configuration("tournament_size must be at least 1"));
        }
        if self.tournament_size > self.population_size {
            return Err(TspError::configuration(format!(
                "tournament_size ({}) exceeds population_size ({})",
                self.tournament_size, self.population_size
            )));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(TspError::configuration(format!(
                "mutation_rate must be in [0, 1], got {}",
                self.mutation_rate
            )));
        }
        Ok(())
    }
}
