//! ACO configuration.

use crate::error::{TspError, TspResult};

/// Configuration for the Ant Colony Optimizer.
///
/// # Transition Rule
///
/// From city `i`, an ant scores each unvisited `j` as
/// `τ(i,j)^alpha · (1 / (d(i,j) + ε))^beta` and samples the next city
/// proportionally to the scores.
///
/// # Pheromone Update
///
/// After all ants of an iteration finish, every trail is multiplied by
/// `1 - evaporation_rate`, then each ant deposits `deposit / length` on
/// every edge of its tour.
///
/// # References
///
/// Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a Colony
/// of Cooperating Agents"
///
/// # Examples
///
/// ```
/// use u_tsp::aco::AcoConfig;
///
/// let config = AcoConfig::default()
///     .with_ant_count(10)
///     .with_max_iterations(100)
///     .with_alpha(1.0)
///     .with_beta(5.0)
///     .with_evaporation_rate(0.1)
///     .with_deposit(100.0)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoConfig {
    /// Number of ants constructing a tour each iteration.
    pub ant_count: usize,

    /// Number of iterations to run. There is no early stop.
    pub max_iterations: usize,

    /// Pheromone exponent.
    pub alpha: f64,

    /// Visibility (inverse distance) exponent.
    pub beta: f64,

    /// Fraction of every trail lost per iteration, in [0, 1].
    pub evaporation_rate: f64,

    /// Deposit constant `Q`: an ant with tour length `L` lays `Q / L` on
    /// each edge it used.
    pub deposit: f64,

    /// Uniform trail intensity at the start of a run.
    pub initial_pheromone: f64,

    /// Whether to construct ant tours in parallel using rayon.
    ///
    /// Ignored unless the `parallel` feature is enabled. Results do not
    /// depend on this flag.
    pub parallel: bool,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            ant_count: 20,
            max_iterations: 500,
            alpha: 1.0,
            beta: 5.0,
            evaporation_rate: 0.1,
            deposit: 100.0,
            initial_pheromone: 0.1,
            parallel: true,
            seed: None,
        }
    }
}

impl AcoConfig {
    pub fn with_ant_count(mut self, n: usize) -> Self {
        self.ant_count = n;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    pub fn with_evaporation_rate(mut self, rate: f64) -> Self {
        self.evaporation_rate = rate;
        self
    }

    pub fn with_deposit(mut self, q: f64) -> Self {
        self.deposit = q;
        self
    }

    pub fn with_initial_pheromone(mut self, tau0: f64) -> Self {
        self.initial_pheromone = tau0;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> TspResult<()> {
        if self.ant_count == 0 {
            return Err(TspError::configuration("ant_count must be at least 1"));
        }
        if self.max_iterations == 0 {
            return Err(TspError::configuration("max_iterations must be at least 1"));
        }
        if !self.alpha.is_finite() || self.alpha < 0.0 {
            return Err(TspError::configuration(format!(
                "alpha must be finite and non-negative, got {}",
                self.alpha
            )));
        }
        if !self.beta.is_finite() || self.beta < 0.0 {
            return Err(TspError::configuration(format!(
                "beta must be finite and non-negative, got {}",
                self.beta
            )));
        }
        if !(0.0..=1.0).contains(&self.evaporation_rate) {
            return Err(TspError::configuration(format!(
                "evaporation_rate must be in [0, 1], got {}",
                self.evaporation_rate
            )));
        }
        if !self.deposit.is_finite() || self.deposit <= 0.0 {
            return Err(TspError::configuration(format!(
                "deposit must be positive, got {}",
                self.deposit
            )));
        }
        if !self.initial_pheromone.is_finite() || self.initial_pheromone <= 0.0 {
            return Err(TspError::configuration(format!(
                "initial_pheromone must be positive, got {}",
                self.initial_pheromone
            )));
        }
        Ok(())
    }
}
