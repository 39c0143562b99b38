//! Persistent pheromone field.

/// Dense n×n trail intensities, symmetric by construction.
///
/// Created once per run and mutated in place between iterations: the
/// runner owns it and lends `&` to ants during construction and `&mut` to
/// the update step.
///
/// # Examples
///
/// ```
/// use u_tsp::aco::PheromoneField;
///
/// let mut field = PheromoneField::new(3, 0.1);
/// field.evaporate(0.5);
/// field.deposit(&[(0, 1), (1, 2), (2, 0)], 2.0);
/// assert!((field.get(1, 0) - 2.05).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PheromoneField {
    data: Vec<f64>,
    size: usize,
}

impl PheromoneField {
    /// Creates a field where every entry holds `initial`.
    pub fn new(size: usize, initial: f64) -> Self {
        Self {
            data: vec![initial; size * size],
            size,
        }
    }

    /// Trail intensity between `a` and `b`.
    #[inline]
    pub fn get(&self, a: usize, b: usize) -> f64 {
        self.data[a * self.size + b]
    }

    /// Number of cities covered.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Multiplies every entry by `1 - rate`.
    pub fn evaporate(&mut self, rate: f64) {
        let keep = 1.0 - rate;
        for tau in &mut self.data {
            *tau *= keep;
        }
    }

    /// Adds `amount` to each edge in both directions.
    pub fn deposit(&mut self, edges: &[(usize, usize)], amount: f64) {
        for &(a, b) in edges {
            self.data[a * self.size + b] += amount;
            self.data[b * self.size + a] += amount;
        }
    }

    /// Returns `true` if `τ(a,b) == τ(b,a)` for every pair.
    pub fn is_symmetric(&self) -> bool {
        (0..self.size).all(|i| ((i + 1)..self.size).all(|j| self.get(i, j) == self.get(j, i)))
    }
}
