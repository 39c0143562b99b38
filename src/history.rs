//! Best-so-far convergence record.
//!
//! Both solvers append one value per generation/iteration: the global best
//! seen so far, never the local best of that step. The sequence is
//! therefore non-increasing and its length equals the number of executed
//! loop steps. Solvers never read it back; it exists for reporting.

/// Append-only sequence of global-best objective values.
///
/// # Examples
///
/// ```
/// use u_tsp::history::ConvergenceHistory;
///
/// let mut history = ConvergenceHistory::new();
/// history.record(120.0);
/// history.record(95.5);
/// history.record(95.5);
/// assert_eq!(history.len(), 3);
/// assert_eq!(history.last(), Some(95.5));
/// assert!(history.is_non_increasing());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConvergenceHistory {
    values: Vec<f64>,
}

impl ConvergenceHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty history with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
        }
    }

    /// Appends the current global best.
    pub fn record(&mut self, global_best: f64) {
        debug_assert!(
            self.values.last().is_none_or(|&last| global_best <= last),
            "recorded global best must not increase: {global_best} after {:?}",
            self.values.last()
        );
        self.values.push(global_best);
    }

    /// Recorded values in loop order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of recorded steps.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The most recent value (the final global best).
    pub fn last(&self) -> Option<f64> {
        self.values.last().copied()
    }

    /// Returns `true` if every value is `<=` its predecessor.
    pub fn is_non_increasing(&self) -> bool {
        self.values.windows(2).all(|w| w[1] <= w[0])
    }

    /// Consumes the history, returning the raw values.
    pub fn into_vec(self) -> Vec<f64> {
        self.values
    }
}
