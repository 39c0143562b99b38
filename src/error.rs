//! Error types for u-tsp.
//!
//! Both variants are raised before any optimization loop starts. A missing
//! edge weight is not an error: the evaluator prices it as `+∞`.

use thiserror::Error;

/// Result type alias for u-tsp operations.
pub type TspResult<T> = Result<T, TspError>;

/// Unified error type for problem construction and solver configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TspError {
    /// Distance data is missing, malformed, or does not cover the
    /// declared city count.
    #[error("input error: {message}")]
    Input {
        /// Description of the offending input.
        message: String,
    },

    /// A solver parameter is degenerate (e.g. more tournament entrants
    /// than individuals).
    #[error("configuration error: {message}")]
    Configuration {
        /// Description of the offending parameter.
        message: String,
    },
}

impl TspError {
    /// Creates a [`TspError::Input`].
    pub fn input(message: impl Into<String>) -> Self {
        Self::Input {
            message: message.into(),
        }
    }

    /// Creates a [`TspError::Configuration`].
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Returns `true` for configuration errors.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }

    /// Returns `true` for input errors.
    pub fn is_input(&self) -> bool {
        matches!(self, Self::Input { .. })
    }
}
