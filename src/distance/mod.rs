//! Pairwise edge weights between cities.

mod matrix;

pub use matrix::{DistanceMatrix, Metric};
