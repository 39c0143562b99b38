//! Ant tour construction and the probabilistic transition rule.

use rand::Rng;

use super::pheromone::PheromoneField;
use crate::distance::DistanceMatrix;
use crate::tour::TourProblem;

/// Added to every distance before inversion so zero-length edges stay
/// finite.
pub const VISIBILITY_EPSILON: f64 = 1e-10;

/// Probability of moving from `current` to each city in `candidates`.
///
/// Scores are `τ(i,j)^alpha · (1 / (d(i,j) + ε))^beta`, normalized to sum
/// to one. A missing distance has zero visibility. When every score is
/// zero (underflow or only unroutable candidates) the result is uniform
/// over `candidates`.
///
/// Scores are divided by the largest one before summing, so large `beta`
/// cannot overflow the total. If some scores are `+∞`, the mass is shared
/// uniformly among exactly those candidates. A `0 · ∞` score (no trail on
/// a zero-length edge) counts as zero.
///
/// # Examples
///
/// ```
/// use u_tsp::aco::{transition_probabilities, PheromoneField};
/// use u_tsp::distance::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_upper_triangle(3, &[1.0, 2.0, 1.0]).unwrap();
/// let field = PheromoneField::new(3, 0.1);
/// let p = transition_probabilities(0, &[1, 2], &field, &dm, 1.0, 1.0);
/// assert!((p[0] - 2.0 / 3.0).abs() < 1e-6);
/// assert!((p.iter().sum::<f64>() - 1.0).abs() < 1e-12);
/// ```
pub fn transition_probabilities(
    current: usize,
    candidates: &[usize],
    pheromone: &PheromoneField,
    distances: &DistanceMatrix,
    alpha: f64,
    beta: f64,
) -> Vec<f64> {
    let mut scores: Vec<f64> = candidates
        .iter()
        .map(|&j| {
            let trail = pheromone.get(current, j).powf(alpha);
            let visibility = (1.0 / (distances.weight(current, j) + VISIBILITY_EPSILON)).powf(beta);
            let score = trail * visibility;
            if score.is_nan() {
                0.0
            } else {
                score
            }
        })
        .collect();

    let max = scores.iter().copied().fold(0.0, f64::max);
    if max == 0.0 {
        let uniform = 1.0 / candidates.len() as f64;
        scores.iter_mut().for_each(|p| *p = uniform);
        return scores;
    }

    if max.is_infinite() {
        let unbounded = scores.iter().filter(|s| s.is_infinite()).count();
        let share = 1.0 / unbounded as f64;
        scores
            .iter_mut()
            .for_each(|p| *p = if p.is_infinite() { share } else { 0.0 });
        return scores;
    }

    scores.iter_mut().for_each(|p| *p /= max);
    let total: f64 = scores.iter().sum();
    scores.iter_mut().for_each(|p| *p /= total);
    scores
}

/// Draws an index with probability `probabilities[i]` by inverting the
/// cumulative distribution against one uniform draw in `[0, 1)`.
///
/// The last index absorbs any floating-point shortfall in the sum.
///
/// # Panics
/// Panics if `probabilities` is empty.
pub fn sample_index<R: Rng + ?Sized>(probabilities: &[f64], rng: &mut R) -> usize {
    assert!(!probabilities.is_empty(), "cannot sample from an empty distribution");
    let threshold: f64 = rng.random_range(0.0..1.0);
    let mut cumulative = 0.0;
    for (i, &p) in probabilities.iter().enumerate() {
        cumulative += p;
        if cumulative > threshold {
            return i;
        }
    }
    probabilities.len() - 1
}

/// One ant builds a complete tour over the problem's cities.
///
/// The ant starts at a uniformly random city and repeatedly samples its
/// next city from the unvisited set with [`transition_probabilities`].
pub fn construct_tour<R: Rng + ?Sized>(
    problem: &TourProblem<'_>,
    pheromone: &PheromoneField,
    alpha: f64,
    beta: f64,
    rng: &mut R,
) -> Vec<usize> {
    let cities = problem.cities();
    if cities.is_empty() {
        return Vec::new();
    }

    let mut current = cities[rng.random_range(0..cities.len())];
    let mut unvisited: Vec<usize> = cities.iter().copied().filter(|&c| c != current).collect();
    let mut tour = Vec::with_capacity(cities.len());
    tour.push(current);

    while !unvisited.is_empty() {
        let probabilities = transition_probabilities(
            current,
            &unvisited,
            pheromone,
            problem.distances(),
            alpha,
            beta,
        );
        let pick = sample_index(&probabilities, rng);
        current = unvisited.remove(pick);
        tour.push(current);
    }

    tour
}
