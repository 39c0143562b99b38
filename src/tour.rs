//! Tour evaluation and the shared TSP problem model.
//!
//! A tour is a permutation of the problem's cities, read cyclically. When
//! the problem has a fixed origin (depot) the origin is not part of the
//! permutation; the route leaves it for the first city and returns to it
//! from the last.

use rand::Rng;

use crate::distance::DistanceMatrix;
use crate::error::{TspError, TspResult};
use crate::random::shuffle;

/// Cyclic cost of `tour`: every consecutive edge plus last→first.
///
/// A missing weight contributes `+∞`; the sum is still computed so the
/// tour simply loses every comparison.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::tour::tour_cost;
///
/// let dm = DistanceMatrix::from_upper_triangle(3, &[1.0, 2.0, 3.0]).unwrap();
/// assert_eq!(tour_cost(&[0, 1, 2], &dm), 6.0);
/// ```
pub fn tour_cost(tour: &[usize], distances: &DistanceMatrix) -> f64 {
    let (Some(&first), Some(&last)) = (tour.first(), tour.last()) else {
        return 0.0;
    };
    let inner: f64 = tour
        .windows(2)
        .map(|w| distances.weight(w[0], w[1]))
        .sum();
    inner + distances.weight(last, first)
}

/// Cost of a route that starts and ends at `origin`: origin→first,
/// consecutive edges, last→origin.
pub fn tour_cost_from(tour: &[usize], distances: &DistanceMatrix, origin: usize) -> f64 {
    let (Some(&first), Some(&last)) = (tour.first(), tour.last()) else {
        return 0.0;
    };
    let inner: f64 = tour
        .windows(2)
        .map(|w| distances.weight(w[0], w[1]))
        .sum();
    distances.weight(origin, first) + inner + distances.weight(last, origin)
}

/// Returns `true` if `tour` contains every element of `cities` exactly once
/// and nothing else.
pub fn is_permutation_of(tour: &[usize], cities: &[usize]) -> bool {
    if tour.len() != cities.len() {
        return false;
    }
    let mut a = tour.to_vec();
    let mut b = cities.to_vec();
    a.sort_unstable();
    b.sort_unstable();
    a == b && a.windows(2).all(|w| w[0] != w[1])
}

/// The TSP instance both solvers optimize over.
///
/// Borrows the distance matrix; the solvers only ever read it, so a single
/// matrix can back any number of concurrent evaluations.
#[derive(Debug, Clone)]
pub struct TourProblem<'a> {
    distances: &'a DistanceMatrix,
    cities: Vec<usize>,
    origin: Option<usize>,
}

impl<'a> TourProblem<'a> {
    /// Creates a cyclic tour problem over cities `0..num_cities`.
    ///
    /// Fails if `num_cities` is zero or exceeds the matrix size.
    pub fn new(distances: &'a DistanceMatrix, num_cities: usize) -> TspResult<Self> {
        if num_cities == 0 {
            return Err(TspError::input("num_cities must be at least 1"));
        }
        if num_cities > distances.size() {
            return Err(TspError::input(format!(
                "distance matrix covers {} cities, but {num_cities} were declared",
                distances.size()
            )));
        }
        Ok(Self {
            distances,
            cities: (0..num_cities).collect(),
            origin: None,
        })
    }

    /// Creates a depot-anchored problem: every city except `origin` is
    /// permuted and the route starts and ends at `origin`.
    pub fn with_origin(distances: &'a DistanceMatrix, origin: usize) -> TspResult<Self> {
        if origin >= distances.size() {
            return Err(TspError::input(format!(
                "origin {origin} outside distance matrix of size {}",
                distances.size()
            )));
        }
        let cities: Vec<usize> = (0..distances.size()).filter(|&c| c != origin).collect();
        if cities.is_empty() {
            return Err(TspError::input("no cities to visit besides the origin"));
        }
        Ok(Self {
            distances,
            cities,
            origin: Some(origin),
        })
    }

    /// The distance matrix.
    pub fn distances(&self) -> &'a DistanceMatrix {
        self.distances
    }

    /// The cities a tour must permute.
    pub fn cities(&self) -> &[usize] {
        &self.cities
    }

    /// The fixed origin, if any.
    pub fn origin(&self) -> Option<usize> {
        self.origin
    }

    /// Number of cities in a tour.
    pub fn num_cities(&self) -> usize {
        self.cities.len()
    }

    /// Cost of `tour` under this problem's closing rule.
    pub fn cost(&self, tour: &[usize]) -> f64 {
        match self.origin {
            Some(origin) => tour_cost_from(tour, self.distances, origin),
            None => tour_cost(tour, self.distances),
        }
    }

    /// A uniformly random tour.
    pub fn random_tour<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<usize> {
        let mut tour = self.cities.clone();
        shuffle(&mut tour, rng);
        tour
    }

    /// Every edge traversed by `tour`, in order, including the closing
    /// edge(s).
    pub fn edges(&self, tour: &[usize]) -> Vec<(usize, usize)> {
        let n = tour.len();
        if n == 0 {
            return Vec::new();
        }
        match self.origin {
            Some(origin) => {
                let mut edges = Vec::with_capacity(n + 1);
                edges.push((origin, tour[0]));
                edges.extend(tour.windows(2).map(|w| (w[0], w[1])));
                edges.push((tour[n - 1], origin));
                edges
            }
            None => (0..n).map(|i| (tour[i], tour[(i + 1) % n])).collect(),
        }
    }

    /// Returns `true` if `tour` is a valid permutation of this problem's
    /// cities.
    pub fn is_valid_tour(&self, tour: &[usize]) -> bool {
        is_permutation_of(tour, &self.cities)
    }
}
