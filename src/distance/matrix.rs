//! Dense symmetric distance matrix.

use crate::error::{TspError, TspResult};

/// Distance metric for [`DistanceMatrix::from_points`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Metric {
    /// Straight-line distance.
    #[default]
    Euclidean,
    /// Grid distance `|dx| + |dy|`.
    Manhattan,
}

impl Metric {
    fn distance(self, a: (f64, f64), b: (f64, f64)) -> f64 {
        let dx = a.0 - b.0;
        let dy = a.1 - b.1;
        match self {
            Metric::Euclidean => (dx * dx + dy * dy).sqrt(),
            Metric::Manhattan => dx.abs() + dy.abs(),
        }
    }
}

/// A dense n×n symmetric distance matrix stored in row-major order.
///
/// Entries may be missing (`None`). The diagonal is always zero. Writes go
/// through [`set`](Self::set), which updates both directions, so the
/// matrix stays symmetric by construction.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::DistanceMatrix;
///
/// // Flattened upper triangle of a 3-city instance: d01, d02, d12
/// let dm = DistanceMatrix::from_upper_triangle(3, &[5.0, 8.0, 4.0]).unwrap();
/// assert_eq!(dm.get(0, 2), Some(8.0));
/// assert_eq!(dm.get(2, 0), Some(8.0));
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistanceMatrix {
    data: Vec<Option<f64>>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a matrix of the given size with every off-diagonal entry
    /// missing.
    pub fn new(size: usize) -> Self {
        let mut data = vec![None; size * size];
        for i in 0..size {
            data[i * size + i] = Some(0.0);
        }
        Self { data, size }
    }

    /// Creates a distance matrix from an explicit n×n grid.
    ///
    /// Fails if the data length doesn't match `size * size`, if any weight
    /// is negative or NaN, if a diagonal entry is not zero, or if the grid
    /// is not symmetric.
    pub fn from_data(size: usize, data: Vec<f64>) -> TspResult<Self> {
        if data.len() != size * size {
            return Err(TspError::input(format!(
                "expected {} weights for a {size}x{size} matrix, got {}",
                size * size,
                data.len()
            )));
        }
        let mut dm = Self::new(size);
        for i in 0..size {
            let own = data[i * size + i];
            if own != 0.0 {
                return Err(TspError::input(format!(
                    "diagonal weight d({i},{i}) must be 0, got {own}"
                )));
            }
            for j in (i + 1)..size {
                let w = data[i * size + j];
                let back = data[j * size + i];
                if w != back {
                    return Err(TspError::input(format!(
                        "asymmetric weights: d({i},{j}) = {w}, d({j},{i}) = {back}"
                    )));
                }
                dm.set(i, j, w)?;
            }
        }
        Ok(dm)
    }

    /// Creates a distance matrix from the flattened strict upper triangle,
    /// row by row: `d(0,1), d(0,2), ..., d(0,n-1), d(1,2), ...`.
    ///
    /// Exactly `n(n-1)/2` weights are required.
    pub fn from_upper_triangle(size: usize, weights: &[f64]) -> TspResult<Self> {
        let expected = size * size.saturating_sub(1) / 2;
        if weights.len() != expected {
            return Err(TspError::input(format!(
                "expected {expected} upper-triangle weights for {size} cities, got {}",
                weights.len()
            )));
        }
        let mut dm = Self::new(size);
        let mut k = 0;
        for i in 0..size {
            for j in (i + 1)..size {
                dm.set(i, j, weights[k])?;
                k += 1;
            }
        }
        Ok(dm)
    }

    /// Computes pairwise distances between coordinates.
    pub fn from_points(points: &[(f64, f64)], metric: Metric) -> TspResult<Self> {
        let n = points.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                dm.set(i, j, metric.distance(points[i], points[j]))?;
            }
        }
        Ok(dm)
    }

    /// Sets the weight between `a` and `b` in both directions.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn set(&mut self, a: usize, b: usize, weight: f64) -> TspResult<()> {
        if weight.is_nan() || weight < 0.0 {
            return Err(TspError::input(format!(
                "weight d({a},{b}) must be non-negative, got {weight}"
            )));
        }
        if a == b {
            return Ok(());
        }
        self.data[a * self.size + b] = Some(weight);
        self.data[b * self.size + a] = Some(weight);
        Ok(())
    }

    /// Removes the weight between `a` and `b`, making the pair unroutable.
    pub fn clear(&mut self, a: usize, b: usize) {
        if a != b {
            self.data[a * self.size + b] = None;
            self.data[b * self.size + a] = None;
        }
    }

    /// Returns the weight from `from` to `to`, or `None` if missing.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> Option<f64> {
        self.data[from * self.size + to]
    }

    /// Returns the weight from `from` to `to`, or `f64::INFINITY` if missing.
    #[inline]
    pub fn weight(&self, from: usize, to: usize) -> f64 {
        self.get(from, to).unwrap_or(f64::INFINITY)
    }

    /// Number of cities in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if every off-diagonal entry is present.
    pub fn is_complete(&self) -> bool {
        self.data.iter().all(Option::is_some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty_off_diagonal() {
        let dm = DistanceMatrix::new(3);
        assert_eq!(dm.get(1, 1), Some(0.0));
        assert_eq!(dm.get(0, 1), None);
        assert!(dm.weight(0, 1).is_infinite());
        assert!(!dm.is_complete());
    }

    #[test]
    fn test_set_is_symmetric() {
        let mut dm = DistanceMatrix::new(3);
        dm.set(0, 2, 42.0).unwrap();
        assert_eq!(dm.get(0, 2), Some(42.0));
        assert_eq!(dm.get(2, 0), Some(42.0));
    }

    #[test]
    fn test_set_rejects_negative_and_nan() {
        let mut dm = DistanceMatrix::new(2);
        assert!(dm.set(0, 1, -1.0).unwrap_err().is_input());
        assert!(dm.set(0, 1, f64::NAN).is_err());
        assert_eq!(dm.get(0, 1), None);
    }

    #[test]
    fn test_from_data() {
        let dm = DistanceMatrix::from_data(2, vec![0.0, 5.0, 5.0, 0.0]).unwrap();
        assert_eq!(dm.get(0, 1), Some(5.0));
        assert_eq!(dm.get(1, 0), Some(5.0));
        assert!(dm.is_complete());
    }

    #[test]
    fn test_from_data_invalid_size() {
        assert!(DistanceMatrix::from_data(2, vec![0.0, 1.0, 2.0]).is_err());
    }

    #[test]
    fn test_from_data_asymmetric() {
        let err = DistanceMatrix::from_data(2, vec![0.0, 10.0, 15.0, 0.0]).unwrap_err();
        assert!(err.is_input());
    }

    #[test]
    fn test_from_data_nonzero_diagonal() {
        let err = DistanceMatrix::from_data(2, vec![3.0, 1.0, 1.0, 0.0]).unwrap_err();
        assert!(err.is_input());
        assert!(DistanceMatrix::from_data(2, vec![0.0, 1.0, 1.0, -1.0])
            .unwrap_err()
            .is_input());
        assert!(DistanceMatrix::from_data(2, vec![0.0, 1.0, 1.0, f64::NAN])
            .unwrap_err()
            .is_input());
    }

    #[test]
    fn test_from_upper_triangle() {
        let dm = DistanceMatrix::from_upper_triangle(4, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        assert_eq!(dm.get(0, 1), Some(1.0));
        assert_eq!(dm.get(0, 3), Some(3.0));
        assert_eq!(dm.get(1, 2), Some(4.0));
        assert_eq!(dm.get(3, 2), Some(6.0));
    }

    #[test]
    fn test_from_upper_triangle_insufficient() {
        let err = DistanceMatrix::from_upper_triangle(4, &[1.0, 2.0]).unwrap_err();
        assert!(err.is_input());
    }

    #[test]
    fn test_from_points_metrics() {
        let pts = [(0.0, 0.0), (3.0, 4.0)];
        let e = DistanceMatrix::from_points(&pts, Metric::Euclidean).unwrap();
        let m = DistanceMatrix::from_points(&pts, Metric::Manhattan).unwrap();
        assert!((e.weight(0, 1) - 5.0).abs() < 1e-12);
        assert!((m.weight(0, 1) - 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_clear() {
        let mut dm = DistanceMatrix::from_upper_triangle(2, &[3.0]).unwrap();
        dm.clear(1, 0);
        assert_eq!(dm.get(0, 1), None);
        dm.clear(0, 0);
        assert_eq!(dm.get(0, 0), Some(0.0));
    }
}
