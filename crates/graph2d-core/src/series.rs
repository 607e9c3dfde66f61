// File: crates/graph2d-core/src/series.rs
// Summary: Raw numeric series and its derived geometry (index points, min/max, sum).

use crate::error::GraphError;
use crate::geometry::Point;

/// Ordered numeric input. The index is the implicit X coordinate for line
/// and wave graphs. Constructed fresh per build call; never mutated.
#[derive(Clone, Debug, Default)]
pub struct Series {
    pub values: Vec<f64>,
}

impl Series {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn from_ints(values: &[i64]) -> Self {
        Self { values: values.iter().map(|&v| v as f64).collect() }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn sum(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Index-based point sequence: point i is (i, values[i]).
    pub fn to_points(&self) -> Vec<Point> {
        self.values
            .iter()
            .enumerate()
            .map(|(i, &v)| Point::new(i as f64, v))
            .collect()
    }

    /// Minimum and maximum value. Errors on an empty series instead of
    /// folding over nothing.
    pub fn min_max(&self) -> Result<(f64, f64), GraphError> {
        let first = *self.values.first().ok_or(GraphError::EmptySeries)?;
        let (min, max) = self
            .values
            .iter()
            .skip(1)
            .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v)));
        Ok((min, max))
    }
}
