// File: crates/graph2d-core/src/error.rs
// Summary: Error kinds for chart construction.

use thiserror::Error;

/// Failures detected before any command is emitted: a build returns either a
/// complete path or one of these, never a partial path. All of them are
/// degenerate-input cases that would otherwise surface as NaN or a division
/// by zero inside the scale math.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    #[error("series is empty")]
    EmptySeries,
    #[error("series has a single element; the x-scale divisor is zero")]
    SingletonSeries,
    #[error("series values are all equal; the y-scale divisor is zero")]
    FlatSeries,
    #[error("pie series sums to zero; the angular split is undefined")]
    ZeroTotal,
    #[error("surface size or bounds must be positive and non-inverted")]
    InvalidBounds,
}
