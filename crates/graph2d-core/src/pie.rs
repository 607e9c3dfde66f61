// File: crates/graph2d-core/src/pie.rs
// Summary: Pie-graph wedge path builder (cumulative angular partition).

use crate::error::GraphError;
use crate::geometry::Rect;
use crate::path::{Path, PathSink};
use crate::series::Series;

const FULL_SWEEP_DEG: f64 = 360.0;

/// Partition a full circle into wedges proportional to `series`. Each slice
/// re-centers with its own MoveTo before arcing, so the path is a fan of
/// wedges rather than one continuous outline; a single Close follows the
/// last slice.
///
/// Precondition: values are non-negative. Negative inputs leave the angular
/// partition undefined.
pub fn build_pie_graph(series: &Series, bounds: Rect) -> Result<Path, GraphError> {
    if !bounds.is_valid() {
        return Err(GraphError::InvalidBounds);
    }
    let sum = series.sum();
    if sum == 0.0 {
        return Err(GraphError::ZeroTotal);
    }
    debug_assert!(series.values.iter().all(|&v| v >= 0.0));

    let split = FULL_SWEEP_DEG / sum;
    let center = bounds.center().trunc();

    // Running accumulator over the immutable input: the slice for value v
    // starts at cum * split and sweeps v * split degrees.
    let mut path = Path::new();
    let mut cum = 0.0;
    for &v in &series.values {
        let start_deg = cum * split;
        let sweep_deg = v * split;
        cum += v;
        path.move_to(center);
        path.arc_to(bounds, start_deg, sweep_deg);
    }
    path.close();
    Ok(path)
}
