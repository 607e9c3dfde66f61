// File: crates/graph2d-core/src/line.rs
// Summary: Line-graph and sine-wave polyline builders.

use crate::error::GraphError;
use crate::geometry::Point;
use crate::matrix::Mat3;
use crate::path::{emit_polyline, Path};
use crate::series::Series;
use crate::transform::apply;

/// Map `series` onto a `width_px` x `height_px` surface and connect the
/// points as an open polyline.
///
/// Point i starts at (i, values[i]). The set is shifted so the minimum
/// value sits at y = 0, then scaled so the index range spans the width and
/// the value range spans the height. A series needs at least two points and
/// a non-zero value range to define both scale factors.
pub fn build_line_graph(
    series: &Series,
    width_px: f64,
    height_px: f64,
) -> Result<Path, GraphError> {
    if !width_px.is_finite() || !height_px.is_finite() || width_px <= 0.0 || height_px <= 0.0 {
        return Err(GraphError::InvalidBounds);
    }
    let (min, max) = series.min_max()?;
    if series.len() == 1 {
        return Err(GraphError::SingletonSeries);
    }
    if max == min {
        return Err(GraphError::FlatSeries);
    }

    let x_scale = width_px / (series.len() - 1) as f64;
    let y_scale = height_px / (max - min);

    let points = series.to_points();
    let points = apply(&points, &Mat3::translation(0.0, -min));
    let points = apply(&points, &Mat3::scaling(x_scale, y_scale));
    Ok(emit_polyline(&points))
}

/// Sampled sine curve: points (i, amplitude * sin(i)) for i in 0..=count,
/// scaled by (x_scale, y_scale), shifted by y_offset, connected as a
/// polyline. Pure function of its parameters. `count` is the number of line
/// segments, so zero leaves nothing to connect.
pub fn build_sine_wave(
    count: usize,
    amplitude: f64,
    x_scale: f64,
    y_scale: f64,
    y_offset: f64,
) -> Result<Path, GraphError> {
    if count == 0 {
        return Err(GraphError::SingletonSeries);
    }
    let points: Vec<Point> = (0..=count)
        .map(|i| {
            let t = i as f64;
            Point::new(t, amplitude * t.sin())
        })
        .collect();
    let points = apply(&points, &Mat3::scaling(x_scale, y_scale));
    let points = apply(&points, &Mat3::translation(0.0, y_offset));
    Ok(emit_polyline(&points))
}
