// File: crates/graph2d-core/src/transform.rs
// Summary: Applies homogeneous matrices to point sequences; centroid rotation helper.

use crate::geometry::Point;
use crate::matrix::Mat3;

/// Apply `m` to every point, treating each as (x, y, 1). Order- and
/// length-preserving, pure. The bottom row is never used to renormalize:
/// w stays 1 for the affine maps this crate builds. Results stay f64;
/// truncation happens only when a builder emits path commands.
pub fn apply(points: &[Point], m: &Mat3) -> Vec<Point> {
    let r = &m.0;
    points
        .iter()
        .map(|p| {
            Point::new(
                r[0][0] * p.x + r[0][1] * p.y + r[0][2],
                r[1][0] * p.x + r[1][1] * p.y + r[1][2],
            )
        })
        .collect()
}

/// Arithmetic mean position of the set; `None` when empty.
pub fn centroid(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }
    let n = points.len() as f64;
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Some(Point::new(sx / n, sy / n))
}

/// Rotate the set about its own centroid: translate the centroid to the
/// origin, apply the pure rotation, translate back. Empty input yields an
/// empty output.
pub fn rotate_about_centroid(points: &[Point], angle_deg: f64) -> Vec<Point> {
    let Some(c) = centroid(points) else {
        return Vec::new();
    };
    let centered = apply(points, &Mat3::translation(-c.x, -c.y));
    let rotated = apply(&centered, &Mat3::rotation_deg(angle_deg));
    apply(&rotated, &Mat3::translation(c.x, c.y))
}
