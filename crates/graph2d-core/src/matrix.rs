// File: crates/graph2d-core/src/matrix.rs
// Summary: 3x3 homogeneous matrices for 2D affine transforms.

/// Row-major 3x3 matrix over f64. Every constructor here produces an affine
/// map: the bottom row is always [0, 0, 1], never projective. Matrices are
/// built once and never mutated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mat3(pub [[f64; 3]; 3]);

impl Mat3 {
    pub const fn identity() -> Self {
        Self([
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
        ])
    }

    /// Identity with the translation column set to (dx, dy).
    pub const fn translation(dx: f64, dy: f64) -> Self {
        Self([
            [1.0, 0.0, dx],
            [0.0, 1.0, dy],
            [0.0, 0.0, 1.0],
        ])
    }

    /// Diagonal (sx, sy, 1).
    pub const fn scaling(sx: f64, sy: f64) -> Self {
        Self([
            [sx, 0.0, 0.0],
            [0.0, sy, 0.0],
            [0.0, 0.0, 1.0],
        ])
    }

    /// Counter-clockwise rotation about the origin. To rotate a point set
    /// about its centroid, see `transform::rotate_about_centroid`.
    pub fn rotation_deg(angle_deg: f64) -> Self {
        let (s, c) = angle_deg.to_radians().sin_cos();
        Self([
            [c, -s, 0.0],
            [s, c, 0.0],
            [0.0, 0.0, 1.0],
        ])
    }

    /// Shear by `shx` along X and `shy` along Y: x' = x + shx*y,
    /// y' = shy*x + y. Identity shear is (0, 0); both factors must be passed
    /// explicitly. The view this crate replaces defaulted both factors to 1,
    /// which is a 45-degree shear, not a no-op.
    pub const fn shear(shx: f64, shy: f64) -> Self {
        Self([
            [1.0, shx, 0.0],
            [shy, 1.0, 0.0],
            [0.0, 0.0, 1.0],
        ])
    }
}
