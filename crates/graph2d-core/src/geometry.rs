// File: crates/graph2d-core/src/geometry.rs
// Summary: Geometry primitives shared by the transform and path layers.

/// 2D point. Value semantics, no identity; every pipeline step returns a
/// fresh sequence rather than mutating in place.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Truncate both coordinates toward zero. This is the crate's single
    /// rounding policy: builders apply it exactly once, at the moment a
    /// command is emitted into a path, never at intermediate stages.
    pub fn trunc(self) -> Self {
        Self { x: self.x.trunc(), y: self.y.trunc() }
    }
}

/// Axis-aligned rectangle; used as the pie chart's bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub const fn from_ltrb(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self { left, top, right, bottom }
    }

    pub fn from_ltwh(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    pub fn center(&self) -> Point {
        Point::new((self.left + self.right) / 2.0, (self.top + self.bottom) / 2.0)
    }

    /// A usable bounding box has finite edges and strictly positive extent
    /// on both axes.
    pub fn is_valid(&self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.right.is_finite()
            && self.bottom.is_finite()
            && self.width() > 0.0
            && self.height() > 0.0
    }
}
