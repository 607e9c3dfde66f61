// File: crates/graph2d-core/src/lib.rs
// Summary: Core library entry point; exports the affine pipeline and path builders.

pub mod error;
pub mod geometry;
pub mod line;
pub mod matrix;
pub mod path;
pub mod pie;
pub mod series;
pub mod transform;

pub use error::GraphError;
pub use geometry::{Point, Rect};
pub use line::{build_line_graph, build_sine_wave};
pub use matrix::Mat3;
pub use path::{Path, PathCmd, PathSink};
pub use pie::build_pie_graph;
pub use series::Series;
pub use transform::{apply, centroid, rotate_about_centroid};
