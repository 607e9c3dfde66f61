// File: crates/graph2d-core/src/path.rs
// Summary: Path command model and the PathSink collaborator trait.

use crate::geometry::{Point, Rect};

/// One drawing command. Arc angles are in degrees: a wedge starts at
/// `start_deg` and sweeps `sweep_deg` clockwise over the bounding oval.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCmd {
    MoveTo(Point),
    LineTo(Point),
    ArcTo { bounds: Rect, start_deg: f64, sweep_deg: f64 },
    Close,
}

/// Destination for drawing commands, supplied by the rendering surface.
/// The core never renders; it only feeds one of these.
pub trait PathSink {
    fn move_to(&mut self, p: Point);
    fn line_to(&mut self, p: Point);
    fn arc_to(&mut self, bounds: Rect, start_deg: f64, sweep_deg: f64);
    fn close(&mut self);
}

/// Append-only recording of path commands. Builders write into this; the
/// renderer consumes it once via `replay`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    cmds: Vec<PathCmd>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[PathCmd] {
        &self.cmds
    }

    pub fn len(&self) -> usize {
        self.cmds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    /// Feed the recorded commands, in order, into a renderer-supplied sink.
    pub fn replay<S: PathSink>(&self, sink: &mut S) {
        for cmd in &self.cmds {
            match *cmd {
                PathCmd::MoveTo(p) => sink.move_to(p),
                PathCmd::LineTo(p) => sink.line_to(p),
                PathCmd::ArcTo { bounds, start_deg, sweep_deg } => {
                    sink.arc_to(bounds, start_deg, sweep_deg)
                }
                PathCmd::Close => sink.close(),
            }
        }
    }
}

impl PathSink for Path {
    fn move_to(&mut self, p: Point) {
        self.cmds.push(PathCmd::MoveTo(p));
    }
    fn line_to(&mut self, p: Point) {
        self.cmds.push(PathCmd::LineTo(p));
    }
    fn arc_to(&mut self, bounds: Rect, start_deg: f64, sweep_deg: f64) {
        self.cmds.push(PathCmd::ArcTo { bounds, start_deg, sweep_deg });
    }
    fn close(&mut self) {
        self.cmds.push(PathCmd::Close);
    }
}

/// Connect `points` as an open polyline: MoveTo the first, LineTo the rest.
/// Coordinates are truncated toward zero here, the single rounding step in
/// the whole pipeline.
pub(crate) fn emit_polyline(points: &[Point]) -> Path {
    let mut path = Path::new();
    let mut iter = points.iter();
    if let Some(&first) = iter.next() {
        path.move_to(first.trunc());
        for &p in iter {
            path.line_to(p.trunc());
        }
    }
    path
}
