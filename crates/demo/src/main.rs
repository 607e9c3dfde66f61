// File: crates/demo/src/main.rs
// Summary: Demo builds the sample pie/line/sine paths and dumps their command streams.

use anyhow::Result;
use graph2d_core::{
    build_line_graph, build_pie_graph, build_sine_wave, PathSink, Point, Rect, Series,
};

/// Surface size standing in for the platform's screen query.
const WIDTH: f64 = 1080.0;
const HEIGHT: f64 = 1850.0;

/// Sink that prints each command, one per line.
struct StdoutSink;

impl PathSink for StdoutSink {
    fn move_to(&mut self, p: Point) {
        println!("  move_to ({}, {})", p.x, p.y);
    }
    fn line_to(&mut self, p: Point) {
        println!("  line_to ({}, {})", p.x, p.y);
    }
    fn arc_to(&mut self, bounds: Rect, start_deg: f64, sweep_deg: f64) {
        println!(
            "  arc_to [{} {} {} {}] start {:.2} sweep {:.2}",
            bounds.left, bounds.top, bounds.right, bounds.bottom, start_deg, sweep_deg
        );
    }
    fn close(&mut self) {
        println!("  close");
    }
}

fn main() -> Result<()> {
    let data = Series::from_ints(&[20, 15, 34, 19, 38]);
    let mut sink = StdoutSink;

    // Pie bounds: a square of the full surface width, vertically centered.
    let size = WIDTH / 2.0;
    let space = HEIGHT / 2.0 - size;
    let bounds = Rect::from_ltwh(0.0, space, WIDTH, size * 2.0);

    println!("pie graph over {:?}:", data.values);
    build_pie_graph(&data, bounds)?.replay(&mut sink);

    println!("line graph over {:?}:", data.values);
    build_line_graph(&data, WIDTH, HEIGHT)?.replay(&mut sink);

    println!("sine overlay:");
    let segments = 40;
    build_sine_wave(segments, 10.0, WIDTH / segments as f64, 4.0, 100.0)?.replay(&mut sink);

    Ok(())
}
