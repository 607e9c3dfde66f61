// File: crates/graph2d-core/tests/pie.rs
// Purpose: Validate the pie graph's angular partition and wedge emission.

use graph2d_core::{build_pie_graph, GraphError, PathCmd, Point, Rect, Series};

const EPS: f64 = 1e-9;

fn bounds() -> Rect {
    Rect::from_ltwh(0.0, 40.0, 200.0, 200.0)
}

/// Collect (start, sweep) per slice, asserting the wedge structure:
/// MoveTo(center) then ArcTo per slice, one Close at the end.
fn slices(series: &Series) -> Vec<(f64, f64)> {
    let path = build_pie_graph(series, bounds()).unwrap();
    let cmds = path.commands();
    let n = series.len();
    assert_eq!(cmds.len(), 2 * n + 1);
    assert_eq!(cmds[cmds.len() - 1], PathCmd::Close);

    let center = Point::new(100.0, 140.0);
    let mut out = Vec::with_capacity(n);
    for pair in cmds[..cmds.len() - 1].chunks(2) {
        assert_eq!(pair[0], PathCmd::MoveTo(center));
        let PathCmd::ArcTo { bounds: b, start_deg, sweep_deg } = pair[1] else {
            panic!("expected ArcTo, got {:?}", pair[1]);
        };
        assert_eq!(b, bounds());
        out.push((start_deg, sweep_deg));
    }
    out
}

#[test]
fn sample_series_partitions_the_circle() {
    // sum = 126, split = 360/126
    let s = slices(&Series::from_ints(&[20, 15, 34, 19, 38]));
    let split = 360.0 / 126.0;

    assert!((s[0].0 - 0.0).abs() < EPS);
    assert!((s[0].1 - 20.0 * split).abs() < EPS);
    assert!((s[1].0 - 20.0 * split).abs() < EPS);
    assert!((s[1].1 - 15.0 * split).abs() < EPS);

    // each slice starts where the previous one ended
    for w in s.windows(2) {
        assert!((w[0].0 + w[0].1 - w[1].0).abs() < EPS);
    }

    let total: f64 = s.iter().map(|&(_, sweep)| sweep).sum();
    assert!((total - 360.0).abs() < EPS, "sweeps sum to {}", total);
}

#[test]
fn single_element_series_is_one_full_wedge() {
    let s = slices(&Series::from_ints(&[7]));
    assert_eq!(s.len(), 1);
    assert!((s[0].0 - 0.0).abs() < EPS);
    assert!((s[0].1 - 360.0).abs() < EPS);
}

#[test]
fn zero_valued_slice_has_zero_sweep() {
    let s = slices(&Series::from_ints(&[1, 0, 1]));
    assert!((s[1].1 - 0.0).abs() < EPS);
    // the zero slice still starts at the running angle
    assert!((s[1].0 - 180.0).abs() < EPS);
    assert!((s[2].0 - 180.0).abs() < EPS);
}

#[test]
fn empty_series_is_rejected_as_zero_total() {
    let err = build_pie_graph(&Series::default(), bounds()).unwrap_err();
    assert_eq!(err, GraphError::ZeroTotal);
}

#[test]
fn all_zero_series_is_rejected() {
    let err = build_pie_graph(&Series::from_ints(&[0, 0, 0]), bounds()).unwrap_err();
    assert_eq!(err, GraphError::ZeroTotal);
}

#[test]
fn inverted_bounds_are_rejected() {
    let err = build_pie_graph(
        &Series::from_ints(&[1, 2]),
        Rect::from_ltrb(200.0, 40.0, 0.0, 240.0),
    )
    .unwrap_err();
    assert_eq!(err, GraphError::InvalidBounds);
}

#[test]
fn empty_bounds_are_rejected() {
    let err = build_pie_graph(
        &Series::from_ints(&[1, 2]),
        Rect::from_ltwh(0.0, 0.0, 0.0, 100.0),
    )
    .unwrap_err();
    assert_eq!(err, GraphError::InvalidBounds);
}
