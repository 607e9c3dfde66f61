use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use graph2d_core::{apply, build_line_graph, Mat3, Point, Series};

fn gen_points(n: usize) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let t = i as f64;
            Point::new(t, (t * 0.01).sin() * 10.0 + t * 0.0001)
        })
        .collect()
}

fn bench_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply");
    let m = Mat3::rotation_deg(37.0);
    for &n in &[10_000usize, 100_000usize] {
        let points = gen_points(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &points, |b, pts| {
            b.iter(|| {
                let _ = black_box(apply(pts.as_slice(), &m));
            });
        });
    }
    group.finish();
}

fn bench_line_graph(c: &mut Criterion) {
    let mut group = c.benchmark_group("line_graph");
    for &n in &[10_000usize, 50_000usize] {
        let series = Series::new((0..n).map(|i| (i as f64 * 0.01).sin() * 10.0).collect());
        group.bench_with_input(BenchmarkId::from_parameter(n), &series, |b, s| {
            b.iter(|| {
                let _ = black_box(build_line_graph(s, 1920.0, 1080.0));
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_apply, bench_line_graph);
criterion_main!(benches);
