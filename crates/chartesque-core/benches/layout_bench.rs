// File: crates/chartesque-core/benches/layout_bench.rs
// Summary: Criterion benchmarks for layout and recorded rendering at different dataset sizes.

use chartesque_core::{Chart, HeuristicTextMeasurer, RecordingRenderer};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn build_chart(n: usize) -> Chart {
    let mut ch = Chart::new();
    let xs: Vec<f64> = (0..n).map(|i| i as f64).collect();
    let ys: Vec<f64> = (0..n).map(|i| (i as f64 * 0.01).sin() * 10.0).collect();
    ch.set_data(&xs, &ys).expect("equal lengths");
    ch.x_axis_mut().set_limit(0.0, (n - 1) as f64).expect("x limits");
    ch.y_axis_mut().set_limit(-12.0, 12.0).expect("y limits");
    ch
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    for &n in &[1_000usize, 50_000usize] {
        group.bench_function(format!("layout_{n}"), |b| {
            let mut ch = build_chart(n);
            b.iter(|| black_box(ch.layout(&HeuristicTextMeasurer).expect("layout")));
        });
        group.bench_function(format!("render_recorded_{n}"), |b| {
            let mut ch = build_chart(n);
            b.iter(|| {
                let mut r = RecordingRenderer::new();
                ch.render(&mut r).expect("render");
                black_box(r.ops().len())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_layout);
criterion_main!(benches);
