use criterion::{Criterion, black_box, criterion_group, criterion_main};
use lcd_mandelbrot::{
    Complex, CoordStrategy, EscapeAlgorithm, GridSize, IterationThreshold, MandelbrotEvaluator,
    ViewTransform, compute_frame,
};

fn bench_escape_loop(c: &mut Criterion) {
    let evaluator = MandelbrotEvaluator::new(50).unwrap();

    c.bench_function("escape_count interior point", |b| {
        let point = Complex {
            real: 0.0,
            imag: 0.0,
        };
        b.iter(|| evaluator.escape_count(black_box(point)))
    });

    c.bench_function("escape_count boundary point", |b| {
        let point = Complex {
            real: -0.75,
            imag: 0.1,
        };
        b.iter(|| evaluator.escape_count(black_box(point)))
    });
}

fn bench_full_frame(c: &mut Criterion) {
    let grid = GridSize::new(84, 48).unwrap();
    let transform = ViewTransform::new(0.1, 42.0, 24.0).unwrap();
    let evaluator = MandelbrotEvaluator::new(50).unwrap();
    let threshold = IterationThreshold::new(50).unwrap();

    let mut group = c.benchmark_group("compute_frame 84x48");

    group.bench_function("inline coords", |b| {
        b.iter(|| {
            compute_frame(
                black_box(grid),
                black_box(transform),
                &evaluator,
                &threshold,
                CoordStrategy::Inline,
            )
        })
    });

    group.bench_function("precomputed coords", |b| {
        b.iter(|| {
            compute_frame(
                black_box(grid),
                black_box(transform),
                &evaluator,
                &threshold,
                CoordStrategy::Precomputed,
            )
        })
    });

    group.finish();
}

criterion_group!(benches, bench_escape_loop, bench_full_frame);
criterion_main!(benches);
