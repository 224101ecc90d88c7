//! Benchmarks for the picker pipeline.
//!
//! Run with: `cargo bench`

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use picker_color::{BlendMode, SpaceKind};
use picker_eval::{EvalContext, evaluate, gradient};

fn contexts() -> Vec<(&'static str, EvalContext)> {
    let base = EvalContext {
        eigen: [0.9, 0.3, 0.1],
        ambient: [1.0, 1.0, 1.0],
        variance: 0.5,
        ambient_mix: 0.8,
        ..EvalContext::default()
    };
    vec![
        ("cielchuv", base),
        (
            "hsluv",
            EvalContext {
                space: SpaceKind::Hsluv,
                ..base
            },
        ),
        (
            "oklch",
            EvalContext {
                space: SpaceKind::OkLch,
                ..base
            },
        ),
        (
            "multiply",
            EvalContext {
                blend: BlendMode::Multiply,
                ..base
            },
        ),
    ]
}

/// Benchmark single-point evaluation (the per-pointer-move cost).
fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");

    for (name, ctx) in contexts() {
        group.bench_function(name, |b| {
            b.iter(|| evaluate(black_box(&ctx), black_box(150.0), black_box(120.0)).unwrap())
        });
    }

    group.finish();
}

/// Benchmark full gradient-grid evaluation (the per-config-change cost).
fn bench_gradient(c: &mut Criterion) {
    let mut group = c.benchmark_group("gradient");
    group.sample_size(20);

    for (name, ctx) in contexts() {
        group.bench_function(name, |b| b.iter(|| gradient(black_box(&ctx)).unwrap()));
    }

    group.finish();
}

criterion_group!(benches, bench_evaluate, bench_gradient);
criterion_main!(benches);
