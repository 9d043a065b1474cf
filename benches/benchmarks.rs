//! Performance benchmarks for stylesheet generation and gradient sampling.
//!
//! Nothing here is hot in practice (the tool redraws at human speed), but
//! the gradient sampler runs once per glyph per frame, so it should stay
//! cheap.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use role_preview::css::stylesheet;
use role_preview::gradient::Decoration;
use role_preview::role::RoleList;

/// Benchmark stylesheet assembly for a large role list.
fn bench_stylesheet(c: &mut Criterion) {
    let mut list = RoleList::starter();
    for _ in 0..64 {
        list.add();
    }

    c.bench_function("stylesheet_66_roles", |b| {
        b.iter(|| stylesheet(black_box(list.roles())))
    });
}

/// Benchmark gradient sampling across 256 positions.
fn bench_gradient_sample(c: &mut Criterion) {
    let deco = Decoration::new("#4cadd0", "#b2f9ff");

    c.bench_function("gradient_sample_256", |b| {
        b.iter(|| {
            for i in 0..256 {
                black_box(deco.sample(i as f32 / 255.0));
            }
        })
    });
}

/// Benchmark per-glyph span generation for a typical name.
fn bench_styled_spans(c: &mut Criterion) {
    let deco = Decoration::new("#9e6bff", "#9fc1ff");

    c.bench_function("styled_spans_name", |b| {
        b.iter(|| deco.styled_spans(black_box("A fairly long role name")))
    });
}

criterion_group!(
    benches,
    bench_stylesheet,
    bench_gradient_sample,
    bench_styled_spans
);
criterion_main!(benches);
