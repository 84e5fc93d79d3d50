// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for the memeforge-render crate.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use image::{Rgb, RgbImage};
use rand::SeedableRng;
use rand::rngs::StdRng;

use memeforge_render::layout;
use memeforge_render::{MemeEngine, RenderFont, SequentialNamer};

const QUOTE: &str = "Every dog must have his day, and every day must have its walk";

/// Wrapping and fixed-cell measurement only.
fn bench_layout(c: &mut Criterion) {
    let font = RenderFont::builtin();
    c.bench_function("wrap + measure", |b| {
        b.iter(|| {
            let wrapped = layout::wrap(black_box(QUOTE), black_box("Jonathan Swift"), 40);
            black_box(layout::measure(&wrapped, &font));
        });
    });
}

/// Full composite of a 1200x800 source down to the default width.
fn bench_compose(c: &mut Criterion) {
    let dir = tempfile::tempdir().expect("tempdir");
    let source = dir.path().join("dog.png");
    RgbImage::from_fn(1200, 800, |x, y| Rgb([(x % 256) as u8, (y % 256) as u8, 128]))
        .save(&source)
        .expect("write source image");

    let mut engine = MemeEngine::with_rng(dir.path().join("out"), StdRng::seed_from_u64(0))
        .expect("engine")
        .with_font(dir.path().join("missing.ttf"), 20.0)
        .with_namer(SequentialNamer::default());

    c.bench_function("compose 1200x800 -> 500", |b| {
        b.iter(|| {
            let output = engine
                .compose(black_box(&source), QUOTE, "Jonathan Swift", 500)
                .expect("compose");
            black_box(output);
        });
    });
}

criterion_group!(benches, bench_layout, bench_compose);
criterion_main!(benches);
