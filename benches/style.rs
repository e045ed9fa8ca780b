//! Microbenchmarks for the style algebra and markup replacement.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use technicolor_config::{Mode, Registry};
use technicolor_core::{format_field, Style};
use technicolor_markup::colorize;

fn bench_compose(c: &mut Criterion) {
    let fg = Style::new([91, 1]);
    let bg = Style::from_code(104);

    c.bench_function("style_compose", |b| {
        b.iter(|| black_box(&fg).compose(black_box(&bg)))
    });
}

fn bench_render(c: &mut Criterion) {
    let style = Style::new([91, 104, 1]);

    c.bench_function("style_render", |b| b.iter(|| black_box(&style).render()));
}

fn bench_apply(c: &mut Criterion) {
    let style = Style::new([91, 1]);

    c.bench_function("style_apply", |b| {
        b.iter(|| black_box(&style).apply(black_box("status: degraded")))
    });
}

fn bench_format_field(c: &mut Criterion) {
    let styled = Style::from_code(91).apply("status").rendered().to_string();

    c.bench_function("format_field_styled", |b| {
        b.iter(|| format_field(black_box(&styled), black_box("20")))
    });
}

fn bench_colorize(c: &mut Criterion) {
    let registry = Registry::with_mode(Mode::Light);
    let line = "state /up/FG.GREEN/ latency /120ms/:>8/FG.YELLOW, BOLD/";

    c.bench_function("colorize_line", |b| {
        b.iter(|| colorize(black_box(line), &registry))
    });
}

fn bench_lookup(c: &mut Criterion) {
    let registry = Registry::with_mode(Mode::Light);

    c.bench_function("registry_lookup", |b| {
        b.iter(|| registry.lookup(black_box("BG.K.dark")))
    });
}

criterion_group!(
    benches,
    bench_compose,
    bench_render,
    bench_apply,
    bench_format_field,
    bench_colorize,
    bench_lookup
);
criterion_main!(benches);
