//! Banner rendering performance benchmarks.

#![allow(clippy::semicolon_if_nothing_returned)]

use criterion::{Criterion, criterion_group, criterion_main};
use glyph_banner::state::{parse_state, serialize_state};
use glyph_banner::unicode::normalize;
use glyph_banner::{ApplyStylesOn, Direction, EditorState, Options, Palette, Style, render_text};
use std::hint::black_box;

fn palette() -> Palette {
    Palette::new(vec![
        Style::from_strs("🌻", "🌿").unwrap(),
        Style::from_strs("🍓", "🫐").unwrap(),
        Style::from_strs("#", ".").unwrap(),
    ])
    .unwrap()
}

fn normalize_input(c: &mut Criterion) {
    let ascii = "The quick brown fox jumps over the lazy dog 0123456789";
    c.bench_function("normalize_ascii", |b| {
        b.iter(|| normalize(black_box(ascii)))
    });

    let accented = "Ça m'étonnerait qu'un élève naïf préfère l'hôtel à Noël";
    c.bench_function("normalize_accented", |b| {
        b.iter(|| normalize(black_box(accented)))
    });
}

fn render_directions(c: &mut Criterion) {
    let palette = palette();
    let text = "abcdefghijklmnopqrstuvwxyz 0123456789";

    let vertical = Options::default();
    c.bench_function("render_vertical_alphabet", |b| {
        b.iter(|| render_text(black_box(text), &palette, &vertical))
    });

    let horizontal = Options::default().with_direction(Direction::Horizontal);
    c.bench_function("render_horizontal_alphabet", |b| {
        b.iter(|| render_text(black_box(text), &palette, &horizontal))
    });

    let words = horizontal.with_apply_styles_on(ApplyStylesOn::Word);
    c.bench_function("render_horizontal_words", |b| {
        b.iter(|| render_text(black_box(text), &palette, &words))
    });
}

fn render_long_input(c: &mut Criterion) {
    let palette = palette();
    let text = "lorem ipsum dolor sit amet ".repeat(20);
    let options = Options::default().with_direction(Direction::Horizontal);
    c.bench_function("render_horizontal_540_chars", |b| {
        b.iter(|| render_text(black_box(&text), &palette, &options))
    });
}

fn state_roundtrip(c: &mut Criterion) {
    let styles = palette();
    let options = Options::default();
    let state = EditorState {
        input_text: "hello world".to_string(),
        output_text: render_text("hello world", &styles, &options),
        styles,
        options,
    };
    let json = serialize_state(&state).unwrap();

    c.bench_function("state_parse", |b| b.iter(|| parse_state(black_box(&json))));
}

criterion_group!(
    benches,
    normalize_input,
    render_directions,
    render_long_input,
    state_roundtrip
);
criterion_main!(benches);
