//! Fuzz target for the rendering pipeline.
//!
//! Any text, glyph pair, and option combination must render without
//! panicking, and horizontal output must keep a uniform row count.

#![no_main]

use arbitrary::Arbitrary;
use glyph_banner::{
    ApplyStylesOn, Direction, FillSpaces, Options, Palette, Style, render_grid, render_text,
};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    text: &'a str,
    foreground: &'a str,
    background: &'a str,
    horizontal: bool,
    horizontal_padding: u8,
    vertical_padding: u8,
    space_size: u8,
    fill_background: bool,
    per_word: bool,
}

fuzz_target!(|input: Input<'_>| {
    let Ok(style) = Style::from_strs(input.foreground, input.background) else {
        return;
    };
    let palette = Palette::single(style);
    let options = Options {
        direction: if input.horizontal {
            Direction::Horizontal
        } else {
            Direction::Vertical
        },
        horizontal_padding: u32::from(input.horizontal_padding % 16),
        vertical_padding: u32::from(input.vertical_padding % 16),
        space_size: u32::from(input.space_size % 16).max(1),
        fill_spaces_with: if input.fill_background {
            FillSpaces::Background
        } else {
            FillSpaces::Nothing
        },
        apply_styles_on: if input.per_word {
            ApplyStylesOn::Word
        } else {
            ApplyStylesOn::Letter
        },
    };

    let text = render_text(input.text, &palette, &options);
    let grid = render_grid(input.text, &palette, &options);
    assert_eq!(text, grid.to_text());
    if input.horizontal && !grid.is_empty() {
        assert_eq!(grid.height(), options.cell_height());
    }
});
