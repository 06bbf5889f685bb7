//! Behavioural and property-based tests for the rendering pipeline.

use glyph_banner::renderer::{StyledBlock, assign, render_block};
use glyph_banner::text::{Block, segment};
use glyph_banner::unicode::{grapheme_count, normalize};
use glyph_banner::{
    ApplyStylesOn, Direction, FillSpaces, Options, Palette, Style, render_grid, render_text,
};
use proptest::prelude::*;

fn xo() -> Palette {
    Palette::single(Style::from_strs("X", "O").unwrap())
}

fn two_styles() -> Palette {
    Palette::new(vec![
        Style::from_strs("A", "a").unwrap(),
        Style::from_strs("B", "b").unwrap(),
    ])
    .unwrap()
}

// ============================================================================
// Examples
// ============================================================================

#[test]
fn normalize_example() {
    assert_eq!(
        normalize("Café 123!"),
        vec!['c', 'a', 'f', 'e', ' ', '1', '2', '3']
    );
}

#[test]
fn segment_example() {
    let blocks = segment(&normalize("ab  c"));
    assert_eq!(
        blocks,
        vec![
            Block::Word {
                characters: vec!['a', 'b']
            },
            Block::Spaces { count: 2 },
            Block::Word {
                characters: vec!['c']
            },
        ]
    );
}

#[test]
fn style_rotation_example() {
    let options = Options::default()
        .with_apply_styles_on(ApplyStylesOn::Letter)
        .with_fill_spaces(FillSpaces::Nothing);
    let fg = |text: &str| -> Vec<String> {
        assign(&segment(&normalize(text)), &two_styles(), &options)
            .iter()
            .filter_map(|block| block.style().map(|s| s.foreground.to_string()))
            .collect()
    };
    assert_eq!(fg("ab"), vec!["A", "B"]);
    assert_eq!(fg("abc"), vec!["A", "B", "A"]);
}

#[test]
fn single_character_vertical() {
    let output = render_text("a", &xo(), &Options::compact(Direction::Vertical));
    let rows: Vec<&str> = output.split('\n').collect();
    assert_eq!(rows.len(), 6);
    assert!(rows.iter().all(|row| row.chars().count() == 5));
}

#[test]
fn two_characters_horizontal() {
    let options = Options::compact(Direction::Horizontal);
    let output = render_text("ab", &xo(), &options);
    let a = render_text("a", &xo(), &options);
    let b = render_text("b", &xo(), &options);

    let rows: Vec<&str> = output.split('\n').collect();
    assert_eq!(rows.len(), 6);
    for ((row, a_row), b_row) in rows.iter().zip(a.split('\n')).zip(b.split('\n')) {
        assert_eq!(row.chars().count(), 10);
        assert_eq!(*row, format!("{a_row}{b_row}"));
    }
}

#[test]
fn substitution_example() {
    let output = render_text("i", &xo(), &Options::compact(Direction::Vertical));
    assert_eq!(output.split('\n').next(), Some("OXXXO"));
}

#[test]
fn empty_input_renders_nothing() {
    for direction in [Direction::Vertical, Direction::Horizontal] {
        let options = Options::default().with_direction(direction);
        assert_eq!(render_text("", &xo(), &options), "");
    }
}

#[test]
fn horizontal_blank_spaces_are_tabs() {
    let options = Options::compact(Direction::Horizontal).with_space_size(3);
    let output = render_text("i i", &xo(), &options);
    for row in output.split('\n') {
        assert_eq!(row.matches('\t').count(), 3);
    }
}

#[test]
fn emoji_glyphs_keep_cell_counts() {
    let palette = Palette::single(Style::from_strs("🍋‍🟩", "🌿").unwrap());
    let options = Options::default().with_direction(Direction::Horizontal);
    let grid = render_grid("ok", &palette, &options);
    for row in grid.rows() {
        assert_eq!(grapheme_count(row), grid.width());
    }
}

// ============================================================================
// Strategies
// ============================================================================

fn options_strategy() -> impl Strategy<Value = Options> {
    (
        prop_oneof![Just(Direction::Vertical), Just(Direction::Horizontal)],
        0u32..4,
        0u32..4,
        1u32..4,
        prop_oneof![Just(FillSpaces::Background), Just(FillSpaces::Nothing)],
        prop_oneof![Just(ApplyStylesOn::Letter), Just(ApplyStylesOn::Word)],
    )
        .prop_map(|(direction, hp, vp, space, fill, apply)| Options {
            direction,
            horizontal_padding: hp,
            vertical_padding: vp,
            space_size: space,
            fill_spaces_with: fill,
            apply_styles_on: apply,
        })
}

fn banner_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 éàü!?,.]{0,24}"
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Rendering is a pure function of its inputs.
    #[test]
    fn render_is_idempotent(text in "\\PC{0,40}", options in options_strategy()) {
        let first = render_text(&text, &two_styles(), &options);
        let second = render_text(&text, &two_styles(), &options);
        prop_assert_eq!(first, second);
    }

    /// Normalized output only holds drawable characters and whitespace.
    #[test]
    fn normalize_output_is_supported(text in "\\PC{0,60}") {
        for ch in normalize(&text) {
            prop_assert!(ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch.is_whitespace());
        }
    }

    /// Segmentation alternates block kinds and loses no character.
    #[test]
    fn segment_alternates_and_preserves_length(text in banner_text()) {
        let chars = normalize(&text);
        let blocks = segment(&chars);
        for pair in blocks.windows(2) {
            prop_assert_ne!(pair[0].is_spaces(), pair[1].is_spaces());
        }
        let total: usize = blocks
            .iter()
            .map(|block| match block {
                Block::Word { characters } => characters.len(),
                Block::Spaces { count } => *count,
            })
            .sum();
        prop_assert_eq!(total, chars.len());
    }

    /// Every character grid has `6 + 2q` rows of `5 + 2p` cells.
    #[test]
    fn padding_shapes_every_character(
        ch in "[a-z0-9]",
        p in 0u32..6,
        q in 0u32..6,
        direction in prop_oneof![Just(Direction::Vertical), Just(Direction::Horizontal)],
    ) {
        let options = Options::compact(direction).with_padding(p, q);
        let block = StyledBlock::Word {
            characters: ch.chars().collect(),
            style: Style::from_strs("X", "O").unwrap(),
        };
        let grid = render_block(&block, &options);
        prop_assert_eq!(grid.height(), 6 + 2 * q as usize);
        for row in grid.rows() {
            prop_assert_eq!(row.chars().count(), 5 + 2 * p as usize);
        }
    }

    /// Horizontal banners always have the padded letter height, and each
    /// row holds as many cells as the grid is wide.
    #[test]
    fn horizontal_rows_are_uniform(text in banner_text(), options in options_strategy()) {
        let options = options.with_direction(Direction::Horizontal);
        let grid = render_grid(&text, &xo(), &options);
        if grid.is_empty() {
            prop_assert!(normalize(&text).is_empty());
        } else {
            prop_assert_eq!(grid.height(), options.cell_height());
            for row in grid.rows() {
                prop_assert_eq!(row.chars().count(), grid.width());
            }
        }
    }

    /// With a single style, the number of foreground cells does not depend
    /// on direction.
    #[test]
    fn direction_keeps_foreground_cells(text in "[a-z0-9]{1,8}") {
        let vertical = render_text(&text, &xo(), &Options::compact(Direction::Vertical));
        let horizontal = render_text(&text, &xo(), &Options::compact(Direction::Horizontal));
        prop_assert_eq!(vertical.matches('X').count(), horizontal.matches('X').count());
    }
}
