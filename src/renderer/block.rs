//! Per-block rendering: bitmaps to padded stencils to painted grids.

use super::assign::StyledBlock;
use super::grid::Grid;
use crate::font::{Bitmap, LETTER_WIDTH, bitmap};
use crate::options::{Direction, Options};
use crate::style::Style;

/// Stand-in for an unfilled horizontal space cell.
const BLANK_CELL: &str = "\t";

/// One pixel of a stencil.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pixel {
    Background,
    Foreground,
}

/// A padded character shape before glyph substitution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stencil {
    rows: Vec<Vec<Pixel>>,
    width: usize,
}

impl Stencil {
    /// Build the stencil of one bitmap with the padding from `options`.
    #[must_use]
    pub fn letter(bitmap: &Bitmap, options: &Options) -> Self {
        let pad_x = options.horizontal_padding as usize;
        let pad_y = options.vertical_padding as usize;
        let width = options.cell_width();

        let mut rows = Vec::with_capacity(options.cell_height());
        rows.extend((0..pad_y).map(|_| vec![Pixel::Background; width]));
        for cells in bitmap.rows() {
            let mut row = Vec::with_capacity(width);
            row.extend(std::iter::repeat_n(Pixel::Background, pad_x));
            row.extend(cells.iter().map(|&set| {
                if set {
                    Pixel::Foreground
                } else {
                    Pixel::Background
                }
            }));
            row.extend(std::iter::repeat_n(Pixel::Background, pad_x));
            rows.push(row);
        }
        rows.extend((0..pad_y).map(|_| vec![Pixel::Background; width]));

        debug_assert_eq!(width, LETTER_WIDTH + 2 * pad_x);
        Self { rows, width }
    }

    /// Borrow the pixel rows.
    #[must_use]
    pub fn rows(&self) -> &[Vec<Pixel>] {
        &self.rows
    }

    /// Substitute glyphs for pixels.
    ///
    /// Substitution is per pixel, so glyph text is never re-examined.
    #[must_use]
    pub fn paint(&self, style: &Style) -> Grid {
        let fg = style.foreground.as_str();
        let bg = style.background.as_str();
        let rows = self
            .rows
            .iter()
            .map(|row| {
                let mut text = String::with_capacity(row.len() * fg.len().max(bg.len()));
                for pixel in row {
                    text.push_str(match pixel {
                        Pixel::Foreground => fg,
                        Pixel::Background => bg,
                    });
                }
                text
            })
            .collect();
        Grid::new(rows, self.width)
    }
}

/// Render one styled block into its grid.
#[must_use]
pub fn render_block(block: &StyledBlock, options: &Options) -> Grid {
    match block {
        StyledBlock::Word { characters, style } => {
            let letters: Vec<Grid> = characters
                .iter()
                .filter_map(|&ch| bitmap(ch))
                .map(|bitmap| Stencil::letter(bitmap, options).paint(style))
                .collect();
            Grid::join(&letters, options.direction)
        }
        StyledBlock::Spaces { count, style } => render_spaces(*count, style.as_ref(), options),
    }
}

fn render_spaces(count: usize, style: Option<&Style>, options: &Options) -> Grid {
    let extent = options.space_size as usize * count;
    match (options.direction, style) {
        (Direction::Vertical, Some(style)) => {
            Grid::filled(style.background.as_str(), options.cell_width(), extent)
        }
        (Direction::Vertical, None) => Grid::line_breaks(extent.saturating_sub(1)),
        (Direction::Horizontal, Some(style)) => {
            Grid::filled(style.background.as_str(), extent, options.cell_height())
        }
        (Direction::Horizontal, None) => Grid::filled(BLANK_CELL, extent, options.cell_height()),
    }
}
