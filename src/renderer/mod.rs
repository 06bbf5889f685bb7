//! Banner rendering pipeline.
//!
//! Text flows through five pure stages:
//!
//! 1. [`normalize`](crate::unicode::normalize): lowercase, strip accents,
//!    drop unsupported characters
//! 2. [`segment`](crate::text::segment): group into word and space blocks
//! 3. [`assign`]: pair blocks with palette styles
//! 4. [`render_block`]: paint each block into a [`Grid`]
//! 5. [`compose`]: lay the grids out vertically or horizontally
//!
//! Every call recomputes everything from its inputs; nothing is cached.
//!
//! # Examples
//!
//! ```
//! use glyph_banner::{Direction, Options, Palette, Style, render_text};
//!
//! let palette = Palette::single(Style::from_strs("#", ".")?);
//! let options = Options::compact(Direction::Horizontal);
//!
//! let banner = render_text("hi", &palette, &options);
//! assert_eq!(banner.lines().next(), Some("#...#.###."));
//! # Ok::<(), glyph_banner::Error>(())
//! ```

mod assign;
mod block;
mod compose;
mod grid;

pub use assign::{StyledBlock, assign};
pub use block::{Pixel, Stencil, render_block};
pub use compose::{compose, compose_grid};
pub use grid::Grid;

use crate::options::Options;
use crate::palette::Palette;
use crate::text::segment;
use crate::unicode::normalize;
use std::time::{Duration, Instant};

/// Render `text` as a banner painted with `palette`.
#[must_use]
pub fn render_text(text: &str, palette: &Palette, options: &Options) -> String {
    render_grid(text, palette, options).to_text()
}

/// Render `text` and return the composed grid instead of joined text.
#[must_use]
pub fn render_grid(text: &str, palette: &Palette, options: &Options) -> Grid {
    run(text, palette, options).0
}

fn run(text: &str, palette: &Palette, options: &Options) -> (Grid, usize, usize) {
    let chars = normalize(text);
    let blocks = segment(&chars);
    let styled = assign(&blocks, palette, options);
    let grids: Vec<Grid> = styled
        .iter()
        .map(|block| render_block(block, options))
        .collect();
    (compose_grid(&grids, options), chars.len(), styled.len())
}

/// Figures about one render, for diagnostics.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Characters kept after normalization.
    pub characters: usize,
    /// Styled blocks produced by assignment.
    pub blocks: usize,
    /// Rows in the output.
    pub rows: usize,
    /// Width of the widest row, in cells.
    pub width: usize,
    /// Wall-clock time spent rendering.
    pub elapsed: Duration,
}

/// Render `text` and report what the pipeline did.
#[must_use]
pub fn render_with_stats(
    text: &str,
    palette: &Palette,
    options: &Options,
) -> (String, RenderStats) {
    let start = Instant::now();
    let (grid, characters, blocks) = run(text, palette, options);
    let output = grid.to_text();

    let stats = RenderStats {
        characters,
        blocks,
        rows: grid.height(),
        width: grid.width(),
        elapsed: start.elapsed(),
    };
    (output, stats)
}
