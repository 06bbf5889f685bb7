//! Final layout of rendered blocks.

use super::grid::Grid;
use crate::options::Options;

/// Merge rendered blocks into one grid following `options.direction`.
#[must_use]
pub fn compose_grid(grids: &[Grid], options: &Options) -> Grid {
    Grid::join(grids, options.direction)
}

/// Merge rendered blocks into the final `\n`-separated text.
///
/// No blocks means no rows: the result is the empty string in both
/// directions.
#[must_use]
pub fn compose(grids: &[Grid], options: &Options) -> String {
    compose_grid(grids, options).to_text()
}
