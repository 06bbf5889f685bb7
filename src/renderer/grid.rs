//! Rectangular blocks of rendered text rows.

use crate::options::Direction;

/// Rows of rendered text with a common width in glyph cells.
///
/// Rows are stored already painted, so a row's byte length depends on the
/// glyphs used; `width` counts cells, not bytes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<String>,
    width: usize,
}

impl Grid {
    /// Create a grid from painted rows of `width` cells each.
    #[must_use]
    pub fn new(rows: Vec<String>, width: usize) -> Self {
        Self { rows, width }
    }

    /// Blank fragment spanning `line_breaks` line breaks.
    ///
    /// It holds `line_breaks + 1` empty rows, so joining it between two other
    /// grids adds `line_breaks + 1` blank lines.
    #[must_use]
    pub fn line_breaks(line_breaks: usize) -> Self {
        Self {
            rows: vec![String::new(); line_breaks + 1],
            width: 0,
        }
    }

    /// `height` rows, each `cell` repeated `width` times.
    #[must_use]
    pub fn filled(cell: &str, width: usize, height: usize) -> Self {
        Self {
            rows: vec![cell.repeat(width); height],
            width,
        }
    }

    /// Borrow the rows.
    #[must_use]
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Width in cells.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Check if the grid has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Concatenate the rows of every grid top to bottom.
    #[must_use]
    pub fn stack(grids: &[Self]) -> Self {
        let rows: Vec<String> = grids
            .iter()
            .flat_map(|grid| grid.rows.iter().cloned())
            .collect();
        let width = grids.iter().map(Self::width).max().unwrap_or(0);
        Self { rows, width }
    }

    /// Concatenate the grids left to right, row by row.
    ///
    /// All grids are expected to share one height.
    #[must_use]
    pub fn beside(grids: &[Self]) -> Self {
        let height = grids.iter().map(Self::height).max().unwrap_or(0);
        debug_assert!(
            grids.iter().all(|grid| grid.height() == height),
            "horizontal layout needs grids of equal height"
        );

        let rows = (0..height)
            .map(|r| {
                let mut row = String::new();
                for grid in grids {
                    if let Some(part) = grid.rows.get(r) {
                        row.push_str(part);
                    }
                }
                row
            })
            .collect();
        let width = grids.iter().map(Self::width).sum();
        Self { rows, width }
    }

    /// Combine grids following a layout direction.
    #[must_use]
    pub fn join(grids: &[Self], direction: Direction) -> Self {
        match direction {
            Direction::Vertical => Self::stack(grids),
            Direction::Horizontal => Self::beside(grids),
        }
    }

    /// Join the rows with `\n`.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.rows.join("\n")
    }
}
