//! Image export of rendered banners as SVG.
//!
//! The canvas is sized from the banner itself: every distinct grapheme is
//! measured, the widest one fixes the cell width, and the canvas spans the
//! widest row times the number of rows. Any input is accepted, including
//! the empty string.

use crate::error::Result;
use crate::unicode::{WidthMethod, cell_width, grapheme_count, unique_graphemes};
use std::fmt::Write as _;
use std::io::Write;
use std::ops::RangeInclusive;

/// Font size used when none is given.
pub const DEFAULT_FONT_PX: u32 = 100;

/// Font sizes the CLI accepts. The exporter itself takes any `u32`.
pub const FONT_PX_RANGE: RangeInclusive<u32> = 1..=4096;

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const TEXT_ATTRS: &str =
    r#"font-family="Arial, sans-serif" dominant-baseline="middle" xml:space="preserve""#;

/// Measured canvas geometry for one banner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageLayout {
    /// Width of one grapheme cell in pixels.
    pub cell_width: u32,
    /// Height of one row in pixels.
    pub cell_height: u32,
    /// Rows in the banner.
    pub rows: u32,
    /// Cells in the widest row.
    pub columns: u32,
}

impl ImageLayout {
    /// Measure `text` rendered at `font_px` pixels.
    ///
    /// A cell is half the font size wide per display column of the widest
    /// grapheme, and one font size tall.
    #[must_use]
    pub fn measure(text: &str, font_px: u32) -> Self {
        Self::measure_with(text, font_px, WidthMethod::WcWidth)
    }

    /// Measure with an explicit width method for ambiguous-width glyphs.
    #[must_use]
    pub fn measure_with(text: &str, font_px: u32, method: WidthMethod) -> Self {
        if text.is_empty() {
            return Self {
                cell_width: 0,
                cell_height: 0,
                rows: 0,
                columns: 0,
            };
        }

        let widest = unique_graphemes(text)
            .into_iter()
            .filter(|g| *g != "\n")
            .map(|g| cell_width(g, method))
            .max()
            .unwrap_or(1);
        let half = font_px.div_ceil(2);
        let rows = text.split('\n').collect::<Vec<_>>();
        let columns = rows.iter().map(|row| grapheme_count(row)).max().unwrap_or(0);

        Self {
            cell_width: half.saturating_mul(to_u32(widest)),
            cell_height: font_px,
            rows: to_u32(rows.len()),
            columns: to_u32(columns),
        }
    }

    /// Canvas width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.cell_width.saturating_mul(self.columns)
    }

    /// Canvas height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.cell_height.saturating_mul(self.rows)
    }
}

fn to_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

/// Render `text` as an SVG document.
///
/// Each row becomes one `<text>` element, vertically centred in its cell.
#[must_use]
pub fn to_svg(text: &str, font_px: u32) -> String {
    let layout = ImageLayout::measure(text, font_px);
    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="{SVG_NS}" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = layout.width(),
        h = layout.height(),
    );
    if layout.rows > 0 {
        for (index, row) in text.split('\n').enumerate() {
            let y = layout
                .cell_height
                .saturating_mul(to_u32(index))
                .saturating_add(layout.cell_height / 2);
            let _ = writeln!(
                svg,
                r#"  <text x="0" y="{y}" font-size="{font_px}" {TEXT_ATTRS}>{}</text>"#,
                escape_xml(row),
            );
        }
    }
    svg.push_str("</svg>\n");
    svg
}

/// Write the SVG for `text` to `out`.
pub fn write_svg<W: Write>(out: &mut W, text: &str, font_px: u32) -> Result<()> {
    out.write_all(to_svg(text, font_px).as_bytes())?;
    out.flush()?;
    Ok(())
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            '\t' => out.push_str("&#9;"),
            _ => out.push(ch),
        }
    }
    out
}
