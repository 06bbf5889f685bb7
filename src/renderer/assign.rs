//! Style assignment: pairing blocks with palette entries.

use crate::options::{ApplyStylesOn, FillSpaces, Options};
use crate::palette::Palette;
use crate::style::Style;
use crate::text::Block;

/// A block annotated with the style it will be painted with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StyledBlock {
    /// Drawable characters sharing one style.
    Word { characters: Vec<char>, style: Style },
    /// A run of spaces. `None` leaves it blank.
    Spaces { count: usize, style: Option<Style> },
}

impl StyledBlock {
    /// The style of this block, if any.
    #[must_use]
    pub const fn style(&self) -> Option<&Style> {
        match self {
            Self::Word { style, .. } => Some(style),
            Self::Spaces { style, .. } => style.as_ref(),
        }
    }
}

/// Assign palette styles to blocks.
///
/// A single cursor walks the palette across the whole input: it advances
/// once per styled unit (letter or word, plus space runs when spaces are
/// filled) and is never reset at block boundaries.
#[must_use]
pub fn assign(blocks: &[Block], palette: &Palette, options: &Options) -> Vec<StyledBlock> {
    let (styled, _cursor) = blocks.iter().fold(
        (Vec::with_capacity(blocks.len()), 0usize),
        |(mut styled, cursor), block| {
            let cursor = assign_block(block, palette, options, cursor, &mut styled);
            (styled, cursor)
        },
    );
    styled
}

fn assign_block(
    block: &Block,
    palette: &Palette,
    options: &Options,
    mut cursor: usize,
    out: &mut Vec<StyledBlock>,
) -> usize {
    match block {
        Block::Spaces { count } => {
            let style = match options.fill_spaces_with {
                FillSpaces::Background => {
                    let style = palette.cycle(cursor).clone();
                    cursor += 1;
                    Some(style)
                }
                FillSpaces::Nothing => None,
            };
            out.push(StyledBlock::Spaces {
                count: *count,
                style,
            });
        }
        Block::Word { characters } => match options.apply_styles_on {
            ApplyStylesOn::Word => {
                out.push(StyledBlock::Word {
                    characters: characters.clone(),
                    style: palette.cycle(cursor).clone(),
                });
                cursor += 1;
            }
            ApplyStylesOn::Letter => {
                for &ch in characters {
                    out.push(StyledBlock::Word {
                        characters: vec![ch],
                        style: palette.cycle(cursor).clone(),
                    });
                    cursor += 1;
                }
            }
        },
    }
    cursor
}
