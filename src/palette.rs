//! The ordered, never-empty list of styles a banner cycles through.

use crate::error::{Error, Result};
use crate::style::{Glyph, Style, StyleTarget};
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

/// Non-empty ordered list of styles.
///
/// Style assignment indexes the palette modulo its length, so an empty
/// palette cannot be represented.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Style>", into = "Vec<Style>")]
pub struct Palette {
    styles: Vec<Style>,
}

impl Palette {
    /// Create a palette from a list of styles.
    pub fn new(styles: Vec<Style>) -> Result<Self> {
        if styles.is_empty() {
            return Err(Error::EmptyPalette);
        }
        Ok(Self { styles })
    }

    /// Create a palette holding one style.
    #[must_use]
    pub fn single(style: Style) -> Self {
        Self {
            styles: vec![style],
        }
    }

    /// Number of styles. Never zero.
    #[must_use]
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Always false; present for API symmetry with collections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Style for a cursor position, wrapping around the palette.
    #[must_use]
    pub fn cycle(&self, cursor: usize) -> &Style {
        &self.styles[cursor % self.styles.len()]
    }

    /// Style at an exact index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Style> {
        self.styles.get(index)
    }

    /// Iterate over the styles in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Style> {
        self.styles.iter()
    }

    /// Borrow the styles as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Style] {
        &self.styles
    }

    /// Append a style.
    pub fn push(&mut self, style: Style) {
        self.styles.push(style);
    }

    /// Remove and return the style at `index`.
    ///
    /// The last remaining style cannot be removed.
    pub fn remove(&mut self, index: usize) -> Result<Style> {
        self.check_index(index)?;
        if self.styles.len() == 1 {
            return Err(Error::LastStyle);
        }
        Ok(self.styles.remove(index))
    }

    /// Replace one glyph of the style at `index`.
    pub fn change(&mut self, index: usize, target: StyleTarget, glyph: Glyph) -> Result<()> {
        self.check_index(index)?;
        let style = &mut self.styles[index];
        match target {
            StyleTarget::Foreground => style.foreground = glyph,
            StyleTarget::Background => style.background = glyph,
        }
        Ok(())
    }

    /// Exchange foreground and background of the style at `index`.
    pub fn swap(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        let style = &mut self.styles[index];
        std::mem::swap(&mut style.foreground, &mut style.background);
        Ok(())
    }

    /// Move the style at `from` so it ends up at `to`, shifting the others.
    pub fn move_style(&mut self, from: usize, to: usize) -> Result<()> {
        self.check_index(from)?;
        self.check_index(to)?;
        let style = self.styles.remove(from);
        self.styles.insert(to, style);
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.styles.len() {
            return Err(Error::StyleIndex {
                index,
                len: self.styles.len(),
            });
        }
        Ok(())
    }
}

impl TryFrom<Vec<Style>> for Palette {
    type Error = Error;

    fn try_from(styles: Vec<Style>) -> Result<Self> {
        Self::new(styles)
    }
}

impl From<Palette> for Vec<Style> {
    fn from(palette: Palette) -> Self {
        palette.styles
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Style;
    type IntoIter = std::slice::Iter<'a, Style>;

    fn into_iter(self) -> Self::IntoIter {
        self.styles.iter()
    }
}

// ============================================================================
// Random styles
// ============================================================================

/// A named set of emoji a random style can draw from.
#[derive(Clone, Copy, Debug)]
pub struct EmojiCategory {
    pub id: &'static str,
    pub emojis: &'static [&'static str],
}

/// Built-in categories for random styles.
pub const EMOJI_CATEGORIES: &[EmojiCategory] = &[
    EmojiCategory {
        id: "nature",
        emojis: &[
            "🌿", "🌱", "🌲", "🌳", "🌴", "🌵", "🍀", "🍁", "🍂", "🌸", "🌻", "🌼", "🌷", "🌹",
            "🐝", "🐞", "🦋", "🐢", "🐸", "🐳", "🐙", "🦊", "🐼", "🐧",
        ],
    },
    EmojiCategory {
        id: "foods",
        emojis: &[
            "🍇", "🍈", "🍉", "🍊", "🍋", "🍌", "🍍", "🥭", "🍐", "🍑", "🍒", "🍓", "🫐", "🥝",
            "🥥", "🥑", "🥕", "🌽", "🍞", "🧀", "🍕", "🍩", "🍪", "🧁",
        ],
    },
    EmojiCategory {
        id: "people",
        emojis: &[
            "😀", "😃", "😄", "😁", "😆", "😅", "😂", "🙂", "😉", "😊", "😇", "😍", "🤩", "😎",
            "🤓", "🥳", "😺", "👻", "👽", "🤖", "👍", "👏", "🙌", "💪",
        ],
    },
];

/// Pick a random style whose two glyphs come from different categories.
pub fn random_style<R: Rng + ?Sized>(rng: &mut R) -> Style {
    let first_index = rng.random_range(0..EMOJI_CATEGORIES.len());
    let mut second_index = rng.random_range(0..EMOJI_CATEGORIES.len() - 1);
    if second_index >= first_index {
        second_index += 1;
    }

    let foreground = pick(&EMOJI_CATEGORIES[first_index], rng);
    let background = pick(&EMOJI_CATEGORIES[second_index], rng);
    Style::new(foreground, background)
}

fn pick<R: Rng + ?Sized>(category: &EmojiCategory, rng: &mut R) -> Glyph {
    let emoji = category.emojis.choose(rng).copied().unwrap_or("🌿");
    Glyph(emoji.to_string())
}
