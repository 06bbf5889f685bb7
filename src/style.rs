//! Glyph pairs used to paint block letters.
//!
//! - [`Glyph`]: one non-empty displayable unit, usually an emoji
//! - [`Style`]: a foreground/background glyph pair
//! - [`StyleTarget`]: selects one side of a pair when editing
//!
//! # Examples
//!
//! ```
//! use glyph_banner::{Glyph, Style};
//!
//! let style = Style::new(Glyph::new("🌻")?, Glyph::new("🌿")?);
//! assert_eq!(style.foreground.as_str(), "🌻");
//!
//! let swapped = style.swapped();
//! assert_eq!(swapped.foreground.as_str(), "🌿");
//! # Ok::<(), glyph_banner::Error>(())
//! ```

use crate::error::{Error, Result};
use crate::unicode::grapheme_count;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single displayable fill unit.
///
/// Glyphs are opaque to the renderer: any non-empty string is accepted,
/// including multi-codepoint emoji sequences.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Glyph(pub(crate) String);

impl Glyph {
    /// Create a glyph, rejecting the empty string.
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(Error::EmptyGlyph);
        }
        Ok(Self(value))
    }

    /// Borrow the glyph text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of grapheme clusters in the glyph.
    ///
    /// Usually 1. Glyph pickers may hand over longer strings.
    #[must_use]
    pub fn graphemes(&self) -> usize {
        grapheme_count(&self.0)
    }
}

impl TryFrom<String> for Glyph {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Glyph> for String {
    fn from(glyph: Glyph) -> Self {
        glyph.0
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which glyph of a [`Style`] to address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleTarget {
    Foreground,
    Background,
}

/// A foreground/background glyph pair.
///
/// Foreground glyphs draw the set pixels of a letter, background glyphs
/// draw everything else (unset pixels, padding, filled spaces).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Style {
    /// Glyph for lit pixels. Older saved state calls this `letter`.
    #[serde(alias = "letter")]
    pub foreground: Glyph,
    /// Glyph for unlit pixels and padding.
    pub background: Glyph,
}

impl Style {
    /// Create a style from two glyphs.
    #[must_use]
    pub const fn new(foreground: Glyph, background: Glyph) -> Self {
        Self {
            foreground,
            background,
        }
    }

    /// Create a style from two strings, rejecting empty ones.
    pub fn from_strs(foreground: &str, background: &str) -> Result<Self> {
        Ok(Self::new(Glyph::new(foreground)?, Glyph::new(background)?))
    }

    /// Return the style with foreground and background exchanged.
    #[must_use]
    pub fn swapped(&self) -> Self {
        Self {
            foreground: self.background.clone(),
            background: self.foreground.clone(),
        }
    }

    /// Borrow one side of the pair.
    #[must_use]
    pub const fn get(&self, target: StyleTarget) -> &Glyph {
        match target {
            StyleTarget::Foreground => &self.foreground,
            StyleTarget::Background => &self.background,
        }
    }

    /// Return the style with one side replaced.
    #[must_use]
    pub fn with(mut self, target: StyleTarget, glyph: Glyph) -> Self {
        match target {
            StyleTarget::Foreground => self.foreground = glyph,
            StyleTarget::Background => self.background = glyph,
        }
        self
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.foreground, self.background)
    }
}
