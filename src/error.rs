//! Error types for glyph_banner.
//!
//! The rendering engine itself never fails. Errors come from the
//! collaborators around it: building glyphs and palettes, editing the style
//! list, and reading or writing persisted state.

use std::fmt;
use std::io;

/// Result type alias for glyph_banner operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for glyph_banner operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error from a state store or an export target.
    Io(io::Error),
    /// JSON encoding or decoding failure.
    Json(serde_json::Error),
    /// A glyph was built from an empty string.
    EmptyGlyph,
    /// A palette was built without any style.
    EmptyPalette,
    /// Style index outside the palette.
    StyleIndex { index: usize, len: usize },
    /// Attempt to remove the only remaining style.
    LastStyle,
    /// An option value is outside its accepted range.
    InvalidOption { field: &'static str, value: u32 },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Json(e) => write!(f, "JSON error: {e}"),
            Self::EmptyGlyph => write!(f, "glyph must not be empty"),
            Self::EmptyPalette => write!(f, "palette needs at least one style"),
            Self::StyleIndex { index, len } => {
                write!(f, "style index {index} out of bounds for palette of {len}")
            }
            Self::LastStyle => write!(f, "cannot remove the last style"),
            Self::InvalidOption { field, value } => {
                write!(f, "invalid value {value} for option `{field}`")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}
