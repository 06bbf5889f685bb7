//! Display width of glyphs, used to size exported images.

use unicode_width::UnicodeWidthStr;

/// Width calculation method for ambiguous-width characters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WidthMethod {
    /// POSIX-like wcwidth: ambiguous width = 1.
    #[default]
    WcWidth,
    /// Unicode East Asian Width: ambiguous width = 2.
    Unicode,
}

/// Get the display width of a string in terminal columns.
#[must_use]
pub fn display_width(s: &str) -> usize {
    display_width_with_method(s, WidthMethod::WcWidth)
}

/// Get the display width of a string using a specific method.
#[must_use]
pub fn display_width_with_method(s: &str, method: WidthMethod) -> usize {
    match method {
        WidthMethod::WcWidth => UnicodeWidthStr::width(s),
        WidthMethod::Unicode => UnicodeWidthStr::width_cjk(s),
    }
}

/// Width of one grapheme as it occupies a layout cell.
///
/// Tabs and other zero-width graphemes still take one column so that a
/// rendered row never collapses.
#[must_use]
pub fn cell_width(grapheme: &str, method: WidthMethod) -> usize {
    display_width_with_method(grapheme, method).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_width() {
        assert_eq!(display_width("hello"), 5);
    }

    #[test]
    fn test_emoji_width() {
        assert_eq!(display_width("🌻"), 2);
        assert_eq!(cell_width("🌻", WidthMethod::WcWidth), 2);
    }

    #[test]
    fn test_width_methods() {
        // Circled digit one is ambiguous width.
        assert_eq!(display_width_with_method("\u{2460}", WidthMethod::WcWidth), 1);
        assert_eq!(display_width_with_method("\u{2460}", WidthMethod::Unicode), 2);
    }

    #[test]
    fn test_cell_width_never_zero() {
        assert_eq!(cell_width("\t", WidthMethod::WcWidth), 1);
        assert_eq!(cell_width("\u{0301}", WidthMethod::WcWidth), 1);
    }
}
