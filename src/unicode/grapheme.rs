//! Grapheme cluster iteration.

use unicode_segmentation::UnicodeSegmentation;

/// Iterator over grapheme clusters in a string.
pub struct GraphemeIterator<'a> {
    inner: unicode_segmentation::Graphemes<'a>,
}

impl<'a> Iterator for GraphemeIterator<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

/// Iterate over grapheme clusters in a string.
#[must_use]
pub fn graphemes(s: &str) -> GraphemeIterator<'_> {
    GraphemeIterator {
        inner: s.graphemes(true),
    }
}

/// Number of grapheme clusters in a string.
///
/// Rendered banner rows are measured in graphemes: one glyph per cell.
#[must_use]
pub fn grapheme_count(s: &str) -> usize {
    if s.is_ascii() {
        return s.len();
    }
    s.graphemes(true).count()
}

/// Distinct grapheme clusters of `s`, in order of first appearance.
#[must_use]
pub fn unique_graphemes(s: &str) -> Vec<&str> {
    let mut seen = Vec::new();
    for g in graphemes(s) {
        if !seen.contains(&g) {
            seen.push(g);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graphemes_ascii() {
        let g: Vec<_> = graphemes("hello").collect();
        assert_eq!(g, vec!["h", "e", "l", "l", "o"]);
    }

    #[test]
    fn test_graphemes_emoji() {
        assert_eq!(graphemes("👨‍👩‍👧").count(), 1);
        assert_eq!(grapheme_count("🍋‍🟩🍋‍🟩"), 2);
    }

    #[test]
    fn test_grapheme_count_combining() {
        assert_eq!(grapheme_count("e\u{0301}"), 1);
        assert_eq!(grapheme_count("abc"), 3);
    }

    #[test]
    fn test_unique_graphemes_keeps_first_order() {
        assert_eq!(unique_graphemes("🌿🌻🌿\n🌻"), vec!["🌿", "🌻", "\n"]);
    }
}
