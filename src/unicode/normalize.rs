//! Input normalization: case folding, accent stripping, filtering.

use crate::font::is_supported;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Normalize raw input into the characters the banner font can draw.
///
/// Lowercases, strips accents, then keeps only `a`–`z`, `0`–`9` and
/// whitespace. Everything else is dropped silently.
///
/// ```
/// use glyph_banner::unicode::normalize;
///
/// let chars: String = normalize("Café 123!").into_iter().collect();
/// assert_eq!(chars, "cafe 123");
/// ```
#[must_use]
pub fn normalize(text: &str) -> Vec<char> {
    let mut out = Vec::with_capacity(text.len());
    for ch in text.chars() {
        for lower in ch.to_lowercase() {
            strip_accents_into(lower, &mut out);
        }
    }
    out.retain(|&ch| is_supported(ch) || ch.is_whitespace());
    out
}

fn strip_accents_into(ch: char, out: &mut Vec<char>) {
    if ch.is_ascii() {
        out.push(ch);
        return;
    }
    if let Some(folded) = fold_latin(ch) {
        out.extend(folded.chars());
        return;
    }
    out.extend(
        std::iter::once(ch)
            .nfd()
            .filter(|&c| !is_combining_mark(c)),
    );
}

/// Latin letters without a canonical decomposition to an ASCII base.
const fn fold_latin(ch: char) -> Option<&'static str> {
    Some(match ch {
        'ß' => "ss",
        'ẞ' => "SS",
        'æ' => "ae",
        'Æ' => "AE",
        'œ' => "oe",
        'Œ' => "OE",
        'ø' => "o",
        'Ø' => "O",
        'ł' => "l",
        'Ł' => "L",
        'đ' | 'ð' => "d",
        'Đ' | 'Ð' => "D",
        'þ' => "th",
        'Þ' => "TH",
        'ı' => "i",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalized(text: &str) -> String {
        normalize(text).into_iter().collect()
    }

    #[test]
    fn normalize_lowercases_and_strips() {
        assert_eq!(
            normalize("Café 123!"),
            vec!['c', 'a', 'f', 'e', ' ', '1', '2', '3']
        );
    }

    #[test]
    fn normalize_decomposed_input() {
        assert_eq!(normalized("cafe\u{0301}"), "cafe");
    }

    #[test]
    fn normalize_uppercase_accents() {
        assert_eq!(normalized("ÉLÈVE À ÇA"), "eleve a ca");
    }

    #[test]
    fn normalize_drops_punctuation_and_other_scripts() {
        assert_eq!(normalized("a-b_c.d,e!?"), "abcde");
        assert_eq!(normalized("漢字 ok 😀"), " ok ");
    }

    #[test]
    fn normalize_keeps_all_whitespace() {
        assert_eq!(normalized("a\tb\nc"), "a\tb\nc");
    }

    #[test]
    fn normalize_folds_special_latin_letters() {
        assert_eq!(normalized("Straße"), "strasse");
        assert_eq!(normalized("Æsir Øre Łódź"), "aesir ore lodz");
    }

    #[test]
    fn normalize_empty() {
        assert!(normalize("").is_empty());
    }

    #[test]
    fn strip_accents_into_keeps_case() {
        let mut out = Vec::new();
        for ch in "Ñú!".chars() {
            strip_accents_into(ch, &mut out);
        }
        assert_eq!(out, vec!['N', 'u', '!']);
    }
}
