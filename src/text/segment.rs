//! Segmentation of normalized input into word and space blocks.

/// A maximal run of same-kind normalized input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Block {
    /// Contiguous drawable characters.
    Word { characters: Vec<char> },
    /// Contiguous whitespace; `count` is at least 1.
    Spaces { count: usize },
}

impl Block {
    /// Create a word block from a string (test and builder helper).
    #[must_use]
    pub fn word(text: &str) -> Self {
        Self::Word {
            characters: text.chars().collect(),
        }
    }

    /// Create a space block.
    #[must_use]
    pub const fn spaces(count: usize) -> Self {
        Self::Spaces { count }
    }

    /// Check if this is a space block.
    #[must_use]
    pub const fn is_spaces(&self) -> bool {
        matches!(self, Self::Spaces { .. })
    }
}

/// Group normalized characters into alternating word and space blocks.
///
/// Any whitespace character counts as a space. Adjacent blocks always
/// differ in kind, and empty input yields no blocks.
#[must_use]
pub fn segment(chars: &[char]) -> Vec<Block> {
    let mut blocks: Vec<Block> = Vec::new();

    for &ch in chars {
        match (ch.is_whitespace(), blocks.last_mut()) {
            (true, Some(Block::Spaces { count })) => *count += 1,
            (true, _) => blocks.push(Block::Spaces { count: 1 }),
            (false, Some(Block::Word { characters })) => characters.push(ch),
            (false, _) => blocks.push(Block::Word {
                characters: vec![ch],
            }),
        }
    }

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_word_spaces_word() {
        assert_eq!(
            segment(&chars("ab  c")),
            vec![Block::word("ab"), Block::spaces(2), Block::word("c")]
        );
    }

    #[test]
    fn test_leading_and_trailing_spaces() {
        assert_eq!(
            segment(&chars(" a ")),
            vec![Block::spaces(1), Block::word("a"), Block::spaces(1)]
        );
    }

    #[test]
    fn test_mixed_whitespace_is_one_run() {
        assert_eq!(
            segment(&chars("a \t\nb")),
            vec![Block::word("a"), Block::spaces(3), Block::word("b")]
        );
    }

    #[test]
    fn test_empty() {
        assert!(segment(&[]).is_empty());
    }

    #[test]
    fn test_blocks_alternate() {
        let blocks = segment(&chars("  hello   world 42  "));
        for pair in blocks.windows(2) {
            assert_ne!(pair[0].is_spaces(), pair[1].is_spaces());
        }
    }
}
