//! 5×6 bitmap font for `a`–`z` and `0`–`9`.
//!
//! Each row is stored in the low five bits of a byte, leftmost column in
//! bit 4. A set bit is a foreground pixel.

/// Columns per character.
pub const LETTER_WIDTH: usize = 5;
/// Rows per character.
pub const LETTER_HEIGHT: usize = 6;

/// Immutable 5×6 bitmap of one character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Bitmap {
    rows: [u8; LETTER_HEIGHT],
}

impl Bitmap {
    const fn new(rows: [u8; LETTER_HEIGHT]) -> Self {
        Self { rows }
    }

    /// Whether the pixel at (`row`, `col`) is foreground.
    ///
    /// Out-of-range coordinates read as background.
    #[must_use]
    pub const fn is_set(&self, row: usize, col: usize) -> bool {
        if row >= LETTER_HEIGHT || col >= LETTER_WIDTH {
            return false;
        }
        self.rows[row] & (1 << (LETTER_WIDTH - 1 - col)) != 0
    }

    /// Iterate over rows, each as five booleans from left to right.
    pub fn rows(&self) -> impl Iterator<Item = [bool; LETTER_WIDTH]> + '_ {
        (0..LETTER_HEIGHT).map(move |row| {
            let mut cells = [false; LETTER_WIDTH];
            for (col, cell) in cells.iter_mut().enumerate() {
                *cell = self.is_set(row, col);
            }
            cells
        })
    }
}

/// Whether `ch` has a bitmap.
#[must_use]
pub const fn is_supported(ch: char) -> bool {
    ch.is_ascii_lowercase() || ch.is_ascii_digit()
}

/// Look up the bitmap for `ch`.
///
/// Only lowercase ASCII letters and digits are in the font; case folding is
/// the normalizer's job.
#[must_use]
pub fn bitmap(ch: char) -> Option<&'static Bitmap> {
    let index = match ch {
        'a'..='z' => ch as usize - 'a' as usize,
        '0'..='9' => 26 + (ch as usize - '0' as usize),
        _ => return None,
    };
    Some(&FONT[index])
}

static FONT: [Bitmap; 36] = [
    // a
    Bitmap::new([0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001]),
    // b
    Bitmap::new([0b11110, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110]),
    // c
    Bitmap::new([0b01110, 0b10001, 0b10000, 0b10000, 0b10001, 0b01110]),
    // d
    Bitmap::new([0b11100, 0b10010, 0b10001, 0b10001, 0b10010, 0b11100]),
    // e
    Bitmap::new([0b11110, 0b10000, 0b11100, 0b10000, 0b10000, 0b11110]),
    // f
    Bitmap::new([0b11110, 0b10000, 0b11100, 0b10000, 0b10000, 0b10000]),
    // g
    Bitmap::new([0b01110, 0b10000, 0b10000, 0b10011, 0b10001, 0b01110]),
    // h
    Bitmap::new([0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001]),
    // i
    Bitmap::new([0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110]),
    // j
    Bitmap::new([0b00111, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100]),
    // k
    Bitmap::new([0b10010, 0b10100, 0b11000, 0b11000, 0b10100, 0b10010]),
    // l
    Bitmap::new([0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11110]),
    // m
    Bitmap::new([0b10001, 0b11011, 0b10101, 0b10001, 0b10001, 0b10001]),
    // n
    Bitmap::new([0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001]),
    // o
    Bitmap::new([0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110]),
    // p
    Bitmap::new([0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000]),
    // q
    Bitmap::new([0b01110, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101]),
    // r
    Bitmap::new([0b11110, 0b10001, 0b10001, 0b11110, 0b10010, 0b10001]),
    // s
    Bitmap::new([0b00111, 0b01000, 0b00110, 0b00001, 0b00001, 0b01110]),
    // t
    Bitmap::new([0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100]),
    // u
    Bitmap::new([0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110]),
    // v
    Bitmap::new([0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100]),
    // w
    Bitmap::new([0b10001, 0b10001, 0b10001, 0b10101, 0b11011, 0b10001]),
    // x
    Bitmap::new([0b10001, 0b01010, 0b00100, 0b00100, 0b01010, 0b10001]),
    // y
    Bitmap::new([0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100]),
    // z
    Bitmap::new([0b11111, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111]),
    // 0
    Bitmap::new([0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110]),
    // 1
    Bitmap::new([0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b01110]),
    // 2
    Bitmap::new([0b01110, 0b10001, 0b00010, 0b00100, 0b01000, 0b11111]),
    // 3
    Bitmap::new([0b01110, 0b10001, 0b00001, 0b00010, 0b10001, 0b01110]),
    // 4
    Bitmap::new([0b00010, 0b00110, 0b01010, 0b11111, 0b00010, 0b00010]),
    // 5
    Bitmap::new([0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b11110]),
    // 6
    Bitmap::new([0b01110, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110]),
    // 7
    Bitmap::new([0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000]),
    // 8
    Bitmap::new([0b01110, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110]),
    // 9
    Bitmap::new([0b00110, 0b01001, 0b00111, 0b00001, 0b01001, 0b00110]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_supported_char_has_bitmap() {
        for ch in ('a'..='z').chain('0'..='9') {
            assert!(is_supported(ch));
            assert!(bitmap(ch).is_some(), "missing bitmap for {ch}");
        }
    }

    #[test]
    fn test_unsupported_chars() {
        for ch in ['A', ' ', '!', 'é', '\t'] {
            assert!(!is_supported(ch));
            assert!(bitmap(ch).is_none());
        }
    }

    #[test]
    fn test_rows_fit_in_five_bits() {
        for bitmap in &FONT {
            for row in bitmap.rows {
                assert!(row < 1 << LETTER_WIDTH);
            }
        }
    }

    #[test]
    fn test_rows_of_i() {
        let rows: Vec<_> = bitmap('i').unwrap().rows().collect();
        assert_eq!(rows.len(), LETTER_HEIGHT);
        assert_eq!(rows[0], [false, true, true, true, false]);
        assert_eq!(rows[1], [false, false, true, false, false]);
        assert_eq!(rows[5], rows[0]);
    }

    #[test]
    fn test_is_set_reads_columns_left_to_right() {
        let one = bitmap('1').unwrap();
        assert!(!one.is_set(0, 0));
        assert!(one.is_set(0, 2));
        assert!(one.is_set(1, 1));
        assert!(!one.is_set(6, 0));
        assert!(!one.is_set(0, 5));
    }

    #[test]
    fn test_letter_o_and_digit_zero_share_shape() {
        assert_eq!(bitmap('o'), bitmap('0'));
    }
}
