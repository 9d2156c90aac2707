//! Text width calculation with CJK support.

use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

/// Calculate display width of text in terminal columns.
pub struct TextWidth;

impl TextWidth {
    /// Calculate the display width of a string.
    ///
    /// This accounts for:
    /// - East Asian Wide characters (CJK) taking 2 columns
    /// - Control characters taking 0 columns
    /// - Normal ASCII taking 1 column
    #[inline]
    pub fn width(s: &str) -> usize {
        UnicodeWidthStr::width(s)
    }

    /// Calculate the display width of a character.
    #[inline]
    pub fn char_width(c: char) -> usize {
        UnicodeWidthChar::width(c).unwrap_or(0)
    }
}
