//! Text measurement module.
//!
//! Provides Unicode-aware measurements of a string:
//! - Grapheme cluster counting
//! - UTF-8 and UTF-16 encoded lengths
//! - Character categorization by code point range
//! - Display width in terminal columns

mod category;
mod encoding;
mod segment;
mod width;

pub use category::{character_category, CharacterCategory};
pub use encoding::{
    utf16_byte_length, utf16_units_byte_length, utf8_byte_length, utf8_char_length,
};
pub use segment::{count_graphemes, graphemes};
pub use width::TextWidth;
