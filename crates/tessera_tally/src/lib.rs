//! Tally - Byte counting for Unicode text.
//!
//! Measures a string the ways a byte counter cares about: how many
//! user-perceived characters it holds, how many bytes it takes in UTF-8 and
//! UTF-16, which Unicode range each character falls in, and what its encoded
//! bytes look like as a hex dump.
//!
//! # Modules
//!
//! - **Text**: grapheme segmentation, encoded lengths, character categories
//!   and terminal display width
//! - **Dump**: offset-annotated hex + ASCII rendering of UTF-8 bytes
//! - **Report**: every measurement of a string gathered into one serializable summary
//!
//! # Example
//!
//! ```
//! use tessera_tally::{
//!     character_category, count_graphemes, to_hex_dump, utf16_byte_length, utf8_byte_length,
//!     CharacterCategory,
//! };
//!
//! assert_eq!(count_graphemes("héllo"), 5);
//! assert_eq!(utf8_byte_length("€"), 3);
//! assert_eq!(utf16_byte_length("A"), 2);
//! assert_eq!(character_category("😀"), CharacterCategory::Supplementary);
//! assert!(to_hex_dump("ABC", 256).starts_with("00000000  41 42 43"));
//! ```

pub mod dump;
mod error;
mod options;
pub mod report;
pub mod text;

pub use dump::{hex_dump_bytes, to_hex_dump, to_hex_dump_default, DEFAULT_MAX_BYTES};
pub use error::*;
pub use options::*;
pub use report::{analyze, ByteReport, CharBreakdown};
pub use text::{
    character_category, count_graphemes, utf16_byte_length, utf16_units_byte_length,
    utf8_byte_length, utf8_char_length, CharacterCategory, TextWidth,
};

/// Tally version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
