//! Byte reports: every measurement of a string in one place.

use compact_str::{format_compact, CompactString};
use serde::{Deserialize, Serialize};

use crate::dump::to_hex_dump;
use crate::error::TallyError;
use crate::options::TallyOptions;
use crate::text::{
    count_graphemes, utf16_byte_length, utf16_units_byte_length, utf8_byte_length,
    utf8_char_length, CharacterCategory, TextWidth,
};

/// Summary of a string's sizes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ByteReport {
    /// Number of Unicode scalar values
    pub characters: usize,
    /// Number of extended grapheme clusters
    pub graphemes: usize,
    /// UTF-8 encoded length
    pub utf8_bytes: usize,
    /// UTF-16 length, 4 bytes per surrogate unit
    pub utf16_bytes: usize,
    /// Display width in terminal columns
    pub display_width: usize,
    /// Hex dump of the leading bytes, bounded by `maxBytes`
    pub hex_dump: String,
    /// Per-character details, empty unless requested
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub breakdown: Vec<CharBreakdown>,
}

/// Sizes of a single code point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharBreakdown {
    pub character: CompactString,
    pub code_point: u32,
    pub category: CharacterCategory,
    pub utf8_bytes: usize,
    pub utf16_bytes: usize,
}

impl CharBreakdown {
    /// Measure a single character.
    pub fn new(c: char) -> Self {
        let mut bytes = [0u8; 4];
        let mut units = [0u16; 2];
        let units = c.encode_utf16(&mut units);

        Self {
            character: CompactString::new(c.encode_utf8(&mut bytes)),
            code_point: c as u32,
            category: CharacterCategory::of(c),
            utf8_bytes: utf8_char_length(c),
            utf16_bytes: utf16_units_byte_length(units),
        }
    }

    /// Code point in `U+XXXX` notation.
    pub fn code_point_label(&self) -> CompactString {
        format_compact!("U+{:04X}", self.code_point)
    }
}

impl ByteReport {
    /// Serialize the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, TallyError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Measure `text` according to `options`.
pub fn analyze(text: &str, options: &TallyOptions) -> ByteReport {
    let breakdown = if options.breakdown {
        text.chars()
            .take(options.breakdown_limit)
            .map(CharBreakdown::new)
            .collect()
    } else {
        Vec::new()
    };

    let report = ByteReport {
        characters: text.chars().count(),
        graphemes: count_graphemes(text),
        utf8_bytes: utf8_byte_length(text),
        utf16_bytes: utf16_byte_length(text),
        display_width: TextWidth::width(text),
        hex_dump: to_hex_dump(text, options.max_bytes),
        breakdown,
    };

    tracing::debug!(
        "analyze: {} characters, {} graphemes, {} UTF-8 bytes, {} breakdown entries",
        report.characters,
        report.graphemes,
        report.utf8_bytes,
        report.breakdown.len()
    );

    report
}
