//! Hex dump rendering of UTF-8 encoded text.
//!
//! Each line covers up to 16 bytes:
//!
//! ```text
//! 00000000  48 65 6c 6c 6f 2c 20 e4 b8 96 e7 95 8c 21         Hello, ......!
//! ```
//!
//! An 8 digit offset, the bytes in lowercase hex padded to a fixed 48 column
//! field, then the printable ASCII bytes with everything else shown as `.`.

use std::fmt::Write;

/// Default byte budget for [`to_hex_dump`].
pub const DEFAULT_MAX_BYTES: i64 = 256;

/// Bytes rendered per line.
const BYTES_PER_LINE: usize = 16;

/// Fixed width of the hex column; a full line needs 47.
const HEX_FIELD_WIDTH: usize = 48;

/// Offset, separators, hex column, ASCII column and newline.
const LINE_WIDTH: usize = 8 + 2 + HEX_FIELD_WIDTH + 2 + BYTES_PER_LINE + 1;

/// Worst case UTF-8 bytes per character, used to turn a byte budget into a prefix length.
const MAX_BYTES_PER_CHAR: i64 = 4;

/// Render a hex dump of the UTF-8 encoding of a prefix of `text`.
///
/// The prefix is `max_bytes / 4` UTF-16 code units long, so a surrogate pair
/// cut in half by the budget is encoded as U+FFFD. A zero or negative budget
/// yields an empty dump.
pub fn to_hex_dump(text: &str, max_bytes: i64) -> String {
    if max_bytes <= 0 {
        return String::new();
    }
    let units = usize::try_from(max_bytes / MAX_BYTES_PER_CHAR).unwrap_or(usize::MAX);
    let prefix: String = char::decode_utf16(text.encode_utf16().take(units))
        .map(|unit| unit.unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect();

    hex_dump_bytes(prefix.as_bytes())
}

/// Render a hex dump of the first 256 bytes' worth of `text`.
#[inline]
pub fn to_hex_dump_default(text: &str) -> String {
    to_hex_dump(text, DEFAULT_MAX_BYTES)
}

/// Render an arbitrary byte slice in hex dump layout.
///
/// Trailing whitespace of the whole dump is trimmed.
pub fn hex_dump_bytes(bytes: &[u8]) -> String {
    let line_count = bytes.len().div_ceil(BYTES_PER_LINE);
    tracing::trace!("hex dump: {} bytes, {} lines", bytes.len(), line_count);

    let mut out = String::with_capacity(line_count * LINE_WIDTH);
    let mut hex = String::with_capacity(HEX_FIELD_WIDTH);

    for (index, chunk) in bytes.chunks(BYTES_PER_LINE).enumerate() {
        hex.clear();
        for (i, byte) in chunk.iter().enumerate() {
            if i > 0 {
                hex.push(' ');
            }
            let _ = write!(hex, "{:02x}", byte);
        }

        let _ = write!(
            out,
            "{:08x}  {:<width$}  ",
            index * BYTES_PER_LINE,
            hex,
            width = HEX_FIELD_WIDTH
        );
        out.extend(chunk.iter().map(|&b| ascii_char(b)));
        out.push('\n');
    }

    let trimmed = out.trim_end().len();
    out.truncate(trimmed);
    out
}

#[inline]
fn ascii_char(byte: u8) -> char {
    if (32..=126).contains(&byte) {
        byte as char
    } else {
        '.'
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line() {
        let dump = to_hex_dump("ABC", 256);
        assert_eq!(dump, format!("00000000  {:<48}  ABC", "41 42 43"));
    }

    #[test]
    fn test_empty() {
        assert_eq!(to_hex_dump("", 256), "");
        assert_eq!(hex_dump_bytes(&[]), "");
    }

    #[test]
    fn test_zero_and_negative_budget() {
        assert_eq!(to_hex_dump("ABC", 0), "");
        assert_eq!(to_hex_dump("ABC", -16), "");
        // Budget below one character
        assert_eq!(to_hex_dump("ABC", 3), "");
    }

    #[test]
    fn test_budget_limits_characters() {
        // 8 / 4 = 2 characters
        let dump = to_hex_dump("ABCDEF", 8);
        assert_eq!(dump, format!("00000000  {:<48}  AB", "41 42"));
    }

    #[test]
    fn test_budget_counts_code_units_not_bytes() {
        // Two characters of three bytes each
        let dump = to_hex_dump("€€€", 8);
        assert_eq!(
            dump,
            format!("00000000  {:<48}  ......", "e2 82 ac e2 82 ac")
        );
    }

    #[test]
    fn test_split_surrogate_pair_becomes_replacement() {
        // One code unit of budget keeps only the high surrogate of 😀
        let dump = to_hex_dump("😀", 4);
        assert_eq!(dump, format!("00000000  {:<48}  ...", "ef bf bd"));

        let dump = to_hex_dump("😀", 8);
        assert_eq!(dump, format!("00000000  {:<48}  ....", "f0 9f 98 80"));
    }

    #[test]
    fn test_full_line_and_offsets() {
        let text = "0123456789abcdefXYZ";
        let dump = to_hex_dump(text, 256);
        let lines: Vec<_> = dump.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "00000000  30 31 32 33 34 35 36 37 38 39 61 62 63 64 65 66   0123456789abcdef"
        );
        assert_eq!(lines[1], format!("00000010  {:<48}  XYZ", "58 59 5a"));
    }

    #[test]
    fn test_non_printable_bytes() {
        let dump = hex_dump_bytes(&[0x00, 0x1f, 0x20, 0x7e, 0x7f, 0xff, 0x41]);
        assert_eq!(
            dump,
            format!("00000000  {:<48}  .. ~..A", "00 1f 20 7e 7f ff 41")
        );
    }

    #[test]
    fn test_trailing_space_trimmed() {
        let dump = to_hex_dump("A ", 256);
        assert_eq!(dump, format!("00000000  {:<48}  A", "41 20"));
    }

    #[test]
    fn test_line_count() {
        for len in [1usize, 15, 16, 17, 32, 33, 64] {
            let text = "x".repeat(len);
            let dump = to_hex_dump(&text, 256);
            assert_eq!(dump.lines().count(), len.div_ceil(16), "len {}", len);
            for (i, line) in dump.lines().enumerate() {
                let group = (len - i * 16).min(16);
                let ascii = &line[10 + 48 + 2..];
                assert_eq!(ascii.len(), group);
            }
        }
    }

    #[test]
    fn test_default_budget() {
        let text = "y".repeat(200);
        // 256 / 4 = 64 characters = 4 lines
        assert_eq!(to_hex_dump_default(&text).lines().count(), 4);
    }
}
