//! Encoded byte lengths for UTF-8 and UTF-16.

/// Bytes charged for a UTF-16 code unit outside the surrogate range.
const UTF16_UNIT_BYTES: usize = 2;

/// Bytes charged for each surrogate code unit.
///
/// Every half of a surrogate pair is charged this amount, so a
/// supplementary-plane character totals 8 bytes.
const UTF16_SURROGATE_BYTES: usize = 4;

/// Number of bytes a code point occupies in UTF-8.
#[inline]
pub fn utf8_char_length(c: char) -> usize {
    match c as u32 {
        0..=0x7F => 1,
        0x80..=0x7FF => 2,
        0x800..=0xFFFF => 3,
        _ => 4,
    }
}

/// Number of bytes the string occupies in UTF-8.
#[inline]
pub fn utf8_byte_length(s: &str) -> usize {
    // `str` is already UTF-8
    s.len()
}

/// Byte length of the string in UTF-16, charging 4 bytes per surrogate unit.
#[inline]
pub fn utf16_byte_length(s: &str) -> usize {
    s.encode_utf16().map(unit_bytes).sum()
}

/// Byte length of raw UTF-16 code units, which may include unpaired surrogates.
#[inline]
pub fn utf16_units_byte_length(units: &[u16]) -> usize {
    units.iter().copied().map(unit_bytes).sum()
}

#[inline]
fn unit_bytes(unit: u16) -> usize {
    if (0xD800..=0xDFFF).contains(&unit) {
        UTF16_SURROGATE_BYTES
    } else {
        UTF16_UNIT_BYTES
    }
}
