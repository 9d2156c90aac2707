//! Character categories by code point range.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TallyError;

/// Unicode range bucket of a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterCategory {
    /// U+0000..=U+007F
    Ascii,
    /// U+0080..=U+07FF
    LatinExtended,
    /// U+0800..=U+FFFF
    Bmp,
    /// U+10000 and above
    Supplementary,
    /// No code point to classify
    Unknown,
}

impl CharacterCategory {
    /// Every category, in ascending code point order, `Unknown` last.
    pub const ALL: [CharacterCategory; 5] = [
        Self::Ascii,
        Self::LatinExtended,
        Self::Bmp,
        Self::Supplementary,
        Self::Unknown,
    ];

    /// Classify a single code point.
    #[inline]
    pub fn of(c: char) -> Self {
        match c as u32 {
            0..=0x7F => Self::Ascii,
            0x80..=0x7FF => Self::LatinExtended,
            0x800..=0xFFFF => Self::Bmp,
            _ => Self::Supplementary,
        }
    }

    /// Display label of the category.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ascii => "ASCII",
            Self::LatinExtended => "Latin Extended",
            Self::Bmp => "BMP (Basic Multilingual Plane)",
            Self::Supplementary => "Supplementary Plane (Emoji, etc.)",
            Self::Unknown => "Unknown",
        }
    }
}

/// Classify the first code point of `s`.
///
/// Returns [`CharacterCategory::Unknown`] for an empty string.
#[inline]
pub fn character_category(s: &str) -> CharacterCategory {
    s.chars()
        .next()
        .map_or(CharacterCategory::Unknown, CharacterCategory::of)
}

impl fmt::Display for CharacterCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CharacterCategory {
    type Err = TallyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| TallyError::UnknownCategory(s.to_string()))
    }
}

impl Serialize for CharacterCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CharacterCategory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(serde::de::Error::custom)
    }
}
