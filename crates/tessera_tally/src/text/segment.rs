//! Text segmentation using grapheme clusters.

use unicode_segmentation::UnicodeSegmentation;

/// Iterate over the extended grapheme clusters of a string.
#[inline]
pub fn graphemes(s: &str) -> unicode_segmentation::Graphemes<'_> {
    s.graphemes(true)
}

/// Count the user-perceived characters in a string.
///
/// Combining marks, emoji modifier sequences and ZWJ sequences each count
/// as a single grapheme.
#[inline]
pub fn count_graphemes(s: &str) -> usize {
    graphemes(s).count()
}
