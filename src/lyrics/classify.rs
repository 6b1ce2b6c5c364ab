//! Line classification: blank, metadata or lyric.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::LineKind;

/// Regex matching metadata tags like `[ar:Artist]`, `[ti:Title]`, `[al:Album]`.
///
/// Only the prefix has to match; anything after the closing `]` is ignored.
#[allow(clippy::expect_used)]
static RE_METADATA: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[[a-z]+:.*\]").expect("valid regex: RE_METADATA")
});

/// Classify a single line (without its trailing newline).
pub fn classify_line(line: &str) -> LineKind {
    if line.is_empty() {
        LineKind::Blank
    } else if is_metadata(line) {
        LineKind::Metadata
    } else {
        LineKind::Lyric
    }
}

/// Returns true if this line carries metadata about the lyrics.
pub fn is_metadata(line: &str) -> bool {
    RE_METADATA.is_match(line)
}
