//! Core type definitions for decoded lyrics.
//!
//! These are plain value types: the decoder builds them fresh on every call
//! and hands ownership to the caller.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::time::{MS_PER_CENTISECOND, MS_PER_MINUTE, MS_PER_SECOND};

/// A decoded document: lyric lines in order of appearance.
pub type Lyrics = Vec<LyricLine>;

/// A single timestamped lyric line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LyricLine {
    /// Time of the line in milliseconds from the start of the document.
    pub time: u64,
    /// Text to display, trimmed at both ends. May be empty.
    pub text: String,
}

impl LyricLine {
    /// Create a new `LyricLine`.
    pub fn new(time: u64, text: impl Into<String>) -> Self {
        Self { time, text: text.into() }
    }
}

impl fmt::Display for LyricLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}  {}", format_timestamp(self.time), self.text)
    }
}

/// What kind of content a raw input line carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// The empty string.
    Blank,
    /// A tag annotation such as `[ar:Artist]`.
    Metadata,
    /// Anything else; expected to be `[MM:SS.mm]text`.
    Lyric,
}

/// A sub-segment of the `MM:SS.mm` timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeSegment {
    /// Text before the `:`.
    Minutes,
    /// Text between the `:` and the following `.`.
    Seconds,
    /// Text after the `.`.
    Centiseconds,
}

impl TimeSegment {
    /// Returns the human-readable name of this segment.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Minutes => "minutes",
            Self::Seconds => "seconds",
            Self::Centiseconds => "centiseconds",
        }
    }
}

impl fmt::Display for TimeSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Format milliseconds as `mm:ss.cc` for display.
///
/// Minutes are not wrapped into hours, and sub-centisecond remainders are
/// dropped.
pub fn format_timestamp(ms: u64) -> String {
    let minutes = ms / MS_PER_MINUTE;
    let seconds = (ms % MS_PER_MINUTE) / MS_PER_SECOND;
    let centiseconds = (ms % MS_PER_SECOND) / MS_PER_CENTISECOND;
    format!("{minutes:02}:{seconds:02}.{centiseconds:02}")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn format_timestamp_pads_fields() {
        assert_eq!(format_timestamp(0), "00:00.00");
        assert_eq!(format_timestamp(500), "00:00.50");
        assert_eq!(format_timestamp(5_325_590), "88:45.59");
    }

    #[test]
    fn format_timestamp_keeps_large_minutes() {
        assert_eq!(format_timestamp(6_001_500), "100:01.50");
    }

    #[test]
    fn lyric_line_serializes_as_time_and_text() {
        let line = LyricLine::new(10, "");
        let json = serde_json::to_string(&line).unwrap();
        assert_eq!(json, r#"{"time":10,"text":""}"#);
    }

    #[test]
    fn lyric_line_display() {
        assert_eq!(LyricLine::new(1000, "Hello World").to_string(), "00:01.00  Hello World");
    }
}
