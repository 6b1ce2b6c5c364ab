//! Application error types.
//!
//! [`FormatError`] is the single error surfaced by the decoder. [`Error`]
//! wraps it together with the failures of the file and library layers.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::types::TimeSegment;

/// Application result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Why a lyric line failed to decode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatErrorKind {
    /// The line does not start with `[`.
    #[error("Does not start with '['")]
    MissingOpeningBracket,

    /// The line has no `]`.
    #[error("Does not contain ']'")]
    MissingClosingBracket,

    /// A timestamp sub-segment is not made of the expected number of digits.
    #[error("Unexpected non-digit character in {segment} segment {found:?}.\nExpected: \"[XX:XX.XX]\", where Xs are numbers.")]
    NonDigit {
        /// The offending sub-segment.
        segment: TimeSegment,
        /// The text found in that sub-segment.
        found: String,
    },

    /// Seconds are not in `[0, 60)`.
    #[error("Seconds out of range [0-60].\nFound {seconds}.")]
    SecondsOutOfRange {
        /// The decoded seconds value.
        seconds: u64,
    },

    /// The timestamp does not fit in a `u64` millisecond count.
    #[error("Timestamp too large.\nFound {minutes} minutes.")]
    TimestampOverflow {
        /// The minutes digits as written.
        minutes: String,
    },
}

/// A malformed lyric line, with the source line number when known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatError {
    line_number: Option<usize>,
    line: String,
    kind: FormatErrorKind,
}

impl FormatError {
    /// Create an error for `line` without a line number.
    pub fn new(line: impl Into<String>, kind: FormatErrorKind) -> Self {
        Self { line_number: None, line: line.into(), kind }
    }

    /// Attach the 1-based source line number.
    #[must_use]
    pub fn at_line(mut self, line_number: usize) -> Self {
        self.line_number = Some(line_number);
        self
    }

    /// 1-based line number, if the error came from document decoding.
    pub const fn line_number(&self) -> Option<usize> {
        self.line_number
    }

    /// The offending line as written.
    pub fn line(&self) -> &str {
        &self.line
    }

    /// The violated expectation.
    pub const fn kind(&self) -> &FormatErrorKind {
        &self.kind
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(n) = self.line_number {
            writeln!(f, "At line {n}:")?;
        }
        write!(f, "Invalid line: \"{}\".\n{}", self.line, self.kind)
    }
}

impl std::error::Error for FormatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}

/// Application error types with specific context for actionable debugging
#[derive(Debug, Error)]
pub enum Error {
    /// IO error with path context
    #[error("IO error at {path:?}: {source}")]
    Io {
        /// The underlying IO error.
        source: std::io::Error,
        /// File path where the error occurred, if known.
        path: Option<PathBuf>,
    },

    /// Lyrics decoding error
    #[error("Format error in {path:?}: {source}")]
    Format {
        /// The decoder's error.
        source: FormatError,
        /// File that failed to decode, if known.
        path: Option<PathBuf>,
    },

    /// Configuration error with guidance
    #[error("Configuration error: {message}. {hint}")]
    Config {
        /// Description of the configuration problem.
        message: String,
        /// Actionable guidance for fixing the issue.
        hint: &'static str,
    },

    /// Library/index error
    #[error("Library error: {0}")]
    Library(String),

    /// Generic message error (escape hatch)
    #[error("{0}")]
    Msg(String),
}

impl Error {
    /// Create an IO error with path context
    pub fn io(source: std::io::Error, path: impl Into<Option<PathBuf>>) -> Self {
        Self::Io { source, path: path.into() }
    }

    /// Create a format error with file context
    pub fn format(source: FormatError, path: impl Into<Option<PathBuf>>) -> Self {
        Self::Format { source, path: path.into() }
    }

    /// Create a config error with actionable hint
    pub fn config(message: impl Into<String>, hint: &'static str) -> Self {
        Self::Config { message: message.into(), hint }
    }
}

// Convenience conversions
impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io { source: e, path: None }
    }
}

impl From<FormatError> for Error {
    fn from(e: FormatError) -> Self {
        Self::Format { source: e, path: None }
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Self::Msg(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Self::Msg(s.to_string())
    }
}
