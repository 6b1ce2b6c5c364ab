//! `lyricsync` - decoder for `.lrc` synchronized lyrics.
//!
//! The core is [`lyrics::decode_document`], a pure function turning raw
//! `.lrc` text into timestamped lines with line-numbered diagnostics on
//! malformed input. A small offline library layer finds lyrics files by
//! artist and title.

pub mod config;
pub mod constants;
pub mod error;
pub mod library;
pub mod lyrics;
pub mod types;

pub use error::{Error, FormatError, FormatErrorKind, Result};
pub use lyrics::{decode_document, decode_line};
pub use types::{LyricLine, Lyrics};
