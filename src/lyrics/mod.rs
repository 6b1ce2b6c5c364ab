//! Decoding of `.lrc` synchronized lyrics.
//!
//! A document is decoded line by line. Each line is classified first:
//! blank and metadata lines are skipped, everything else must be a
//! `[MM:SS.mm]text` lyric line or the whole document is rejected.
//!
//! ```text
//! [ar:Flight Facilities]
//! [00:00.00]Hello World
//! [00:00.50]Bye World
//! ```
//!
//! decodes to `[{ time: 0, text: "Hello World" }, { time: 500, text: "Bye World" }]`.

mod classify;
mod document;
mod line;

pub use classify::{classify_line, is_metadata};
pub use document::{decode_document, decode_file};
pub use line::decode_line;
