//! Whole-document decoding.

use std::path::Path;

use super::classify::classify_line;
use super::line::decode_line;
use crate::error::{Error, FormatError, Result};
use crate::types::{LineKind, Lyrics};

/// Decode a `.lrc` encoded string into lyric lines.
///
/// Lines are split on `\n` only. Blank and metadata lines are skipped; every
/// other line must decode, otherwise the whole document is rejected and the
/// error carries the 1-based line number. Output keeps input order and is
/// not sorted by time.
///
/// ```
/// use lyricsync::lyrics::decode_document;
///
/// let lyrics = decode_document("[ti:Song]\n[00:00.00]Hello World\n\n[00:00.50]Bye World").unwrap();
/// assert_eq!(lyrics.len(), 2);
/// assert_eq!(lyrics[1].time, 500);
/// ```
pub fn decode_document(raw: &str) -> std::result::Result<Lyrics, FormatError> {
    raw.split('\n')
        .enumerate()
        .filter(|(_, line)| classify_line(line) == LineKind::Lyric)
        .map(|(index, line)| decode_line(line).map_err(|e| e.at_line(index + 1)))
        .collect()
}

/// Read and decode a `.lrc` file.
pub fn decode_file(path: impl AsRef<Path>) -> Result<Lyrics> {
    let path = path.as_ref();

    let raw = fs_err::read_to_string(path).map_err(|e| Error::io(e, path.to_path_buf()))?;
    let lyrics = decode_document(&raw).map_err(|e| Error::format(e, path.to_path_buf()))?;

    tracing::debug!("Decoded {} lyric lines from {}", lyrics.len(), path.display());
    Ok(lyrics)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::error::FormatErrorKind;
    use crate::types::LyricLine;

    #[test]
    fn test_decode_document_in_order() {
        let raw = "[00:00.00]Hello World\n[00:00.50]Bye World\n[00:01.00]Hello World";
        assert_eq!(
            decode_document(raw).unwrap(),
            vec![
                LyricLine::new(0, "Hello World"),
                LyricLine::new(500, "Bye World"),
                LyricLine::new(1000, "Hello World"),
            ]
        );
    }

    #[test]
    fn test_skips_metadata_and_blank_lines() {
        let raw = "[ar:Artist]\n[ti:Title]\n\n[00:01.00]One\n\n[al:Album]\n[00:02.00]Two\n";
        let lyrics = decode_document(raw).unwrap();
        assert_eq!(lyrics, vec![LyricLine::new(1000, "One"), LyricLine::new(2000, "Two")]);
    }

    #[test]
    fn test_empty_document() {
        assert!(decode_document("").unwrap().is_empty());
        assert!(decode_document("\n\n[ti:Only Metadata]\n").unwrap().is_empty());
    }

    #[test]
    fn test_keeps_duplicates_and_unsorted_times() {
        let raw = "[00:02.00]B\n[00:01.00]A\n[00:01.00]A";
        let times: Vec<u64> = decode_document(raw).unwrap().iter().map(|l| l.time).collect();
        assert_eq!(times, vec![2000, 1000, 1000]);
    }

    #[test]
    fn test_error_reports_line_number() {
        let raw = "[00:00.00]Hello\nnot a lyric\n[00:01.00]Bye";
        let err = decode_document(raw).unwrap_err();
        assert_eq!(err.line_number(), Some(2));
        assert_eq!(err.kind(), &FormatErrorKind::MissingOpeningBracket);
        assert!(err.to_string().starts_with("At line 2:\n"));
    }

    #[test]
    fn test_line_number_counts_skipped_lines() {
        let raw = "[ar:Artist]\n\n[00:00.00]Hello\n[00:61.00]Bad";
        let err = decode_document(raw).unwrap_err();
        assert_eq!(err.line_number(), Some(4));
        assert_eq!(err.kind(), &FormatErrorKind::SecondsOutOfRange { seconds: 61 });
    }

    #[test]
    fn test_first_failure_wins() {
        let raw = "[00:00.00]ok\n[0:00.00]bad\nalso bad";
        assert_eq!(decode_document(raw).unwrap_err().line_number(), Some(2));
    }

    #[test]
    fn test_carriage_return_is_not_stripped() {
        // A CRLF blank line is "\r", which is not blank.
        let err = decode_document("[00:00.00]Hello\r\n\r\n").unwrap_err();
        assert_eq!(err.line_number(), Some(2));
        assert_eq!(err.kind(), &FormatErrorKind::MissingOpeningBracket);

        let lyrics = decode_document("[00:00.00]Hello\r\n[00:01.00]World\r").unwrap();
        assert_eq!(lyrics[0].text, "Hello");
        assert_eq!(lyrics[1].text, "World");
    }

    #[test]
    fn test_decode_is_repeatable() {
        let raw = "[00:00.00]a\n[00:00.10]b";
        assert_eq!(decode_document(raw).unwrap(), decode_document(raw).unwrap());
        let bad = "[00:00.00]a\n[00:00.1]b";
        assert_eq!(decode_document(bad).unwrap_err(), decode_document(bad).unwrap_err());
    }

    #[test]
    fn test_decode_file_missing_reports_path() {
        let err = decode_file("/nonexistent/lyricsync/missing.lrc").unwrap_err();
        match err {
            Error::Io { path: Some(p), .. } => assert!(p.ends_with("missing.lrc")),
            other => panic!("Expected Io error with path, got {other:?}"),
        }
    }
}
