//! Single lyric line decoding.

use crate::constants::format::{CENTISECOND_DIGITS, MIN_MINUTE_DIGITS, SECOND_DIGITS};
use crate::constants::time::{MS_PER_CENTISECOND, MS_PER_MINUTE, MS_PER_SECOND, SECONDS_PER_MINUTE};
use crate::error::{FormatError, FormatErrorKind};
use crate::types::{LyricLine, TimeSegment};

/// Decode one `.lrc` lyric line into a [`LyricLine`].
///
/// Expected shape: `[MM:SS.mm]text`, where `MM` is two or more digits and
/// `SS`/`mm` are exactly two digits each. The first `]` ends the timestamp;
/// everything after it is the text, trimmed at both ends.
///
/// ```
/// use lyricsync::lyrics::decode_line;
///
/// let line = decode_line("[00:00.50]Bye World").unwrap();
/// assert_eq!(line.time, 500);
/// assert_eq!(line.text, "Bye World");
/// ```
pub fn decode_line(line: &str) -> Result<LyricLine, FormatError> {
    let Some(rest) = line.strip_prefix('[') else {
        return Err(FormatError::new(line, FormatErrorKind::MissingOpeningBracket));
    };

    let Some((timestamp, text)) = rest.split_once(']') else {
        return Err(FormatError::new(line, FormatErrorKind::MissingClosingBracket));
    };

    let time = decode_timestamp(timestamp).map_err(|kind| FormatError::new(line, kind))?;

    Ok(LyricLine::new(time, text.trim()))
}

/// Decode `MM:SS.mm` into milliseconds.
fn decode_timestamp(timestamp: &str) -> Result<u64, FormatErrorKind> {
    let Some((minutes, rest)) = timestamp.split_once(':') else {
        return Err(non_digit(TimeSegment::Minutes, timestamp));
    };
    expect_digits(TimeSegment::Minutes, minutes, minutes.len() >= MIN_MINUTE_DIGITS)?;

    let Some((seconds, centiseconds)) = rest.split_once('.') else {
        return Err(non_digit(TimeSegment::Seconds, rest));
    };
    expect_digits(TimeSegment::Seconds, seconds, seconds.len() == SECOND_DIGITS)?;

    let overflow = || FormatErrorKind::TimestampOverflow { minutes: minutes.to_string() };

    let seconds = digit_value(seconds).ok_or_else(overflow)?;
    if seconds >= SECONDS_PER_MINUTE {
        return Err(FormatErrorKind::SecondsOutOfRange { seconds });
    }

    // Range is implied by the digit count; there is no numeric check here.
    expect_digits(
        TimeSegment::Centiseconds,
        centiseconds,
        centiseconds.len() == CENTISECOND_DIGITS,
    )?;
    let centiseconds = digit_value(centiseconds).ok_or_else(overflow)?;

    digit_value(minutes)
        .and_then(|m| m.checked_mul(MS_PER_MINUTE))
        .and_then(|ms| ms.checked_add(seconds * MS_PER_SECOND + centiseconds * MS_PER_CENTISECOND))
        .ok_or_else(overflow)
}

/// Require `found` to be ASCII digits only, with an acceptable length.
fn expect_digits(segment: TimeSegment, found: &str, length_ok: bool) -> Result<(), FormatErrorKind> {
    if length_ok && found.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(non_digit(segment, found))
    }
}

fn non_digit(segment: TimeSegment, found: &str) -> FormatErrorKind {
    FormatErrorKind::NonDigit { segment, found: found.to_string() }
}

/// Numeric value of an all-digit string, `None` on `u64` overflow.
fn digit_value(digits: &str) -> Option<u64> {
    digits.bytes().try_fold(0u64, |acc, b| {
        acc.checked_mul(10)?.checked_add(u64::from(b - b'0'))
    })
}
