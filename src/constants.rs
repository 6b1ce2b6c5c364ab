//! Application constants.
//!
//! Centralizes magic numbers and configuration values for better maintainability.

/// Time unit conversions.
pub mod time {
    /// Milliseconds in one minute.
    pub const MS_PER_MINUTE: u64 = 60_000;

    /// Milliseconds in one second.
    pub const MS_PER_SECOND: u64 = 1_000;

    /// Milliseconds in one centisecond.
    pub const MS_PER_CENTISECOND: u64 = 10;

    /// Seconds must stay below this value.
    pub const SECONDS_PER_MINUTE: u64 = 60;
}

/// `.lrc` line syntax constants.
pub mod format {
    /// Minimum number of digits in the minutes segment.
    pub const MIN_MINUTE_DIGITS: usize = 2;

    /// Exact number of digits in the seconds segment.
    pub const SECOND_DIGITS: usize = 2;

    /// Exact number of digits in the centiseconds segment.
    pub const CENTISECOND_DIGITS: usize = 2;

    /// File extension of lyrics files.
    pub const LRC_EXTENSION: &str = "lrc";
}

/// Lyrics library constants.
pub mod library {
    /// Default maximum number of search results.
    pub const MAX_SEARCH_RESULTS: usize = 20;

    /// Minimum fuzzy score for a match to count.
    pub const MIN_FUZZY_SCORE: i64 = 80;

    /// Default library directory name under the user's audio directory.
    pub const DEFAULT_DIR_NAME: &str = "Lyrics";
}
