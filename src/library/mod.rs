//! Local lyrics library.
//!
//! Scans a directory of files named `Artist - Title.lrc` and provides
//! lookup by artist and title, exact first with a fuzzy fallback. Entries
//! are decoded on demand with [`LyricsEntry::load`].

use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use std::time::Instant;

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use rayon::prelude::*;
use regex::Regex;
use walkdir::WalkDir;

use crate::constants::format::LRC_EXTENSION;
use crate::constants::library::MIN_FUZZY_SCORE;
use crate::error::{Error, Result};
use crate::lyrics::decode_file;
use crate::types::Lyrics;

/// Regex matching library filenames like `Flight Facilities - Foreign Language`.
#[allow(clippy::expect_used)]
static RE_FILENAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.+?)\s+-\s+(.+)$").expect("valid regex: RE_FILENAME")
});

/// A single lyrics file in the library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LyricsEntry {
    /// Artist, when the file name carries one.
    pub artist: Option<String>,
    /// Song title.
    pub title: String,
    /// Absolute path on disk.
    pub path: PathBuf,
    /// Lowercased artist for case-insensitive matching.
    artist_lower: Option<String>,
    /// Lowercased title for case-insensitive matching.
    title_lower: String,
    /// Lowercased `artist title` for fuzzy matching.
    search_key: String,
}

impl LyricsEntry {
    fn new(artist: Option<String>, title: String, path: PathBuf) -> Self {
        let artist_lower = artist.as_deref().map(str::to_lowercase);
        let title_lower = title.to_lowercase();
        let search_key = artist_lower
            .as_ref()
            .map_or_else(|| title_lower.clone(), |a| format!("{a} {title_lower}"));

        Self { artist, title, path, artist_lower, title_lower, search_key }
    }

    /// Read and decode this entry's lyrics.
    pub fn load(&self) -> Result<Lyrics> {
        decode_file(&self.path)
    }

    /// Human-readable name, `Artist - Title` or just the title.
    pub fn display_name(&self) -> String {
        self.artist
            .as_ref()
            .map_or_else(|| self.title.clone(), |a| format!("{a} - {}", self.title))
    }
}

/// Outcome of decoding one library file.
#[derive(Debug)]
pub struct CheckReport {
    /// The checked file.
    pub path: PathBuf,
    /// Number of lyric lines, or why decoding failed.
    pub result: Result<usize>,
}

impl CheckReport {
    /// True if the file decoded.
    pub const fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Lazily scanned lyrics directory index.
pub struct LyricsLibrary {
    library_path: PathBuf,
    entries: Vec<LyricsEntry>,
    loaded: bool,
}

impl LyricsLibrary {
    /// Create a new library backed by the given directory path.
    ///
    /// The directory is scanned on first use.
    pub const fn new(path: PathBuf) -> Self {
        Self {
            library_path: path,
            entries: Vec::new(),
            loaded: false,
        }
    }

    /// Scan the given directory right away, failing if it is not a directory.
    pub fn open(path: PathBuf) -> Result<Self> {
        if !path.is_dir() {
            return Err(Error::Library(format!(
                "Library path does not exist or is not a directory: {}",
                path.display()
            )));
        }

        let mut library = Self::new(path);
        library.ensure_loaded();
        Ok(library)
    }

    /// Directory this library reads from.
    pub fn path(&self) -> &Path {
        &self.library_path
    }

    /// All indexed entries, sorted by path.
    pub fn entries(&mut self) -> &[LyricsEntry] {
        self.ensure_loaded();
        &self.entries
    }

    /// Find entries matching an artist and title, best match first.
    ///
    /// Either part may be empty. Exact (case-insensitive) matches rank above
    /// containment matches, which rank above fuzzy matches.
    pub fn search(&mut self, artist: &str, title: &str, max_results: usize) -> Vec<LyricsEntry> {
        self.ensure_loaded();

        let artist = artist.trim().to_lowercase();
        let title = title.trim().to_lowercase();
        if artist.is_empty() && title.is_empty() {
            return Vec::new();
        }

        let query = [artist.as_str(), title.as_str()]
            .iter()
            .filter(|s| !s.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ");

        let matcher = SkimMatcherV2::default();
        let mut scored: Vec<(i64, &LyricsEntry)> = self.entries.iter()
            .filter_map(|entry| {
                score_entry(&matcher, entry, &artist, &title, &query).map(|score| (score, entry))
            })
            .collect();

        scored.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.path.cmp(&b.1.path)));

        scored.into_iter()
            .take(max_results)
            .map(|(_, entry)| entry.clone())
            .collect()
    }

    /// Decode every entry in parallel, reporting per-file results in entry order.
    pub fn check_all(&mut self) -> Vec<CheckReport> {
        self.ensure_loaded();

        let reports: Vec<CheckReport> = self.entries.par_iter()
            .map(|entry| CheckReport {
                path: entry.path.clone(),
                result: entry.load().map(|lyrics| lyrics.len()),
            })
            .collect();

        for report in &reports {
            if let Err(e) = &report.result {
                tracing::warn!("Failed to decode {}: {e}", report.path.display());
            }
        }

        reports
    }

    fn ensure_loaded(&mut self) {
        if !self.loaded {
            self.load();
        }
    }

    fn load(&mut self) {
        self.loaded = true;

        if !self.library_path.is_dir() {
            tracing::warn!("Lyrics directory {} is not readable", self.library_path.display());
            return;
        }

        let start = Instant::now();
        let mut entries: Vec<LyricsEntry> = WalkDir::new(&self.library_path)
            .follow_links(true)
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_file() && has_lrc_extension(e.path()))
            .filter_map(|e| {
                let Some(stem) = e.path().file_stem().and_then(|s| s.to_str()) else {
                    tracing::warn!("Skipping non UTF-8 file name {}", e.path().display());
                    return None;
                };
                let (artist, title) = parse_library_filename(stem);
                Some(LyricsEntry::new(artist, title, e.path().to_path_buf()))
            })
            .collect();

        entries.sort_by(|a, b| a.path.cmp(&b.path));
        self.entries = entries;

        let elapsed = start.elapsed();
        tracing::info!(
            "Loaded {} lyrics files from {} in {elapsed:?}",
            self.entries.len(),
            self.library_path.display()
        );
    }
}

fn has_lrc_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(LRC_EXTENSION))
}

/// Parse a file stem like `Flight Facilities - Foreign Language` into (artist, title).
///
/// Stems without a ` - ` separator are title-only.
fn parse_library_filename(stem: &str) -> (Option<String>, String) {
    RE_FILENAME.captures(stem)
        .and_then(|caps| Some((caps.get(1)?.as_str().trim(), caps.get(2)?.as_str().trim())))
        .map_or_else(
            || (None, stem.trim().to_string()),
            |(artist, title)| (Some(artist.to_string()), title.to_string()),
        )
}

/// Score an entry against lowercased query parts, `None` if irrelevant.
fn score_entry(
    matcher: &SkimMatcherV2,
    entry: &LyricsEntry,
    artist: &str,
    title: &str,
    query: &str,
) -> Option<i64> {
    const EXACT_SCORE: i64 = 20000;
    const CONTAINS_SCORE: i64 = 10000;

    let artist_exact = artist.is_empty() || entry.artist_lower.as_deref() == Some(artist);
    let title_exact = title.is_empty() || entry.title_lower == title;
    if artist_exact && title_exact {
        return Some(EXACT_SCORE);
    }

    let artist_close = artist.is_empty()
        || entry.artist_lower.as_deref().is_some_and(|a| overlaps(a, artist));
    let title_close = title.is_empty() || overlaps(&entry.title_lower, title);
    if artist_close && title_close {
        return Some(CONTAINS_SCORE);
    }

    matcher.fuzzy_match(&entry.search_key, query)
        .filter(|&score| score >= MIN_FUZZY_SCORE)
}

/// Either string contains the other.
fn overlaps(a: &str, b: &str) -> bool {
    !a.is_empty() && (a.contains(b) || b.contains(a))
}
