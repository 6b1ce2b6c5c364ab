//! Integration tests for the local lyrics library.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use std::fs;

use lyricsync::library::LyricsLibrary;
use lyricsync::{Error, LyricLine};

fn sample_library() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("Flight Facilities - Foreign Language.lrc"),
        "[ar:Flight Facilities]\n[ti:Foreign Language]\n[00:00.00]Hello World\n[00:00.50]Bye World\n",
    )
    .unwrap();
    fs::create_dir(dir.path().join("nested")).unwrap();
    fs::write(
        dir.path().join("nested").join("Other Artist - Broken Song.lrc"),
        "[00:00.00]ok\n[00:00.00 missing bracket\n",
    )
    .unwrap();
    fs::write(dir.path().join("cover.jpg"), [0u8; 4]).unwrap();
    dir
}

#[test]
fn search_then_load_decodes_lyrics() {
    let dir = sample_library();
    let mut library = LyricsLibrary::open(dir.path().to_path_buf()).unwrap();

    let results = library.search("Flight Facilities", "Foreign Language", 5);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].display_name(), "Flight Facilities - Foreign Language");

    let lyrics = results[0].load().unwrap();
    assert_eq!(
        lyrics,
        vec![LyricLine::new(0, "Hello World"), LyricLine::new(500, "Bye World")]
    );
}

#[test]
fn nested_directories_are_indexed() {
    let dir = sample_library();
    let mut library = LyricsLibrary::new(dir.path().to_path_buf());
    assert_eq!(library.entries().len(), 2);
    assert_eq!(library.path(), dir.path());
}

#[test]
fn loading_a_broken_entry_reports_line() {
    let dir = sample_library();
    let mut library = LyricsLibrary::open(dir.path().to_path_buf()).unwrap();

    let results = library.search("other artist", "broken song", 5);
    match results[0].load().unwrap_err() {
        Error::Format { source, .. } => assert_eq!(source.line_number(), Some(2)),
        other => panic!("Expected Format error, got {other:?}"),
    }
}

#[test]
fn check_all_flags_only_broken_files() {
    let dir = sample_library();
    let mut library = LyricsLibrary::open(dir.path().to_path_buf()).unwrap();

    let reports = library.check_all();
    let failed: Vec<_> = reports.iter().filter(|r| !r.is_ok()).collect();
    assert_eq!(reports.len(), 2);
    assert_eq!(failed.len(), 1);
    assert!(failed[0].path.ends_with("nested/Other Artist - Broken Song.lrc"));
}
