//! `lyricsync` - decode, search and check `.lrc` lyrics files.
//!
//! Usage:
//!   `lyricsync decode <file.lrc> [--json]`
//!   `lyricsync search <artist> <title>`
//!   `lyricsync check [dir]`

use std::env;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use lyricsync::config::Config;
use lyricsync::library::LyricsLibrary;
use lyricsync::lyrics::decode_file;
use lyricsync::{Error, Result};

const USAGE: &str = "\
Usage: lyricsync decode <file.lrc> [--json]
       lyricsync search <artist> <title>
       lyricsync check [dir]";

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    let result = match (args.first().map(String::as_str), args.get(1), args.get(2)) {
        (Some("decode"), Some(path), _) => {
            decode(Path::new(path), args.iter().any(|a| a == "--json"))
        }
        (Some("search"), Some(artist), Some(title)) => search(artist, title),
        (Some("check"), dir, _) => check(dir.map(PathBuf::from)),
        _ => {
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };

    result.unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        ExitCode::FAILURE
    })
}

fn decode(path: &Path, json: bool) -> Result<ExitCode> {
    let lyrics = decode_file(path)?;

    if json {
        let out = serde_json::to_string_pretty(&lyrics)
            .map_err(|e| Error::Msg(format!("Failed to serialize lyrics: {e}")))?;
        println!("{out}");
    } else {
        for line in &lyrics {
            println!("{line}");
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn search(artist: &str, title: &str) -> Result<ExitCode> {
    let config = Config::load()?;
    let mut library = LyricsLibrary::open(config.require_lyrics_path()?)?;

    let matches = library.search(artist, title, config.max_results);
    if matches.is_empty() {
        println!("No lyrics found for \"{artist}\" - \"{title}\"");
        return Ok(ExitCode::FAILURE);
    }

    for (i, entry) in matches.iter().enumerate() {
        println!("{:>2}. {}  ({})", i + 1, entry.display_name(), entry.path.display());
    }

    Ok(ExitCode::SUCCESS)
}

fn check(dir: Option<PathBuf>) -> Result<ExitCode> {
    let dir = match dir {
        Some(dir) => dir,
        None => Config::load()?.require_lyrics_path()?,
    };
    let mut library = LyricsLibrary::open(dir)?;

    let reports = library.check_all();
    let failed: Vec<_> = reports.iter().filter(|r| !r.is_ok()).collect();

    for report in &failed {
        if let Err(e) = &report.result {
            println!("FAIL {}\n  {}", report.path.display(), e.to_string().replace('\n', "\n  "));
        }
    }
    println!("{} of {} files decoded", reports.len() - failed.len(), reports.len());

    Ok(if failed.is_empty() { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
