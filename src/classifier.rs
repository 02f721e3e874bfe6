//! Output classification
//!
//! Labels each non-blank line of combined process output for presentation.
//! This is a best-effort heuristic over an ordered rule list; it never feeds
//! back into success or failure decisions.
//!
//! Rules, first match wins:
//! 1. starts with `total` or a digit run → [`LineCategory::Output`]
//! 2. Unix permission bits followed by a link count → [`LineCategory::Output`]
//! 3. Windows `dir` timestamp (`M/D/YYYY H:MM AM`) → [`LineCategory::Output`]
//! 4. contains "error" or "fail", any case → [`LineCategory::Error`]
//! 5. drive-letter path → [`LineCategory::Directory`]
//! 6. anything else → [`LineCategory::Output`]

use crate::models::{ClassifiedLine, LineCategory};
use once_cell::sync::Lazy;
use regex::Regex;

static NUMERIC_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+").expect("numeric line pattern is valid"));

static UNIX_LISTING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[drwx-]+\s+\d+").expect("unix listing pattern is valid"));

static WINDOWS_LISTING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d+/\d+/\d+\s+\d+:\d+\s+[AP]M").expect("windows listing pattern is valid")
});

static DRIVE_PATH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z]:([\\/]|$)").expect("drive path pattern is valid"));

/// Classify every non-blank line of `output`
pub fn classify(output: &str) -> Vec<ClassifiedLine> {
    output
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty())
        .map(|line| ClassifiedLine::new(line, classify_line(line)))
        .collect()
}

/// Category of a single line
pub fn classify_line(line: &str) -> LineCategory {
    if line.starts_with("total") || NUMERIC_LINE.is_match(line) {
        return LineCategory::Output;
    }

    if UNIX_LISTING.is_match(line) || WINDOWS_LISTING.is_match(line) {
        return LineCategory::Output;
    }

    let lower = line.to_lowercase();
    if lower.contains("error") || lower.contains("fail") {
        return LineCategory::Error;
    }

    if DRIVE_PATH.is_match(line) {
        return LineCategory::Directory;
    }

    LineCategory::Output
}
