//! Word lists for offline play
//!
//! The embedded fallback list ships inside the binary; custom lists can be
//! loaded from a file with one word per line. Entries that are not valid
//! five-letter words are skipped rather than rejected, so a stock dictionary
//! file with mixed word lengths works as-is.

mod embedded;

pub use embedded::{DEFAULT_TARGET, FALLBACK_WORDS};

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load playable words from a file, one word per line
///
/// Blank lines and entries that do not parse as five-letter words are
/// silently skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;

    Ok(content
        .lines()
        .filter_map(|line| Word::new(line.trim()).ok())
        .collect())
}

/// Convert a slice of string literals into validated words
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
