//! Word list loading utilities
//!
//! Word lists are plain text, one word per line. Only lines holding exactly
//! five letters are kept; everything else is skipped silently.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use paper_wordle::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_str(&content))
}

/// Parse word-list text into words
///
/// # Examples
/// ```
/// use paper_wordle::wordlists::loader::words_from_str;
///
/// let words = words_from_str("paper\r\nwords\ntoolong\n");
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[0].as_str(), "PAPER");
/// ```
#[must_use]
pub fn words_from_str(content: &str) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| Word::new(line.trim_end_matches('\r')).ok())
        .collect()
}

/// Words from a list of literals, dropping invalid ones
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
