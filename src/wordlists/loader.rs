//! Word list loading utilities
//!
//! One word per line; blank lines and surrounding whitespace are ignored.
//! Anything else that is not a valid word is rejected rather than skipped, so
//! a bad list fails loudly instead of silently shrinking the vocabulary.

use crate::core::{SolverError, Word};
use std::fs;
use std::path::Path;

/// Load words from a file
///
/// # Errors
///
/// `Io` if the file cannot be read, `InvalidWord` for the first bad line.
///
/// # Examples
/// ```no_run
/// use wordler::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, SolverError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = parse_word_list(&content)?;
    log::info!("Loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Parse newline-separated words
///
/// # Errors
///
/// `InvalidWord` for the first line that is not blank and not a valid word.
pub fn parse_word_list(content: &str) -> Result<Vec<Word>, SolverError> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(Word::new)
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Errors
///
/// `InvalidWord` for the first malformed entry.
///
/// # Examples
/// ```
/// use wordler::wordlists::loader::words_from_slice;
/// use wordler::wordlists::ANSWERS;
///
/// let words = words_from_slice(ANSWERS).unwrap();
/// assert_eq!(words.len(), ANSWERS.len());
/// ```
pub fn words_from_slice(slice: &[&str]) -> Result<Vec<Word>, SolverError> {
    slice.iter().map(|s| Word::new(s)).collect()
}
