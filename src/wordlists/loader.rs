//! Word list loading utilities
//!
//! Reads newline-separated word lists from disk or from the embedded constants.

use super::CorpusError;
use crate::core::Word;
use std::fs;
use std::path::Path;
use tracing::warn;

/// Load words from a file, one per line
///
/// Blank lines are ignored. Lines that are not valid words are skipped with a
/// warning naming the line.
///
/// # Errors
///
/// Returns [`CorpusError::Io`] if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_entropy::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, CorpusError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| CorpusError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(parse_lines(&content, &path.display().to_string()))
}

/// Parse a newline-separated list, skipping invalid entries
///
/// `origin` only labels the warnings.
#[must_use]
pub fn parse_lines(content: &str, origin: &str) -> Vec<Word> {
    content
        .lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            match Word::new(trimmed) {
                Ok(word) => Some(word),
                Err(e) => {
                    warn!(origin, line = index + 1, entry = trimmed, "skipping word list entry: {e}");
                    None
                }
            }
        })
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_entropy::wordlists::loader::words_from_slice;
/// use wordle_entropy::wordlists::ANSWERS;
///
/// let words = words_from_slice(ANSWERS);
/// assert_eq!(words.len(), ANSWERS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
