//! The pair of word lists a game is played with

use super::loader::{load_from_file, words_from_slice};
use super::{ALLOWED, ANSWERS};
use crate::core::{CandidatePool, Word};
use rustc_hash::FxHashSet;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while assembling a [`Corpus`]
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("failed to read word list {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("word list {0} contains no valid words")]
    Empty(String),
}

/// Allowed guesses and possible answers
///
/// Every answer is also an allowed guess. Both lists keep their source order,
/// which fixes tie-breaking during ranking.
#[derive(Debug, Clone)]
pub struct Corpus {
    allowed: Vec<Word>,
    answers: Vec<Word>,
}

impl Corpus {
    /// Build a corpus from explicit lists
    ///
    /// Answers missing from `allowed` are appended to it.
    ///
    /// # Errors
    /// Returns [`CorpusError::Empty`] when `answers` is empty.
    pub fn new(mut allowed: Vec<Word>, answers: Vec<Word>) -> Result<Self, CorpusError> {
        if answers.is_empty() {
            return Err(CorpusError::Empty("answers".to_string()));
        }

        let known: FxHashSet<Word> = allowed.iter().cloned().collect();
        let missing: Vec<Word> = answers
            .iter()
            .filter(|answer| !known.contains(*answer))
            .cloned()
            .collect();
        allowed.extend(missing);

        Ok(Self { allowed, answers })
    }

    /// The lists compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self {
            allowed: words_from_slice(ALLOWED),
            answers: words_from_slice(ANSWERS),
        }
    }

    /// Embedded answers, which double as the only allowed guesses
    #[must_use]
    pub fn answers_only() -> Self {
        let answers = words_from_slice(ANSWERS);
        Self {
            allowed: answers.clone(),
            answers,
        }
    }

    /// One list from disk, used both for guesses and answers
    ///
    /// # Errors
    /// Returns [`CorpusError::Io`] if the file cannot be read, or
    /// [`CorpusError::Empty`] if it holds no valid words.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CorpusError> {
        let path = path.as_ref();
        let words = load_from_file(path)?;
        if words.is_empty() {
            return Err(CorpusError::Empty(path.display().to_string()));
        }
        Self::new(words.clone(), words)
    }

    #[must_use]
    pub fn allowed(&self) -> &[Word] {
        &self.allowed
    }

    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    /// A fresh candidate pool holding every answer
    #[must_use]
    pub fn answer_pool(&self) -> CandidatePool {
        self.answers.iter().cloned().collect()
    }
}
