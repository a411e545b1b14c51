//! The set of words still consistent with every observed verdict
//!
//! Iteration order is the order words were supplied in, so ranking and tests
//! stay deterministic. The pool only ever shrinks.

use super::Word;
use rustc_hash::FxHashSet;

/// Ordered, duplicate-free collection of candidate answers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidatePool {
    words: Vec<Word>,
}

impl CandidatePool {
    /// Build a pool, keeping the first occurrence of any duplicate
    pub fn new<I: IntoIterator<Item = Word>>(words: I) -> Self {
        let mut seen = FxHashSet::default();
        let words = words
            .into_iter()
            .filter(|word| seen.insert(word.clone()))
            .collect();
        Self { words }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    #[must_use]
    pub fn first(&self) -> Option<&Word> {
        self.words.first()
    }

    /// The only remaining candidate, if exactly one is left
    #[must_use]
    pub fn sole(&self) -> Option<&Word> {
        match self.words.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }

    /// Keep only words satisfying `keep`; returns how many were removed
    pub fn retain(&mut self, keep: impl FnMut(&Word) -> bool) -> usize {
        let before = self.words.len();
        self.words.retain(keep);
        before - self.words.len()
    }

    /// A new pool holding the words satisfying `keep`, in the same order
    #[must_use]
    pub fn filtered(&self, mut keep: impl FnMut(&Word) -> bool) -> Self {
        Self {
            words: self.words.iter().filter(|&w| keep(w)).cloned().collect(),
        }
    }

    /// Drop every word listed in `excluded`; returns how many were removed
    pub fn exclude(&mut self, excluded: &[Word]) -> usize {
        let excluded: FxHashSet<&Word> = excluded.iter().collect();
        self.retain(|word| !excluded.contains(word))
    }
}

impl FromIterator<Word> for CandidatePool {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a CandidatePool {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}
