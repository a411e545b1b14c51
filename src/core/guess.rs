//! A played guess together with the verdicts it received

use super::{VerdictSequence, Word};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One turn of a game: the word guessed and the feedback observed
///
/// Also serves as a filtering constraint: a candidate is admitted when
/// guessing `word` against it would have produced `verdicts`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GuessRecord {
    pub word: Word,
    pub verdicts: VerdictSequence,
}

impl GuessRecord {
    #[must_use]
    pub const fn new(word: Word, verdicts: VerdictSequence) -> Self {
        Self { word, verdicts }
    }

    /// Whether `candidate` is still a possible answer after this turn
    #[inline]
    #[must_use]
    pub fn admits(&self, candidate: &Word) -> bool {
        VerdictSequence::evaluate(&self.word, candidate) == self.verdicts
    }
}

impl fmt::Display for GuessRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.word.text().to_uppercase(), self.verdicts.to_emoji())
    }
}
