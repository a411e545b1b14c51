//! Errors raised while solving a game

use super::oracle::OracleError;
use crate::core::{VerdictSequence, Word, WordError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SolveError {
    #[error("invalid input")]
    InvalidInput(#[from] WordError),

    /// The answer to solve for is not in the answer list, so no candidate
    /// pool can ever contain it
    #[error("'{0}' is not in the answer list")]
    UnknownAnswer(Word),

    /// Every candidate was eliminated although the game is not won. The
    /// evaluator and the matcher disagree, or the oracle reported verdicts that
    /// no word in the answer list produces.
    #[error("no candidates remain after {guess} scored {verdicts} on turn {turn}")]
    LogicInconsistency {
        turn: usize,
        guess: Word,
        verdicts: VerdictSequence,
    },

    #[error("no guess available on turn {0}")]
    NoCandidates(usize),

    #[error("oracle failed")]
    Oracle(#[from] OracleError),
}
