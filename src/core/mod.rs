//! Core domain types for Wordle
//!
//! Words, verdicts and the evaluator, guess records, and the candidate pool.
//! Nothing here depends on the solver or on I/O.

mod guess;
mod pool;
mod verdict;
mod word;

pub use guess::GuessRecord;
pub use pool::CandidatePool;
pub use verdict::{Verdict, VerdictSequence, evaluate, evaluate_str};
pub use word::{ALPHABET_SIZE, WORD_LENGTH, Word, WordError};

pub(crate) use word::letter_index;
