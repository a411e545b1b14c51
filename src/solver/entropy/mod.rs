//! Entropy-based guess ranking
//!
//! Shannon entropy of the verdict distribution a guess induces over the
//! candidate pool, and selection of the most informative guess.

mod calculator;
mod selector;

pub use calculator::{GuessMetrics, calculate_entropy, calculate_metrics, shannon_entropy};
pub use selector::{ENTROPY_EPSILON, RankedGuess, rank_guesses, select_next_guess};
