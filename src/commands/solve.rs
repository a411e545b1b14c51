//! Word solving command
//!
//! Solves a known target word and reports how each turn narrowed the pool.

use crate::core::{GuessRecord, Word};
use crate::record::GameRecord;
use crate::solver::entropy::calculate_entropy;
use crate::solver::{SimulatedGame, SolveError, Solver};

/// Result of solving a word
pub struct SolveResult {
    pub target: Word,
    pub record: GameRecord,
    pub steps: Vec<GuessStep>,
}

/// A single turn of the solution
pub struct GuessStep {
    pub guess: GuessRecord,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Entropy of the guess against the pool it was played into; `None`
    /// when only one candidate was left
    pub entropy: Option<f64>,
}

impl GuessStep {
    /// Expected pool size after this guess, from its entropy
    #[must_use]
    pub fn expected_remaining(&self) -> Option<f64> {
        self.entropy
            .map(|entropy| self.candidates_before as f64 / entropy.exp2())
    }

    /// Bits actually gained: log₂ of the observed reduction
    #[must_use]
    pub fn information_gained(&self) -> Option<f64> {
        (self.candidates_after > 0)
            .then(|| (self.candidates_before as f64 / self.candidates_after as f64).log2())
    }
}

/// Solve `target` with `solver`, starting from every answer not in `exclude`
///
/// The target itself is never excluded.
///
/// # Errors
///
/// Returns [`SolveError::InvalidInput`] if `target` is not a valid word,
/// [`SolveError::UnknownAnswer`] if it is not in the answer list, or any error
/// raised while playing the game.
pub fn solve_word(solver: &Solver<'_>, target: &str, exclude: &[Word]) -> Result<SolveResult, SolveError> {
    let target = solver.known_answer(target)?;
    let exclude: Vec<Word> = exclude.iter().filter(|w| **w != target).cloned().collect();

    let mut game = SimulatedGame::new(target.clone()).with_max_turns(solver.config().max_turns);
    let mut session = solver.start(&exclude);
    let mut steps = Vec::new();

    loop {
        let before = session.pool().clone();
        let state = solver.step(&mut session, &mut game)?;

        if let Some(guess) = session.history().last() {
            steps.push(GuessStep {
                guess: guess.clone(),
                candidates_before: before.len(),
                candidates_after: session.pool().len(),
                entropy: (before.len() > 1).then(|| calculate_entropy(&guess.word, before.as_slice())),
            });
        }

        if state.is_terminal() {
            break;
        }
    }

    Ok(SolveResult {
        record: session.into_record(Some(target.clone())),
        target,
        steps,
    })
}
