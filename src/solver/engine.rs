//! The solve loop
//!
//! A game moves `Init → Guessing { turn } → Won | Exhausted`. Each step plays
//! one guess: pick a word, submit it to the oracle, narrow the pool by the
//! verdicts it returned.

use super::constraint;
use super::entropy::select_next_guess;
use super::error::SolveError;
use super::oracle::{MAX_TURNS, Oracle, SimulatedGame};
use crate::core::{CandidatePool, GuessRecord, Word};
use crate::record::GameRecord;
use crate::wordlists::Corpus;
use tracing::{debug, error, info, warn};

/// Tunables for a [`Solver`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// Word played on the first turn
    pub opening: Word,
    pub max_turns: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            opening: Word::from_valid(*b"slate"),
            max_turns: MAX_TURNS,
        }
    }
}

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveState {
    /// No guess made yet
    Init,
    /// Waiting to play turn `turn` (1-based)
    Guessing { turn: usize },
    Won { turns: usize },
    /// Out of turns without finding the answer
    Exhausted { turns: usize },
}

impl SolveState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won { .. } | Self::Exhausted { .. })
    }

    const fn next_turn(self) -> Option<usize> {
        match self {
            Self::Init => Some(1),
            Self::Guessing { turn } => Some(turn),
            Self::Won { .. } | Self::Exhausted { .. } => None,
        }
    }
}

/// A game in progress
#[derive(Debug, Clone)]
pub struct Session {
    state: SolveState,
    pool: CandidatePool,
    history: Vec<GuessRecord>,
}

impl Session {
    #[must_use]
    pub const fn state(&self) -> SolveState {
        self.state
    }

    /// Candidates still consistent with every verdict so far
    #[must_use]
    pub const fn pool(&self) -> &CandidatePool {
        &self.pool
    }

    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    /// Close the session; `answer` is used when the oracle knows it
    #[must_use]
    pub fn into_record(self, answer: Option<Word>) -> GameRecord {
        let won = matches!(self.state, SolveState::Won { .. });
        let answer = answer.or_else(|| {
            self.history
                .last()
                .filter(|_| won)
                .map(|record| record.word.clone())
        });

        GameRecord {
            answer,
            turns: self.history.len(),
            guesses: self.history,
            won,
            label: None,
        }
    }
}

/// Entropy-maximizing Wordle solver
///
/// Plays the configured opening word, then on each later turn the allowed
/// word that is expected to split the remaining candidates most evenly.
pub struct Solver<'a> {
    config: SolverConfig,
    corpus: &'a Corpus,
}

impl<'a> Solver<'a> {
    #[must_use]
    pub const fn new(config: SolverConfig, corpus: &'a Corpus) -> Self {
        Self { config, corpus }
    }

    #[must_use]
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    #[must_use]
    pub const fn corpus(&self) -> &'a Corpus {
        self.corpus
    }

    /// Validate `answer` as a word the answer list can produce
    ///
    /// # Errors
    /// Returns [`SolveError::InvalidInput`] for malformed text and
    /// [`SolveError::UnknownAnswer`] for a word outside the answer list.
    pub fn known_answer(&self, answer: &str) -> Result<Word, SolveError> {
        let word = Word::new(answer)?;
        if self.corpus.answers().contains(&word) {
            Ok(word)
        } else {
            Err(SolveError::UnknownAnswer(word))
        }
    }

    /// A fresh session over every answer not listed in `exclude`
    ///
    /// If excluding would leave no candidates at all the full answer list is
    /// kept instead.
    #[must_use]
    pub fn start(&self, exclude: &[Word]) -> Session {
        let mut pool = self.corpus.answer_pool();

        if !exclude.is_empty() {
            let mut narrowed = pool.clone();
            let removed = narrowed.exclude(exclude);
            if narrowed.is_empty() {
                warn!(
                    excluded = exclude.len(),
                    "exclusion list covers every answer, keeping the full list"
                );
            } else {
                debug!(removed, remaining = narrowed.len(), "excluded past answers");
                pool = narrowed;
            }
        }

        Session {
            state: SolveState::Init,
            pool,
            history: Vec::new(),
        }
    }

    /// Play one turn of `session`
    ///
    /// Does nothing once the game has ended.
    ///
    /// # Errors
    /// - [`SolveError::Oracle`] if the oracle cannot score the guess
    /// - [`SolveError::LogicInconsistency`] if the verdicts eliminate every
    ///   candidate without winning
    /// - [`SolveError::NoCandidates`] if there is nothing left to guess
    pub fn step<O: Oracle + ?Sized>(
        &self,
        session: &mut Session,
        oracle: &mut O,
    ) -> Result<SolveState, SolveError> {
        let Some(turn) = session.state.next_turn() else {
            return Ok(session.state);
        };

        let guess = self
            .choose(session)
            .ok_or(SolveError::NoCandidates(turn))?;
        let candidates = session.pool.len();

        let verdicts = oracle.submit_guess(&guess)?;
        let record = GuessRecord::new(guess, verdicts);
        let removed = constraint::apply(&mut session.pool, &record);

        debug!(
            turn,
            guess = %record.word,
            verdicts = %verdicts,
            candidates,
            removed,
            remaining = session.pool.len(),
            "turn played"
        );

        let guess = &record.word;
        let next = if verdicts.is_solved() {
            info!(turns = turn, answer = %guess, "solved");
            SolveState::Won { turns: turn }
        } else if session.pool.is_empty() {
            error!(turn, guess = %guess, verdicts = %verdicts, "candidate pool emptied before a win");
            return Err(SolveError::LogicInconsistency {
                turn,
                guess: guess.clone(),
                verdicts,
            });
        } else if turn >= self.config.max_turns {
            info!(turns = turn, remaining = session.pool.len(), "out of turns");
            SolveState::Exhausted { turns: turn }
        } else {
            SolveState::Guessing { turn: turn + 1 }
        };

        session.history.push(record);
        session.state = next;
        Ok(next)
    }

    /// Play a whole game against `oracle`
    ///
    /// # Errors
    /// See [`Solver::step`].
    pub fn play<O: Oracle + ?Sized>(
        &self,
        oracle: &mut O,
        exclude: &[Word],
    ) -> Result<GameRecord, SolveError> {
        let mut session = self.start(exclude);
        while !self.step(&mut session, oracle)?.is_terminal() {}
        Ok(session.into_record(oracle.reveal()))
    }

    /// Solve a known answer given as text
    ///
    /// # Errors
    /// Returns [`SolveError::InvalidInput`] if `answer` is not a valid word and
    /// [`SolveError::UnknownAnswer`] if it is not in the answer list,
    /// otherwise see [`Solver::step`].
    pub fn solve(&self, answer: &str) -> Result<GameRecord, SolveError> {
        let mut game =
            SimulatedGame::new(self.known_answer(answer)?).with_max_turns(self.config.max_turns);
        self.play(&mut game, &[])
    }

    fn choose(&self, session: &Session) -> Option<Word> {
        if session.history.is_empty() && session.pool.len() > 1 {
            return Some(self.config.opening.clone());
        }

        select_next_guess(self.corpus.allowed(), &session.pool, &session.history)
            .or_else(|| session.pool.first().cloned())
    }
}
