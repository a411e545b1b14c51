//! Sources of feedback for submitted guesses
//!
//! The solver never sees the answer. It only talks to an [`Oracle`], which may
//! be a simulated game holding a secret word or a person typing in the colors
//! shown by a real game.

use crate::core::{GuessRecord, VerdictSequence, Word};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Turns allowed in a standard game
pub const MAX_TURNS: usize = 6;

/// Errors an oracle can report instead of verdicts
#[derive(Debug, Error)]
pub enum OracleError {
    #[error("failed to exchange feedback")]
    Io(#[from] io::Error),
    #[error("game aborted")]
    Aborted,
    #[error("game is over after {0} guesses")]
    GameOver(usize),
}

/// Answers guesses with verdict sequences
pub trait Oracle {
    /// Score `guess` against the hidden answer
    ///
    /// # Errors
    /// Returns [`OracleError`] when no verdict can be produced, for instance
    /// because the game has ended or the feedback source went away.
    fn submit_guess(&mut self, guess: &Word) -> Result<VerdictSequence, OracleError>;

    /// The hidden answer, when the oracle knows it
    fn reveal(&self) -> Option<Word> {
        None
    }
}

/// A game played against a known secret word
///
/// Allows [`MAX_TURNS`] guesses unless given another limit.
#[derive(Debug, Clone)]
pub struct SimulatedGame {
    answer: Word,
    history: Vec<GuessRecord>,
    max_turns: usize,
}

impl SimulatedGame {
    #[must_use]
    pub const fn new(answer: Word) -> Self {
        Self {
            answer,
            history: Vec::new(),
            max_turns: MAX_TURNS,
        }
    }

    #[must_use]
    pub const fn with_max_turns(mut self, max_turns: usize) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// A game whose answer is drawn uniformly from `answers`
    ///
    /// Returns `None` if `answers` is empty.
    pub fn random<R: Rng + ?Sized>(answers: &[Word], rng: &mut R) -> Option<Self> {
        answers.choose(rng).cloned().map(Self::new)
    }

    #[must_use]
    pub const fn answer(&self) -> &Word {
        &self.answer
    }

    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    #[must_use]
    pub const fn max_turns(&self) -> usize {
        self.max_turns
    }

    #[must_use]
    pub fn turns(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.history
            .last()
            .is_some_and(|record| record.verdicts.is_solved())
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.is_won() || self.turns() >= self.max_turns
    }

    /// Spoiler-free result grid, as posted after a game
    ///
    /// ```
    /// use wordle_entropy::core::Word;
    /// use wordle_entropy::solver::oracle::{Oracle, SimulatedGame};
    ///
    /// let mut game = SimulatedGame::new(Word::new("crane").unwrap());
    /// game.submit_guess(&Word::new("slate").unwrap()).unwrap();
    /// game.submit_guess(&Word::new("crane").unwrap()).unwrap();
    ///
    /// assert_eq!(game.share_text(), "Wordle 2/6\n\n⬜⬜🟩⬜🟩\n🟩🟩🟩🟩🟩");
    /// ```
    #[must_use]
    pub fn share_text(&self) -> String {
        let score = if self.is_won() {
            self.turns().to_string()
        } else {
            "X".to_string()
        };
        let grid: Vec<String> = self
            .history
            .iter()
            .map(|record| record.verdicts.to_emoji())
            .collect();

        format!("Wordle {score}/{}\n\n{}", self.max_turns, grid.join("\n"))
    }
}

impl Oracle for SimulatedGame {
    fn submit_guess(&mut self, guess: &Word) -> Result<VerdictSequence, OracleError> {
        if self.is_over() {
            return Err(OracleError::GameOver(self.turns()));
        }

        let verdicts = VerdictSequence::evaluate(guess, &self.answer);
        self.history.push(GuessRecord::new(guess.clone(), verdicts));
        Ok(verdicts)
    }

    fn reveal(&self) -> Option<Word> {
        Some(self.answer.clone())
    }
}

/// One line of feedback typed by a player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Verdicts(VerdictSequence),
    Quit,
}

impl Feedback {
    /// Parse `G/Y/-` letters or emoji tiles; `win` means all green
    ///
    /// Whitespace between tiles is ignored.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let compact: String = line.split_whitespace().collect();
        match compact.to_ascii_lowercase().as_str() {
            "win" => Some(Self::Verdicts(VerdictSequence::SOLVED)),
            "quit" | "q" => Some(Self::Quit),
            _ => VerdictSequence::from_str(&compact).map(Self::Verdicts),
        }
    }
}

/// Oracle backed by a person reading colors off a real game
///
/// Prompts on `output` and reads one line of feedback per guess from `input`.
/// End of input counts as quitting.
pub struct StdinOracle<R, W> {
    input: R,
    output: W,
}

impl StdinOracle<io::StdinLock<'static>, io::Stdout> {
    /// Oracle reading the process's standard input
    #[must_use]
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> StdinOracle<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Oracle for StdinOracle<R, W> {
    fn submit_guess(&mut self, guess: &Word) -> Result<VerdictSequence, OracleError> {
        loop {
            write!(
                self.output,
                "Play {} and enter the colors (G/Y/-, 'win' or 'quit'): ",
                guess.text().to_uppercase()
            )?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(OracleError::Aborted);
            }

            match Feedback::parse(&line) {
                Some(Feedback::Verdicts(verdicts)) => return Ok(verdicts),
                Some(Feedback::Quit) => return Err(OracleError::Aborted),
                None => writeln!(
                    self.output,
                    "Could not read '{}': expected five tiles like GY--G",
                    line.trim()
                )?,
            }
        }
    }
}
