//! Finished games and what is done with them
//!
//! A [`GameRecord`] is the structured outcome of one solve. Records are handed
//! to a [`ResultSink`] and summarized by [`Statistics`].

mod sink;
mod stats;

pub use sink::{JsonStore, MemorySink, ResultSink, SinkError, StoreDocument};
pub use stats::Statistics;

use crate::core::{GuessRecord, Word};
use serde::{Deserialize, Serialize};

/// Outcome of one game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// The answer, when the oracle revealed it or the game was won
    pub answer: Option<Word>,
    pub guesses: Vec<GuessRecord>,
    pub won: bool,
    pub turns: usize,
    /// Free-form tag such as the opening word of a simulation run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl GameRecord {
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Emoji rows of every guess, one per line
    #[must_use]
    pub fn grid(&self) -> String {
        self.guesses
            .iter()
            .map(|record| record.verdicts.to_emoji())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
