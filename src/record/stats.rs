//! Aggregate statistics over finished games

use super::GameRecord;
use crate::core::Word;
use crate::solver::oracle::MAX_TURNS;
use serde::Serialize;
use std::collections::BTreeMap;

/// Summary of a sequence of games, oldest first
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    pub games_played: usize,
    pub wins: usize,
    /// Percentage of games won, 0 when nothing was played
    pub win_rate: f64,
    /// Mean guesses over won games only
    pub average_guesses: f64,
    pub current_streak: usize,
    pub max_streak: usize,
    /// Won games keyed by the turn they were won on; turns 1 through 6 are
    /// always present
    pub distribution: BTreeMap<usize, usize>,
    /// Answers of lost games, where known
    pub lost_on: Vec<Word>,
}

impl Statistics {
    #[must_use]
    pub fn from_records(records: &[GameRecord]) -> Self {
        let mut distribution: BTreeMap<usize, usize> = (1..=MAX_TURNS).map(|turn| (turn, 0)).collect();
        let mut lost_on = Vec::new();
        let mut wins = 0;
        let mut total_guesses = 0;
        let mut streak = 0;
        let mut max_streak = 0;

        for record in records {
            if record.won {
                wins += 1;
                total_guesses += record.turns;
                *distribution.entry(record.turns).or_insert(0) += 1;
                streak += 1;
                max_streak = max_streak.max(streak);
            } else {
                streak = 0;
                lost_on.extend(record.answer.clone());
            }
        }

        let games_played = records.len();
        Self {
            games_played,
            wins,
            win_rate: percentage(wins, games_played),
            average_guesses: if wins == 0 {
                0.0
            } else {
                total_guesses as f64 / wins as f64
            },
            current_streak: streak,
            max_streak,
            distribution,
            lost_on,
        }
    }
}

fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 * 100.0 / whole as f64
    }
}
