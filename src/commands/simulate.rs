//! Simulation command
//!
//! Plays many random games per opening word and summarizes the results. Every
//! opener faces the same answers so their statistics can be compared directly.

use crate::core::Word;
use crate::record::{GameRecord, MemorySink, ResultSink, Statistics};
use crate::solver::{SimulatedGame, Solver, SolverConfig};
use crate::wordlists::Corpus;
use indicatif::ProgressBar;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Which games to simulate
pub struct SimulationConfig {
    pub games: usize,
    /// Seed for answer selection; a fresh random seed when `None`
    pub seed: Option<u64>,
    pub openers: Vec<Word>,
    pub max_turns: usize,
}

/// Results for one opening word
pub struct OpenerReport {
    pub opener: Word,
    pub records: Vec<GameRecord>,
    pub statistics: Statistics,
    /// Games that ended in a solver error instead of a result
    pub errors: usize,
    pub duration: Duration,
}

/// Draw `games` answers uniformly, with replacement
#[must_use]
pub fn draw_games(corpus: &Corpus, games: usize, seed: Option<u64>) -> Vec<SimulatedGame> {
    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    (0..games)
        .filter_map(|_| SimulatedGame::random(corpus.answers(), &mut rng))
        .collect()
}

/// Play every game once per opener
///
/// Games run in parallel; each game is solved on a single thread. `progress`
/// advances once per finished game.
#[must_use]
pub fn simulate(
    corpus: &Corpus,
    config: &SimulationConfig,
    progress: &ProgressBar,
) -> Vec<OpenerReport> {
    let games = draw_games(corpus, config.games, config.seed);
    progress.set_length((games.len() * config.openers.len()) as u64);

    config
        .openers
        .iter()
        .map(|opener| {
            progress.set_message(opener.text().to_uppercase());
            let report = run_opener(corpus, opener, config.max_turns, &games, progress);
            info!(
                opener = %opener,
                games = report.records.len(),
                win_rate = report.statistics.win_rate,
                average = report.statistics.average_guesses,
                "opener simulated"
            );
            report
        })
        .collect()
}

fn run_opener(
    corpus: &Corpus,
    opener: &Word,
    max_turns: usize,
    games: &[SimulatedGame],
    progress: &ProgressBar,
) -> OpenerReport {
    let start = Instant::now();
    let solver = Solver::new(
        SolverConfig {
            opening: opener.clone(),
            max_turns,
        },
        corpus,
    );

    let outcomes: Vec<_> = games
        .par_iter()
        .map(|game| {
            let mut game = game.clone().with_max_turns(max_turns);
            let outcome = solver.play(&mut game, &[]);
            progress.inc(1);
            outcome.map_err(|e| (game.answer().clone(), e))
        })
        .collect();

    let mut sink = MemorySink::new();
    let mut errors = 0;
    for outcome in outcomes {
        match outcome {
            Ok(record) => {
                if let Err(e) = sink.record(&record.with_label(opener.text())) {
                    warn!(opener = %opener, "dropping game record: {e}");
                }
            }
            Err((answer, e)) => {
                warn!(opener = %opener, answer = %answer, "game failed: {e}");
                errors += 1;
            }
        }
    }

    let records = sink.into_records();
    OpenerReport {
        opener: opener.clone(),
        statistics: Statistics::from_records(&records),
        records,
        errors,
        duration: start.elapsed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(openers: &[&str], games: usize) -> SimulationConfig {
        SimulationConfig {
            games,
            seed: Some(42),
            openers: openers.iter().map(|w| Word::new(*w).unwrap()).collect(),
            max_turns: 6,
        }
    }

    #[test]
    fn seeded_draws_repeat() {
        let corpus = Corpus::embedded();
        let answers = |seed| -> Vec<Word> {
            draw_games(&corpus, 20, Some(seed))
                .iter()
                .map(|g| g.answer().clone())
                .collect()
        };
        let a = answers(9);
        let b = answers(9);
        assert_eq!(a, b);
        assert_eq!(a.len(), 20);
    }

    #[test]
    fn openers_face_the_same_answers() {
        let corpus = Corpus::embedded();
        let reports = simulate(&corpus, &config(&["slate", "crane"], 12), &ProgressBar::hidden());

        assert_eq!(reports.len(), 2);
        let answers = |report: &OpenerReport| -> Vec<Option<Word>> {
            report.records.iter().map(|r| r.answer.clone()).collect()
        };
        assert_eq!(answers(&reports[0]), answers(&reports[1]));
    }

    #[test]
    fn records_are_labelled_and_counted() {
        let corpus = Corpus::embedded();
        let reports = simulate(&corpus, &config(&["slate"], 10), &ProgressBar::hidden());
        let report = &reports[0];

        assert_eq!(report.errors, 0);
        assert_eq!(report.statistics.games_played, 10);
        assert!(report.records.iter().all(|r| r.label.as_deref() == Some("slate")));
        assert!(report.records.iter().all(|r| r.guesses[0].word.text() == "slate"));
    }
}
