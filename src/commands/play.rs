//! Interactive play command
//!
//! The solver suggests each guess; the player types back the colors a real
//! game showed. Finished games can be recorded to a result store.

use crate::core::Word;
use crate::output::print_turn;
use crate::record::{GameRecord, ResultSink};
use crate::solver::{Oracle, OracleError, SolveError, Solver};
use anyhow::{Context, Result};
use tracing::info;

/// Play one interactive game
///
/// Returns `None` if the player quit before the game ended. A finished game is
/// passed to `sink` when one is given.
///
/// # Errors
///
/// Returns an error if the feedback contradicts every remaining answer, if
/// reading feedback fails, or if the record cannot be stored.
pub fn play_interactive<O: Oracle + ?Sized>(
    solver: &Solver<'_>,
    oracle: &mut O,
    exclude: &[Word],
    sink: Option<&mut dyn ResultSink>,
) -> Result<Option<GameRecord>> {
    let mut session = solver.start(exclude);

    loop {
        match solver.step(&mut session, oracle) {
            Ok(state) => {
                print_turn(&session);
                if state.is_terminal() {
                    break;
                }
            }
            Err(SolveError::Oracle(OracleError::Aborted)) => {
                info!(turns = session.history().len(), "game abandoned");
                return Ok(None);
            }
            Err(e) => return Err(e).context("game could not continue"),
        }
    }

    let record = session.into_record(oracle.reveal());
    if let Some(sink) = sink {
        sink.record(&record).context("failed to record game")?;
    }
    Ok(Some(record))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::MemorySink;
    use crate::solver::{SolverConfig, StdinOracle};
    use crate::wordlists::Corpus;
    use std::io::{self, Cursor};

    fn corpus() -> Corpus {
        let words: Vec<Word> = ["crane", "slate", "irate", "crate", "grate", "trace"]
            .iter()
            .map(|w| Word::new(*w).unwrap())
            .collect();
        Corpus::new(words.clone(), words).unwrap()
    }

    #[test]
    fn win_is_recorded() {
        let corpus = corpus();
        let solver = Solver::new(SolverConfig::default(), &corpus);
        // SLATE against TRACE, then the sole candidate wins
        let mut oracle = StdinOracle::new(Cursor::new("--GYG\nwin\n"), io::sink());
        let mut sink = MemorySink::new();

        let record = play_interactive(&solver, &mut oracle, &[], Some(&mut sink))
            .unwrap()
            .unwrap();

        assert!(record.won);
        assert_eq!(record.turns, 2);
        assert_eq!(record.answer.unwrap().text(), "trace");
        assert_eq!(sink.records().len(), 1);
    }

    #[test]
    fn quitting_records_nothing() {
        let corpus = corpus();
        let solver = Solver::new(SolverConfig::default(), &corpus);
        let mut oracle = StdinOracle::new(Cursor::new("quit\n"), io::sink());
        let mut sink = MemorySink::new();

        let outcome = play_interactive(&solver, &mut oracle, &[], Some(&mut sink)).unwrap();
        assert!(outcome.is_none());
        assert!(sink.records().is_empty());
    }

    #[test]
    fn impossible_feedback_is_an_error() {
        let corpus = corpus();
        let solver = Solver::new(SolverConfig::default(), &corpus);
        let mut oracle = StdinOracle::new(Cursor::new("-----\n"), io::sink());

        assert!(play_interactive(&solver, &mut oracle, &[], None).is_err());
    }
}
