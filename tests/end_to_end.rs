//! End-to-end games against the embedded word lists.

#![allow(clippy::unwrap_used)]

use wordle_entropy::core::{CandidatePool, Verdict, Word, evaluate};
use wordle_entropy::record::{JsonStore, ResultSink, Statistics};
use wordle_entropy::solver::entropy::select_next_guess;
use wordle_entropy::solver::{SimulatedGame, Solver, SolverConfig};
use wordle_entropy::wordlists::Corpus;

fn word(text: &str) -> Word {
    Word::new(text).unwrap()
}

#[test]
fn slate_against_crane() {
    use Verdict::{Absent, Correct};

    let verdicts = evaluate(&word("slate"), &word("crane"));
    assert_eq!(verdicts.verdicts(), [Absent, Absent, Correct, Absent, Correct]);
}

#[test]
fn eagle_against_algae() {
    use Verdict::{Absent, Correct, Present};

    // One E in the answer, already claimed by the final position
    let verdicts = evaluate(&word("eagle"), &word("algae"));
    assert_eq!(verdicts.verdicts(), [Absent, Present, Correct, Present, Correct]);
}

#[test]
fn single_candidate_is_played() {
    let corpus = Corpus::embedded();
    let pool: CandidatePool = std::iter::once(word("zonal")).collect();

    let choice = select_next_guess(corpus.allowed(), &pool, &[]).unwrap();
    assert_eq!(choice, word("zonal"));
}

#[test]
fn sample_of_answers_is_solved() {
    let corpus = Corpus::embedded();
    let solver = Solver::new(SolverConfig::default(), &corpus);

    let records: Vec<_> = corpus
        .answers()
        .iter()
        .step_by(23)
        .map(|answer| {
            let mut game = SimulatedGame::new(answer.clone());
            let record = solver.play(&mut game, &[]).unwrap();
            assert_eq!(record.answer.as_ref(), Some(answer));
            assert_eq!(record.guesses[0].word, word("slate"));
            assert!(record.turns <= 6);
            record
        })
        .collect();

    let stats = Statistics::from_records(&records);
    assert!(stats.games_played >= 100);
    assert!(stats.win_rate > 95.0, "win rate {:.1}%", stats.win_rate);
    assert!(stats.average_guesses < 4.5);
}

#[test]
fn games_persist_across_store_reopen() {
    let corpus = Corpus::embedded();
    let solver = Solver::new(SolverConfig::default(), &corpus);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");

    {
        let mut store = JsonStore::open(&path).unwrap();
        for answer in ["crane", "abase", "grate"] {
            let record = solver.solve(answer).unwrap();
            store.record(&record).unwrap();
        }
    }

    let store = JsonStore::open(&path).unwrap();
    let stats = store.statistics();
    assert_eq!(stats.games_played, 3);
    assert_eq!(stats.wins, 3);
    assert_eq!(stats.current_streak, 3);
    assert_eq!(store.history()[1].answer, Some(word("abase")));
}
