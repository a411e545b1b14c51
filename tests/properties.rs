//! Property-based tests for verdicts, filtering and ranking.
//!
//! Words are drawn from a six-letter alphabet so repeated letters and shared
//! letters between guess and answer are common.

#![allow(clippy::unwrap_used)]

use proptest::prelude::*;

use wordle_entropy::core::{CandidatePool, GuessRecord, Verdict, WORD_LENGTH, Word, evaluate};
use wordle_entropy::solver::combinations::{enumerate_consistent_verdicts, reachable_outcome_bound};
use wordle_entropy::solver::constraint::{filter_pool, matches};
use wordle_entropy::solver::entropy::{calculate_entropy, rank_guesses, select_next_guess};

fn word() -> impl Strategy<Value = Word> {
    "[a-f]{5}".prop_map(|text| Word::new(text).unwrap())
}

fn pool() -> impl Strategy<Value = CandidatePool> {
    prop::collection::vec(word(), 1..40).prop_map(CandidatePool::new)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        max_global_rejects: 20_000,
        ..ProptestConfig::default()
    })]

    /// The answer always survives filtering against its own verdicts.
    #[test]
    fn prop_answer_survives(guess in word(), answer in word()) {
        prop_assert!(matches(&answer, &guess, evaluate(&guess, &answer)));
    }

    /// Correct marks exactly the equal positions; per letter, Correct plus
    /// Present never exceeds the answer's count of that letter.
    #[test]
    fn prop_verdict_counts(guess in word(), answer in word()) {
        let verdicts = evaluate(&guess, &answer);

        for i in 0..WORD_LENGTH {
            prop_assert_eq!(
                verdicts.get(i) == Verdict::Correct,
                guess.char_at(i) == answer.char_at(i)
            );
        }

        for letter in b'a'..=b'f' {
            let scored = (0..WORD_LENGTH)
                .filter(|&i| guess.char_at(i) == letter && verdicts.get(i) != Verdict::Absent)
                .count();
            prop_assert_eq!(scored, guess.count_of(letter).min(answer.count_of(letter)));
        }
    }

    /// Only an identical guess is solved.
    #[test]
    fn prop_solved_iff_equal(guess in word(), answer in word()) {
        prop_assert_eq!(evaluate(&guess, &answer).is_solved(), guess == answer);
    }

    /// Filtering never grows the pool, keeps the answer, and is idempotent.
    #[test]
    fn prop_filter_shrinks_and_settles(candidates in pool(), guess in word(), answer in word()) {
        let verdicts = evaluate(&guess, &answer);
        let once = filter_pool(&candidates, &guess, verdicts);
        let twice = filter_pool(&once, &guess, verdicts);

        prop_assert!(once.len() <= candidates.len());
        prop_assert!(once.iter().all(|w| candidates.contains(w)));
        prop_assert_eq!(once.contains(&answer), candidates.contains(&answer));
        prop_assert_eq!(&once, &twice);
    }

    /// Entropy is bounded by the pool size and is zero only for one bucket.
    #[test]
    fn prop_entropy_bounds(candidates in pool(), guess in word()) {
        let entropy = calculate_entropy(&guess, candidates.as_slice());
        prop_assert!(entropy >= 0.0);
        prop_assert!(entropy <= (candidates.len() as f64).log2() + 1e-9);

        let first = evaluate(&guess, candidates.first().unwrap());
        let single_bucket = candidates.iter().all(|w| evaluate(&guess, w) == first);
        prop_assert_eq!(entropy > 0.0, !single_bucket);
    }

    /// Every real outcome of a follow-up word is enumerated.
    #[test]
    fn prop_enumeration_is_conservative(guess in word(), answer in word(), next in word()) {
        let observed = evaluate(&guess, &answer);
        let reachable = enumerate_consistent_verdicts(observed, &next, &guess);

        prop_assert!(reachable.contains(&evaluate(&next, &answer)));
        prop_assert_eq!(reachable.len(), reachable_outcome_bound(observed, &next, &guess));
    }

    /// The selected guess is a pool member or an unplayed corpus word.
    #[test]
    fn prop_selection_is_playable(
        corpus in prop::collection::vec(word(), 1..15),
        candidates in pool(),
        guess in word(),
        answer in word()
    ) {
        let record = GuessRecord::new(guess.clone(), evaluate(&guess, &answer));
        let narrowed = filter_pool(&candidates, &guess, record.verdicts);
        prop_assume!(!narrowed.is_empty());

        match select_next_guess(&corpus, &narrowed, &[record]) {
            Some(choice) if narrowed.len() == 1 => {
                prop_assert_eq!(Some(&choice), narrowed.first());
            }
            Some(choice) => {
                prop_assert!(corpus.contains(&choice));
                prop_assert_ne!(choice, guess);
            }
            None => {
                prop_assert!(corpus.iter().all(|w| *w == guess));
            }
        }
    }
}

/// Three letters make ties and shared buckets the common case.
fn narrow_word() -> impl Strategy<Value = Word> {
    "[a-c]{5}".prop_map(|text| Word::new(text).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 300,
        max_global_rejects: 10_000,
        ..ProptestConfig::default()
    })]

    /// Skipping words by their outcome bound never changes the choice: it
    /// always equals the head of the full, unpruned ranking.
    #[test]
    fn prop_pruned_selection_matches_full_ranking(
        corpus in prop::collection::vec(narrow_word(), 1..25),
        candidates in prop::collection::vec(narrow_word(), 20..80),
        guess in narrow_word(),
        answer in narrow_word()
    ) {
        let record = GuessRecord::new(guess.clone(), evaluate(&guess, &answer));
        let pool: CandidatePool = candidates.into_iter().chain([answer]).collect();
        let narrowed = filter_pool(&pool, &guess, record.verdicts);
        prop_assume!(narrowed.len() > 1);

        let history = [record];
        let full = rank_guesses(&corpus, &narrowed, &history, 1)
            .into_iter()
            .next()
            .map(|ranked| ranked.word);
        prop_assert_eq!(select_next_guess(&corpus, &narrowed, &history), full);
    }
}
