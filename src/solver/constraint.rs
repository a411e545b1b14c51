//! Constraint matching
//!
//! A word is consistent with a guess and its verdicts exactly when scoring the
//! guess against that word reproduces the verdicts, i.e. when
//! `evaluate(guess, word) == verdicts`. Matching is defined by the evaluator
//! itself so the two can never disagree on repeated letters.

use crate::core::{CandidatePool, GuessRecord, VerdictSequence, Word};

/// Whether `word` could be the answer given that `guess` scored `verdicts`
///
/// # Examples
/// ```
/// use wordle_entropy::core::{VerdictSequence, Word};
/// use wordle_entropy::solver::constraint::matches;
///
/// let guess = Word::new("slate").unwrap();
/// let verdicts = VerdictSequence::from_str("--G-G").unwrap();
///
/// assert!(matches(&Word::new("crane").unwrap(), &guess, verdicts));
/// assert!(!matches(&Word::new("slate").unwrap(), &guess, verdicts));
/// ```
#[inline]
#[must_use]
pub fn matches(word: &Word, guess: &Word, verdicts: VerdictSequence) -> bool {
    VerdictSequence::evaluate(guess, word) == verdicts
}

/// Whether `word` survives every constraint in `history`
#[must_use]
pub fn admits_all(history: &[GuessRecord], word: &Word) -> bool {
    history.iter().all(|record| record.admits(word))
}

/// A new pool holding only the words consistent with `guess` and `verdicts`
#[must_use]
pub fn filter_pool(pool: &CandidatePool, guess: &Word, verdicts: VerdictSequence) -> CandidatePool {
    pool.filtered(|word| matches(word, guess, verdicts))
}

/// Narrow `pool` in place by one observed turn; returns how many words were removed
pub fn apply(pool: &mut CandidatePool, record: &GuessRecord) -> usize {
    pool.retain(|word| record.admits(word))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluate;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn pool(words: &[&str]) -> CandidatePool {
        words.iter().map(|w| word(w)).collect()
    }

    #[test]
    fn answer_matches_its_own_evaluation() {
        let guess = word("eagle");
        let answer = word("algae");
        assert!(matches(&answer, &guess, evaluate(&guess, &answer)));
    }

    #[test]
    fn repeated_guess_letter_single_in_answer() {
        // SPEED scored against ABIDE leaves exactly one E; words with two E's
        // must be rejected even though they contain the right letters.
        let guess = word("speed");
        let verdicts = evaluate(&guess, &word("abide"));

        assert!(matches(&word("abide"), &guess, verdicts));
        assert!(!matches(&word("eerie"), &guess, verdicts));
    }

    #[test]
    fn absent_duplicate_caps_letter_count() {
        // LLAMA vs ALLEY: one L Correct, one Present, A's cap at one
        let guess = word("llama");
        let verdicts = evaluate(&guess, &word("alley"));

        assert!(matches(&word("alley"), &guess, verdicts));
        assert!(!matches(&word("alpha"), &guess, verdicts));
    }

    #[test]
    fn filter_pool_keeps_order() {
        let guess = word("slate");
        let verdicts = evaluate(&guess, &word("crane"));
        let before = pool(&["frame", "slate", "urate", "crane", "drake"]);

        let after = filter_pool(&before, &guess, verdicts);
        let texts: Vec<&str> = after.iter().map(Word::text).collect();
        assert_eq!(texts, ["frame", "crane", "drake"]);
    }

    #[test]
    fn apply_is_idempotent() {
        let guess = word("crane");
        let record = GuessRecord::new(guess.clone(), evaluate(&guess, &word("grate")));
        let mut p = pool(&["irate", "crate", "grate", "slate", "trace"]);

        let removed = apply(&mut p, &record);
        let snapshot = p.clone();
        assert!(removed > 0);
        assert_eq!(apply(&mut p, &record), 0);
        assert_eq!(p, snapshot);
        assert!(p.contains(&word("grate")));
    }

    #[test]
    fn admits_all_checks_every_turn() {
        let answer = word("grate");
        let history: Vec<GuessRecord> = ["crane", "irate"]
            .iter()
            .map(|g| {
                let g = word(g);
                let v = evaluate(&g, &answer);
                GuessRecord::new(g, v)
            })
            .collect();

        assert!(admits_all(&history, &answer));
        assert!(!admits_all(&history, &word("crate")));
    }
}
