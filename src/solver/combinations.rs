//! Reachable verdict sequences and outcome partitions
//!
//! Given the verdicts a previous guess received, only some verdict sequences
//! can come back for the next guess. [`enumerate_consistent_verdicts`] lists a
//! conservative superset of them from positional ties and letter counts alone,
//! without touching the candidate pool. [`partition`] is the exact answer: it
//! scores the guess against every candidate and groups them by outcome.

use crate::core::{
    ALPHABET_SIZE, Verdict, VerdictSequence, WORD_LENGTH, Word, letter_index,
};
use rustc_hash::{FxHashMap, FxHashSet};

/// Facts about the answer implied by one scored guess
#[derive(Debug, Clone)]
struct Knowledge {
    /// Letter known to occupy each position
    fixed: [Option<u8>; WORD_LENGTH],
    /// Letter known not to occupy each position
    excluded: [Option<u8>; WORD_LENGTH],
    /// Lower bound on each letter's count in the answer
    min_count: [u8; ALPHABET_SIZE],
    /// Set when an Absent verdict pinned the count to exactly `min_count`
    exact: [bool; ALPHABET_SIZE],
}

impl Knowledge {
    fn from_observation(guess: &Word, observed: VerdictSequence) -> Self {
        let mut knowledge = Self {
            fixed: [None; WORD_LENGTH],
            excluded: [None; WORD_LENGTH],
            min_count: [0; ALPHABET_SIZE],
            exact: [false; ALPHABET_SIZE],
        };

        for (i, (&letter, verdict)) in guess.chars().iter().zip(observed.iter()).enumerate() {
            let slot = letter_index(letter);
            match verdict {
                Verdict::Correct => {
                    knowledge.fixed[i] = Some(letter);
                    knowledge.min_count[slot] += 1;
                }
                Verdict::Present => {
                    knowledge.excluded[i] = Some(letter);
                    knowledge.min_count[slot] += 1;
                }
                Verdict::Absent => {
                    knowledge.excluded[i] = Some(letter);
                    knowledge.exact[slot] = true;
                }
            }
        }

        knowledge
    }

    /// Verdicts still possible for `word[position]`, in `Verdict::ALL` order
    fn options(&self, word: &Word, position: usize) -> [bool; 3] {
        let letter = word.char_at(position);
        let slot = letter_index(letter);

        if self.fixed[position] == Some(letter) {
            return [true, false, false];
        }

        if self.exact[slot] && self.min_count[slot] == 0 {
            return [false, false, true];
        }

        let correct = self.fixed[position].is_none() && self.excluded[position] != Some(letter);
        // A single copy of a letter the answer is known to contain always scores
        let absent = !(self.min_count[slot] > 0 && word.count_of(letter) == 1);

        [correct, true, absent]
    }
}

/// Every verdict sequence `candidate_word` could receive, given that `guess`
/// scored `observed` against the same answer
///
/// The result is conservative: for any answer consistent with
/// `(guess, observed)`, `evaluate(candidate_word, answer)` is a member. It may
/// also contain sequences no candidate actually produces.
///
/// # Examples
/// ```
/// use wordle_entropy::core::{VerdictSequence, Word, evaluate};
/// use wordle_entropy::solver::combinations::enumerate_consistent_verdicts;
///
/// let guess = Word::new("slate").unwrap();
/// let answer = Word::new("crane").unwrap();
/// let observed = evaluate(&guess, &answer);
///
/// let next = Word::new("brake").unwrap();
/// let reachable = enumerate_consistent_verdicts(observed, &next, &guess);
/// assert!(reachable.contains(&evaluate(&next, &answer)));
/// ```
#[must_use]
pub fn enumerate_consistent_verdicts(
    observed: VerdictSequence,
    candidate_word: &Word,
    guess: &Word,
) -> FxHashSet<VerdictSequence> {
    let knowledge = Knowledge::from_observation(guess, observed);
    let mut partial = vec![[Verdict::Absent; WORD_LENGTH]];

    for position in 0..WORD_LENGTH {
        let allowed = knowledge.options(candidate_word, position);
        partial = partial
            .into_iter()
            .flat_map(|prefix| {
                Verdict::ALL
                    .into_iter()
                    .zip(allowed)
                    .filter(|&(_, ok)| ok)
                    .map(move |(verdict, _)| {
                        let mut next = prefix;
                        next[position] = verdict;
                        next
                    })
            })
            .collect();
    }

    partial
        .into_iter()
        .map(VerdictSequence::from_verdicts)
        .collect()
}

/// Size of [`enumerate_consistent_verdicts`] without building the set
#[must_use]
pub fn reachable_outcome_bound(
    observed: VerdictSequence,
    candidate_word: &Word,
    guess: &Word,
) -> usize {
    let knowledge = Knowledge::from_observation(guess, observed);
    (0..WORD_LENGTH)
        .map(|position| {
            knowledge
                .options(candidate_word, position)
                .iter()
                .filter(|&&ok| ok)
                .count()
        })
        .product()
}

/// Group `pool` by the verdicts `guess` would receive against each word
#[must_use]
pub fn partition<'p>(guess: &Word, pool: &'p [Word]) -> FxHashMap<VerdictSequence, Vec<&'p Word>> {
    let mut buckets: FxHashMap<VerdictSequence, Vec<&Word>> = FxHashMap::default();
    for candidate in pool {
        buckets
            .entry(VerdictSequence::evaluate(guess, candidate))
            .or_default()
            .push(candidate);
    }
    buckets
}

/// Bucket sizes of [`partition`], without collecting the members
#[must_use]
pub fn bucket_sizes(guess: &Word, pool: &[Word]) -> FxHashMap<VerdictSequence, usize> {
    let mut counts = FxHashMap::default();
    for candidate in pool {
        *counts
            .entry(VerdictSequence::evaluate(guess, candidate))
            .or_insert(0) += 1;
    }
    counts
}
