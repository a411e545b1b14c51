//! Entropy-maximizing guess selection
//!
//! Every allowed word is scored against the candidate pool; the one with the
//! highest expected information gain is played next.

use super::calculator::calculate_entropy;
use crate::core::{CandidatePool, GuessRecord, Word};
use crate::solver::combinations::reachable_outcome_bound;

/// Entropies closer than this are treated as equal
pub const ENTROPY_EPSILON: f64 = 1e-9;

/// A scored guess, as listed by [`rank_guesses`]
#[derive(Debug, Clone, PartialEq)]
pub struct RankedGuess {
    pub word: Word,
    /// Expected information gain in bits
    pub entropy: f64,
    /// Whether the word could itself be the answer
    pub in_pool: bool,
}

impl RankedGuess {
    fn score(word: &Word, pool: &CandidatePool) -> Self {
        Self {
            word: word.clone(),
            entropy: calculate_entropy(word, pool.as_slice()),
            in_pool: pool.contains(word),
        }
    }

    /// Strictly better than `other`: higher entropy, or equal entropy and a
    /// possible answer where `other` is not
    fn outranks(&self, other: &Self) -> bool {
        if self.entropy > other.entropy + ENTROPY_EPSILON {
            return true;
        }
        (self.entropy - other.entropy).abs() <= ENTROPY_EPSILON && self.in_pool && !other.in_pool
    }
}

/// Pick the next word to play
///
/// Returns the sole candidate directly when only one is left. Otherwise every
/// word in `corpus` not yet played is scored by [`calculate_entropy`] against
/// `pool`; ties within [`ENTROPY_EPSILON`] go to pool members, then to the word
/// appearing first in `corpus`.
///
/// `pool` must already be narrowed by `history`; the latest turn is used to
/// skip words that cannot split the pool finely enough to win.
///
/// Returns `None` when the pool is empty or every corpus word has been played.
///
/// # Examples
/// ```
/// use wordle_entropy::core::{CandidatePool, Word};
/// use wordle_entropy::solver::entropy::select_next_guess;
///
/// let corpus: Vec<Word> = ["aaaaa", "aeros", "slate", "irate"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let pool: CandidatePool = ["slate", "irate"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
///
/// let best = select_next_guess(&corpus, &pool, &[]).unwrap();
/// assert_eq!(best.text(), "slate"); // splits the pool and might win outright
/// ```
#[must_use]
pub fn select_next_guess(
    corpus: &[Word],
    pool: &CandidatePool,
    history: &[GuessRecord],
) -> Option<Word> {
    if let Some(only) = pool.sole() {
        return Some(only.clone());
    }
    if pool.is_empty() {
        return None;
    }

    let ceiling = pool.len();
    let latest = history.last();
    let mut best: Option<RankedGuess> = None;

    for word in unplayed(corpus, history) {
        if let (Some(record), Some(leader)) = (latest, &best) {
            let bound = reachable_outcome_bound(record.verdicts, word, &record.word).min(ceiling);
            if (bound as f64).log2() < leader.entropy - ENTROPY_EPSILON {
                continue;
            }
        }

        let scored = RankedGuess::score(word, pool);
        if best.as_ref().is_none_or(|leader| scored.outranks(leader)) {
            best = Some(scored);
        }
    }

    best.map(|ranked| ranked.word)
}

/// The `top_n` best guesses, highest entropy first
///
/// Uses the same ordering as [`select_next_guess`] without pruning: in corpus
/// order, each word is placed ahead of the first listed word it beats. The
/// head of the list is the word [`select_next_guess`] would pick whenever the
/// pool holds more than one candidate.
#[must_use]
pub fn rank_guesses(
    corpus: &[Word],
    pool: &CandidatePool,
    history: &[GuessRecord],
    top_n: usize,
) -> Vec<RankedGuess> {
    let mut ranked: Vec<RankedGuess> = Vec::new();

    for word in unplayed(corpus, history) {
        let scored = RankedGuess::score(word, pool);
        let at = ranked
            .iter()
            .position(|held| scored.outranks(held))
            .unwrap_or(ranked.len());
        if at < top_n {
            ranked.insert(at, scored);
            ranked.truncate(top_n);
        }
    }

    ranked
}

fn unplayed<'c>(corpus: &'c [Word], history: &'c [GuessRecord]) -> impl Iterator<Item = &'c Word> {
    corpus
        .iter()
        .filter(move |word| !history.iter().any(|record| &record.word == *word))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluate;
    use crate::solver::constraint::filter_pool;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn pool(texts: &[&str]) -> CandidatePool {
        words(texts).into_iter().collect()
    }

    /// Exhaustive reference ranking without pruning
    fn brute_force(corpus: &[Word], pool: &CandidatePool, history: &[GuessRecord]) -> Option<Word> {
        rank_guesses(corpus, pool, history, 1)
            .into_iter()
            .next()
            .map(|ranked| ranked.word)
    }

    #[test]
    fn selects_highest_entropy() {
        let corpus = words(&["aaaaa", "aeros"]);
        let candidates = pool(&["slate", "irate", "crate", "grate"]);

        let best = select_next_guess(&corpus, &candidates, &[]).unwrap();
        assert_eq!(best.text(), "aeros");
    }

    #[test]
    fn single_candidate_is_guessed_directly() {
        let corpus = words(&["aeros", "crane", "slate"]);
        let candidates = pool(&["zonal"]);

        let best = select_next_guess(&corpus, &candidates, &[]).unwrap();
        assert_eq!(best.text(), "zonal");
    }

    #[test]
    fn empty_pool_yields_nothing() {
        let corpus = words(&["crane"]);
        assert!(select_next_guess(&corpus, &CandidatePool::default(), &[]).is_none());
    }

    #[test]
    fn ties_prefer_pool_members() {
        // Both words score 1 bit against the pool; only the second can win
        let corpus = words(&["slxxx", "slate"]);
        let candidates = pool(&["slate", "zzzzz"]);

        let best = select_next_guess(&corpus, &candidates, &[]).unwrap();
        assert_eq!(best.text(), "slate");
    }

    #[test]
    fn ties_fall_back_to_corpus_order() {
        let corpus = words(&["bbbbb", "aaaaa"]);
        let candidates = pool(&["ccccc", "ddddd"]);

        let best = select_next_guess(&corpus, &candidates, &[]).unwrap();
        assert_eq!(best.text(), "bbbbb");
    }

    #[test]
    fn played_words_are_skipped() {
        let corpus = words(&["aeros", "aaaaa"]);
        let candidates = pool(&["slate", "irate", "crate"]);
        let aeros = Word::new("aeros").unwrap();
        let history = [GuessRecord::new(aeros.clone(), evaluate(&aeros, &candidates.as_slice()[0]))];

        let best = select_next_guess(&corpus, &candidates, &history).unwrap();
        assert_eq!(best.text(), "aaaaa");
    }

    #[test]
    fn pruning_never_changes_the_choice() {
        let corpus = words(&[
            "slate", "crane", "brake", "drake", "frame", "grade", "shake", "irate", "crate",
            "grate", "trace", "lusts", "crony", "abide", "speed", "eagle", "algae", "robot",
        ]);
        let full: CandidatePool = corpus.iter().cloned().collect();

        for answer in &corpus {
            let opening = &corpus[0];
            let record = GuessRecord::new(opening.clone(), evaluate(opening, answer));
            let narrowed = filter_pool(&full, &record.word, record.verdicts);
            let history = [record];

            if narrowed.len() > 1 {
                assert_eq!(
                    select_next_guess(&corpus, &narrowed, &history),
                    brute_force(&corpus, &narrowed, &history),
                    "answer {answer}"
                );
            }
        }
    }

    #[test]
    fn ranking_is_sorted_and_truncated() {
        let corpus = words(&["aaaaa", "aeros", "crane", "slate"]);
        let candidates = pool(&["slate", "irate", "crate", "grate"]);

        let ranked = rank_guesses(&corpus, &candidates, &[], 3);
        assert_eq!(ranked.len(), 3);
        assert!(ranked.windows(2).all(|pair| !pair[1].outranks(&pair[0])));
        assert!(
            ranked
                .windows(2)
                .all(|pair| pair[0].entropy >= pair[1].entropy - ENTROPY_EPSILON)
        );
        assert!(ranked.iter().all(|r| r.word.text() != "aaaaa"));
    }
}
