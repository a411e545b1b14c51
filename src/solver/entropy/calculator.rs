//! Shannon entropy calculation for verdict distributions
//!
//! Given a guess and a candidate pool, computes the expected information gain.

use crate::core::Word;
use crate::solver::combinations::{bucket_sizes, partition};

/// Comprehensive metrics for evaluating a guess
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Maximum partition size (worst-case remaining candidates)
    pub max_partition: usize,
    /// Number of distinct verdict sequences the pool splits into
    pub buckets: usize,
}

/// Calculate Shannon entropy for a guess against the candidate pool
///
/// Returns the expected information gain in bits.
///
/// # Formula
/// H = Σ (|bucket| / n) · log₂(n / |bucket|)
///
/// where each bucket holds the candidates that would produce one verdict
/// sequence.
///
/// # Examples
/// ```
/// use wordle_entropy::core::Word;
/// use wordle_entropy::solver::entropy::calculate_entropy;
///
/// let guess = Word::new("crane").unwrap();
/// let candidates = vec![
///     Word::new("slate").unwrap(),
///     Word::new("irate").unwrap(),
/// ];
///
/// let entropy = calculate_entropy(&guess, &candidates);
/// assert!(entropy > 0.0 && entropy <= 1.0); // log2(2) = 1 bit max
/// ```
#[must_use]
pub fn calculate_entropy(guess: &Word, candidates: &[Word]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }

    let mut sizes: Vec<usize> = bucket_sizes(guess, candidates).into_values().collect();
    // Fixed summation order, so equal partitions give bit-identical entropies
    sizes.sort_unstable();
    shannon_entropy(sizes)
}

/// Calculate Shannon entropy from bucket sizes
///
/// # Properties
/// - Returns 0.0 for a certain outcome (one bucket)
/// - Maximized for a uniform distribution
/// - Always in range [0, log₂(k)] for k non-empty buckets
///
/// # Examples
/// ```
/// use wordle_entropy::solver::entropy::shannon_entropy;
///
/// let entropy = shannon_entropy([25, 25, 25, 25]);
/// assert!((entropy - 2.0).abs() < 0.001); // log2(4) = 2 bits
/// ```
#[must_use]
pub fn shannon_entropy(bucket_sizes: impl IntoIterator<Item = usize> + Clone) -> f64 {
    let total = bucket_sizes.clone().into_iter().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    bucket_sizes
        .into_iter()
        .filter(|&count| count > 0)
        .map(|count| {
            let p = count as f64 / total;
            p * (total / count as f64).log2()
        })
        .sum()
}

/// Calculate comprehensive metrics for a guess
///
/// Returns entropy, expected remaining candidates, max partition size and
/// bucket count.
#[must_use]
pub fn calculate_metrics(guess: &Word, candidates: &[Word]) -> GuessMetrics {
    if candidates.is_empty() {
        return GuessMetrics {
            entropy: 0.0,
            expected_remaining: 0.0,
            max_partition: 0,
            buckets: 0,
        };
    }

    let groups = partition(guess, candidates);
    let mut sizes: Vec<usize> = groups.values().map(Vec::len).collect();
    sizes.sort_unstable();
    let total = candidates.len() as f64;

    let expected_remaining = sizes
        .iter()
        .map(|&size| {
            let p = size as f64 / total;
            p * size as f64
        })
        .sum();

    GuessMetrics {
        entropy: shannon_entropy(sizes.iter().copied()),
        expected_remaining,
        max_partition: sizes.iter().copied().max().unwrap_or(0),
        buckets: sizes.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn shannon_entropy_uniform_distribution() {
        // 4 buckets, each appears once = log2(4) = 2 bits
        let entropy = shannon_entropy([1, 1, 1, 1]);
        assert!((entropy - 2.0).abs() < 0.001);
    }

    #[test]
    fn shannon_entropy_certain_outcome() {
        let entropy = shannon_entropy([10]);
        assert!(entropy.abs() < 0.001);
    }

    #[test]
    fn shannon_entropy_skewed_distribution() {
        assert!(shannon_entropy([25, 25, 25, 25]) > shannon_entropy([97, 1, 1, 1]));
    }

    #[test]
    fn shannon_entropy_bounds() {
        let counts = [10, 20, 30];
        let entropy = shannon_entropy(counts);
        assert!(entropy >= 0.0);
        assert!(entropy <= (counts.len() as f64).log2());
    }

    #[test]
    fn shannon_entropy_empty() {
        let entropy = shannon_entropy(Vec::<usize>::new());
        assert!((entropy - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn calculate_entropy_real_words() {
        let guess = Word::new("crane").unwrap();
        let candidates = words(&["slate", "irate", "trace", "raise"]);

        let entropy = calculate_entropy(&guess, &candidates);

        // Four distinct outcomes: log2(4)
        assert!((entropy - 2.0).abs() < 0.001);
    }

    #[test]
    fn calculate_entropy_all_same_verdicts() {
        // All produce the same (all Absent) verdicts = 0 bits
        let guess = Word::new("zzzzz").unwrap();
        let candidates = words(&["aaaaa", "bbbbb", "ccccc"]);

        assert!(calculate_entropy(&guess, &candidates).abs() < 0.001);
    }

    #[test]
    fn calculate_entropy_perfect_split() {
        let guess = Word::new("slate").unwrap();
        let candidates = words(&["slate", "zzzzz"]);

        let entropy = calculate_entropy(&guess, &candidates);
        assert!((entropy - 1.0).abs() < 0.001);
    }

    #[test]
    fn calculate_entropy_empty_candidates() {
        let guess = Word::new("crane").unwrap();
        let entropy = calculate_entropy(&guess, &[]);
        assert!((entropy - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn metrics_agree_with_entropy() {
        let guess = Word::new("crane").unwrap();
        let candidates = words(&["slate", "irate", "crate", "grate", "zzzzz"]);

        let metrics = calculate_metrics(&guess, &candidates);
        assert!((metrics.entropy - calculate_entropy(&guess, &candidates)).abs() < 1e-12);
        assert!(metrics.expected_remaining >= 1.0);
        assert!(metrics.max_partition >= 1);
        assert!(metrics.buckets <= candidates.len());
    }
}
