//! Word analysis command
//!
//! Analyzes the entropy and information content of a specific word against the
//! full answer list, alongside the best-ranked alternatives.

use crate::core::Word;
use crate::solver::entropy::{GuessMetrics, RankedGuess, calculate_metrics, rank_guesses};
use crate::wordlists::Corpus;
use anyhow::{Result, bail};

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: Word,
    pub metrics: GuessMetrics,
    /// 2^entropy: the factor the pool shrinks by on average
    pub expected_reduction: f64,
    pub total_candidates: usize,
    /// Whether the word could itself be the answer
    pub is_answer: bool,
    /// Highest-entropy openings, best first
    pub alternatives: Vec<RankedGuess>,
}

/// Analyze `word` as an opening guess
///
/// # Errors
///
/// Returns an error if:
/// - The word is invalid (not 5 letters or contains non-letters)
/// - The word is not in the allowed guess list
pub fn analyze_word(word: &str, corpus: &Corpus, top_n: usize) -> Result<AnalysisResult> {
    let word = Word::new(word)?;

    if !corpus.allowed().contains(&word) {
        bail!("word '{word}' is not in the allowed guess list");
    }

    let pool = corpus.answer_pool();
    let metrics = calculate_metrics(&word, pool.as_slice());
    let alternatives = if top_n == 0 {
        Vec::new()
    } else {
        rank_guesses(corpus.allowed(), &pool, &[], top_n)
    };

    Ok(AnalysisResult {
        is_answer: pool.contains(&word),
        expected_reduction: metrics.entropy.exp2(),
        total_candidates: pool.len(),
        word,
        metrics,
        alternatives,
    })
}
