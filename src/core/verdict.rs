//! Per-letter verdicts and the evaluator that produces them
//!
//! A verdict sequence encodes the feedback for a guess using base-3 digits:
//! - 0 = Absent (letter not in word)
//! - 1 = Present (letter in word, wrong position)
//! - 2 = Correct (letter in correct position)
//!
//! The sequence is stored as a single u8 value (0-242), where each position
//! contributes digit × 3^position to the total.

use super::word::{WORD_LENGTH, Word, WordError, letter_index};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Feedback for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Absent,
    Present,
    Correct,
}

impl Verdict {
    /// Every verdict, strongest first
    pub const ALL: [Self; 3] = [Self::Correct, Self::Present, Self::Absent];

    #[inline]
    const fn digit(self) -> u8 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
            Self::Correct => 2,
        }
    }

    #[inline]
    const fn from_digit(digit: u8) -> Self {
        match digit {
            2 => Self::Correct,
            1 => Self::Present,
            _ => Self::Absent,
        }
    }

    /// Single-character notation: `G`, `Y` or `-`
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }

    /// Share-grid tile
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    fn parse(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '.' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Verdicts for all five positions of a guess
///
/// Represents the colored feedback as a single byte value.
/// Value range: 0-242 (3^5 - 1 = 243 possible sequences)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "[Verdict; WORD_LENGTH]", into = "[Verdict; WORD_LENGTH]")]
pub struct VerdictSequence(u8);

impl VerdictSequence {
    /// All correct (the answer was guessed)
    pub const SOLVED: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// Number of distinct sequences
    pub const COUNT: usize = 243;

    /// Create a sequence from a raw value
    ///
    /// # Panics
    /// Panics in debug mode if value >= 243
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Self {
        debug_assert!(value < 243, "VerdictSequence value must be < 243");
        Self(value)
    }

    /// Get the raw encoded value (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Check if every position is Correct
    #[inline]
    #[must_use]
    pub const fn is_solved(self) -> bool {
        self.0 == Self::SOLVED.0
    }

    /// Pack five verdicts, position 0 first
    #[must_use]
    pub fn from_verdicts(verdicts: [Verdict; WORD_LENGTH]) -> Self {
        let mut value = 0u8;
        let mut multiplier = 1u8;
        for verdict in verdicts {
            value += verdict.digit() * multiplier;
            multiplier = multiplier.wrapping_mul(3);
        }
        Self(value)
    }

    /// Unpack into five verdicts, position 0 first
    #[must_use]
    pub fn verdicts(self) -> [Verdict; WORD_LENGTH] {
        let mut result = [Verdict::Absent; WORD_LENGTH];
        let mut val = self.0;
        for slot in &mut result {
            *slot = Verdict::from_digit(val % 3);
            val /= 3;
        }
        result
    }

    /// Verdict at a single position
    ///
    /// # Panics
    /// Panics if position >= 5
    #[must_use]
    pub fn get(self, position: usize) -> Verdict {
        self.verdicts()[position]
    }

    /// Iterate the verdicts in position order
    pub fn iter(self) -> impl Iterator<Item = Verdict> {
        self.verdicts().into_iter()
    }

    /// Count positions holding the given verdict
    #[must_use]
    pub fn count(self, verdict: Verdict) -> usize {
        self.iter().filter(|&v| v == verdict).count()
    }

    /// Calculate the verdicts when `guess` is played and `answer` is the secret
    ///
    /// This implements Wordle's exact feedback rules, including proper handling
    /// of duplicate letters.
    ///
    /// # Algorithm
    /// 1. First pass: mark all exact matches Correct and remove them from the
    ///    available letter counts
    /// 2. Second pass: mark Present while the letter still has available count,
    ///    Absent otherwise
    ///
    /// # Examples
    /// ```
    /// use wordle_entropy::core::{Verdict, VerdictSequence, Word};
    ///
    /// let guess = Word::new("slate").unwrap();
    /// let answer = Word::new("crane").unwrap();
    /// let verdicts = VerdictSequence::evaluate(&guess, &answer);
    ///
    /// use Verdict::{Absent, Correct};
    /// assert_eq!(verdicts.verdicts(), [Absent, Absent, Correct, Absent, Correct]);
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, answer: &Word) -> Self {
        let mut result = [Verdict::Absent; WORD_LENGTH];
        let mut available = answer.letter_counts();

        // First pass: exact position matches
        for (i, (&g, &a)) in guess.chars().iter().zip(answer.chars()).enumerate() {
            if g == a {
                result[i] = Verdict::Correct;
                available[letter_index(g)] -= 1;
            }
        }

        // Second pass: wrong position, while copies of the letter remain
        for (i, &g) in guess.chars().iter().enumerate() {
            if result[i] == Verdict::Absent {
                let count = &mut available[letter_index(g)];
                if *count > 0 {
                    result[i] = Verdict::Present;
                    *count -= 1;
                }
            }
        }

        Self::from_verdicts(result)
    }

    /// Parse a sequence from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for Correct
    /// - 'Y'/'y'/🟨 for Present
    /// - '-'/'_'/'.'/⬜/⬛ for Absent
    ///
    /// # Examples
    /// ```
    /// use wordle_entropy::core::VerdictSequence;
    ///
    /// let p1 = VerdictSequence::from_str("GY-GY").unwrap();
    /// let p2 = VerdictSequence::from_str("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Provides ergonomic Option API; FromStr trait also implemented below
    pub fn from_str(s: &str) -> Option<Self> {
        let mut verdicts = [Verdict::Absent; WORD_LENGTH];
        let mut chars = s.trim().chars();

        for slot in &mut verdicts {
            *slot = Verdict::parse(chars.next()?)?;
        }

        if chars.next().is_some() {
            return None;
        }

        Some(Self::from_verdicts(verdicts))
    }

    /// Convert to an emoji row like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.iter().map(Verdict::emoji).collect()
    }
}

impl From<[Verdict; WORD_LENGTH]> for VerdictSequence {
    fn from(verdicts: [Verdict; WORD_LENGTH]) -> Self {
        Self::from_verdicts(verdicts)
    }
}

impl From<VerdictSequence> for [Verdict; WORD_LENGTH] {
    fn from(sequence: VerdictSequence) -> Self {
        sequence.verdicts()
    }
}

impl std::str::FromStr for VerdictSequence {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid verdict string: {s}"))
    }
}

impl fmt::Display for VerdictSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for verdict in self.iter() {
            write!(f, "{}", verdict.symbol())?;
        }
        Ok(())
    }
}

/// Score `guess` against `answer`
///
/// Shorthand for [`VerdictSequence::evaluate`].
#[must_use]
pub fn evaluate(guess: &Word, answer: &Word) -> VerdictSequence {
    VerdictSequence::evaluate(guess, answer)
}

/// Score raw strings, validating both first
///
/// # Errors
/// Returns `WordError::LengthMismatch` when the inputs differ in length, and
/// the usual `WordError` validation failures otherwise.
pub fn evaluate_str(guess: &str, answer: &str) -> Result<VerdictSequence, WordError> {
    let (guess_len, answer_len) = (guess.chars().count(), answer.chars().count());
    if guess_len != answer_len {
        return Err(WordError::LengthMismatch {
            guess: guess_len,
            answer: answer_len,
        });
    }

    Ok(evaluate(&Word::new(guess)?, &Word::new(answer)?))
}
