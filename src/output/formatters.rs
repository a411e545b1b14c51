//! Formatting utilities for terminal output

use crate::core::{GuessRecord, Verdict, WORD_LENGTH};
use colored::Colorize;

/// Render a guess as colored letter tiles, like the game board
#[must_use]
pub fn colored_tiles(record: &GuessRecord) -> String {
    record
        .word
        .text()
        .to_uppercase()
        .chars()
        .zip(record.verdicts.iter())
        .map(|(letter, verdict)| {
            let tile = format!(" {letter} ");
            match verdict {
                Verdict::Correct => tile.black().on_green().bold().to_string(),
                Verdict::Present => tile.black().on_yellow().bold().to_string(),
                Verdict::Absent => tile.white().on_bright_black().to_string(),
            }
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format entropy as a bar scaled to the most any guess can score
#[must_use]
pub fn entropy_bar(entropy: f64, width: usize) -> String {
    // log2(3^5): every verdict sequence equally likely
    let max_entropy = (WORD_LENGTH as f64) * 3f64.log2();
    create_progress_bar(entropy, max_entropy, width)
}
