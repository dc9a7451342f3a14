//! Formatting utilities for terminal output

use crate::core::{FeedbackPattern, LetterMark, Word};
use crate::solver::SessionReport;
use colored::Colorize;
use std::fmt::Write;

/// Format a pattern as emoji string
#[must_use]
pub fn pattern_to_emoji(pattern: &FeedbackPattern) -> String {
    pattern.to_emoji()
}

/// Guess letters on the tile colors of their marks
#[must_use]
pub fn colored_guess(guess: &Word, pattern: &FeedbackPattern) -> String {
    guess
        .text()
        .chars()
        .zip(pattern.marks())
        .map(|(ch, mark)| {
            let tile = format!(" {} ", ch.to_ascii_uppercase());
            match mark {
                LetterMark::Exact => tile.black().on_green().bold().to_string(),
                LetterMark::Present => tile.black().on_yellow().bold().to_string(),
                LetterMark::Absent => tile.white().on_bright_black().to_string(),
            }
        })
        .collect()
}

/// One-line summary of how a session ended
#[must_use]
pub fn result_footer(report: &SessionReport) -> String {
    if report.is_solved() {
        format!("Solved in {} guesses.", report.attempts())
    } else {
        format!(
            "Solver failed to solve today's Wordle in {} guesses.",
            report.attempts()
        )
    }
}

/// Spoiler-free emoji grid followed by the result footer
#[must_use]
pub fn share_grid(report: &SessionReport) -> String {
    let mut grid = String::new();
    for turn in &report.turns {
        let _ = writeln!(grid, "{}", turn.feedback.to_emoji());
    }
    grid.push('\n');
    grid.push_str(&result_footer(report));
    grid
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
